// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::error::Error;
use crate::error::ErrorKind;
use crate::set::storage::SlotStorage;

/// Portion of the table that may fill up before a resize is forced.
const LOAD_FACTOR: f64 = 0.7;

/// Largest slot count a table may reach.
const MAX_CAPACITY: usize = isize::MAX as usize;

/// Step used to advance past occupied slots on collision.
const PROBE_STEP: usize = 1;

/// Open-addressing hash table generic over its slot storage.
///
/// The engine performs hash-to-index mapping, linear probing, insertion,
/// membership tests and load-factor-driven resize. How elements are laid
/// out, compared and hashed is delegated to the [`SlotStorage`] backend
/// chosen at compile time. An element whose representation coincides with
/// the backend's free slot marker never enters the table; a single
/// out-of-band flag records whether it was added.
#[derive(Debug)]
pub(crate) struct ProbeTable<S> {
    slots: S,
    len: usize,
    reserved_added: bool,
}

impl<S: SlotStorage> ProbeTable<S> {
    /// Creates a table sized so `expected_size` insertions stay under the
    /// load factor without resizing.
    pub fn with_expected_size(expected_size: usize) -> Result<Self, Error> {
        let capacity = initial_capacity(expected_size)?;
        Ok(Self::with_table_capacity(capacity))
    }

    fn with_table_capacity(capacity: usize) -> Self {
        Self {
            slots: S::with_capacity(capacity),
            len: 0,
            reserved_added: false,
        }
    }

    /// Number of distinct elements inserted, the reserved element included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Inserts `element`, returning true if no equal element was present.
    ///
    /// # Panics
    ///
    /// Panics if the table is at [`MAX_CAPACITY`] and the insertion forces
    /// another resize.
    pub fn insert(&mut self, element: S::Elem) -> bool {
        if S::is_reserved_empty(&element) {
            if self.reserved_added {
                return false;
            }
            self.reserved_added = true;
            self.len += 1;
            return true;
        }
        if self.slots.capacity() == 0 {
            self.grow();
        }
        let index = self.find_slot(&element);
        if !self.slots.is_free(index) {
            return false;
        }
        self.slots.write(index, element);
        self.len += 1;
        if self.needs_grow() {
            self.grow();
        }
        true
    }

    /// Returns true if an element equal to `element` was inserted.
    pub fn contains(&self, element: &S::Elem) -> bool {
        if S::is_reserved_empty(element) {
            return self.reserved_added;
        }
        if self.slots.capacity() == 0 {
            return false;
        }
        !self.slots.is_free(self.find_slot(element))
    }

    /// Returns the index of the slot holding `element`, or of the first
    /// free slot on its probe path if no equal element is stored.
    fn find_slot(&self, element: &S::Elem) -> usize {
        let capacity = self.slots.capacity();
        debug_assert!(capacity > 0, "probing an unallocated table");
        let mut index = (S::slot_hash(element) as usize) % capacity;
        while !self.slots.is_free(index) && !self.slots.matches(index, element) {
            index = (index + PROBE_STEP) % capacity;
        }
        index
    }

    fn needs_grow(&self) -> bool {
        self.len as f64 / self.slots.capacity() as f64 >= LOAD_FACTOR
    }

    /// Replaces the table wholesale and rehashes every stored element under
    /// the new capacity.
    fn grow(&mut self) {
        let new_capacity = next_capacity(self.slots.capacity());
        let old = self.slots.reallocate(new_capacity);
        for element in old.into_occupied() {
            let index = self.find_slot(&element);
            debug_assert!(self.slots.is_free(index), "rehashed elements are distinct");
            self.slots.write(index, element);
        }
    }
}

/// Next table size on growth: 0 becomes 1, then the size doubles until it
/// clamps at [`MAX_CAPACITY`].
///
/// # Panics
///
/// Panics if `current` is already [`MAX_CAPACITY`]; the table cannot accept
/// further distinct elements.
fn next_capacity(current: usize) -> usize {
    if current >= MAX_CAPACITY {
        panic!("table capacity {current} is already at the maximum {MAX_CAPACITY}");
    }
    if current == 0 {
        return 1;
    }
    if current >= MAX_CAPACITY / 2 {
        MAX_CAPACITY
    } else {
        current * 2
    }
}

/// Capacity holding `expected_size` elements under the load factor.
///
/// Rejects, before anything is allocated, an expected size whose table
/// would exceed [`MAX_CAPACITY`].
fn initial_capacity(expected_size: usize) -> Result<usize, Error> {
    let required = (expected_size as f64 / LOAD_FACTOR) as u128 + 1;
    if required > MAX_CAPACITY as u128 {
        return Err(Error::new(
            ErrorKind::ConfigInvalid,
            "expected size needs a table above the maximum capacity",
        )
        .with_context("expected_size", expected_size)
        .with_context("max_capacity", MAX_CAPACITY));
    }
    Ok(required as usize)
}
