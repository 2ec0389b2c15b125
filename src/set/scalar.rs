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

use crate::hash::bits_hash;
use crate::set::storage::SlotStorage;

/// Scalar element types whose all-zero bit pattern marks free slots.
///
/// Implemented for `i32`, `i64` and `f64`. Equality between scalar elements
/// is equality of bit patterns: for `f64` this makes a NaN equal to itself
/// and keeps `-0.0` distinct from `0.0`, whose all-zero pattern is the free
/// slot marker. The `Default` value of an implementing type must be the
/// all-zero pattern.
pub trait ScalarValue: Copy + Default {
    /// Canonical bit pattern, zero-extended to 64 bits.
    fn to_bits(self) -> u64;
}

impl ScalarValue for i32 {
    fn to_bits(self) -> u64 {
        self as u32 as u64
    }
}

impl ScalarValue for i64 {
    fn to_bits(self) -> u64 {
        self as u64
    }
}

impl ScalarValue for f64 {
    fn to_bits(self) -> u64 {
        f64::to_bits(self)
    }
}

/// Unboxed backend packing elements directly as machine words.
///
/// The whole table is one flat allocation of raw scalars; no per-element
/// allocation, no indirection on access. Zero-pattern elements never enter
/// the table (they are reserved as the free slot marker), so occupancy needs
/// no side array.
#[derive(Debug)]
pub struct ScalarStorage<T> {
    slots: Vec<T>,
}

impl<T: ScalarValue> SlotStorage for ScalarStorage<T> {
    type Elem = T;

    fn with_capacity(capacity: usize) -> Self {
        debug_assert!(T::default().to_bits() == 0, "default must be the free slot pattern");
        Self {
            slots: vec![T::default(); capacity],
        }
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn is_free(&self, index: usize) -> bool {
        self.slots[index].to_bits() == 0
    }

    fn matches(&self, index: usize, element: &T) -> bool {
        self.slots[index].to_bits() == element.to_bits()
    }

    fn write(&mut self, index: usize, element: T) {
        self.slots[index] = element;
    }

    fn slot_hash(element: &T) -> u64 {
        bits_hash(element.to_bits())
    }

    fn is_reserved_empty(element: &T) -> bool {
        element.to_bits() == 0
    }

    fn into_occupied(self) -> impl Iterator<Item = T> {
        self.slots.into_iter().filter(|slot| slot.to_bits() != 0)
    }
}
