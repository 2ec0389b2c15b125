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

use std::fmt;

use crate::error::Error;
use crate::set::item::CompactSetItem;
use crate::set::probe_table::ProbeTable;

/// Expected element count used by [`CompactSet::new`].
const DEFAULT_EXPECTED_SIZE: usize = 16;

/// Insert-only set that stores small scalar element types unboxed.
///
/// `CompactSet` behaves like a hash set restricted to [`add`], [`contains`]
/// and [`len`]. The backing table layout is chosen per element type through
/// [`CompactSetItem`]: `i32`, `i64` and `f64` elements are packed directly
/// as machine words in one flat allocation, other element types are stored
/// behind references.
///
/// Mutation requires `&mut self` and the set performs no internal
/// synchronization; sharing it across threads needs external locking.
///
/// # Examples
///
/// ```
/// use compactset::CompactSet;
///
/// let mut set = CompactSet::new();
/// assert!(set.add(3i64));
/// assert!(!set.add(3));
/// assert!(set.contains(&3));
/// assert_eq!(set.len(), 1);
/// ```
///
/// [`add`]: CompactSet::add
/// [`contains`]: CompactSet::contains
/// [`len`]: CompactSet::len
pub struct CompactSet<T: CompactSetItem> {
    table: ProbeTable<T::Storage>,
}

impl<T: CompactSetItem> CompactSet<T> {
    /// Creates a set sized for 16 expected elements.
    pub fn new() -> Self {
        Self::with_expected_size(DEFAULT_EXPECTED_SIZE)
            .expect("default expected size is below the capacity ceiling")
    }

    /// Creates a set sized so `expected_size` insertions do not trigger a
    /// resize.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::ConfigInvalid`] if `expected_size` would need a
    /// table above the platform's maximum capacity. Nothing is allocated in
    /// that case.
    ///
    /// [`ErrorKind::ConfigInvalid`]: crate::error::ErrorKind::ConfigInvalid
    pub fn with_expected_size(expected_size: usize) -> Result<Self, Error> {
        Ok(Self {
            table: ProbeTable::with_expected_size(expected_size)?,
        })
    }

    /// Adds `value` to the set.
    ///
    /// Returns `true` if the set did not already contain an equal element.
    ///
    /// # Panics
    ///
    /// Panics if the backing table is already at its maximum capacity and
    /// the insertion forces another resize; the set cannot hold further
    /// distinct elements at that point.
    pub fn add(&mut self, value: T) -> bool {
        self.table.insert(value)
    }

    /// Returns true if an element equal to `value` was added.
    pub fn contains(&self, value: &T) -> bool {
        self.table.contains(value)
    }

    /// Number of distinct elements added.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if no element was added yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: CompactSetItem> Default for CompactSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Manual impl; a derive would bound `T::Storage: Debug`.
impl<T: CompactSetItem> fmt::Debug for CompactSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompactSet")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
