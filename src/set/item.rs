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

use std::hash::Hash;

use crate::set::scalar::ScalarStorage;
use crate::set::storage::BoxedStorage;
use crate::set::storage::SlotStorage;

/// Element types storable in a [`CompactSet`].
///
/// The associated storage picks the table layout for the type at compile
/// time: `i32`, `i64` and `f64` pack unboxed into [`ScalarStorage`], every
/// other provided implementation uses [`BoxedStorage`]. Downstream element
/// types opt in through the reference backend:
///
/// ```
/// use compactset::BoxedStorage;
/// use compactset::CompactSet;
/// use compactset::CompactSetItem;
///
/// #[derive(Debug, Hash, PartialEq, Eq)]
/// struct UserId(u64);
///
/// impl CompactSetItem for UserId {
///     type Storage = BoxedStorage<UserId>;
/// }
///
/// let mut ids = CompactSet::new();
/// assert!(ids.add(UserId(7)));
/// assert!(ids.contains(&UserId(7)));
/// ```
///
/// [`CompactSet`]: crate::CompactSet
pub trait CompactSetItem: Sized {
    /// Table backend elements of this type are stored in.
    type Storage: SlotStorage<Elem = Self>;
}

impl CompactSetItem for i32 {
    type Storage = ScalarStorage<i32>;
}

impl CompactSetItem for i64 {
    type Storage = ScalarStorage<i64>;
}

impl CompactSetItem for f64 {
    type Storage = ScalarStorage<f64>;
}

macro_rules! boxed_item {
    ($($ty:ty),* $(,)?) => {
        $(
            impl CompactSetItem for $ty {
                type Storage = BoxedStorage<$ty>;
            }
        )*
    };
}

boxed_item!(i8, i16, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, String);

impl CompactSetItem for &'static str {
    type Storage = BoxedStorage<&'static str>;
}

impl<T: Hash + Eq> CompactSetItem for Option<T> {
    type Storage = BoxedStorage<Option<T>>;
}

impl<T: Hash + Eq> CompactSetItem for Vec<T> {
    type Storage = BoxedStorage<Vec<T>>;
}

impl<T: Hash + Eq> CompactSetItem for Box<T> {
    type Storage = BoxedStorage<Box<T>>;
}
