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

//! Memory-efficient insert-only set.
//!
//! One open-addressing engine serves every element type; the slot layout is
//! chosen per type at compile time, packing `i32`, `i64` and `f64` elements
//! unboxed into a flat table.
//!
//! # Usage
//!
//! ```rust
//! use compactset::set::CompactSet;
//!
//! let mut primes = CompactSet::new();
//! for p in [2i32, 3, 5, 7, 11] {
//!     primes.add(p);
//! }
//!
//! assert!(primes.contains(&7));
//! assert!(!primes.contains(&9));
//! assert_eq!(primes.len(), 5);
//! ```

mod compact_set;
mod item;
mod probe_table;
mod scalar;
mod storage;

pub use self::compact_set::CompactSet;
pub use self::item::CompactSetItem;
pub use self::scalar::ScalarStorage;
pub use self::scalar::ScalarValue;
pub use self::storage::BoxedStorage;
pub use self::storage::SlotStorage;
