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

//! A memory-efficient, insert-only set collection.
//!
//! [`CompactSet`] behaves like a hash-based set restricted to `add`,
//! `contains` and `len`, and uses substantially less memory than a
//! general-purpose boxed-element hash set for small scalar element types.
//! `i32`, `i64` and `f64` elements are stored unboxed in a single flat
//! table; one reserved bit pattern per type marks free slots, and the one
//! real element equal to that pattern is carried by an out-of-band flag.
//! All element types share the same open-addressing engine, specialized at
//! compile time through the [`CompactSetItem`] trait.
//!
//! # Usage
//!
//! ```rust
//! use compactset::CompactSet;
//!
//! let mut set = CompactSet::with_expected_size(100).unwrap();
//! for i in 0..100i32 {
//!     set.add(i * i);
//! }
//!
//! assert!(set.contains(&81));
//! assert!(!set.contains(&80));
//! assert_eq!(set.len(), 100);
//! ```
//!
//! Non-scalar element types use a reference-based table transparently:
//!
//! ```rust
//! use compactset::CompactSet;
//!
//! let mut names = CompactSet::new();
//! assert!(names.add("alice".to_string()));
//! assert!(!names.add("alice".to_string()));
//! assert_eq!(names.len(), 1);
//! ```

pub mod error;
mod hash;
pub mod set;

pub use self::set::BoxedStorage;
pub use self::set::CompactSet;
pub use self::set::CompactSetItem;
pub use self::set::ScalarStorage;
pub use self::set::ScalarValue;
pub use self::set::SlotStorage;
