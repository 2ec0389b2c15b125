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

//! Element hashing for slot index computation.

use std::hash::Hash;
use std::hash::Hasher;

const DEFAULT_HASH_SEED: u32 = 0;

/// Streaming sink for MurmurHash3 x64 128.
///
/// Collects the bytes fed through [`Hasher`] and hashes them in one pass on
/// finish. Element hashing feeds a handful of bytes, so the buffer stays
/// small.
#[derive(Debug)]
pub(crate) struct MurmurHash3X64128 {
    seed: u32,
    buffer: Vec<u8>,
}

impl MurmurHash3X64128 {
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            buffer: Vec::with_capacity(16),
        }
    }

    /// Both 64-bit halves of the 128-bit hash.
    pub fn finish128(&self) -> (u64, u64) {
        mur3::murmurhash3_x64_128(&self.buffer, self.seed)
    }
}

impl Hasher for MurmurHash3X64128 {
    fn finish(&self) -> u64 {
        self.finish128().0
    }

    fn write(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }
}

/// Slot hash of an element through its [`Hash`] implementation.
pub(crate) fn element_hash<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = MurmurHash3X64128::with_seed(DEFAULT_HASH_SEED);
    value.hash(&mut hasher);
    hasher.finish()
}

/// Slot hash of a raw 64-bit scalar pattern.
pub(crate) fn bits_hash(bits: u64) -> u64 {
    let (h1, _) = mur3::murmurhash3_x64_128(&bits.to_le_bytes(), DEFAULT_HASH_SEED);
    h1
}
