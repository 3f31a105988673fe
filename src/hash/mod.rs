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

//! Rolling-hash primitives used by the filter.

mod polynomial;

pub use self::polynomial::PolyHash;

use std::sync::Arc;
use std::sync::LazyLock;

/// Multipliers of the default hash family.
///
/// Five small distinct odd primes. Filters built with this family can only be
/// queried with this family: the multipliers are part of the persisted state's
/// implicit schema even though the raw bytes do not record them.
pub const DEFAULT_MULTIPLIERS: [u64; 5] = [13, 17, 31, 41, 53];

static DEFAULT_HASHERS: LazyLock<Arc<[PolyHash]>> =
    LazyLock::new(|| Arc::from(DEFAULT_MULTIPLIERS.map(PolyHash::new)));

/// Returns the shared default hash family.
///
/// The family is built once and shared read-only across every filter (and
/// thread) that uses it; cloning the returned [`Arc`] is cheap.
pub fn default_hashers() -> Arc<[PolyHash]> {
    Arc::clone(&DEFAULT_HASHERS)
}

/// A 64-bit hash over a byte window that supports O(1) updates when the
/// window slides forward by one byte.
///
/// Implementations must be stateless: both methods take everything they need
/// as arguments, so one instance can serve any number of filters concurrently.
pub trait RollingHasher {
    /// Hashes `window` from scratch.
    ///
    /// Operates on the explicit slice length, so embedded zero bytes
    /// contribute to the hash like any other byte value.
    fn hash_bytes(&self, window: &[u8]) -> u64;

    /// Computes the hash of `window` from the hash of the window one byte
    /// earlier.
    ///
    /// `window` holds the bytes of the *new* window, `outgoing` is the byte
    /// that just left it from the front, and `prev` is the hash previously
    /// returned for the old window. The result must equal
    /// `self.hash_bytes(window)`; callers rely on that equivalence for
    /// correct membership answers. Implementations may assume `window` is
    /// non-empty.
    fn roll(&self, window: &[u8], outgoing: u8, prev: u64) -> u64;
}
