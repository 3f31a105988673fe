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

use std::sync::Arc;

use crate::error::Error;
use crate::filter::BitBuffer;
use crate::hash::default_hashers;
use crate::hash::PolyHash;
use crate::hash::RollingHasher;

/// A Bloom filter with an extra substring query mode.
///
/// Besides the usual exact-key [`insert`](Self::insert) /
/// [`contains`](Self::contains) pair, the filter can scan a data buffer for
/// any window of a fixed length whose bits are all set
/// ([`contains_substring`](Self::contains_substring)), updating every hash
/// incrementally as the window slides.
///
/// The filter owns its bit buffer and shares an ordered, immutable hash
/// family with any number of other filters. Queries against a reloaded buffer
/// are only meaningful when made with the same family that built it.
///
/// # Examples
///
/// ```
/// use bloomscan::filter::BloomFilter;
///
/// let mut filter = BloomFilter::new(10, 3);
/// filter.insert(b"cat");
/// filter.insert(b"dog");
///
/// assert!(filter.contains(b"cat"));
/// assert!(filter.contains(b"dog"));
///
/// filter.insert(b"cde");
/// assert!(filter.contains_substring(b"abcdef", 3));
/// ```
#[derive(Debug, Clone)]
pub struct BloomFilter<H = PolyHash> {
    /// Ordered hash family, shared read-only across filters.
    hashers: Arc<[H]>,
    /// Per-hasher hash of the most recent window, reused across every
    /// substring scan to avoid a per-query allocation.
    /// Invariant: `last_hashes.len() == hashers.len()`.
    last_hashes: Vec<u64>,
    bits: BitBuffer,
}

impl BloomFilter<PolyHash> {
    /// Creates an empty filter with the default five-hasher family.
    ///
    /// The buffer is sized as `bits_per_element * estimated_items / 8 + 1`
    /// bytes. The parameters only control the false-positive rate; they are
    /// not validated against any target rate, and zero values still produce a
    /// valid one-byte filter.
    pub fn new(bits_per_element: usize, estimated_items: usize) -> Self {
        Self::with_hashers(bits_per_element, estimated_items, default_hashers())
    }

    /// Reconstitutes a filter from raw bytes using the default hash family.
    ///
    /// See [`from_bytes_with_hashers`](Self::from_bytes_with_hashers).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        Self::from_bytes_with_hashers(bytes, default_hashers())
    }
}

impl<H: RollingHasher> BloomFilter<H> {
    /// Creates an empty filter bound to a caller-supplied hash family.
    ///
    /// # Panics
    ///
    /// Panics if `hashers` is empty: a filter with no hash functions would
    /// vacuously report every key as present.
    pub fn with_hashers(
        bits_per_element: usize,
        estimated_items: usize,
        hashers: Arc<[H]>,
    ) -> Self {
        assert!(!hashers.is_empty(), "hashers must not be empty");
        BloomFilter {
            last_hashes: vec![0; hashers.len()],
            hashers,
            bits: BitBuffer::with_sizing(bits_per_element, estimated_items),
        }
    }

    /// Reconstitutes a filter from raw bytes previously obtained via
    /// [`as_bytes`](Self::as_bytes), copying them verbatim.
    ///
    /// The raw bytes are the filter's entire serialized state; the hash
    /// family is not recorded in them and must match the one used when the
    /// bytes were built, or membership answers are meaningless. That match is
    /// a caller contract this constructor cannot check.
    ///
    /// # Errors
    ///
    /// Returns an error if `bytes` is empty or `hashers` is empty.
    pub fn from_bytes_with_hashers(bytes: &[u8], hashers: Arc<[H]>) -> Result<Self, Error> {
        if bytes.is_empty() {
            return Err(Error::invalid_data("filter bytes must not be empty"));
        }
        if hashers.is_empty() {
            return Err(Error::invalid_argument("hashers must not be empty"));
        }
        Ok(BloomFilter {
            last_hashes: vec![0; hashers.len()],
            hashers,
            bits: BitBuffer::copy_from(bytes),
        })
    }

    /// Adds a key to the filter.
    ///
    /// Sets one bit per hash function. Total for any input: the empty key
    /// hashes to a degenerate (but deterministic) value and still sets bits.
    pub fn insert(&mut self, key: &[u8]) {
        let bit_len = self.bits.bit_len();
        for hasher in self.hashers.iter() {
            self.bits.set(hasher.hash_bytes(key) % bit_len);
        }
    }

    /// Tests whether a key is possibly in the set.
    ///
    /// Returns `true` only if the indexed bit is set for every hash function.
    /// Never returns `false` for a previously inserted key; may return `true`
    /// for keys never inserted, with a probability set by the sizing chosen
    /// at construction.
    pub fn contains(&self, key: &[u8]) -> bool {
        let bit_len = self.bits.bit_len();
        self.hashers
            .iter()
            .all(|hasher| self.bits.get(hasher.hash_bytes(key) % bit_len))
    }

    /// Tests whether any `window_len`-byte window of `data` is possibly in
    /// the set.
    ///
    /// Slides the window from offset 0 to `data.len() - window_len`
    /// inclusive, applying the same membership check as
    /// [`contains`](Self::contains) at each position. Only the first window
    /// is hashed in full; every later position updates each hash in O(1)
    /// from the previous one, so the scan is linear in `data.len()`.
    ///
    /// Returns `true` at the first matching window. A `window_len` of zero
    /// or greater than `data.len()` leaves no valid offsets and returns
    /// `false` without scanning.
    ///
    /// Takes `&mut self` because the rolling state persists in the filter
    /// between window positions; the bit buffer is never mutated.
    pub fn contains_substring(&mut self, data: &[u8], window_len: usize) -> bool {
        if window_len == 0 || window_len > data.len() {
            return false;
        }
        let bit_len = self.bits.bit_len();
        for offset in 0..=data.len() - window_len {
            let window = &data[offset..offset + window_len];
            for (hasher, last) in self.hashers.iter().zip(self.last_hashes.iter_mut()) {
                *last = if offset == 0 {
                    hasher.hash_bytes(window)
                } else {
                    hasher.roll(window, data[offset - 1], *last)
                };
            }
            if self.last_hashes.iter().all(|&h| self.bits.get(h % bit_len)) {
                return true;
            }
        }
        false
    }

    /// Number of hash functions bound to the filter.
    pub fn num_hashes(&self) -> usize {
        self.hashers.len()
    }

    /// Total number of bits in the filter.
    pub fn capacity(&self) -> u64 {
        self.bits.bit_len()
    }

    /// The raw filter bytes.
    ///
    /// May be persisted or transmitted verbatim and handed back to
    /// [`from_bytes_with_hashers`](Self::from_bytes_with_hashers) to
    /// reconstitute an equivalent filter.
    pub fn as_bytes(&self) -> &[u8] {
        self.bits.as_bytes()
    }

    /// The underlying bit buffer, mainly for its `Display` dump.
    pub fn bits(&self) -> &BitBuffer {
        &self.bits
    }

    /// Number of bits set to 1. Useful for monitoring saturation.
    pub fn bits_used(&self) -> u64 {
        self.bits.count_ones()
    }

    /// Returns whether no bit is set (no key was ever inserted).
    pub fn is_empty(&self) -> bool {
        self.bits_used() == 0
    }

    /// Fraction of bits set. Values above 0.5 indicate degraded
    /// false-positive rates.
    pub fn load_factor(&self) -> f64 {
        self.bits_used() as f64 / self.capacity() as f64
    }
}
