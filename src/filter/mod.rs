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

//! Bloom filter with a sliding-window substring query.
//!
//! A Bloom filter is a space-efficient probabilistic data structure for set
//! membership. A query returns either "possibly in set" or "definitely not in
//! set": inserted keys are never reported absent, while keys never inserted
//! may be reported present at a rate set by the sizing parameters.
//!
//! This filter adds a second query mode on top of exact keys: given a data
//! buffer and a window length, it reports whether *any* window of that length
//! is possibly in the set. The scan reuses a rolling hash
//! ([`crate::hash::RollingHasher`]) so each position costs O(1) per hash
//! function instead of rehashing the whole window.
//!
//! # Usage
//!
//! ```rust
//! use bloomscan::filter::BloomFilter;
//!
//! // 10 bits per element, sized for 3 elements.
//! let mut filter = BloomFilter::new(10, 3);
//!
//! filter.insert(b"cat");
//! filter.insert(b"dog");
//!
//! assert!(filter.contains(b"cat"));
//! // "possibly present" for unrelated keys is allowed but deterministic.
//! let zzz = filter.contains(b"zzz");
//! assert_eq!(filter.contains(b"zzz"), zzz);
//!
//! // Substring mode: is any 3-byte window of the data in the set?
//! filter.insert(b"cde");
//! assert!(filter.contains_substring(b"abcdef", 3));
//! ```
//!
//! # Persistence
//!
//! The raw bytes returned by [`BloomFilter::as_bytes`] are the filter's
//! entire serialized state. Store or transmit them verbatim and rebuild with
//! [`BloomFilter::from_bytes`]; the hash family travels out-of-band and must
//! match the one that built the bytes.
//!
//! # Concurrency
//!
//! Single-threaded by design: no locks, no atomics. Exclusive access is
//! expressed through `&mut self` on the mutating operations (including the
//! substring scan, which reuses per-filter rolling state). Hash families are
//! immutable and freely shared across filters and threads.

mod bits;
mod sketch;

pub use self::bits::BitBuffer;
pub use self::sketch::BloomFilter;
