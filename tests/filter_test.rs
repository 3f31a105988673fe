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

use bloomscan::filter::BloomFilter;
use bloomscan::hash::default_hashers;
use bloomscan::hash::PolyHash;

#[test]
fn test_init_defaults() {
    let filter = BloomFilter::new(10, 3);
    assert_eq!(filter.num_hashes(), 5);
    assert_eq!(filter.as_bytes().len(), 4);
    assert_eq!(filter.capacity(), 32);
    assert!(filter.is_empty());
    assert_eq!(filter.bits_used(), 0);
}

#[test]
fn test_insert_and_contains() {
    let mut filter = BloomFilter::new(10, 3);
    filter.insert(b"cat");
    filter.insert(b"dog");

    assert!(filter.contains(b"cat"));
    assert!(filter.contains(b"dog"));
    assert!(!filter.is_empty());

    // "zzz" may collide (false positives are inherent) but must be
    // deterministic while no insert intervenes.
    let first = filter.contains(b"zzz");
    for _ in 0..10 {
        assert_eq!(filter.contains(b"zzz"), first);
    }
}

#[test]
fn test_no_false_negatives() {
    let mut filter = BloomFilter::new(10, 100);
    let keys: Vec<String> = (0..100).map(|i| format!("key-{i}")).collect();
    for key in &keys {
        filter.insert(key.as_bytes());
    }
    for key in &keys {
        assert!(filter.contains(key.as_bytes()), "lost key {key}");
    }
}

#[test]
fn test_unrelated_inserts_preserve_membership() {
    let mut filter = BloomFilter::new(10, 50);
    filter.insert(b"anchor");
    for i in 0..50 {
        filter.insert(format!("noise-{i}").as_bytes());
        assert!(filter.contains(b"anchor"));
    }
}

#[test]
fn test_interleaved_build_and_query() {
    // No phase separation is enforced; queries between inserts are legal.
    let mut filter = BloomFilter::new(10, 4);
    filter.insert(b"one");
    assert!(filter.contains(b"one"));
    filter.insert(b"two");
    assert!(filter.contains(b"one"));
    assert!(filter.contains(b"two"));
}

#[test]
fn test_keys_with_embedded_zero_bytes() {
    let mut filter = BloomFilter::new(10, 4);
    filter.insert(b"a\0b");
    assert!(filter.contains(b"a\0b"));
}

#[test]
fn test_round_trip_through_raw_bytes() {
    let mut original = BloomFilter::new(10, 3);
    original.insert(b"cat");
    original.insert(b"dog");

    let reloaded = BloomFilter::from_bytes(original.as_bytes()).unwrap();
    assert_eq!(reloaded.as_bytes(), original.as_bytes());
    assert_eq!(reloaded.capacity(), original.capacity());

    for key in [&b"cat"[..], b"dog", b"zzz", b"", b"catdog"] {
        assert_eq!(reloaded.contains(key), original.contains(key), "key {key:?}");
    }
}

#[test]
fn test_custom_family_round_trip() {
    let hashers: Arc<[PolyHash]> = Arc::from([PolyHash::new(101), PolyHash::new(103)]);
    let mut original = BloomFilter::with_hashers(12, 8, Arc::clone(&hashers));
    original.insert(b"alpha");

    let reloaded =
        BloomFilter::from_bytes_with_hashers(original.as_bytes(), hashers).unwrap();
    assert!(reloaded.contains(b"alpha"));
    assert_eq!(reloaded.num_hashes(), 2);
}

#[test]
fn test_shared_family_across_filters() {
    let hashers = default_hashers();
    let mut left = BloomFilter::with_hashers(10, 3, Arc::clone(&hashers));
    let mut right = BloomFilter::with_hashers(10, 3, hashers);

    left.insert(b"cat");
    right.insert(b"dog");

    // Same family, independent buffers.
    assert!(left.contains(b"cat"));
    assert!(right.contains(b"dog"));
    assert!(left.as_bytes() != right.as_bytes());
}

#[test]
fn test_bit_dump_is_buffer_wide() {
    let mut filter = BloomFilter::new(10, 3);
    filter.insert(b"cat");
    let dump = filter.bits().to_string();
    // 4 bytes of 8 bit chars, 3 separating spaces.
    assert_eq!(dump.len(), 4 * 8 + 3);
    assert_eq!(dump.matches('1').count() as u64, filter.bits_used());
}
