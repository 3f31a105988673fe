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

use super::RollingHasher;

/// A polynomial rolling hash parameterized by a multiplier `m`.
///
/// The hash of a window is `sum(window[i] * m^(len-1-i))` reduced modulo 2^64
/// by wrapping arithmetic. Wraparound is deliberate and part of the persisted
/// format: filter buffers built elsewhere with the same multipliers decode to
/// identical bit positions, so the arithmetic must never be made checked or
/// saturating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolyHash {
    multiplier: u64,
}

impl PolyHash {
    /// Creates a hasher with the given multiplier.
    pub const fn new(multiplier: u64) -> Self {
        PolyHash { multiplier }
    }

    /// Returns the multiplier this hasher was built with.
    pub const fn multiplier(&self) -> u64 {
        self.multiplier
    }
}

impl RollingHasher for PolyHash {
    fn hash_bytes(&self, window: &[u8]) -> u64 {
        let mut hash = 0u64;
        for &byte in window {
            hash = hash.wrapping_mul(self.multiplier).wrapping_add(byte as u64);
        }
        hash
    }

    /// Rolls by removing the outgoing byte's term and folding in the new
    /// trailing byte:
    ///
    /// ```text
    /// hash' = (prev - outgoing * m^(len-1)) * m + window[len-1]   (mod 2^64)
    /// ```
    ///
    /// `prev` covers `[outgoing, window[0..len-1]]`, in which `outgoing`
    /// carries weight `m^(len-1)`. Subtracting that term and multiplying by
    /// `m` re-weights the surviving bytes exactly as `hash_bytes` would.
    fn roll(&self, window: &[u8], outgoing: u8, prev: u64) -> u64 {
        let lead_weight = self.multiplier.wrapping_pow((window.len() - 1) as u32);
        prev.wrapping_sub((outgoing as u64).wrapping_mul(lead_weight))
            .wrapping_mul(self.multiplier)
            .wrapping_add(window[window.len() - 1] as u64)
    }
}
