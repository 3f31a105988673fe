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

/// Fixed-size, densely packed bit array backing a filter.
///
/// Bits are numbered little-endian within each byte: bit `i` lives in
/// `byte[i / 8]` under mask `1 << (i % 8)`. The raw bytes are the entire
/// serialized state of a filter, so this layout must stay stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitBuffer {
    bytes: Box<[u8]>,
}

impl BitBuffer {
    /// Allocates a zeroed buffer sized for the given filter parameters.
    ///
    /// `byte_len = bits_per_element * estimated_items / 8 + 1`. The trailing
    /// `+1` absorbs the integer-division rounding and keeps the buffer
    /// non-empty even when both parameters are zero, so `bit_len() > 0`
    /// always holds.
    pub(crate) fn with_sizing(bits_per_element: usize, estimated_items: usize) -> Self {
        let byte_len = bits_per_element * estimated_items / 8 + 1;
        BitBuffer {
            bytes: vec![0u8; byte_len].into_boxed_slice(),
        }
    }

    /// Copies a caller-supplied byte slice verbatim.
    ///
    /// Callers validate that `bytes` is non-empty.
    pub(crate) fn copy_from(bytes: &[u8]) -> Self {
        BitBuffer {
            bytes: bytes.into(),
        }
    }

    /// Number of bytes in the buffer.
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    /// Number of addressable bits, `byte_len() * 8`.
    pub fn bit_len(&self) -> u64 {
        self.bytes.len() as u64 * 8
    }

    /// The raw bytes. This is the filter's complete serialized state.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Sets bit `index`. Idempotent.
    ///
    /// `index` must be below `bit_len()`; the filter guarantees this by
    /// reducing every hash modulo `bit_len()`.
    pub(crate) fn set(&mut self, index: u64) {
        self.bytes[(index / 8) as usize] |= 1 << (index % 8);
    }

    /// Returns whether bit `index` is set. Never mutates.
    pub(crate) fn get(&self, index: u64) -> bool {
        self.bytes[(index / 8) as usize] & (1 << (index % 8)) != 0
    }

    /// Number of bits currently set.
    pub(crate) fn count_ones(&self) -> u64 {
        self.bytes.iter().map(|b| b.count_ones() as u64).sum()
    }
}

/// Debug dump of the raw bit pattern: one `'0'`/`'1'` per bit, bit 0 of each
/// byte first, bytes separated by spaces. Informational only; the format is
/// not a stability guarantee.
impl fmt::Display for BitBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.bytes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            for bit in 0..8 {
                f.write_str(if byte & (1 << bit) != 0 { "1" } else { "0" })?;
            }
        }
        Ok(())
    }
}
