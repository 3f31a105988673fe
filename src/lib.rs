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

//! # Bloomscan
//!
//! A Bloom filter paired with an incremental rolling hash, giving two query
//! modes over one bit array: exact-key membership and sliding-window substring
//! membership over a data buffer.
//!
//! The substring query hashes the first window in full and then updates every
//! hash in O(1) per position as the window slides, so scanning a buffer is
//! linear in its length rather than quadratic.

#![deny(missing_docs)]

pub mod error;
pub mod filter;
pub mod hash;
