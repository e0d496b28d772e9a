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

//! # Bloomsieve
//!
//! A thread-safe Bloom filter for probabilistic set membership testing.
//!
//! A Bloom filter answers "was this key inserted?" with either
//! *definitely not* or *possibly yes*, trading a bounded false positive
//! rate for constant-time queries and sublinear space. It never produces
//! false negatives.
//!
//! Bit indices are derived from a single SHA-256 digest per key, so a
//! given key always maps to the same bit positions across calls and
//! across filter instances. The filter is [`Send`] + [`Sync`]; a single
//! coarse lock guards the shared bit array, and hashing happens outside
//! the critical section.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

pub mod bloom;
pub mod error;

pub(crate) mod hash;
