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

//! Bloom Filter implementation for probabilistic set membership testing.
//!
//! A Bloom filter is a space-efficient probabilistic data structure used to test whether
//! an element is a member of a set. False positive matches are possible, but false negatives
//! are not. In other words, a query returns either "possibly in set" or "definitely not in set".
//!
//! # Properties
//!
//! - **No false negatives**: If a key was inserted, `might_contain()` will always return `true`
//! - **Possible false positives**: `might_contain()` may return `true` for keys never inserted
//! - **Fixed size**: The bit capacity is chosen at construction and never changes
//! - **Insert-only**: Bits are never cleared; there is no removal operation
//! - **Thread-safe**: A filter can be shared across threads and used concurrently
//!
//! # Usage
//!
//! ```rust
//! use bloomsieve::bloom::BloomFilter;
//!
//! # fn main() -> Result<(), bloomsieve::error::Error> {
//! // Create a filter with 1024 bit slots
//! let filter = BloomFilter::new(1024)?;
//!
//! // Insert keys
//! filter.insert("apple")?;
//! filter.insert("banana")?;
//!
//! // Check membership
//! assert!(filter.might_contain("apple")?); // true - definitely inserted
//! assert!(!filter.might_contain("grape")?); // false - never inserted (probably)
//!
//! // Get statistics
//! println!("Capacity: {} bits", filter.capacity());
//! println!("Inserted: {} keys", filter.inserted_count());
//! println!("Est. FPR: {:.4}%", filter.expected_false_positive_rate() * 100.0);
//! # Ok(())
//! # }
//! ```
//!
//! # Implementation Details
//!
//! - One SHA-256 digest per key; the k-th bit index is a disjoint 4-byte
//!   window of the digest reduced modulo the capacity
//! - Five bit positions are touched per key (fixed for all instances)
//! - Bits packed efficiently in `u64` words behind a single coarse lock
//! - The insertion counter only advances when an insert flips at least
//!   one bit, so duplicate inserts do not inflate the rate estimate
//!
//! # References
//!
//! - Bloom, Burton H. (1970). "Space/time trade-offs in hash coding with allowable errors"

mod filter;

pub use self::filter::BloomFilter;
