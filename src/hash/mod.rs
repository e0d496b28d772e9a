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

//! Bit index derivation for the Bloom filter.
//!
//! One SHA-256 digest is computed per key and all `NUM_HASHES` indices
//! are sliced out of it, which costs a single digest per insert/query
//! instead of one per hash function. The windows are disjoint 4-byte
//! ranges, so the derived indices are as independent as the digest
//! bytes themselves.

use sha2::Digest;
use sha2::Sha256;

use crate::error::Error;

/// Number of hash functions, i.e. bit positions touched per key.
///
/// Fixed for all filter instances. There is no per-instance salt or
/// seed: a given key must map to the same index set for the lifetime of
/// a filter, and correctness of repeated lookups depends on that.
pub(crate) const NUM_HASHES: usize = 5;

/// Bytes of digest consumed per derived index.
const INDEX_WIDTH: usize = 4;

/// Derives the `NUM_HASHES` bit indices for a key, each in
/// `[0, capacity)`.
///
/// Index `k` is the 4-byte little-endian window of the digest at byte
/// offset `4 * k`, reinterpreted as `i32`, absolute value, reduced
/// modulo `capacity`. `unsigned_abs` keeps `i32::MIN` well-defined.
///
/// Fails with [`ErrorKind::HashFailure`](crate::error::ErrorKind) if
/// the digest cannot cover `NUM_HASHES * 4` bytes; with SHA-256 that
/// bound holds for any `NUM_HASHES <= 8`.
pub(crate) fn bit_indices(key: &[u8], capacity: usize) -> Result<[usize; NUM_HASHES], Error> {
    let digest = Sha256::digest(key);

    let required = NUM_HASHES * INDEX_WIDTH;
    if digest.len() < required {
        return Err(Error::hash_failure("digest cannot cover the hash count")
            .with_context("digest_len", digest.len())
            .with_context("required", required));
    }

    let mut indices = [0usize; NUM_HASHES];
    for (k, index) in indices.iter_mut().enumerate() {
        let offset = k * INDEX_WIDTH;
        let mut window = [0u8; INDEX_WIDTH];
        window.copy_from_slice(&digest[offset..offset + INDEX_WIDTH]);
        let raw = i32::from_le_bytes(window);
        *index = raw.unsigned_abs() as usize % capacity;
    }

    Ok(indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_in_range() {
        for capacity in [1, 7, 50, 64, 1 << 20] {
            let indices = bit_indices(b"some key", capacity).unwrap();
            assert!(indices.iter().all(|&i| i < capacity));
        }
    }

    #[test]
    fn test_deterministic_across_calls() {
        let first = bit_indices(b"stable", 1024).unwrap();
        let second = bit_indices(b"stable", 1024).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_known_vector() {
        // SHA-256("first key"), disjoint 4-byte LE windows, mod 50.
        let indices = bit_indices(b"first key", 50).unwrap();
        assert_eq!(indices, [35, 6, 47, 24, 34]);
    }

    #[test]
    fn test_distinct_keys_diverge() {
        let a = bit_indices(b"first key", 1 << 20).unwrap();
        let b = bit_indices(b"first kes", 1 << 20).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_empty_key_is_valid() {
        let indices = bit_indices(b"", 50).unwrap();
        assert!(indices.iter().all(|&i| i < 50));
    }

    #[test]
    fn test_capacity_one_pins_all_indices() {
        assert_eq!(bit_indices(b"anything", 1).unwrap(), [0; NUM_HASHES]);
    }
}
