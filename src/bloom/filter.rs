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

use parking_lot::RwLock;

use crate::error::Error;
use crate::hash;
use crate::hash::NUM_HASHES;

/// A Bloom filter for probabilistic set membership testing.
///
/// Provides fast membership queries with:
/// - No false negatives (inserted keys always return `true`)
/// - A false positive rate bounded by
///   [`expected_false_positive_rate()`](Self::expected_false_positive_rate)
/// - Constant space usage fixed at construction
///
/// The filter is `Send + Sync`; all mutation happens through `&self`
/// behind a single coarse lock, so one instance can be shared across
/// threads without external synchronization.
#[derive(Debug)]
pub struct BloomFilter {
    /// Total number of addressable bit slots (m). Immutable.
    capacity: usize,
    /// Bit words and insertion counter, guarded together so that flip
    /// detection and the counter increment are atomic per insert.
    state: RwLock<State>,
}

#[derive(Debug)]
struct State {
    /// Bit array packed into u64 words. Length = ceil(capacity / 64).
    words: Vec<u64>,
    /// Count of inserts that flipped at least one bit (n).
    inserted: u64,
}

impl State {
    /// Gets the value of a single bit.
    fn get_bit(&self, bit_index: usize) -> bool {
        let word_index = bit_index >> 6; // Equivalent to bit_index / 64
        let bit_offset = bit_index & 63; // Equivalent to bit_index % 64
        let mask = 1u64 << bit_offset;
        (self.words[word_index] & mask) != 0
    }

    /// Sets a single bit, returning whether it was previously clear.
    fn set_bit(&mut self, bit_index: usize) -> bool {
        let word_index = bit_index >> 6; // Equivalent to bit_index / 64
        let bit_offset = bit_index & 63; // Equivalent to bit_index % 64
        let mask = 1u64 << bit_offset;

        let was_clear = (self.words[word_index] & mask) == 0;
        self.words[word_index] |= mask;
        was_clear
    }
}

impl BloomFilter {
    /// Creates a filter with `capacity` bit slots, all cleared.
    ///
    /// The capacity is fixed for the lifetime of the filter; there is
    /// no resizing or rehashing. The unsigned parameter type rules out
    /// negative capacities, and a zero capacity is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`](crate::error::ErrorKind)
    /// if `capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomsieve::bloom::BloomFilter;
    /// let filter = BloomFilter::new(1024).unwrap();
    /// assert_eq!(filter.capacity(), 1024);
    /// assert_eq!(filter.inserted_count(), 0);
    ///
    /// assert!(BloomFilter::new(0).is_err());
    /// ```
    pub fn new(capacity: usize) -> Result<Self, Error> {
        if capacity == 0 {
            return Err(Error::invalid_argument("capacity must be positive")
                .with_context("capacity", capacity));
        }

        let num_words = capacity.div_ceil(64);
        Ok(BloomFilter {
            capacity,
            state: RwLock::new(State {
                words: vec![0u64; num_words],
                inserted: 0,
            }),
        })
    }

    /// Inserts a key into the filter.
    ///
    /// After insertion, `might_contain(key)` will always return `true`.
    /// Inserting a key that is already present is valid, cheap, and
    /// leaves the filter unchanged; the insertion counter only advances
    /// when at least one previously-clear bit was set, so duplicates do
    /// not inflate the false-positive-rate estimate.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::HashFailure`](crate::error::ErrorKind) if
    /// the bit indices could not be derived from the key. This does not
    /// occur under normal operation; when it does, the filter state is
    /// untouched and the caller decides whether to retry the call.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomsieve::bloom::BloomFilter;
    /// let filter = BloomFilter::new(1024).unwrap();
    ///
    /// filter.insert("apple").unwrap();
    /// filter.insert(b"raw bytes".as_slice()).unwrap();
    ///
    /// assert!(filter.might_contain("apple").unwrap());
    /// ```
    pub fn insert(&self, key: impl AsRef<[u8]>) -> Result<(), Error> {
        // Hashing is the expensive step; keep it outside the lock.
        let indices = hash::bit_indices(key.as_ref(), self.capacity)?;

        let mut state = self.state.write();
        let mut changed = false;
        for &index in &indices {
            if state.set_bit(index) {
                changed = true;
            }
        }
        if changed {
            state.inserted += 1;
        }

        Ok(())
    }

    /// Tests whether a key is possibly in the set.
    ///
    /// Returns:
    /// - `true`: the key was **possibly** inserted (or is a false positive)
    /// - `false`: the key was **definitely not** inserted
    ///
    /// Purely observational; repeated calls without intervening inserts
    /// return identical results.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::HashFailure`](crate::error::ErrorKind) if
    /// the bit indices could not be derived from the key.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomsieve::bloom::BloomFilter;
    /// let filter = BloomFilter::new(1024).unwrap();
    /// filter.insert("apple").unwrap();
    ///
    /// assert!(filter.might_contain("apple").unwrap());
    /// assert!(!filter.might_contain("grape").unwrap());
    /// ```
    pub fn might_contain(&self, key: impl AsRef<[u8]>) -> Result<bool, Error> {
        let indices = hash::bit_indices(key.as_ref(), self.capacity)?;

        let state = self.state.read();
        for &index in &indices {
            if !state.get_bit(index) {
                // One clear bit proves the key was never inserted.
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// Estimates the current false positive probability.
    ///
    /// Uses the standard Bloom filter approximation:
    ///
    /// ```text
    /// rate = (1 - (1 - 1/m)^(k*n))^k
    /// ```
    ///
    /// where m is the capacity, k the number of hash functions, and n
    /// the number of effective insertions. Pure function of the current
    /// state; returns exactly `0.0` while the filter is empty, and is
    /// non-decreasing as distinct keys are inserted.
    pub fn expected_false_positive_rate(&self) -> f64 {
        let n = self.state.read().inserted as f64;
        let m = self.capacity as f64;
        let k = NUM_HASHES as f64;

        (1.0 - (1.0 - 1.0 / m).powf(k * n)).powf(k)
    }

    /// Returns the total number of bit slots in the filter (m).
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of inserts that changed the filter state.
    ///
    /// Duplicate inserts of an already-present key do not count, so
    /// this tracks the number of effectively distinct keys added.
    pub fn inserted_count(&self) -> u64 {
        self.state.read().inserted
    }

    /// Returns the number of hash functions used (k).
    pub fn num_hashes(&self) -> usize {
        NUM_HASHES
    }
}

#[cfg(test)]
mod tests {
    use super::BloomFilter;
    use crate::error::ErrorKind;

    #[test]
    fn test_new_starts_cleared() {
        let filter = BloomFilter::new(1024).unwrap();
        assert_eq!(filter.capacity(), 1024);
        assert_eq!(filter.num_hashes(), 5);
        assert_eq!(filter.inserted_count(), 0);
        assert!(!filter.might_contain("anything").unwrap());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = BloomFilter::new(0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_insert_and_might_contain() {
        let filter = BloomFilter::new(1024).unwrap();

        assert!(!filter.might_contain("apple").unwrap());
        filter.insert("apple").unwrap();
        assert!(filter.might_contain("apple").unwrap());
        assert_eq!(filter.inserted_count(), 1);
    }

    #[test]
    fn test_duplicate_insert_does_not_count() {
        let filter = BloomFilter::new(1024).unwrap();

        filter.insert("apple").unwrap();
        filter.insert("apple").unwrap();
        assert_eq!(filter.inserted_count(), 1);
        assert!(filter.might_contain("apple").unwrap());
    }

    #[test]
    fn test_capacity_not_word_aligned() {
        // 70 slots spans two u64 words with a partial tail.
        let filter = BloomFilter::new(70).unwrap();
        for key in ["a", "b", "c", "d"] {
            filter.insert(key).unwrap();
            assert!(filter.might_contain(key).unwrap());
        }
    }

    #[test]
    fn test_rate_is_zero_when_empty() {
        let filter = BloomFilter::new(50).unwrap();
        assert_eq!(filter.expected_false_positive_rate(), 0.0);
    }

    #[test]
    fn test_rate_formula() {
        let filter = BloomFilter::new(50).unwrap();
        filter.insert("first key").unwrap();
        filter.insert("ok next key").unwrap();
        filter.insert("first ke").unwrap();
        assert_eq!(filter.inserted_count(), 3);

        // (1 - (1 - 1/50)^(5*3))^5 for m=50, k=5, n=3.
        let expected = 0.0012211937362610996;
        assert!((filter.expected_false_positive_rate() - expected).abs() < 1e-15);
    }

    #[test]
    fn test_rate_monotone_in_insertions() {
        let filter = BloomFilter::new(4096).unwrap();
        let mut previous = filter.expected_false_positive_rate();
        for i in 0..64 {
            filter.insert(format!("key-{i}")).unwrap();
            let rate = filter.expected_false_positive_rate();
            assert!(rate >= previous);
            assert!(rate <= 1.0);
            previous = rate;
        }
    }
}
