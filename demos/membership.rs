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

use bloomsieve::bloom::BloomFilter;
use bloomsieve::error::Error;

fn main() -> Result<(), Error> {
    println!("Bloom Filter");
    let filter = BloomFilter::new(50)?;

    filter.insert("first key")?;
    filter.insert("ok next key")?;
    filter.insert("first ke")?;
    // Duplicate insert: sets no new bits, does not advance the counter
    filter.insert("first key")?;

    let result1 = filter.might_contain("first ke")?;
    println!("Result 1: {result1}");

    let result2 = filter.might_contain("first kes")?;
    println!("Result 2: {result2}");

    println!("Expected FPR: {}", filter.expected_false_positive_rate());

    filter.insert("first keys")?;

    let result3 = filter.might_contain("first kes")?;
    println!("Result 3: {result3}");

    println!("Expected FPR: {}", filter.expected_false_positive_rate());

    Ok(())
}
