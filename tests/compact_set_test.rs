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

use std::hash::Hash;
use std::hash::Hasher;

use compactset::BoxedStorage;
use compactset::CompactSet;
use compactset::CompactSetItem;
use googletest::assert_that;
use googletest::prelude::eq;

#[test]
fn test_initial_len_is_zero() {
    let set = CompactSet::<String>::new();
    assert_eq!(set.len(), 0);
    assert!(set.is_empty());
}

#[test]
fn test_contains_on_empty_set_is_false() {
    let set = CompactSet::<String>::new();
    assert!(!set.contains(&"some string".to_string()));
}

#[test]
fn test_contains_none_on_empty_set_is_false() {
    let set = CompactSet::<Option<String>>::new();
    assert!(!set.contains(&None));
}

#[test]
fn test_add_returns_true_when_element_was_not_in_set() {
    let mut set = CompactSet::new();
    assert!(set.add("element".to_string()));
}

#[test]
fn test_len_changes_after_add() {
    let mut set = CompactSet::new();
    set.add("element".to_string());
    assert_eq!(set.len(), 1);
    assert!(!set.is_empty());
}

#[test]
fn test_duplicate_element_is_not_added() {
    let mut set = CompactSet::new();
    set.add("element".to_string());
    assert!(!set.add("element".to_string()));
    assert_eq!(set.len(), 1);
}

#[test]
fn test_add_and_contains_work_with_none_element() {
    let mut set = CompactSet::<Option<String>>::new();
    assert!(set.add(None));
    assert_eq!(set.len(), 1);
    assert!(set.contains(&None));
}

#[test]
fn test_none_element_is_not_added_twice() {
    let mut set = CompactSet::<Option<String>>::new();
    set.add(None);
    assert!(!set.add(None));
    assert_eq!(set.len(), 1);
}

#[test]
fn test_none_and_some_elements_are_distinct() {
    let mut set = CompactSet::new();
    assert!(set.add(None));
    assert!(set.add(Some("element".to_string())));
    assert_that!(set.len(), eq(2));
    assert!(set.contains(&None));
    assert!(set.contains(&Some("element".to_string())));
}

#[test]
fn test_add_works_past_expected_size() {
    let mut set = CompactSet::with_expected_size(1).unwrap();
    set.add("1".to_string());
    set.add("2".to_string());
    assert_eq!(set.len(), 2);
    assert!(set.contains(&"1".to_string()));
    assert!(set.contains(&"2".to_string()));
}

#[test]
fn test_none_element_is_not_lost_past_expected_size() {
    let mut set = CompactSet::with_expected_size(1).unwrap();
    set.add(None);
    set.add(Some("1".to_string()));
    assert_eq!(set.len(), 2);
    assert!(set.contains(&None));
    assert!(set.contains(&Some("1".to_string())));
}

#[test]
fn test_works_when_expected_size_is_zero() {
    let mut set = CompactSet::with_expected_size(0).unwrap();
    set.add("1".to_string());
    assert_eq!(set.len(), 1);
    assert!(set.contains(&"1".to_string()));
}

#[test]
fn test_all_elements_survive_repeated_resize() {
    let mut set = CompactSet::with_expected_size(0).unwrap();
    for i in 0..500 {
        assert!(set.add(format!("value_{i}")));
    }
    assert_that!(set.len(), eq(500));
    for i in 0..500 {
        assert!(set.contains(&format!("value_{i}")));
    }
}

#[test]
fn test_str_elements_use_the_boxed_backend() {
    let mut set = CompactSet::new();
    assert!(set.add("left"));
    assert!(set.add("right"));
    assert!(!set.add("left"));
    assert_eq!(set.len(), 2);
}

/// Element type whose every value shares one hash code.
#[derive(Debug, PartialEq, Eq)]
struct Colliding {
    value: &'static str,
}

impl Colliding {
    fn new(value: &'static str) -> Self {
        Self { value }
    }
}

impl Hash for Colliding {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(1);
    }
}

impl CompactSetItem for Colliding {
    type Storage = BoxedStorage<Colliding>;
}

#[test]
fn test_retains_both_elements_on_hash_collision() {
    let a = Colliding::new("object");
    let b = Colliding::new("another object with same hash");

    let mut set = CompactSet::new();
    set.add(Colliding::new("object"));
    set.add(Colliding::new("another object with same hash"));
    assert_eq!(set.len(), 2);
    assert!(set.contains(&a));
    assert!(set.contains(&b));
}

#[test]
fn test_adds_collisions_up_to_expected_size() {
    const VALUES: [&str; 10] = [
        "obj_0", "obj_1", "obj_2", "obj_3", "obj_4", "obj_5", "obj_6", "obj_7", "obj_8", "obj_9",
    ];

    let mut set = CompactSet::with_expected_size(VALUES.len()).unwrap();
    for value in VALUES {
        assert!(set.add(Colliding::new(value)));
    }
    assert_eq!(set.len(), VALUES.len());
    for value in VALUES {
        assert!(set.contains(&Colliding::new(value)));
    }
}
