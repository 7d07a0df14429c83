// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Copy a [Sequence] out into the standard collections.
//!
//! The set conversions drop duplicates. The map conversions derive a key and a value
//! from each element, and when two elements produce the same key, the element that comes
//! later in the sequence wins.
//!
//! | Method                        | Target                          |
//! | :---------------------------- | :------------------------------ |
//! | [`Sequence::to_vec`]          | [Vec]                           |
//! | [`Sequence::to_list`]         | [`LinkedList`]                  |
//! | [`Sequence::to_set`]          | [`BTreeSet`] (sorted)           |
//! | [`Sequence::to_hash_set`]     | [`HashSet`]                     |
//! | [`Sequence::to_map`]          | [`BTreeMap`] (sorted by key)    |
//! | [`Sequence::to_unordered_map`]| [`HashMap`]                     |
//! | [`Sequence::to_ordered_map`]  | [`OrderMap`] (first insertion)  |

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList};
use std::hash::Hash;

use ordermap::OrderMap;

use crate::Sequence;

impl<T: Clone> Sequence<T> {
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> { self.inner.to_vec() }

    #[must_use]
    pub fn to_list(&self) -> LinkedList<T> { self.iter().cloned().collect() }
}

impl<T> Sequence<T> {
    /// Build a sorted map. `key_fn` and `value_fn` are called once per element, in
    /// order.
    pub fn to_map<K: Ord, V>(
        &self,
        key_fn: impl FnMut(&T) -> K,
        value_fn: impl FnMut(&T) -> V,
    ) -> BTreeMap<K, V> {
        self.key_value_pairs(key_fn, value_fn).collect()
    }

    pub fn to_unordered_map<K: Hash + Eq, V>(
        &self,
        key_fn: impl FnMut(&T) -> K,
        value_fn: impl FnMut(&T) -> V,
    ) -> HashMap<K, V> {
        self.key_value_pairs(key_fn, value_fn).collect()
    }

    /// Keys keep the position where they were first inserted. A later duplicate key
    /// replaces the value but does not move the key.
    pub fn to_ordered_map<K: Hash + Eq, V>(
        &self,
        key_fn: impl FnMut(&T) -> K,
        value_fn: impl FnMut(&T) -> V,
    ) -> OrderMap<K, V> {
        self.key_value_pairs(key_fn, value_fn).collect()
    }

    fn key_value_pairs<K, V>(
        &self,
        mut key_fn: impl FnMut(&T) -> K,
        mut value_fn: impl FnMut(&T) -> V,
    ) -> impl Iterator<Item = (K, V)> {
        self.iter().map(move |it| (key_fn(it), value_fn(it)))
    }
}

impl<T: Clone + Ord> Sequence<T> {
    #[must_use]
    pub fn to_set(&self) -> BTreeSet<T> { self.iter().cloned().collect() }
}

impl<T: Clone + Hash + Eq> Sequence<T> {
    #[must_use]
    pub fn to_hash_set(&self) -> HashSet<T> { self.iter().cloned().collect() }
}
