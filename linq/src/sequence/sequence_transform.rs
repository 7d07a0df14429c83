// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Transforms that return a new [Sequence]. The source sequence is never mutated.
//!
//! The set like operations ([`Sequence::distinct`], [`Sequence::except`],
//! [`Sequence::intersection`], [`Sequence::union`]) only need [`PartialEq`] and do a
//! linear membership scan per element, so they are `O(n * m)`. If the element type is
//! [`Hash`] + [`Eq`] then [`Sequence::distinct_hashed`] gives the same result in linear
//! time.
//!
//! # Examples
//!
//! ```
//! use r3bl_linq::sequence;
//!
//! let it = sequence![1, 2, 1, 1, 1, 2, 2]
//!     .distinct()
//!     .append(3)
//!     .select(|it| it * 10)
//!     .filter(|it| *it > 10);
//!
//! assert_eq!(it, sequence![20, 30]);
//! ```

use std::hash::Hash;

use rustc_hash::FxHashSet;

use crate::Sequence;

impl<T: Clone> Sequence<T> {
    /// New sequence w/ `value` added at the end.
    #[must_use]
    pub fn append(&self, value: T) -> Self {
        let mut it = Sequence::with_capacity(self.len() + 1);
        it.inner.extend(self.iter().cloned());
        it.inner.push(value);
        it
    }

    /// New sequence w/ `value` added at the start.
    #[must_use]
    pub fn prepend(&self, value: T) -> Self {
        let mut it = Sequence::with_capacity(self.len() + 1);
        it.inner.push(value);
        it.inner.extend(self.iter().cloned());
        it
    }

    /// Same as `&self + other`.
    #[must_use]
    pub fn concat(&self, other: &Sequence<T>) -> Self { self + other }

    #[must_use]
    pub fn reverse(&self) -> Self { self.iter().rev().collect() }

    /// Keep, in order, only the elements that satisfy `predicate`.
    #[must_use]
    pub fn filter(&self, mut predicate: impl FnMut(&T) -> bool) -> Self {
        self.iter().filter(|it| predicate(it)).collect()
    }

    /// Convert every element to `U` using [`Into`]. The conversion must exist at compile
    /// time, there is no runtime check.
    #[must_use]
    pub fn static_cast<U>(&self) -> Sequence<U>
    where
        T: Into<U>,
    {
        self.iter().cloned().map(Into::into).collect()
    }
}

impl<T> Sequence<T> {
    /// Project each element to a new value (possibly of a different type). The returned
    /// sequence has the same length, and element `i` is `projection(&self[i])`.
    pub fn select<U>(&self, projection: impl FnMut(&T) -> U) -> Sequence<U> {
        self.iter().map(projection).collect()
    }
}

impl<T: Clone + PartialEq> Sequence<T> {
    /// Unique elements, in the order of their first occurrence.
    #[must_use]
    pub fn distinct(&self) -> Self {
        let mut acc = Sequence::with_capacity(self.len());
        for item in self {
            if !acc.contains(item) {
                acc.inner.push(item.clone());
            }
        }
        acc
    }

    /// Elements of `self` that don't appear anywhere in `other`. Duplicates in `self`
    /// are kept.
    #[must_use]
    pub fn except(&self, other: &Sequence<T>) -> Self {
        self.filter(|it| !other.contains(it))
    }

    /// Elements of `self` that also appear in `other`, in the order of `self`.
    ///
    /// This is a membership test per element and not a multiset intersection. If an
    /// element occurs several times in `self` and at least once in `other`, then every
    /// occurrence is kept:
    ///
    /// ```
    /// use r3bl_linq::sequence;
    ///
    /// let lhs = sequence![1, 1, 2, 3];
    /// let rhs = sequence![1, 3];
    /// assert_eq!(lhs.intersection(&rhs), sequence![1, 1, 3]);
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Sequence<T>) -> Self {
        self.filter(|it| other.contains(it))
    }

    /// The distinct elements of `self`, followed by the distinct elements of `other` that
    /// are not already included. The result has no duplicates and is order stable.
    #[must_use]
    pub fn union(&self, other: &Sequence<T>) -> Self {
        let mut acc = self.distinct();
        for item in &other.distinct() {
            if !acc.contains(item) {
                acc.inner.push(item.clone());
            }
        }
        acc
    }
}

impl<T: Clone + Hash + Eq> Sequence<T> {
    /// Same result as [`Sequence::distinct`], but uses a hash set to track the elements
    /// that have already been seen.
    #[must_use]
    pub fn distinct_hashed(&self) -> Self {
        let mut seen = FxHashSet::default();
        self.filter(|it| seen.insert(it.clone()))
    }
}
