// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Read only queries. None of these mutate `self`, and none of them fail on an empty
//! sequence.

use crate::Sequence;

impl<T> Sequence<T> {
    /// Total number of elements. Same as [`Sequence::len`].
    #[must_use]
    pub fn count(&self) -> usize { self.len() }

    /// Number of elements that satisfy `predicate`.
    pub fn count_where(&self, predicate: impl Fn(&T) -> bool) -> usize {
        self.iter().filter(|it| predicate(it)).count()
    }

    /// `true` if there is at least one element.
    #[must_use]
    pub fn any(&self) -> bool { !self.is_empty() }

    /// `true` if at least one element satisfies `predicate`. Always `false` for an empty
    /// sequence.
    pub fn any_where(&self, predicate: impl Fn(&T) -> bool) -> bool {
        self.iter().any(predicate)
    }

    /// `true` if every element satisfies `predicate`. This is vacuously `true` for an
    /// empty sequence.
    pub fn all(&self, predicate: impl Fn(&T) -> bool) -> bool { self.iter().all(predicate) }
}

impl<T: PartialEq> Sequence<T> {
    /// `true` if some element is `==` to `value`.
    pub fn contains(&self, value: &T) -> bool { self.inner.contains(value) }
}
