// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module provides the [Sequence] struct, an owned, ordered collection that wraps
//! a [`SmallVec`] and exposes a fluent set of query and transform operations (see the
//! other modules in [`crate::sequence`]).
//!
//! Every construction path (a fixed list of values, an existing buffer, any iterable
//! source, or nothing at all) converges on the same [`SequenceStorage`]. Using a
//! [`SmallVec`] allows for stack allocation rather than heap allocation. Its internal
//! backing store starts out as a stack allocated array which can spill over into the
//! heap if needed.
//!
//! # Features
//!
//! - Value semantics. [Clone] copies all the elements, two instances never alias.
//! - Implements [`Index`] and [`IndexMut`]. This is the unchecked fast path, an out of
//!   range index panics. Use [`Sequence::at`] for the checked version.
//! - Implements [`Add`] to concatenate two sequences into a new one.
//! - Implements [`FromIterator`] and [`IntoIterator`] (owned, `&` and `&mut`).
//! - Provides a [`sequence!`](crate::sequence!) macro for convenient sequence creation.
//!
//! # Examples
//!
//! ```
//! use r3bl_linq::{sequence, Sequence};
//!
//! let a = sequence![1, 2, 3];
//! let b: Sequence<i32> = vec![4, 5].into();
//! let c = &a + &b;
//!
//! assert_eq!(c, sequence![1, 2, 3, 4, 5]);
//! assert_eq!(a.count(), 3);
//! ```

use std::ops::{Add, Index, IndexMut};

use sizing_sequence::SequenceStorage;
use smallvec::SmallVec;

/// This needs to be accessible by the rest of the crate, and anyone using the
/// [Sequence] struct.
pub mod sizing_sequence {
    use super::SmallVec;
    pub type SequenceStorage<T> = SmallVec<[T; DEFAULT_SEQUENCE_STORAGE_SIZE]>;
    pub const DEFAULT_SEQUENCE_STORAGE_SIZE: usize = 8;
}

/// An ordered, owned, resizable collection of `T`. Duplicates are allowed and insertion
/// order is significant.
///
/// Two sequences are equal iff they have the same length and the elements at each
/// position compare equal. [`PartialOrd`] and [`Ord`] are lexicographic.
///
/// All the operations return a new [Sequence] and leave `self` untouched. The only way
/// to change a sequence in place is the write form of indexing, via [`IndexMut`].
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Sequence<T> {
    pub(crate) inner: SequenceStorage<T>,
}

impl<T> Default for Sequence<T> {
    fn default() -> Self { Self::new() }
}

impl<T> Sequence<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: SequenceStorage::new(),
        }
    }

    #[must_use]
    pub fn with_capacity(size: usize) -> Self {
        Self {
            inner: SequenceStorage::with_capacity(size),
        }
    }

    /// Copy every element yielded by `iterable` into a new sequence, preserving order.
    /// Anything that implements [`IntoIterator`] works: [Vec], arrays, slices (when `T`
    /// is [Clone], via `.iter().cloned()`), sets, maps (as pairs), ranges, etc.
    pub fn from_iterable(iterable: impl IntoIterator<Item = T>) -> Self {
        iterable.into_iter().collect()
    }

    /// Number of elements. Same as [`Sequence::count`].
    #[must_use]
    pub fn len(&self) -> usize { self.inner.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.inner.is_empty() }

    #[must_use]
    pub fn as_slice(&self) -> &[T] { self.inner.as_slice() }

    pub fn iter(&self) -> std::slice::Iter<'_, T> { self.inner.iter() }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> { self.inner.iter_mut() }
}

impl<T: Clone> Sequence<T> {
    /// Copy `count` elements from the start of `buffer`.
    ///
    /// # Panics
    ///
    /// The caller guarantees that `buffer` holds at least `count` elements. If it doesn't
    /// this panics w/ the standard slice bounds message.
    #[must_use]
    pub fn from_buffer(buffer: &[T], count: usize) -> Self {
        Self {
            inner: SequenceStorage::from(&buffer[..count]),
        }
    }
}

impl<T> From<SequenceStorage<T>> for Sequence<T> {
    fn from(inner: SequenceStorage<T>) -> Self { Self { inner } }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(other: Vec<T>) -> Self {
        Self {
            inner: SequenceStorage::from_vec(other),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(other: [T; N]) -> Self {
        let mut it = Sequence::with_capacity(N);
        it.inner.extend(other);
        it
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(other: &[T]) -> Self {
        Self {
            inner: SequenceStorage::from(other),
        }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<'a, T: Clone + 'a> FromIterator<&'a T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = &'a T>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().cloned().collect(),
        }
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = smallvec::IntoIter<[T; sizing_sequence::DEFAULT_SEQUENCE_STORAGE_SIZE]>;

    fn into_iter(self) -> Self::IntoIter { self.inner.into_iter() }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.inner.iter() }
}

impl<'a, T> IntoIterator for &'a mut Sequence<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.inner.iter_mut() }
}

/// Unchecked read access. Panics if `index >= len`.
impl<T> Index<usize> for Sequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output { &self.inner[index] }
}

/// Unchecked write access. Panics if `index >= len`.
impl<T> IndexMut<usize> for Sequence<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output { &mut self.inner[index] }
}

/// Concatenate (other) sequence to sequence (self), consuming both.
impl<T> Add<Sequence<T>> for Sequence<T> {
    type Output = Sequence<T>;

    fn add(mut self, other: Sequence<T>) -> Self::Output {
        self.inner.extend(other.inner);
        self
    }
}

/// Concatenate (other) sequence to sequence (self) into a new sequence. Neither operand
/// is touched.
impl<T: Clone> Add<&Sequence<T>> for &Sequence<T> {
    type Output = Sequence<T>;

    fn add(self, other: &Sequence<T>) -> Self::Output {
        let mut it = Sequence::with_capacity(self.len() + other.len());
        it.inner.extend(self.iter().cloned());
        it.inner.extend(other.iter().cloned());
        it
    }
}

#[macro_export]
macro_rules! sequence {
    (
        $($item: expr),*
        $(,)* /* Optional trailing comma https://stackoverflow.com/a/43143459/2085356. */
    ) => {
        $crate::Sequence::from([$($item),*])
    };
}
