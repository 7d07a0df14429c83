// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Associated constructors that generate a [Sequence] from scratch, rather than from an
//! existing collection.

use crate::{Sequence, Successor};

impl<T> Sequence<T> {
    /// A sequence w/ no elements. Same as [`Sequence::new`].
    #[must_use]
    pub fn empty() -> Self { Self::new() }
}

impl<T: Clone> Sequence<T> {
    /// `count` copies of `value`.
    ///
    /// ```
    /// use r3bl_linq::{Sequence, sequence};
    ///
    /// assert_eq!(Sequence::repeat(1, 3), sequence![1, 1, 1]);
    /// assert_eq!(Sequence::repeat("x", 0), Sequence::empty());
    /// ```
    #[must_use]
    pub fn repeat(value: T, count: usize) -> Self {
        std::iter::repeat_n(value, count).collect()
    }
}

impl<T: Successor> Sequence<T> {
    /// `count` consecutive values starting at `initial`, ie: `initial`,
    /// `initial.successor()`, and so on.
    ///
    /// Only `count - 1` successors are computed, so a range that ends exactly on the
    /// maximum value of `T` is fine:
    ///
    /// ```
    /// use r3bl_linq::{Sequence, sequence};
    ///
    /// assert_eq!(Sequence::range(1, 5), sequence![1, 2, 3, 4, 5]);
    /// assert_eq!(Sequence::range(254_u8, 2), sequence![254, 255]);
    /// ```
    ///
    /// # Panics
    ///
    /// If a successor is needed that `T` can't provide, eg: `Sequence::range(255_u8, 2)`.
    #[must_use]
    pub fn range(initial: T, count: usize) -> Self {
        if count == 0 {
            return Self::empty();
        }
        let mut acc = Self::with_capacity(count);
        let mut current = initial;
        for _ in 1..count {
            let next = current.successor();
            acc.inner.push(std::mem::replace(&mut current, next));
        }
        acc.inner.push(current);
        acc
    }
}

#[cfg(test)]
mod tests_sequence_factory {
    use crate::{Sequence, sequence};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty() {
        let it = Sequence::<u8>::empty();
        assert_eq!(it.count(), 0);
        assert_eq!(it, Sequence::default());
    }

    #[test]
    fn test_repeat() {
        assert_eq!(Sequence::repeat(1, 5), sequence![1, 1, 1, 1, 1]);
        assert_eq!(Sequence::repeat('z', 0), Sequence::empty());

        let strings = Sequence::repeat("ab".to_string(), 2);
        assert_eq!(strings.distinct().count(), 1);
        assert_eq!(strings.count(), 2);
    }

    #[test]
    fn test_range() {
        assert_eq!(Sequence::range(1, 5), sequence![1, 2, 3, 4, 5]);
        assert_eq!(Sequence::range(-2_i64, 3), sequence![-2, -1, 0]);
        assert_eq!(Sequence::range('a', 3), sequence!['a', 'b', 'c']);
        assert_eq!(Sequence::range(7, 0), Sequence::empty());
        assert_eq!(Sequence::range(1.5_f64, 3), sequence![1.5, 2.5, 3.5]);
    }

    #[test]
    fn test_range_ending_on_max_does_not_overflow() {
        assert_eq!(Sequence::range(u8::MAX, 1), sequence![u8::MAX]);
        assert_eq!(Sequence::range(i8::MAX - 1, 2), sequence![126, 127]);
    }

    #[test]
    #[should_panic(expected = "has no successor")]
    fn test_range_past_max_panics() { let _unused = Sequence::range(u8::MAX, 2); }
}
