// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Contiguous sub ranges of a [Sequence], taken from the front or the back.
//!
//! The count based operations are strict: asking for more elements than the sequence
//! holds is a [`SequenceError::InvalidOperation`] rather than a silent clamp. Passing a
//! count equal to the length is fine. The predicate based operations never fail.
//!
//! For a sequence of length `len` and any `n <= len`:
//!
//! ```text
//! take(n) + skip(n)           == self
//! skip_last(n) + take_last(n) == self
//! ```

use crate::{Sequence, SequenceError, SequenceResult};

impl<T: Clone> Sequence<T> {
    /// Everything after the first `n` elements.
    ///
    /// # Errors
    ///
    /// [`SequenceError::InvalidOperation`] if `n > len`.
    pub fn skip(&self, n: usize) -> SequenceResult<Self> {
        self.check_count("skip", n)?;
        Ok(Sequence::from(&self.inner[n..]))
    }

    /// The first `n` elements.
    ///
    /// # Errors
    ///
    /// [`SequenceError::InvalidOperation`] if `n > len`.
    pub fn take(&self, n: usize) -> SequenceResult<Self> {
        self.check_count("take", n)?;
        Ok(Sequence::from(&self.inner[..n]))
    }

    /// Everything except the last `n` elements.
    ///
    /// # Errors
    ///
    /// [`SequenceError::InvalidOperation`] if `n > len`.
    pub fn skip_last(&self, n: usize) -> SequenceResult<Self> {
        self.check_count("skip_last", n)?;
        Ok(Sequence::from(&self.inner[..self.len() - n]))
    }

    /// The last `n` elements.
    ///
    /// # Errors
    ///
    /// [`SequenceError::InvalidOperation`] if `n > len`.
    pub fn take_last(&self, n: usize) -> SequenceResult<Self> {
        self.check_count("take_last", n)?;
        Ok(Sequence::from(&self.inner[self.len() - n..]))
    }

    /// Drop the leading run of elements that satisfy `predicate`, keep the rest. Once an
    /// element fails the predicate, no further elements are tested.
    #[must_use]
    pub fn skip_while(&self, predicate: impl FnMut(&T) -> bool) -> Self {
        let prefix_len = self.leading_run_len(predicate);
        Sequence::from(&self.inner[prefix_len..])
    }

    /// Keep the leading run of elements that satisfy `predicate`. Stops at the first
    /// element that fails.
    #[must_use]
    pub fn take_while(&self, predicate: impl FnMut(&T) -> bool) -> Self {
        let prefix_len = self.leading_run_len(predicate);
        Sequence::from(&self.inner[..prefix_len])
    }

    fn leading_run_len(&self, mut predicate: impl FnMut(&T) -> bool) -> usize {
        self.iter().take_while(|it| predicate(it)).count()
    }

    fn check_count(&self, operation: &'static str, n: usize) -> SequenceResult<()> {
        if n > self.len() {
            return Err(SequenceError::new_invalid_operation(
                operation,
                n,
                self.len(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests_sequence_slice {
    use crate::{Sequence, SequenceError, sequence};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(0, &[1, 2, 3, 4, 5])]
    #[test_case(2, &[3, 4, 5])]
    #[test_case(5, &[])]
    fn test_skip(n: usize, expected: &[i32]) {
        let it = sequence![1, 2, 3, 4, 5];
        assert_eq!(it.skip(n).unwrap().as_slice(), expected);
    }

    #[test_case(0, &[])]
    #[test_case(2, &[1, 2])]
    #[test_case(5, &[1, 2, 3, 4, 5])]
    fn test_take(n: usize, expected: &[i32]) {
        let it = sequence![1, 2, 3, 4, 5];
        assert_eq!(it.take(n).unwrap().as_slice(), expected);
    }

    #[test_case(0, &[1, 2, 3, 4, 5])]
    #[test_case(2, &[1, 2, 3])]
    #[test_case(5, &[])]
    fn test_skip_last(n: usize, expected: &[i32]) {
        let it = sequence![1, 2, 3, 4, 5];
        assert_eq!(it.skip_last(n).unwrap().as_slice(), expected);
    }

    #[test_case(0, &[])]
    #[test_case(2, &[4, 5])]
    #[test_case(5, &[1, 2, 3, 4, 5])]
    fn test_take_last(n: usize, expected: &[i32]) {
        let it = sequence![1, 2, 3, 4, 5];
        assert_eq!(it.take_last(n).unwrap().as_slice(), expected);
    }

    #[test]
    fn test_count_past_len_is_invalid_operation() {
        let it = sequence![1, 2, 3];
        let expected = |operation: &'static str| SequenceError::InvalidOperation {
            operation,
            requested: 4,
            len: 3,
        };

        assert_eq!(it.skip(4), Err(expected("skip")));
        assert_eq!(it.take(4), Err(expected("take")));
        assert_eq!(it.skip_last(4), Err(expected("skip_last")));
        assert_eq!(it.take_last(4), Err(expected("take_last")));
    }

    #[test]
    fn test_zero_on_empty_is_fine() {
        let it = Sequence::<i32>::empty();
        assert_eq!(it.skip(0), Ok(Sequence::empty()));
        assert_eq!(it.take_last(0), Ok(Sequence::empty()));
        assert!(it.take(1).is_err());
    }

    #[test]
    fn test_take_and_skip_partition() {
        let it = sequence!['a', 'b', 'c', 'd'];
        for n in 0..=it.len() {
            let front = it.take(n).unwrap() + it.skip(n).unwrap();
            let back = it.skip_last(n).unwrap() + it.take_last(n).unwrap();
            assert_eq!(front, it);
            assert_eq!(back, it);
        }
    }

    #[test]
    fn test_skip_while_and_take_while() {
        let it = sequence![1, 2, 3, 4, 1, 2];
        let less_than_3 = |it: &i32| *it < 3;

        assert_eq!(it.skip_while(less_than_3), sequence![3, 4, 1, 2]);
        assert_eq!(it.take_while(less_than_3), sequence![1, 2]);
    }

    #[test]
    fn test_while_stops_at_first_failure() {
        let it = sequence![5, 1, 1];
        let mut tested = vec![];
        let taken = it.take_while(|it| {
            tested.push(*it);
            *it < 3
        });

        assert_eq!(taken, Sequence::empty());
        assert_eq!(tested, vec![5]);
    }

    #[test]
    fn test_while_edge_cases() {
        let it = sequence![2, 4, 6];
        assert_eq!(it.skip_while(|_| true), Sequence::empty());
        assert_eq!(it.take_while(|_| true), it);
        assert_eq!(it.skip_while(|_| false), it);
        assert_eq!(it.take_while(|_| false), Sequence::empty());
        assert_eq!(Sequence::<i32>::empty().skip_while(|_| true), Sequence::empty());
    }
}
