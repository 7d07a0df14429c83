// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Checked element access. Unlike [`std::ops::Index`] these never panic, they return a
//! [`SequenceError`] that describes which precondition failed.

use crate::{Sequence, SequenceError, SequenceResult};

impl<T> Sequence<T> {
    /// Checked counterpart of `self[index]`.
    ///
    /// # Errors
    ///
    /// The checks run in this order:
    /// 1. [`SequenceError::EmptyCollection`] if there are no elements.
    /// 2. [`SequenceError::IndexOutOfRange`] if `index >= len`.
    pub fn at(&self, index: usize) -> SequenceResult<&T> {
        self.check_not_empty("at")?;
        self.inner
            .get(index)
            .ok_or_else(|| SequenceError::new_index_out_of_range(index, self.len()))
    }

    /// # Errors
    ///
    /// Returns [`SequenceError::EmptyCollection`] if there are no elements.
    pub fn first(&self) -> SequenceResult<&T> {
        self.inner
            .first()
            .ok_or_else(|| SequenceError::new_empty_collection("first"))
    }

    /// # Errors
    ///
    /// Returns [`SequenceError::EmptyCollection`] if there are no elements.
    pub fn last(&self) -> SequenceResult<&T> {
        self.inner
            .last()
            .ok_or_else(|| SequenceError::new_empty_collection("last"))
    }

    /// Returns the only element of the sequence.
    ///
    /// # Errors
    ///
    /// - [`SequenceError::EmptyCollection`] if there are no elements.
    /// - [`SequenceError::MultipleElements`] if there is more than one element.
    pub fn single(&self) -> SequenceResult<&T> {
        match self.inner.as_slice() {
            [] => Err(SequenceError::new_empty_collection("single")),
            [it] => Ok(it),
            _ => Err(SequenceError::new_multiple_elements(self.len())),
        }
    }

    fn check_not_empty(&self, operation: &'static str) -> SequenceResult<()> {
        if self.is_empty() {
            return Err(SequenceError::new_empty_collection(operation));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests_sequence_access {
    use crate::{Sequence, SequenceError, SequenceErrorKind, sequence};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(0, 1)]
    #[test_case(2, 3)]
    #[test_case(3, 4)]
    fn test_at_in_range(index: usize, expected: i32) {
        let it = sequence![1, 2, 3, 4];
        assert_eq!(it.at(index), Ok(&expected));
    }

    #[test]
    fn test_at_out_of_range() {
        let it = sequence![1, 2, 3, 4];
        assert_eq!(
            it.at(4),
            Err(SequenceError::IndexOutOfRange { index: 4, len: 4 })
        );
    }

    #[test]
    fn test_at_checks_empty_before_range() {
        let it = Sequence::<i32>::empty();
        assert_eq!(
            it.at(1).unwrap_err().kind(),
            SequenceErrorKind::EmptyCollection
        );
        assert_eq!(
            it.at(0),
            Err(SequenceError::EmptyCollection { operation: "at" })
        );
    }

    #[test]
    fn test_first_and_last() {
        let it = sequence!['a', 'b', 'c'];
        assert_eq!(it.first(), Ok(&'a'));
        assert_eq!(it.last(), Ok(&'c'));

        let one = sequence!['x'];
        assert_eq!(one.first(), one.last());
    }

    #[test]
    fn test_first_and_last_on_empty() {
        let it = Sequence::<char>::empty();
        assert_eq!(
            it.first(),
            Err(SequenceError::EmptyCollection { operation: "first" })
        );
        assert_eq!(
            it.last(),
            Err(SequenceError::EmptyCollection { operation: "last" })
        );
    }

    #[test]
    fn test_single() {
        assert_eq!(sequence![1].single(), Ok(&1));
        assert_eq!(
            sequence![1, 2].single(),
            Err(SequenceError::MultipleElements { len: 2 })
        );
        assert_eq!(
            Sequence::<i32>::empty().single().unwrap_err().kind(),
            SequenceErrorKind::EmptyCollection
        );
    }
}
