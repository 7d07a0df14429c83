// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Error taxonomy for [`crate::Sequence`]. See [`SequenceError`] for details.

/// Type alias to make it easy to work with fallible [`crate::Sequence`] operations.
///
/// [`SequenceError`] implements [`miette::Diagnostic`], so an application that uses
/// [`miette::Result`] can simply `?` a [`SequenceResult`] into its own result type.
pub type SequenceResult<T> = Result<T, SequenceError>;

/// Errors from the checked operations of [`crate::Sequence`].
///
/// Each variant represents a distinct failed precondition with a dedicated [diagnostic
/// code] and help text:
///
/// | Variant              | Raised by                                          |
/// | :------------------- | :------------------------------------------------- |
/// | [`EmptyCollection`]  | `first`, `last`, `single`, `at` on zero elements   |
/// | [`IndexOutOfRange`]  | `at` when the index is `>=` the length             |
/// | [`MultipleElements`] | `single` when more than one element is present     |
/// | [`InvalidOperation`] | `skip`, `take`, `skip_last`, `take_last` past len  |
///
/// Nothing is mutated before any of these are returned, so there is nothing to roll
/// back. Match on the variant (or on [`SequenceError::kind`]) to recover.
///
/// [`EmptyCollection`]: Self::EmptyCollection
/// [`IndexOutOfRange`]: Self::IndexOutOfRange
/// [`MultipleElements`]: Self::MultipleElements
/// [`InvalidOperation`]: Self::InvalidOperation
/// [diagnostic code]: miette::Diagnostic::code
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum SequenceError {
    /// The sequence has no elements.
    #[error("📭 Collection is empty, can't perform `{operation}`")]
    #[diagnostic(
        code(r3bl_linq::sequence::empty_collection),
        help("Check `is_empty()` (or `any()`) before calling `{operation}`.")
    )]
    EmptyCollection {
        /// Name of the operation that was attempted, eg: `"first"`.
        operation: &'static str,
    },

    /// The sequence is not empty, but it is too short for the requested index.
    #[error(
        "🔍 Index was out of range. Attempted to access index {index} but collection \
         contains {len} elements"
    )]
    #[diagnostic(
        code(r3bl_linq::sequence::index_out_of_range),
        help("Valid indices are `0..{len}`.")
    )]
    IndexOutOfRange { index: usize, len: usize },

    /// [`crate::Sequence::single`] was called on a sequence w/ more than one element.
    #[error("👥 Collection contains more than 1 element ({len} elements)")]
    #[diagnostic(
        code(r3bl_linq::sequence::multiple_elements),
        help("Use `first()` if any element will do, or `filter()` down to one element.")
    )]
    MultipleElements { len: usize },

    /// A slicing operation asked for more elements than the sequence holds.
    #[error(
        "✂️ Can't `{operation}` {requested} elements, collection only contains {len} \
         elements"
    )]
    #[diagnostic(
        code(r3bl_linq::sequence::invalid_operation),
        help("The count passed to `{operation}` must be `<= count()`.")
    )]
    InvalidOperation {
        operation: &'static str,
        requested: usize,
        len: usize,
    },
}

/// Fieldless mirror of [`SequenceError`], handy for `assert_eq!` and `match` arms that
/// don't care about the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceErrorKind {
    EmptyCollection,
    IndexOutOfRange,
    MultipleElements,
    InvalidOperation,
}

impl SequenceError {
    #[must_use]
    pub fn kind(&self) -> SequenceErrorKind {
        match self {
            SequenceError::EmptyCollection { .. } => SequenceErrorKind::EmptyCollection,
            SequenceError::IndexOutOfRange { .. } => SequenceErrorKind::IndexOutOfRange,
            SequenceError::MultipleElements { .. } => {
                SequenceErrorKind::MultipleElements
            }
            SequenceError::InvalidOperation { .. } => {
                SequenceErrorKind::InvalidOperation
            }
        }
    }
}

/// Constructors used by [`crate::Sequence`]. Each one emits a [`tracing::debug!`] event
/// so that failed precondition checks show up in the logs of the calling app.
impl SequenceError {
    pub(crate) fn new_empty_collection(operation: &'static str) -> Self {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "📭 sequence precondition failed: empty collection",
            operation = %operation
        );
        SequenceError::EmptyCollection { operation }
    }

    pub(crate) fn new_index_out_of_range(index: usize, len: usize) -> Self {
        tracing::debug!(
            message = "🔍 sequence precondition failed: index out of range",
            index = %index,
            len = %len
        );
        SequenceError::IndexOutOfRange { index, len }
    }

    pub(crate) fn new_multiple_elements(len: usize) -> Self {
        tracing::debug!(
            message = "👥 sequence precondition failed: multiple elements",
            len = %len
        );
        SequenceError::MultipleElements { len }
    }

    pub(crate) fn new_invalid_operation(
        operation: &'static str,
        requested: usize,
        len: usize,
    ) -> Self {
        tracing::debug!(
            message = "✂️ sequence precondition failed: invalid operation",
            operation = %operation,
            requested = %requested,
            len = %len
        );
        SequenceError::InvalidOperation {
            operation,
            requested,
            len,
        }
    }
}

#[cfg(test)]
mod tests_sequence_error {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(SequenceError::new_empty_collection("first"), SequenceErrorKind::EmptyCollection)]
    #[test_case(SequenceError::new_index_out_of_range(4, 4), SequenceErrorKind::IndexOutOfRange)]
    #[test_case(SequenceError::new_multiple_elements(2), SequenceErrorKind::MultipleElements)]
    #[test_case(SequenceError::new_invalid_operation("skip", 5, 3), SequenceErrorKind::InvalidOperation)]
    fn test_kind(error: SequenceError, expected: SequenceErrorKind) {
        assert_eq!(error.kind(), expected);
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            SequenceError::new_empty_collection("single").to_string(),
            "📭 Collection is empty, can't perform `single`"
        );
        assert_eq!(
            SequenceError::new_index_out_of_range(4, 4).to_string(),
            "🔍 Index was out of range. Attempted to access index 4 but collection \
             contains 4 elements"
        );
        assert_eq!(
            SequenceError::new_multiple_elements(2).to_string(),
            "👥 Collection contains more than 1 element (2 elements)"
        );
        assert_eq!(
            SequenceError::new_invalid_operation("take", 9, 2).to_string(),
            "✂️ Can't `take` 9 elements, collection only contains 2 elements"
        );
    }

    #[test]
    fn test_diagnostic_code() {
        use miette::Diagnostic;

        let error = SequenceError::new_multiple_elements(3);
        let code = error.code().map(|it| it.to_string());
        assert_eq!(
            code.as_deref(),
            Some("r3bl_linq::sequence::multiple_elements")
        );
    }

    #[test]
    fn test_into_miette_report() {
        fn fallible() -> miette::Result<()> {
            Err(SequenceError::new_empty_collection("last"))?;
            Ok(())
        }

        let report = fallible().unwrap_err();
        let error = report.downcast_ref::<SequenceError>().unwrap();
        assert_eq!(error.kind(), SequenceErrorKind::EmptyCollection);
    }
}
