// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # `r3bl_linq`
//!
//! An eager, owned, ordered collection ([`Sequence`]) with a fluent API to query,
//! filter, project, slice, combine and convert its elements. Every operation returns a
//! new value and leaves the receiver untouched, so calls chain naturally:
//!
//! ```
//! use r3bl_linq::{Sequence, sequence};
//!
//! let words = sequence!["apple", "kiwi", "banana", "kiwi", "cherry"];
//!
//! let long_words = words
//!     .distinct()
//!     .filter(|it| it.len() > 4)
//!     .select(|it| it.to_uppercase());
//! assert_eq!(long_words.as_slice(), ["APPLE", "BANANA", "CHERRY"]);
//!
//! let lengths = words.to_ordered_map(|it| *it, |it| it.len());
//! assert_eq!(lengths.get("kiwi"), Some(&4));
//!
//! let evens = Sequence::range(1, 10).filter(|it| it % 2 == 0);
//! assert_eq!(evens.take(2), Ok(sequence![2, 4]));
//! ```
//!
//! # Errors
//!
//! The operations that need a precondition (`at`, `first`, `last`, `single`, and the
//! count based slicing ones) return a [`SequenceResult`]. [`SequenceError`] is a
//! [`miette::Diagnostic`], and each failed precondition is also reported as a
//! [`tracing::debug!`] event. See the [`log`] module to route those events to stdout,
//! stderr or a file.
//!
//! ```
//! use r3bl_linq::{Sequence, SequenceErrorKind};
//!
//! let empty = Sequence::<u8>::empty();
//! assert_eq!(empty.first().unwrap_err().kind(), SequenceErrorKind::EmptyCollection);
//! ```

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap().
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod common;
pub mod log;
pub mod sequence;

// Re-export.
pub use common::*;
pub use log::*;
pub use sequence::*;
