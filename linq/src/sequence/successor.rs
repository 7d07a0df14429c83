// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// A type w/ a well defined "next value". This is what [`crate::Sequence::range`] uses
/// to generate consecutive values. It is implemented for all the primitive integer
/// types, for [char], and for [f32] and [f64] (where the next value is `self + 1.0`).
///
/// Implement it for your own types to use them w/ [`crate::Sequence::range`]:
///
/// ```
/// use r3bl_linq::{Sequence, Successor, sequence};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Weekday(u8);
///
/// impl Successor for Weekday {
///     fn successor(&self) -> Self { Weekday((self.0 + 1) % 7) }
/// }
///
/// let it = Sequence::range(Weekday(5), 4);
/// assert_eq!(it, sequence![Weekday(5), Weekday(6), Weekday(0), Weekday(1)]);
/// ```
pub trait Successor {
    /// # Panics
    ///
    /// Implementations may panic if `self` has no successor, eg: `u8::MAX`.
    #[must_use]
    fn successor(&self) -> Self;
}

macro_rules! impl_successor_for_integers {
    ($($t:ty),* $(,)?) => {
        $(
            impl Successor for $t {
                fn successor(&self) -> Self {
                    match self.checked_add(1) {
                        Some(it) => it,
                        None => panic!("{self:?} has no successor"),
                    }
                }
            }
        )*
    };
}

impl_successor_for_integers!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize
);

macro_rules! impl_successor_for_floats {
    ($($t:ty),* $(,)?) => {
        $(
            impl Successor for $t {
                fn successor(&self) -> Self { self + 1.0 }
            }
        )*
    };
}

impl_successor_for_floats!(f32, f64);

/// Skips over the surrogate range, so the successor of `'\u{D7FF}'` is `'\u{E000}'`.
impl Successor for char {
    fn successor(&self) -> Self {
        const LAST_BEFORE_SURROGATES: char = '\u{D7FF}';
        const FIRST_AFTER_SURROGATES: char = '\u{E000}';

        if *self == LAST_BEFORE_SURROGATES {
            return FIRST_AFTER_SURROGATES;
        }
        match char::from_u32(u32::from(*self) + 1) {
            Some(it) => it,
            None => panic!("{self:?} has no successor"),
        }
    }
}
