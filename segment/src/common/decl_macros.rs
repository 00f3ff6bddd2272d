// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrap the given value in `Ok(..)`. With no arguments this is `Ok(())`.
///
/// ```
/// use r3bl_segment::{SegResult, ok};
///
/// fn nothing() -> SegResult<()> { ok!() }
/// fn answer() -> SegResult<usize> { ok!(42) }
///
/// assert!(nothing().is_ok());
/// assert_eq!(answer().unwrap(), 42);
/// ```
#[macro_export]
macro_rules! ok {
    () => {
        Ok(())
    };
    ($value:expr) => {
        Ok($value)
    };
}

/// A wrapper for `pretty_assertions::assert_eq!` macro.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}
