//! Error types raised when a wrapper is unwrapped on the wrong variant.
//!
//! Expected outcomes (an absent value, a failed validation) are modelled as
//! data by [`Maybe`], [`Either`] and [`Validation`]. The types in this module
//! are reserved for programmer misuse: asking for a value that is not there.
//! Every panicking `unwrap*` method has a `try_*` twin that returns one of
//! these errors instead of panicking.
//!
//! [`Maybe`]: crate::control::Maybe
//! [`Either`]: crate::control::Either
//! [`Validation`]: crate::control::Validation
//!
//! # Examples
//!
//! ```rust
//! use monadix::error::{EmptyValueError, UnwrapOnErrorError};
//!
//! assert_eq!(
//!     format!("{}", EmptyValueError),
//!     "called unwrap on a Nothing value"
//! );
//!
//! let error = UnwrapOnErrorError::new("boom");
//! assert_eq!(format!("{error}"), "called unwrap on an error value: \"boom\"");
//! assert_eq!(error.into_inner(), "boom");
//! ```

use std::fmt;

/// Raised by `unwrap` on `Maybe::Nothing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EmptyValueError;

impl fmt::Display for EmptyValueError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "called unwrap on a Nothing value")
    }
}

impl std::error::Error for EmptyValueError {}

/// Raised by `unwrap` on a failure variant (`Either::Left`, `Validation::Invalid`).
///
/// Carries the wrapped error so that callers of `try_unwrap` lose nothing.
/// For `Validation` the payload is the whole accumulated error list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnwrapOnErrorError<E> {
    error: E,
}

impl<E> UnwrapOnErrorError<E> {
    /// Wraps the error found on the failure side.
    #[inline]
    pub const fn new(error: E) -> Self {
        Self { error }
    }

    /// Returns a reference to the wrapped error.
    #[inline]
    pub const fn error(&self) -> &E {
        &self.error
    }

    /// Consumes this error and returns the wrapped one.
    #[inline]
    pub fn into_inner(self) -> E {
        self.error
    }
}

impl<E: fmt::Debug> fmt::Display for UnwrapOnErrorError<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "called unwrap on an error value: {:?}", self.error)
    }
}

impl<E: fmt::Debug> std::error::Error for UnwrapOnErrorError<E> {}

/// Raised by `unwrap_err` / `unwrap_errors` on a success variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UnwrapErrorsOnSuccessError;

impl fmt::Display for UnwrapErrorsOnSuccessError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "called unwrap_errors on a success value")
    }
}

impl std::error::Error for UnwrapErrorsOnSuccessError {}

/// Raised when an error list would be built from zero errors.
///
/// `Validation::Invalid` always carries at least one error, so
/// `ErrorList::try_from_vec(vec![])` and `Validation::invalid_many([])`
/// return this instead of an empty failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EmptyErrorsError;

impl fmt::Display for EmptyErrorsError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "an invalid validation requires at least one error"
        )
    }
}

impl std::error::Error for EmptyErrorsError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn empty_value_error_display() {
        assert_eq!(
            format!("{EmptyValueError}"),
            "called unwrap on a Nothing value"
        );
    }

    #[rstest]
    fn unwrap_on_error_error_display_uses_debug_of_payload() {
        let error = UnwrapOnErrorError::new(vec!["a", "b"]);
        assert_eq!(
            format!("{error}"),
            "called unwrap on an error value: [\"a\", \"b\"]"
        );
    }

    #[rstest]
    fn unwrap_on_error_error_keeps_payload() {
        let error = UnwrapOnErrorError::new(42);
        assert_eq!(*error.error(), 42);
        assert_eq!(error.into_inner(), 42);
    }

    #[rstest]
    fn unwrap_errors_on_success_error_display() {
        assert_eq!(
            format!("{UnwrapErrorsOnSuccessError}"),
            "called unwrap_errors on a success value"
        );
    }

    #[rstest]
    fn empty_errors_error_display() {
        assert_eq!(
            format!("{EmptyErrorsError}"),
            "an invalid validation requires at least one error"
        );
    }

    #[rstest]
    fn errors_are_std_errors() {
        fn assert_error<T: std::error::Error>(_: &T) {}
        assert_error(&EmptyValueError);
        assert_error(&UnwrapOnErrorError::new("x"));
        assert_error(&UnwrapErrorsOnSuccessError);
        assert_error(&EmptyErrorsError);
    }
}
