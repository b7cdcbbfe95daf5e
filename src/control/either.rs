//! Either type - a success value or a failure value.
//!
//! `Either<L, R>` is either `Left(L)` or `Right(R)`. `Right` is the success
//! side and `Left` the failure side, so the type doubles as a `Result`:
//! [`Either::ok`] and [`Either::error`] are aliases for [`Either::right`] and
//! [`Either::left`], and conversions to and from `std::result::Result` are
//! lossless.
//!
//! `map` and `flat_map` act on the success side and short-circuit on the
//! first failure. Use [`Validation`](super::Validation) to accumulate every
//! failure instead.
//!
//! # Examples
//!
//! ```rust
//! use monadix::control::Either;
//!
//! fn parse(input: &str) -> Either<String, i32> {
//!     input.parse::<i32>().map_err(|_| format!("not a number: {input}")).into()
//! }
//!
//! let doubled = parse("21").map(|n| n * 2);
//! assert_eq!(doubled, Either::ok(42));
//!
//! let failed = parse("x").flat_map(|n| parse(&n.to_string()));
//! assert_eq!(failed, Either::error("not a number: x".to_string()));
//!
//! let description = parse("7").fold(
//!     |error| format!("failed: {error}"),
//!     |n| format!("parsed {n}"),
//! );
//! assert_eq!(description, "parsed 7");
//! ```

use std::fmt;

use crate::error::{UnwrapErrorsOnSuccessError, UnwrapOnErrorError};
use crate::typeclass::{Mappable, TypeConstructor};

/// A value that is either a failure (`Left`) or a success (`Right`).
///
/// # Type Parameters
///
/// * `L` - The type of the failure value
/// * `R` - The type of the success value
///
/// # Examples
///
/// ```rust
/// use monadix::control::Either;
///
/// let success: Either<String, i32> = Either::ok(42);
/// let failure: Either<String, i32> = Either::error("boom".to_string());
///
/// assert_eq!(success.map(|x| x + 1), Either::Right(43));
/// assert_eq!(failure.map_err(|e| e.len()), Either::Left(4));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The failure variant.
    Left(L),
    /// The success variant.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a success value.
    #[inline]
    pub const fn right(value: R) -> Self {
        Self::Right(value)
    }

    /// Creates a failure value.
    #[inline]
    pub const fn left(error: L) -> Self {
        Self::Left(error)
    }

    /// Alias for [`Either::right`].
    #[inline]
    pub const fn ok(value: R) -> Self {
        Self::Right(value)
    }

    /// Alias for [`Either::left`].
    #[inline]
    pub const fn error(error: L) -> Self {
        Self::Left(error)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Alias for [`Either::is_right`].
    #[inline]
    pub const fn is_ok(&self) -> bool {
        self.is_right()
    }

    /// Alias for [`Either::is_left`].
    #[inline]
    pub const fn is_err(&self) -> bool {
        self.is_left()
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the failure value, if any.
    #[inline]
    pub fn into_left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns the success value, if any.
    #[inline]
    pub fn into_right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows the failure value, if any.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Borrows the success value, if any.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with [`UnwrapOnErrorError`] carrying the failure value if this
    /// is `Left`.
    ///
    /// # Examples
    ///
    /// ```should_panic
    /// use monadix::control::Either;
    ///
    /// let failure: Either<&str, i32> = Either::error("boom");
    /// failure.unwrap();
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> R
    where
        L: fmt::Debug,
    {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(error) => {
                misuse_event!(warn, "Either::unwrap", "unwrap called on a failure value");
                panic!("{error}")
            }
        }
    }

    /// Returns the success value, or the failure wrapped in
    /// [`UnwrapOnErrorError`].
    ///
    /// # Errors
    ///
    /// Returns [`UnwrapOnErrorError`] when called on `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::control::Either;
    ///
    /// let failure: Either<&str, i32> = Either::error("boom");
    /// assert_eq!(failure.try_unwrap().unwrap_err().into_inner(), "boom");
    /// ```
    #[inline]
    pub fn try_unwrap(self) -> Result<R, UnwrapOnErrorError<L>> {
        match self {
            Self::Left(error) => Err(UnwrapOnErrorError::new(error)),
            Self::Right(value) => Ok(value),
        }
    }

    /// Returns the failure value.
    ///
    /// # Panics
    ///
    /// Panics with [`UnwrapErrorsOnSuccessError`] if this is `Right`.
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> L {
        match self.try_unwrap_err() {
            Ok(error) => error,
            Err(error) => {
                misuse_event!(warn, "Either::unwrap_err", "unwrap_err called on a success value");
                panic!("{error}")
            }
        }
    }

    /// Returns the failure value, or [`UnwrapErrorsOnSuccessError`].
    ///
    /// # Errors
    ///
    /// Returns [`UnwrapErrorsOnSuccessError`] when called on `Right`.
    #[inline]
    pub fn try_unwrap_err(self) -> Result<L, UnwrapErrorsOnSuccessError> {
        match self {
            Self::Left(error) => Ok(error),
            Self::Right(_) => Err(UnwrapErrorsOnSuccessError),
        }
    }

    /// Returns the success value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: R) -> R {
        match self {
            Self::Left(_) => default,
            Self::Right(value) => value,
        }
    }

    /// Returns the success value or computes one from the failure.
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Self::Left(error) => function(error),
            Self::Right(value) => value,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Transforms the success value, leaving a failure untouched.
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Transforms the failure value, leaving a success untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::control::Either;
    ///
    /// let failure: Either<i32, String> = Either::error(404);
    /// assert_eq!(failure.map_err(|code| format!("HTTP {code}")), Either::error("HTTP 404".to_string()));
    /// ```
    #[inline]
    pub fn map_err<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(error) => Either::Left(function(error)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Alias for [`Either::map_err`].
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        self.map_err(function)
    }

    /// Applies one function to whichever side is present.
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(error) => Either::Left(left_function(error)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    // =========================================================================
    // Chaining Operations
    // =========================================================================

    /// Chains a computation that may fail. A failure short-circuits and
    /// `function` is not called.
    #[inline]
    pub fn flat_map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(value) => function(value),
        }
    }

    /// Alias for [`Either::flat_map`].
    #[inline]
    pub fn bind<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        self.flat_map(function)
    }

    /// Alias for [`Either::flat_map`].
    #[inline]
    pub fn and_then<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        self.flat_map(function)
    }

    /// Applies a wrapped function to the success value.
    ///
    /// If both sides fail, the failure of `self` is kept; errors are not
    /// accumulated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::control::Either;
    ///
    /// let function: Either<&str, fn(i32) -> i32> = Either::ok(|x| x + 1);
    /// assert_eq!(Either::ok(1).ap(function), Either::ok(2));
    ///
    /// let failed_function: Either<&str, fn(i32) -> i32> = Either::error("second");
    /// assert_eq!(Either::<&str, i32>::error("first").ap(failed_function), Either::error("first"));
    /// ```
    #[inline]
    pub fn ap<T, F>(self, function: Either<L, F>) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match (self, function) {
            (Self::Left(error), _) | (Self::Right(_), Either::Left(error)) => Either::Left(error),
            (Self::Right(value), Either::Right(function)) => Either::Right(function(value)),
        }
    }

    // =========================================================================
    // Fold and Swap
    // =========================================================================

    /// Collapses both sides into one result, invoking exactly one function.
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(error) => left_function(error),
            Self::Right(value) => right_function(value),
        }
    }

    /// Exchanges the two sides.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Converts into a std `Result`, `Right` becoming `Ok`.
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        self.into()
    }
}

// =============================================================================
// Result Conversions
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(error) => Err(error),
            Either::Right(value) => Ok(value),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<L, R> Mappable for Either<L, R> {
    #[inline]
    fn map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnMut(R) -> B,
    {
        Self::map(self, function)
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

static_assertions::assert_impl_all!(Either<String, Vec<u8>>: Send, Sync);
