//! Validation type - a success value or a non-empty list of errors.
//!
//! `Validation<E, T>` differs from [`Either`] in how failures combine. The
//! applicative operations ([`Validation::ap`], [`Validation::zip`],
//! [`Validation::map2`] and `collect`) run every independent check and
//! concatenate all of their errors, left operand first. The monadic
//! operation ([`Validation::flat_map`]) is for dependent checks and stops at
//! the first `Invalid`.
//!
//! The failure side is an [`ErrorList`], which cannot be empty: an `Invalid`
//! always carries at least one error.
//!
//! # Examples
//!
//! ```rust
//! use monadix::control::Validation;
//!
//! fn non_empty(field: &'static str, value: &str) -> Validation<String, String> {
//!     if value.is_empty() {
//!         Validation::invalid(format!("{field} is empty"))
//!     } else {
//!         Validation::valid(value.to_string())
//!     }
//! }
//!
//! let form = non_empty("name", "").map2(non_empty("email", ""), |name, email| (name, email));
//! assert_eq!(
//!     form.unwrap_errors().into_vec(),
//!     vec!["name is empty".to_string(), "email is empty".to_string()]
//! );
//!
//! let dependent = non_empty("name", "").flat_map(|name| non_empty("email", &name));
//! assert_eq!(dependent.unwrap_errors().len(), 1);
//! ```

use std::fmt;

use super::either::Either;
use crate::error::{EmptyErrorsError, UnwrapErrorsOnSuccessError, UnwrapOnErrorError};
use crate::typeclass::{Mappable, TypeConstructor};

// =============================================================================
// ErrorList
// =============================================================================

/// An ordered list of errors that always holds at least one element.
///
/// Every constructor either takes a first error by value or rejects an empty
/// input, so [`ErrorList::first`] never fails.
///
/// # Examples
///
/// ```rust
/// use monadix::control::ErrorList;
///
/// let mut errors = ErrorList::new("too short");
/// errors.push("missing digit");
/// assert_eq!(errors.first(), &"too short");
/// assert_eq!(errors.len(), 2);
///
/// assert!(ErrorList::<&str>::try_from_vec(Vec::new()).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct ErrorList<E> {
    errors: Vec<E>,
}

impl<E> ErrorList<E> {
    /// Creates a list holding a single error.
    #[inline]
    pub fn new(first: E) -> Self {
        Self {
            errors: vec![first],
        }
    }

    /// Wraps a vector of errors, rejecting an empty one.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyErrorsError`] if `errors` is empty.
    pub fn try_from_vec(errors: Vec<E>) -> Result<Self, EmptyErrorsError> {
        if errors.is_empty() {
            misuse_event!(debug, "ErrorList::try_from_vec", "rejected an empty error list");
            Err(EmptyErrorsError)
        } else {
            Ok(Self { errors })
        }
    }

    /// Adds an error at the end.
    #[inline]
    pub fn push(&mut self, error: E) {
        self.errors.push(error);
    }

    /// Concatenates two lists, `self` first.
    #[must_use]
    pub fn append(mut self, mut other: Self) -> Self {
        self.errors.append(&mut other.errors);
        self
    }

    /// Returns the first error.
    #[inline]
    pub fn first(&self) -> &E {
        // non-empty by construction
        &self.errors[0]
    }

    /// Consumes the list and returns its first error.
    pub fn into_first(self) -> E {
        let mut errors = self.errors;
        errors.swap_remove(0)
    }

    /// Returns the number of errors, at least one.
    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Always `false`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterates over the errors in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.errors.iter()
    }

    /// Borrows the errors as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[E] {
        &self.errors
    }

    /// Consumes the list and returns the errors.
    #[inline]
    pub fn into_vec(self) -> Vec<E> {
        self.errors
    }

    /// Transforms every error. The result has the same length.
    pub fn map<F, G>(self, function: G) -> ErrorList<F>
    where
        G: FnMut(E) -> F,
    {
        ErrorList {
            errors: self.errors.into_iter().map(function).collect(),
        }
    }
}

impl<E> TryFrom<Vec<E>> for ErrorList<E> {
    type Error = EmptyErrorsError;

    fn try_from(errors: Vec<E>) -> Result<Self, Self::Error> {
        Self::try_from_vec(errors)
    }
}

impl<E> From<ErrorList<E>> for Vec<E> {
    fn from(list: ErrorList<E>) -> Self {
        list.into_vec()
    }
}

impl<E> IntoIterator for ErrorList<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a ErrorList<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl<E: fmt::Display> fmt::Display for ErrorList<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (index, error) in self.errors.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{error}")?;
        }
        write!(formatter, "]")
    }
}

#[cfg(feature = "serde")]
impl<'de, E> serde::Deserialize<'de> for ErrorList<E>
where
    E: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let errors = Vec::<E>::deserialize(deserializer)?;
        Self::try_from_vec(errors).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Validation
// =============================================================================

/// A success value, or one or more accumulated errors.
///
/// # Type Parameters
///
/// * `E` - The type of each error
/// * `T` - The type of the success value
///
/// # Examples
///
/// ```rust
/// use monadix::control::Validation;
///
/// let checked: Validation<&str, i32> = Validation::valid(42);
/// assert!(checked.is_valid());
///
/// let failed = Validation::<&str, i32>::invalid_many(["too small", "odd"]).unwrap();
/// assert_eq!(failed.errors().map(|errors| errors.len()), Some(2));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Validation<E, T> {
    /// A successful value.
    Valid(T),
    /// The accumulated errors.
    Invalid(ErrorList<E>),
}

impl<E, T> Validation<E, T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a successful validation.
    #[inline]
    pub const fn valid(value: T) -> Self {
        Self::Valid(value)
    }

    /// Creates a failed validation holding exactly one error.
    #[inline]
    pub fn invalid(error: E) -> Self {
        Self::Invalid(ErrorList::new(error))
    }

    /// Creates a failed validation from several errors, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyErrorsError`] if `errors` yields nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::control::Validation;
    /// use monadix::error::EmptyErrorsError;
    ///
    /// let failed = Validation::<&str, ()>::invalid_many(vec!["a", "b"]).unwrap();
    /// assert_eq!(failed.unwrap_errors().into_vec(), vec!["a", "b"]);
    ///
    /// let empty = Validation::<&str, ()>::invalid_many(Vec::new());
    /// assert_eq!(empty, Err(EmptyErrorsError));
    /// ```
    pub fn invalid_many<I>(errors: I) -> Result<Self, EmptyErrorsError>
    where
        I: IntoIterator<Item = E>,
    {
        ErrorList::try_from_vec(errors.into_iter().collect()).map(Self::Invalid)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is `Valid`.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns `true` if this is `Invalid`.
    #[inline]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Borrows the accumulated errors, if any.
    #[inline]
    pub const fn errors(&self) -> Option<&ErrorList<E>> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with [`UnwrapOnErrorError`] carrying every error if this is
    /// `Invalid`.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(error) => {
                misuse_event!(warn, "Validation::unwrap", "unwrap called on an invalid value");
                panic!("{error}")
            }
        }
    }

    /// Returns the success value, or all errors wrapped in
    /// [`UnwrapOnErrorError`].
    ///
    /// # Errors
    ///
    /// Returns [`UnwrapOnErrorError`] when called on `Invalid`.
    #[inline]
    pub fn try_unwrap(self) -> Result<T, UnwrapOnErrorError<ErrorList<E>>> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(errors) => Err(UnwrapOnErrorError::new(errors)),
        }
    }

    /// Returns the accumulated errors.
    ///
    /// # Panics
    ///
    /// Panics with [`UnwrapErrorsOnSuccessError`] if this is `Valid`.
    #[inline]
    #[track_caller]
    pub fn unwrap_errors(self) -> ErrorList<E> {
        match self.try_unwrap_errors() {
            Ok(errors) => errors,
            Err(error) => {
                misuse_event!(
                    warn,
                    "Validation::unwrap_errors",
                    "unwrap_errors called on a valid value"
                );
                panic!("{error}")
            }
        }
    }

    /// Returns the accumulated errors, or [`UnwrapErrorsOnSuccessError`].
    ///
    /// # Errors
    ///
    /// Returns [`UnwrapErrorsOnSuccessError`] when called on `Valid`.
    #[inline]
    pub fn try_unwrap_errors(self) -> Result<ErrorList<E>, UnwrapErrorsOnSuccessError> {
        match self {
            Self::Valid(_) => Err(UnwrapErrorsOnSuccessError),
            Self::Invalid(errors) => Ok(errors),
        }
    }

    /// Returns the success value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Valid(value) => value,
            Self::Invalid(_) => default,
        }
    }

    /// Returns the success value or computes one from the errors.
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce(ErrorList<E>) -> T,
    {
        match self {
            Self::Valid(value) => value,
            Self::Invalid(errors) => function(errors),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Transforms the success value.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Validation<E, U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Valid(value) => Validation::Valid(function(value)),
            Self::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    /// Transforms each accumulated error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::control::Validation;
    ///
    /// let failed = Validation::<&str, i32>::invalid_many(["a", "bb"]).unwrap();
    /// let lengths = failed.map_errors(str::len);
    /// assert_eq!(lengths.unwrap_errors().into_vec(), vec![1, 2]);
    /// ```
    #[inline]
    pub fn map_errors<F, G>(self, function: G) -> Validation<F, T>
    where
        G: FnMut(E) -> F,
    {
        match self {
            Self::Valid(value) => Validation::Valid(value),
            Self::Invalid(errors) => Validation::Invalid(errors.map(function)),
        }
    }

    // =========================================================================
    // Applicative Operations (accumulating)
    // =========================================================================

    /// Applies a wrapped function, accumulating errors from both sides.
    ///
    /// Two `Invalid` operands produce an `Invalid` holding the errors of
    /// `self` followed by the errors of `function`. A `Valid` operand
    /// contributes no errors.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::control::Validation;
    ///
    /// let value: Validation<&str, i32> = Validation::invalid("bad value");
    /// let function: Validation<&str, fn(i32) -> i32> = Validation::invalid("bad function");
    /// assert_eq!(
    ///     value.ap(function).unwrap_errors().into_vec(),
    ///     vec!["bad value", "bad function"]
    /// );
    ///
    /// let add_one: Validation<&str, fn(i32) -> i32> = Validation::valid(|x| x + 1);
    /// assert_eq!(Validation::valid(1).ap(add_one), Validation::valid(2));
    /// ```
    pub fn ap<U, F>(self, function: Validation<E, F>) -> Validation<E, U>
    where
        F: FnOnce(T) -> U,
    {
        match (self, function) {
            (Self::Valid(value), Validation::Valid(function)) => Validation::Valid(function(value)),
            (Self::Invalid(errors), Validation::Valid(_))
            | (Self::Valid(_), Validation::Invalid(errors)) => Validation::Invalid(errors),
            (Self::Invalid(left), Validation::Invalid(right)) => {
                Validation::Invalid(left.append(right))
            }
        }
    }

    /// Pairs two validations, accumulating errors from both.
    #[inline]
    pub fn zip<U>(self, other: Validation<E, U>) -> Validation<E, (T, U)> {
        self.map2(other, |left, right| (left, right))
    }

    /// Combines two validations with `function`, accumulating errors from both.
    ///
    /// `function` is only called when both are `Valid`.
    pub fn map2<U, V, F>(self, other: Validation<E, U>, function: F) -> Validation<E, V>
    where
        F: FnOnce(T, U) -> V,
    {
        match (self, other) {
            (Self::Valid(left), Validation::Valid(right)) => {
                Validation::Valid(function(left, right))
            }
            (Self::Invalid(errors), Validation::Valid(_))
            | (Self::Valid(_), Validation::Invalid(errors)) => Validation::Invalid(errors),
            (Self::Invalid(left), Validation::Invalid(right)) => {
                Validation::Invalid(left.append(right))
            }
        }
    }

    // =========================================================================
    // Monadic Operations (short-circuiting)
    // =========================================================================

    /// Chains a dependent validation. `Invalid` propagates unchanged and
    /// `function` is not called.
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Validation<E, U>
    where
        F: FnOnce(T) -> Validation<E, U>,
    {
        match self {
            Self::Valid(value) => function(value),
            Self::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    /// Alias for [`Validation::flat_map`].
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Validation<E, U>
    where
        F: FnOnce(T) -> Validation<E, U>,
    {
        self.flat_map(function)
    }

    /// Alias for [`Validation::flat_map`].
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Validation<E, U>
    where
        F: FnOnce(T) -> Validation<E, U>,
    {
        self.flat_map(function)
    }

    // =========================================================================
    // Fold and Conversions
    // =========================================================================

    /// Collapses both cases into one result, invoking exactly one function.
    #[inline]
    pub fn fold<U, F, G>(self, on_invalid: F, on_valid: G) -> U
    where
        F: FnOnce(ErrorList<E>) -> U,
        G: FnOnce(T) -> U,
    {
        match self {
            Self::Valid(value) => on_valid(value),
            Self::Invalid(errors) => on_invalid(errors),
        }
    }

    /// Converts to a `Result`, keeping only the FIRST error.
    ///
    /// This conversion is lossy. Use [`Validation::into_result`] to keep
    /// every error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::control::Validation;
    ///
    /// let failed = Validation::<&str, i32>::invalid_many(["first", "second"]).unwrap();
    /// assert_eq!(failed.to_result(), Err("first"));
    /// ```
    #[inline]
    pub fn to_result(self) -> Result<T, E> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(errors) => Err(errors.into_first()),
        }
    }

    /// Converts to an [`Either`], keeping only the FIRST error.
    #[inline]
    pub fn to_either(self) -> Either<E, T> {
        self.to_result().into()
    }

    /// Converts to a `Result` carrying every error.
    #[inline]
    pub fn into_result(self) -> Result<T, ErrorList<E>> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(errors) => Err(errors),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<E, T> From<Result<T, E>> for Validation<E, T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(error) => Self::invalid(error),
        }
    }
}

/// Collects values if every element is `Valid`; otherwise accumulates the
/// errors of every `Invalid` element in order.
///
/// # Examples
///
/// ```rust
/// use monadix::control::Validation;
///
/// let checks = vec![
///     Validation::invalid("first"),
///     Validation::valid(2),
///     Validation::invalid("second"),
/// ];
/// let collected: Validation<&str, Vec<i32>> = checks.into_iter().collect();
/// assert_eq!(collected.unwrap_errors().into_vec(), vec!["first", "second"]);
/// ```
impl<E, T, V> FromIterator<Validation<E, T>> for Validation<E, V>
where
    V: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Validation<E, T>>>(iterator: I) -> Self {
        let mut values = Vec::new();
        let mut accumulated: Option<ErrorList<E>> = None;

        for validation in iterator {
            match validation {
                Validation::Valid(value) => {
                    if accumulated.is_none() {
                        values.push(value);
                    }
                }
                Validation::Invalid(errors) => {
                    accumulated = Some(match accumulated {
                        Some(previous) => previous.append(errors),
                        None => errors,
                    });
                }
            }
        }

        accumulated.map_or_else(
            || Self::Valid(values.into_iter().collect()),
            Self::Invalid,
        )
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<E, T> TypeConstructor for Validation<E, T> {
    type Inner = T;
    type WithType<B> = Validation<E, B>;
}

impl<E, T> Mappable for Validation<E, T> {
    #[inline]
    fn map<B, F>(self, function: F) -> Validation<E, B>
    where
        F: FnMut(T) -> B,
    {
        Self::map(self, function)
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<E: fmt::Display, T: fmt::Display> fmt::Display for Validation<E, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid(value) => write!(formatter, "Valid({value})"),
            Self::Invalid(errors) => write!(formatter, "Invalid({errors})"),
        }
    }
}

static_assertions::assert_impl_all!(Validation<String, Vec<u8>>: Send, Sync);
static_assertions::assert_impl_all!(ErrorList<String>: Send, Sync);
