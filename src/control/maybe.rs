//! Maybe type - an optional value with an explicit "defined" tag.
//!
//! `Maybe<T>` is either `Some(value)` or `Nothing`. Unlike code that uses a
//! sentinel for "no value", `Some` can hold anything, including an absent
//! value of an inner optional type: `Maybe::<Option<i32>>::some_none()` is a
//! defined value that happens to be `None`, and it is not equal to
//! `Maybe::nothing()`. Only [`Maybe::from_value`] collapses `None` into
//! `Nothing`.
//!
//! # Examples
//!
//! ```rust
//! use monadix::control::Maybe;
//!
//! fn safe_divide(numerator: i32, denominator: i32) -> Maybe<i32> {
//!     if denominator == 0 {
//!         Maybe::nothing()
//!     } else {
//!         Maybe::some(numerator / denominator)
//!     }
//! }
//!
//! assert_eq!(safe_divide(10, 2).map(|x| x + 1), Maybe::some(6));
//! assert_eq!(safe_divide(1, 0).flat_map(|x| safe_divide(x, 2)), Maybe::nothing());
//!
//! let sum = Maybe::lift2(|a: i32, b: i32| a + b, Maybe::some(1), Maybe::some(2));
//! assert_eq!(sum, Maybe::some(3));
//! ```

use std::fmt;

use crate::error::EmptyValueError;
use crate::typeclass::{Mappable, TypeConstructor};

/// An optional value: `Some(value)` or `Nothing`.
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
///
/// # Examples
///
/// ```rust
/// use monadix::control::Maybe;
///
/// let present = Maybe::some(5);
/// let absent: Maybe<i32> = Maybe::nothing();
///
/// assert!(present.is_some());
/// assert!(absent.is_nothing());
/// assert_eq!(absent.unwrap_or(0), 0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// A defined value.
    Some(T),
    /// No value.
    Nothing,
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value. Any `T` is accepted, including `Option::None`.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Returns the empty `Maybe`.
    #[inline]
    pub const fn nothing() -> Self {
        Self::Nothing
    }

    /// Converts an `Option`, mapping `None` to `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::control::Maybe;
    ///
    /// assert_eq!(Maybe::from_value(Some(0)), Maybe::some(0));
    /// assert_eq!(Maybe::<i32>::from_value(None), Maybe::nothing());
    /// ```
    #[inline]
    pub fn from_value(value: Option<T>) -> Self {
        value.map_or(Self::Nothing, Self::Some)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this holds a value (even one that is itself empty).
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is `Nothing`.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics with [`EmptyValueError`] if this is `Nothing`. Use
    /// [`Maybe::try_unwrap`] to get the error as a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::control::Maybe;
    ///
    /// assert_eq!(Maybe::some(42).unwrap(), 42);
    /// ```
    ///
    /// ```should_panic
    /// use monadix::control::Maybe;
    ///
    /// Maybe::<i32>::nothing().unwrap();
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(error) => {
                misuse_event!(warn, "Maybe::unwrap", "unwrap called on Nothing");
                panic!("{error}")
            }
        }
    }

    /// Returns the contained value, or [`EmptyValueError`] if this is `Nothing`.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyValueError`] when called on `Nothing`.
    #[inline]
    pub fn try_unwrap(self) -> Result<T, EmptyValueError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::Nothing => Err(EmptyValueError),
        }
    }

    /// Returns the contained value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::Nothing => default,
        }
    }

    /// Returns the contained value or the result of `supplier`.
    ///
    /// `supplier` is only invoked on `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::control::Maybe;
    ///
    /// let value = Maybe::some(42).unwrap_or_else(|| unreachable!());
    /// assert_eq!(value, 42);
    /// assert_eq!(Maybe::nothing().unwrap_or_else(|| 7), 7);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::Nothing => supplier(),
        }
    }

    /// Borrows the contained value.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Converts into a std `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::Nothing => None,
        }
    }

    // =========================================================================
    // Mapping and Chaining
    // =========================================================================

    /// Applies `function` to the contained value. `Nothing` propagates
    /// without calling it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::control::Maybe;
    ///
    /// assert_eq!(Maybe::some(5).map(|x| x * 2), Maybe::some(10));
    /// assert_eq!(Maybe::<i32>::nothing().map(|x| x * 2), Maybe::nothing());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Maybe::Some(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Chains a computation that itself may produce `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::control::Maybe;
    ///
    /// let halve = |x: i32| if x % 2 == 0 { Maybe::some(x / 2) } else { Maybe::nothing() };
    /// assert_eq!(Maybe::some(8).flat_map(halve).flat_map(halve), Maybe::some(2));
    /// assert_eq!(Maybe::some(6).flat_map(halve).flat_map(halve), Maybe::nothing());
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Alias for [`Maybe::flat_map`].
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        self.flat_map(function)
    }

    /// Alias for [`Maybe::flat_map`].
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        self.flat_map(function)
    }

    /// Applies a wrapped function to this value.
    ///
    /// `Some(v).ap(Some(f))` is `Some(f(v))`; if either side is `Nothing`
    /// the result is `Nothing` and `f` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::control::Maybe;
    ///
    /// let add_one = Maybe::some(|x: i32| x + 1);
    /// assert_eq!(Maybe::some(5).ap(add_one), Maybe::some(6));
    /// assert_eq!(Maybe::<i32>::nothing().ap(Maybe::some(|x: i32| x + 1)), Maybe::nothing());
    /// ```
    #[inline]
    pub fn ap<U, F>(self, function: Maybe<F>) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match (self, function) {
            (Self::Some(value), Maybe::Some(function)) => Maybe::Some(function(value)),
            _ => Maybe::Nothing,
        }
    }

    /// Applies a binary function across two `Maybe`s via curried [`Maybe::ap`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::control::Maybe;
    ///
    /// let add = |a: i32, b: i32| a + b;
    /// assert_eq!(Maybe::lift2(add, Maybe::some(1), Maybe::some(2)), Maybe::some(3));
    /// assert_eq!(Maybe::lift2(add, Maybe::some(1), Maybe::nothing()), Maybe::nothing());
    /// ```
    pub fn lift2<A, B, F>(function: F, first: Maybe<A>, second: Maybe<B>) -> Self
    where
        F: FnOnce(A, B) -> T,
    {
        second.ap(first.map(move |a| move |b| function(a, b)))
    }

    /// Applies a ternary function across three `Maybe`s via curried [`Maybe::ap`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::control::Maybe;
    ///
    /// let total = Maybe::lift3(
    ///     |a: i32, b: i32, c: i32| a + b + c,
    ///     Maybe::some(1),
    ///     Maybe::some(2),
    ///     Maybe::some(3),
    /// );
    /// assert_eq!(total, Maybe::some(6));
    /// ```
    pub fn lift3<A, B, C, F>(
        function: F,
        first: Maybe<A>,
        second: Maybe<B>,
        third: Maybe<C>,
    ) -> Self
    where
        F: FnOnce(A, B, C) -> T,
    {
        let curried = first.map(move |a| move |b| move |c| function(a, b, c));
        third.ap(second.ap(curried))
    }

    /// Pairs two values if both are present.
    #[inline]
    pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        match (self, other) {
            (Self::Some(left), Maybe::Some(right)) => Maybe::Some((left, right)),
            _ => Maybe::Nothing,
        }
    }

    /// Keeps the value only if `predicate` holds.
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) if predicate(&value) => Self::Some(value),
            _ => Self::Nothing,
        }
    }

    /// Returns `self` if it holds a value, otherwise `default`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::control::Maybe;
    ///
    /// assert_eq!(Maybe::some(5).or_else(Maybe::some(10)), Maybe::some(5));
    /// assert_eq!(Maybe::nothing().or_else(Maybe::some(10)), Maybe::some(10));
    /// ```
    #[inline]
    #[must_use]
    pub fn or_else(self, default: Self) -> Self {
        match self {
            Self::Some(_) => self,
            Self::Nothing => default,
        }
    }
}

impl<T> Maybe<Option<T>> {
    /// Returns a defined `Maybe` whose value is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::control::Maybe;
    ///
    /// let defined_none = Maybe::<Option<i32>>::some_none();
    /// assert!(defined_none.is_some());
    /// assert_ne!(defined_none, Maybe::nothing());
    /// assert_eq!(defined_none.unwrap(), None);
    /// ```
    #[inline]
    pub const fn some_none() -> Self {
        Self::Some(None)
    }
}

impl<T> Maybe<Vec<T>> {
    /// Collects every value in argument order if all are present.
    ///
    /// An empty input yields `Some(vec![])`. Iteration stops at the first
    /// `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::control::Maybe;
    ///
    /// assert_eq!(
    ///     Maybe::zip_all(vec![Maybe::some(1), Maybe::some(2), Maybe::some(3)]),
    ///     Maybe::some(vec![1, 2, 3])
    /// );
    /// assert_eq!(
    ///     Maybe::zip_all(vec![Maybe::some(1), Maybe::nothing(), Maybe::some(3)]),
    ///     Maybe::nothing()
    /// );
    /// assert_eq!(Maybe::<Vec<i32>>::zip_all(Vec::new()), Maybe::some(Vec::new()));
    /// ```
    pub fn zip_all<I>(maybes: I) -> Self
    where
        I: IntoIterator<Item = Maybe<T>>,
    {
        maybes.into_iter().collect()
    }
}

/// Collects values from a tuple of `Maybe` expressions.
///
/// Arguments are evaluated left to right; evaluation stops at the first
/// `Nothing`. With no arguments the result is `Maybe::some(())`.
///
/// The arguments expand in the caller's body, so `?`, `return` and `.await`
/// inside an argument act on the enclosing function.
///
/// # Examples
///
/// ```rust
/// use monadix::control::Maybe;
/// use monadix::maybe_zip;
///
/// assert_eq!(maybe_zip!(), Maybe::some(()));
/// assert_eq!(
///     maybe_zip!(Maybe::some(1), Maybe::some("two")),
///     Maybe::some((1, "two"))
/// );
/// assert_eq!(
///     maybe_zip!(Maybe::some(1), Maybe::<i32>::nothing(), Maybe::some(3)),
///     Maybe::nothing()
/// );
/// ```
#[macro_export]
macro_rules! maybe_zip {
    () => {
        $crate::control::Maybe::some(())
    };
    (@collect [$($bound:ident)*]) => {
        $crate::control::Maybe::some(($($bound,)*))
    };
    (@collect [$($bound:ident)*] $head:expr, $($rest:expr,)*) => {
        match $crate::control::Maybe::into_option($head) {
            ::core::option::Option::Some(value) => {
                $crate::maybe_zip!(@collect [$($bound)* value] $($rest,)*)
            }
            ::core::option::Option::None => $crate::control::Maybe::nothing(),
        }
    };
    ($($maybe:expr),+ $(,)?) => {
        $crate::maybe_zip!(@collect [] $($maybe,)+)
    };
}

// =============================================================================
// Conversions
// =============================================================================

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::Nothing
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Self::from_value(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

/// Collects into `Some` only if every element is `Some`.
impl<T, V> FromIterator<Maybe<T>> for Maybe<V>
where
    V: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Maybe<T>>>(iterator: I) -> Self {
        iterator
            .into_iter()
            .map(Maybe::into_option)
            .collect::<Option<V>>()
            .into()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}

impl<T> Mappable for Maybe<T> {
    #[inline]
    fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnMut(T) -> B,
    {
        Self::map(self, function)
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some({value})"),
            Self::Nothing => write!(formatter, "Nothing"),
        }
    }
}

static_assertions::assert_impl_all!(Maybe<String>: Send, Sync);
