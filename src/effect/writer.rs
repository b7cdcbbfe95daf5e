//! Writer - a value paired with an accumulated log.
//!
//! A `Writer<L, T>` holds a value of type `T` and a log of type `L`. Chaining
//! with [`Writer::flat_map`] runs the next step on the value and merges the
//! two logs, left log first.
//!
//! # Merge Policy
//!
//! The log type decides how logs merge: `L` must implement [`Combinable`],
//! and every writer over the same `L` merges the same way. The provided
//! implementations concatenate sequences and strings and add numbers. To
//! merge differently, wrap the log in a newtype such as
//! [`Product`](crate::typeclass::Product) or implement `Combinable` for a
//! custom log type.
//!
//! # Laws
//!
//! - Left Identity: `Writer::pure(a).flat_map(f) == f(a)`
//! - Right Identity: `m.flat_map(Writer::pure) == m`
//! - Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//! - Tell: `Writer::tell_log(a).then(Writer::tell_log(b)) == Writer::tell_log(a.combine(b))`
//!
//! # Examples
//!
//! ```rust
//! use monadix::effect::{list_writer, Writer};
//!
//! fn log(message: &str) -> Writer<Vec<String>, ()> {
//!     Writer::tell_log(vec![message.to_string()])
//! }
//!
//! let computation = log("step 1")
//!     .then(log("step 2"))
//!     .then(list_writer(vec!["step 3".to_string()], 42));
//!
//! let (logs, result) = computation.into_parts();
//! assert_eq!(result, 42);
//! assert_eq!(logs, vec!["step 1", "step 2", "step 3"]);
//! ```

use std::ops::Add;

use crate::typeclass::{Combinable, Mappable, TypeConstructor};

/// A value of type `T` paired with a log of type `L`.
///
/// # Examples
///
/// ```rust
/// use monadix::effect::Writer;
///
/// let writer = Writer::new(vec![1, 2], "done");
/// let chained = writer.flat_map(|value| Writer::new(vec![3, 4], value.len()));
/// assert_eq!(chained.tell(), (vec![1, 2, 3, 4], 4));
/// ```
///
/// A multiplicative log:
///
/// ```rust
/// use monadix::effect::Writer;
/// use monadix::typeclass::Product;
///
/// let writer = Writer::new(Product::new(3), ()).then(Writer::new(Product::new(4), "done"));
/// assert_eq!(writer.into_parts(), (Product::new(12), "done"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Writer<L: Combinable, T> {
    log: L,
    value: T,
}

impl<L: Combinable, T> Writer<L, T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Pairs a log with a value.
    #[inline]
    pub const fn new(log: L, value: T) -> Self {
        Self { log, value }
    }

    /// Wraps a value with the identity log.
    #[inline]
    pub fn pure(value: T) -> Self {
        Self::new(L::identity(), value)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns copies of the log and the value.
    #[inline]
    pub fn tell(&self) -> (L, T)
    where
        L: Clone,
        T: Clone,
    {
        (self.log.clone(), self.value.clone())
    }

    /// Consumes the writer and returns the log and the value.
    #[inline]
    pub fn into_parts(self) -> (L, T) {
        (self.log, self.value)
    }

    /// Borrows the log.
    #[inline]
    pub const fn log(&self) -> &L {
        &self.log
    }

    /// Borrows the value.
    #[inline]
    pub const fn value(&self) -> &T {
        &self.value
    }

    // =========================================================================
    // Mapping and Chaining
    // =========================================================================

    /// Transforms the value. The log passes through unchanged.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Writer<L, U>
    where
        F: FnOnce(T) -> U,
    {
        Writer::new(self.log, function(self.value))
    }

    /// Runs the next step on the value and merges the logs, this log first.
    ///
    /// `function` is called exactly once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::effect::Writer;
    ///
    /// let writer = Writer::new(String::from("a"), 1)
    ///     .flat_map(|n| Writer::new(String::from("b"), n + 1));
    /// assert_eq!(writer.into_parts(), (String::from("ab"), 2));
    /// ```
    pub fn flat_map<U, F>(self, function: F) -> Writer<L, U>
    where
        F: FnOnce(T) -> Writer<L, U>,
    {
        let next = function(self.value);
        Writer::new(self.log.combine(next.log), next.value)
    }

    /// Alias for [`Writer::flat_map`].
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Writer<L, U>
    where
        F: FnOnce(T) -> Writer<L, U>,
    {
        self.flat_map(function)
    }

    /// Alias for [`Writer::flat_map`].
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Writer<L, U>
    where
        F: FnOnce(T) -> Writer<L, U>,
    {
        self.flat_map(function)
    }

    /// Sequences `next` after this writer, discarding this value.
    #[inline]
    pub fn then<U>(self, next: Writer<L, U>) -> Writer<L, U> {
        self.flat_map(|_| next)
    }

    /// Combines two values with `function` and merges both logs.
    pub fn map2<U, V, F>(self, other: Writer<L, U>, function: F) -> Writer<L, V>
    where
        F: FnOnce(T, U) -> V,
    {
        Writer::new(self.log.combine(other.log), function(self.value, other.value))
    }

    /// Pairs two values and merges both logs.
    #[inline]
    pub fn product<U>(self, other: Writer<L, U>) -> Writer<L, (T, U)> {
        self.map2(other, |left, right| (left, right))
    }

    // =========================================================================
    // Log Operations
    // =========================================================================

    /// Exposes the log so far next to the value. The log is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::effect::Writer;
    ///
    /// let listened = Writer::new(vec!["log"], 42).listen();
    /// assert_eq!(listened.into_parts(), (vec!["log"], (vec!["log"], 42)));
    /// ```
    pub fn listen(self) -> Writer<L, (L, T)>
    where
        L: Clone,
    {
        Writer::new(self.log.clone(), (self.log, self.value))
    }

    /// Replaces the value with the log so far. The log is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::effect::Writer;
    ///
    /// let passed = Writer::new(String::from("log"), 42).pass();
    /// assert_eq!(passed.into_parts(), (String::from("log"), String::from("log")));
    /// ```
    pub fn pass(self) -> Writer<L, L>
    where
        L: Clone,
    {
        Writer::new(self.log.clone(), self.log)
    }

    /// Transforms the log. The value is unchanged.
    #[must_use]
    pub fn censor<F>(self, function: F) -> Self
    where
        F: FnOnce(L) -> L,
    {
        Self::new(function(self.log), self.value)
    }
}

impl<L: Combinable> Writer<L, ()> {
    /// Creates a log-only step.
    #[inline]
    pub const fn tell_log(log: L) -> Self {
        Self::new(log, ())
    }
}

// =============================================================================
// Convenience Constructors
// =============================================================================

/// Creates a writer whose log is a list, merged by concatenation.
///
/// # Examples
///
/// ```rust
/// use monadix::effect::list_writer;
///
/// let writer = list_writer(vec![1, 2], "a").then(list_writer(vec![3, 4], "b"));
/// assert_eq!(writer.into_parts(), (vec![1, 2, 3, 4], "b"));
/// ```
#[inline]
pub const fn list_writer<A, T>(log: Vec<A>, value: T) -> Writer<Vec<A>, T> {
    Writer::new(log, value)
}

/// Creates a writer whose log is a string, merged by concatenation.
///
/// # Examples
///
/// ```rust
/// use monadix::effect::str_writer;
///
/// let writer = str_writer("Hello, ", ()).then(str_writer("World!", 1));
/// assert_eq!(writer.log(), "Hello, World!");
/// ```
#[inline]
pub fn str_writer<T>(log: impl Into<String>, value: T) -> Writer<String, T> {
    Writer::new(log.into(), value)
}

/// Creates a writer whose log is a number, merged by addition.
///
/// The primitive integer and float types merge by `+` through their
/// [`Combinable`] implementations.
///
/// # Panics
///
/// Chaining writers whose integer logs overflow panics in debug builds, as
/// `+` does. Use a wider log type, or wrap the log in a newtype whose
/// `Combinable` implementation saturates or wraps.
///
/// # Examples
///
/// ```rust
/// use monadix::effect::sum_writer;
///
/// let writer = sum_writer(2, "a").then(sum_writer(3, "b"));
/// assert_eq!(writer.into_parts(), (5, "b"));
///
/// let writer = sum_writer(1.5_f64, ()).then(sum_writer(2.0, ()));
/// assert!((writer.log() - 3.5).abs() < f64::EPSILON);
/// ```
#[inline]
pub const fn sum_writer<N, T>(log: N, value: T) -> Writer<N, T>
where
    N: Combinable + Add<Output = N>,
{
    Writer::new(log, value)
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<L: Combinable, T> TypeConstructor for Writer<L, T> {
    type Inner = T;
    type WithType<B> = Writer<L, B>;
}

impl<L: Combinable, T> Mappable for Writer<L, T> {
    #[inline]
    fn map<B, F>(self, function: F) -> Writer<L, B>
    where
        F: FnMut(T) -> B,
    {
        Self::map(self, function)
    }
}

static_assertions::assert_impl_all!(Writer<Vec<String>, String>: Send, Sync);
