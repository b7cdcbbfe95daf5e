//! Mappable type class - mapping over container values.
//!
//! [`Mappable`] is the single capability shared by every container in this
//! crate: apply a function to the value(s) inside while preserving the
//! container's shape. Generic code written against `Mappable` works for
//! [`Maybe`](crate::control::Maybe), [`Either`](crate::control::Either),
//! [`Validation`](crate::control::Validation), [`Writer`](crate::effect::Writer)
//! and the std `Option`, `Result` and `Vec`.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.map(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.map(f).map(g) == fa.map(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadix::typeclass::Mappable;
//!
//! fn describe<M>(container: M) -> M::WithType<String>
//! where
//!     M: Mappable<Inner = i32>,
//! {
//!     container.map(|n| format!("#{n}"))
//! }
//!
//! assert_eq!(describe(Some(5)), Some("#5".to_string()));
//! assert_eq!(describe(vec![1, 2]), vec!["#1".to_string(), "#2".to_string()]);
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their contents.
///
/// The function is `FnMut` so that multi-element containers such as `Vec`
/// can apply it to every element. Zero-or-one element containers call it at
/// most once.
///
/// # Examples
///
/// ```rust
/// use monadix::typeclass::Mappable;
///
/// let x: Result<i32, String> = Ok(5);
/// let y: Result<String, String> = Mappable::map(x, |n| n.to_string());
/// assert_eq!(y, Ok("5".to_string()));
/// ```
pub trait Mappable: TypeConstructor {
    /// Applies a function to the value(s) inside the container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::typeclass::Mappable;
    ///
    /// let doubled: Vec<i32> = vec![1, 2, 3].map(|n| n * 2);
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// ```
    fn map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Replaces the value(s) inside the container with a constant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::typeclass::Mappable;
    ///
    /// let x: Option<i32> = Some(5);
    /// assert_eq!(x.replace("replaced"), Some("replaced"));
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone,
    {
        Mappable::map(self, move |_| value.clone())
    }

    /// Discards the value(s) inside the container, keeping its shape.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        Mappable::map(self, |_| ())
    }
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl<A> Mappable for Option<A> {
    #[inline]
    fn map<B, F>(self, function: F) -> Option<B>
    where
        F: FnMut(A) -> B,
    {
        Self::map(self, function)
    }
}

impl<T, E> Mappable for Result<T, E> {
    #[inline]
    fn map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnMut(T) -> B,
    {
        Self::map(self, function)
    }
}

impl<T> Mappable for Vec<T> {
    #[inline]
    fn map<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }
}
