//! Numeric wrapper types selecting a combine policy.
//!
//! The same number can be merged by addition or by multiplication. Plain
//! numbers use addition; these newtypes make the choice explicit so that a
//! [`Writer`](crate::effect::Writer) log can accumulate, for instance, a
//! running product instead of a running sum.
//!
//! - [`Sum`]: addition (identity: 0)
//! - [`Product`]: multiplication (identity: 1)

use std::fmt;

// =============================================================================
// Sum Wrapper
// =============================================================================

/// A newtype wrapper that combines by addition.
///
/// # Examples
///
/// ```rust
/// use monadix::typeclass::{Combinable, Sum};
///
/// let total = Sum::new(3i32).combine(Sum::new(5));
/// assert_eq!(total.into_inner(), 8);
/// assert_eq!(Sum::<i32>::identity(), Sum::new(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Sum<A>(pub A);

impl<A> Sum<A> {
    /// Creates a new `Sum` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Sum` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Sum<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

impl<A: fmt::Display> fmt::Display for Sum<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Sum({})", self.0)
    }
}

// =============================================================================
// Product Wrapper
// =============================================================================

/// A newtype wrapper that combines by multiplication.
///
/// # Examples
///
/// ```rust
/// use monadix::typeclass::{Combinable, Product};
///
/// let scale = Product::new(3i32).combine(Product::new(4));
/// assert_eq!(scale.into_inner(), 12);
/// assert_eq!(Product::<i32>::identity(), Product::new(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Product<A>(pub A);

impl<A> Product<A> {
    /// Creates a new `Product` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Product` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Product<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

impl<A: fmt::Display> fmt::Display for Product<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Product({})", self.0)
    }
}
