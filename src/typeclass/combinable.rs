//! Combinable type class - associative merge with an identity element.
//!
//! A type is combinable when it has:
//!
//! 1. An associative binary operation `combine: (T, T) -> T`
//! 2. An identity element `identity: T` such that for all `a`:
//!    - `identity.combine(a) == a` (left identity)
//!    - `a.combine(identity) == a` (right identity)
//!
//! This is the capability [`Writer`](crate::effect::Writer) uses to merge
//! logs. The implementations provided here are the conventional defaults:
//! concatenation for sequences and strings, addition for numbers. A custom
//! log type implements `Combinable` itself to change the merge policy, and
//! the newtypes [`Sum`] and [`Product`] pick a policy for numbers explicitly.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! T::identity().combine(a) == a
//! a.combine(T::identity()) == a
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadix::typeclass::{Combinable, Product};
//!
//! assert_eq!(String::from("Hello, ").combine(String::from("World!")), "Hello, World!");
//! assert_eq!(vec![1, 2].combine(vec![3, 4]), vec![1, 2, 3, 4]);
//! assert_eq!(3i32.combine(4), 7);
//! assert_eq!(Product::new(3i32).combine(Product::new(4)), Product::new(12));
//! ```

use std::ops::{Add, Mul};

use super::wrappers::{Product, Sum};

/// A type class for types with an associative merge and a neutral element.
///
/// # Examples
///
/// A multiplicative log type:
///
/// ```rust
/// use monadix::typeclass::Combinable;
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Scale(u32);
///
/// impl Combinable for Scale {
///     fn combine(self, other: Self) -> Self {
///         Self(self.0 * other.0)
///     }
///
///     fn identity() -> Self {
///         Self(1)
///     }
/// }
///
/// assert_eq!(Scale::combine_all([Scale(2), Scale(3), Scale(4)]), Scale(24));
/// ```
pub trait Combinable: Sized {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Returns the identity element.
    fn identity() -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::typeclass::Combinable;
    ///
    /// let a = String::from("Hello, ");
    /// let b = String::from("World!");
    /// assert_eq!(a.combine_ref(&b), "Hello, World!");
    /// assert_eq!(a, "Hello, ");
    /// ```
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Combines all elements, starting from the identity element.
    ///
    /// An empty iterator yields [`Combinable::identity`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::typeclass::Combinable;
    ///
    /// assert_eq!(String::combine_all(vec!["a".to_string(), "b".to_string()]), "ab");
    /// assert_eq!(String::combine_all(Vec::<String>::new()), "");
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        iterator
            .into_iter()
            .fold(Self::identity(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns whether this value is the identity element.
    fn is_identity(&self) -> bool
    where
        Self: PartialEq,
    {
        *self == Self::identity()
    }
}

// =============================================================================
// Sequence Implementations (concatenation)
// =============================================================================

impl Combinable for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }

    fn identity() -> Self {
        Self::new()
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.push_str(self);
        result.push_str(other);
        result
    }
}

impl<T> Combinable for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }

    fn identity() -> Self {
        Self::new()
    }
}

/// The unit type is the trivial combinable, used by logs that record nothing.
impl Combinable for () {
    fn combine(self, _other: Self) -> Self {}

    fn identity() -> Self {}
}

// =============================================================================
// Option Implementation
// =============================================================================

/// `None` is the identity; two `Some`s combine their contents.
impl<T: Combinable> Combinable for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }

    fn identity() -> Self {
        None
    }
}

// =============================================================================
// Tuple Implementation
// =============================================================================

impl<A: Combinable, B: Combinable> Combinable for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }

    fn identity() -> Self {
        (A::identity(), B::identity())
    }
}

// =============================================================================
// Numeric Implementations (addition)
// =============================================================================

macro_rules! additive_combinable {
    ($($numeric:ty => $zero:expr),* $(,)?) => {
        $(
            /// Combines under `+` with zero as the identity.
            ///
            /// # Panics
            ///
            /// Integer overflow panics in debug builds, as `+` does.
            impl Combinable for $numeric {
                #[inline]
                fn combine(self, other: Self) -> Self {
                    self + other
                }

                #[inline]
                fn identity() -> Self {
                    $zero
                }
            }
        )*
    };
}

additive_combinable!(
    i8 => 0, i16 => 0, i32 => 0, i64 => 0, i128 => 0, isize => 0,
    u8 => 0, u16 => 0, u32 => 0, u64 => 0, u128 => 0, usize => 0,
    f32 => 0.0, f64 => 0.0,
);

// =============================================================================
// Numeric Wrapper Implementations
// =============================================================================

/// Sum combines under addition with `A::default()` as the identity.
///
/// # Panics
///
/// Integer overflow panics in debug builds, as `+` does.
impl<A: Add<Output = A> + Default> Combinable for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }

    fn identity() -> Self {
        Self(A::default())
    }
}

macro_rules! multiplicative_combinable {
    ($($numeric:ty => $one:expr),* $(,)?) => {
        $(
            /// Product combines under multiplication with one as the identity.
            ///
            /// Integer overflow panics in debug builds, as `*` does.
            impl Combinable for Product<$numeric> {
                #[inline]
                fn combine(self, other: Self) -> Self {
                    Self(Mul::mul(self.0, other.0))
                }

                #[inline]
                fn identity() -> Self {
                    Self($one)
                }
            }
        )*
    };
}

multiplicative_combinable!(
    i8 => 1, i16 => 1, i32 => 1, i64 => 1, i128 => 1, isize => 1,
    u8 => 1, u16 => 1, u32 => 1, u64 => 1, u128 => 1, usize => 1,
    f32 => 1.0, f64 => 1.0,
);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn string_combine_concatenates() {
        let left = String::from("Hello, ");
        let right = String::from("World!");
        assert_eq!(left.combine(right), "Hello, World!");
    }

    #[rstest]
    fn string_combine_ref_preserves_originals() {
        let left = String::from("Hello, ");
        let right = String::from("World!");
        let result = left.combine_ref(&right);
        assert_eq!(result, "Hello, World!");
        assert_eq!(left, "Hello, ");
        assert_eq!(right, "World!");
    }

    #[rstest]
    fn vec_combine_concatenates_in_order() {
        assert_eq!(vec![1, 2].combine(vec![3, 4]), vec![1, 2, 3, 4]);
    }

    #[rstest]
    #[case(Some(vec![1]), Some(vec![2]), Some(vec![1, 2]))]
    #[case(Some(vec![1]), None, Some(vec![1]))]
    #[case(None, Some(vec![2]), Some(vec![2]))]
    #[case(None, None, None)]
    fn option_combine_cases(
        #[case] left: Option<Vec<i32>>,
        #[case] right: Option<Vec<i32>>,
        #[case] expected: Option<Vec<i32>>,
    ) {
        assert_eq!(left.combine(right), expected);
    }

    #[rstest]
    fn tuple_combines_componentwise() {
        let left = (String::from("a"), 1);
        let right = (String::from("b"), 2);
        assert_eq!(left.combine(right), (String::from("ab"), 3));
        assert_eq!(<(String, i32)>::identity(), (String::new(), 0));
    }

    #[rstest]
    #[case(3, 4, 7)]
    #[case(0, 5, 5)]
    #[case(-2, 2, 0)]
    fn integers_combine_by_addition(#[case] left: i32, #[case] right: i32, #[case] expected: i32) {
        assert_eq!(left.combine(right), expected);
    }

    #[rstest]
    fn floats_combine_by_addition() {
        assert!((2.5f64.combine(1.5) - 4.0).abs() < f64::EPSILON);
        assert!(f64::identity().abs() < f64::EPSILON);
    }

    #[rstest]
    fn sum_and_product_wrappers() {
        assert_eq!(Sum::new(3i32).combine(Sum::new(4)), Sum::new(7));
        assert_eq!(Sum::<i64>::identity(), Sum::new(0));
        assert_eq!(Product::new(3i32).combine(Product::new(4)), Product::new(12));
        assert_eq!(Product::<u8>::identity(), Product::new(1));
    }

    #[rstest]
    fn combine_all_starts_from_identity() {
        assert_eq!(i32::combine_all(vec![1, 2, 3]), 6);
        assert_eq!(Product::combine_all(vec![Product::new(2i64), Product::new(5)]), Product::new(10));
        assert_eq!(Vec::<i32>::combine_all(Vec::new()), Vec::<i32>::new());
    }

    #[rstest]
    fn is_identity_detects_neutral_element() {
        assert!(String::new().is_identity());
        assert!(!String::from("x").is_identity());
        assert!(0u32.is_identity());
    }
}
