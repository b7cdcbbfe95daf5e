//! Capability traits shared by the wrapper types.
//!
//! - [`Mappable`]: mapping over container values
//! - [`Combinable`]: associative merge with an identity element
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types to name "the same
//! container holding another type", which `Mappable::map` returns.
//!
//! ## Combine Policies
//!
//! A log type carries its merge policy through its `Combinable` implementation.
//! [`Sum`] and [`Product`] pick addition or multiplication for numbers.
//!
//! # Examples
//!
//! ```rust
//! use monadix::typeclass::{Combinable, Mappable, Sum};
//!
//! assert_eq!(String::from("log: ").combine(String::from("ok")), "log: ok");
//! assert_eq!(Sum::combine_all(vec![Sum::new(1), Sum::new(2), Sum::new(3)]), Sum::new(6));
//!
//! let lengths: Vec<usize> = vec!["a", "bcd"].map(str::len);
//! assert_eq!(lengths, vec![1, 3]);
//! ```

mod combinable;
mod higher;
mod mappable;
mod wrappers;

pub use combinable::Combinable;
pub use higher::TypeConstructor;
pub use mappable::Mappable;
pub use wrappers::{Product, Sum};
