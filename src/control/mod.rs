//! Value containers for optional, fallible and validated results.
//!
//! - [`Maybe`]: an optional value that keeps `Some(None)` distinct from `Nothing`
//! - [`Either`]: a success (`Right`) or a failure (`Left`), short-circuiting
//! - [`Validation`]: a success or a non-empty [`ErrorList`], accumulating
//!   independent failures
//!
//! Each container implements [`Mappable`](crate::typeclass::Mappable), and
//! each unwrap on the wrong variant has a non-panicking `try_*` twin.
//!
//! # Examples
//!
//! ## Short-circuit versus accumulation
//!
//! ```rust
//! use monadix::control::{Either, Validation};
//!
//! let first: Either<&str, i32> = Either::error("first");
//! let second: Either<&str, i32> = Either::error("second");
//! assert_eq!(first.flat_map(|_| second), Either::error("first"));
//!
//! let first: Validation<&str, i32> = Validation::invalid("first");
//! let second: Validation<&str, i32> = Validation::invalid("second");
//! assert_eq!(
//!     first.zip(second).unwrap_errors().into_vec(),
//!     vec!["first", "second"]
//! );
//! ```
//!
//! ## Collecting optional values
//!
//! ```rust
//! use monadix::control::Maybe;
//! use monadix::maybe_zip;
//!
//! let host = Maybe::some("localhost");
//! let port = Maybe::from_value("8080".parse::<u16>().ok());
//! assert_eq!(maybe_zip!(host, port), Maybe::some(("localhost", 8080)));
//! ```

mod either;
mod maybe;
mod validation;

pub use either::Either;
pub use maybe::Maybe;
pub use validation::{ErrorList, Validation};
