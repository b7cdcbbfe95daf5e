//! # monadix
//!
//! Small, composable algebraic value types for Rust.
//!
//! ## Overview
//!
//! - **Type Classes**: [`Mappable`](typeclass::Mappable) and
//!   [`Combinable`](typeclass::Combinable), the merge capability `Writer` logs rely on
//! - **Control Types**: [`Maybe`](control::Maybe), [`Either`](control::Either),
//!   [`Validation`](control::Validation)
//! - **Effect Types**: [`Writer`](effect::Writer) and [`State`](effect::State)
//! - **Errors**: misuse errors raised by the `unwrap*` family, see [`error`]
//!
//! All values are immutable. Transformations return new values and never
//! catch panics raised by the closures passed to them.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Capability traits and numeric wrappers
//! - `control`: Maybe, Either, Validation
//! - `effect`: Writer, State
//! - `serde`: Serialization for the control types and wrappers
//! - `tracing`: Emit `tracing` events when a wrapper is unwrapped on the wrong variant
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use monadix::prelude::*;
//!
//! let age = Validation::<String, u32>::valid(30);
//! let name = Validation::<String, &str>::invalid("name is empty".to_string());
//! let email = Validation::<String, &str>::invalid("email is missing".to_string());
//!
//! let user = age.zip(name).zip(email);
//! assert_eq!(
//!     user.unwrap_errors().into_vec(),
//!     vec!["name is empty".to_string(), "email is missing".to_string()]
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Emits a `tracing` event on misuse paths when the `tracing` feature is on.
#[allow(unused_macros)]
macro_rules! misuse_event {
    ($level:ident, $operation:literal, $message:literal) => {
        #[cfg(feature = "tracing")]
        tracing::$level!(target: "monadix", operation = $operation, $message);
    };
}

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use monadix::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    pub use crate::error::*;
}

pub mod error;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;
