//! Computations that carry a log or thread a state.
//!
//! - [`Writer`]: a value paired with a log merged through [`Combinable`]
//! - [`State`]: a pure transition `S -> (A, S)` run on demand
//!
//! `Writer` values are plain data and are `Send + Sync` when their log and
//! value are. `State` shares its transition through `Rc`, so it stays on the
//! thread that built it.
//!
//! [`Combinable`]: crate::typeclass::Combinable
//!
//! # Examples
//!
//! ```rust
//! use monadix::effect::{sum_writer, State};
//!
//! let cost = sum_writer(3, "fetch").flat_map(|step| sum_writer(4, step.len()));
//! assert_eq!(cost.into_parts(), (7, 5));
//!
//! let counter = State::<u32, ()>::modify(|n| n + 1).then(State::get());
//! assert_eq!(counter.run(41), (42, 42));
//! ```

mod state;
mod writer;

pub use state::State;
pub use writer::{Writer, list_writer, str_writer, sum_writer};
