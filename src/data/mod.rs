//! Algebraic data types: optional values and message-carrying results.
//!
//! This module provides the two core two-variant types of the library:
//!
//! - [`Maybe`]: an optional value (`Just` or `Nothing`) with a defensive
//!   construction check for types that can natively represent absence
//! - [`Outcome`]: a success-or-error value (`Ok` or `Error(message)`)
//!
//! Both types implement the [`Functor`](crate::typeclass::Functor),
//! [`Applicative`](crate::typeclass::Applicative), and
//! [`Monad`](crate::typeclass::Monad) type classes, and convert into one
//! another: an absent `Maybe` becomes an `Error` with a caller-supplied
//! message, and an `Error` becomes `Nothing` with its message discarded.
//!
//! # Examples
//!
//! ```rust
//! use funkit::data::{Maybe, Outcome};
//! use funkit::typeclass::Monad;
//!
//! fn positive(n: i32) -> Maybe<i32> {
//!     if n > 0 { Maybe::just(n) } else { Maybe::nothing() }
//! }
//!
//! let validated = Maybe::just(5).flat_map(positive);
//! assert_eq!(validated, Maybe::just(5));
//!
//! let reported = validated.into_outcome("value must be positive");
//! assert_eq!(reported, Outcome::ok(5));
//! ```

mod maybe;
mod outcome;

pub use maybe::{InvalidValueError, Maybe, Nullable, kleisli, to_outcome};
pub use outcome::{Outcome, to_maybe};
