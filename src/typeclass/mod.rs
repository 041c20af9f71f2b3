//! Type class traits for functional programming abstractions.
//!
//! This module provides the fundamental type classes (traits) implemented
//! by the data types in this crate:
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Applying wrapped functions to wrapped values
//! - [`Monad`]: Sequencing computations with dependency
//! - [`Foldable`]: Collapsing structures to summary values
//! - [`Semigroup`]: Associative binary combination
//! - [`Monoid`]: Semigroup with an identity element
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! This library uses Generic Associated Types (GAT) to emulate HKT
//! behavior through the [`TypeConstructor`] trait, allowing Functor,
//! Applicative, and Monad to be expressed generically over
//! `Maybe<_>`, `Outcome<_>`, and `PersistentList<_>`.
//!
//! # Examples
//!
//! ```rust
//! use funkit::typeclass::{Functor, Applicative, Monad};
//! use funkit::data::Maybe;
//!
//! // Functor: transform the wrapped value
//! let mapped = Maybe::just(5).fmap(|n| n + 1);
//! assert_eq!(mapped, Maybe::just(6));
//!
//! // Applicative: lift a plain value
//! let lifted: Maybe<i32> = <Maybe<()>>::pure(42);
//! assert_eq!(lifted, Maybe::just(42));
//!
//! // Monad: sequence dependent computations
//! let chained = Maybe::just(5).flat_map(|n| Maybe::just(n * 2));
//! assert_eq!(chained, Maybe::just(10));
//! ```

mod applicative;
mod foldable;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;

pub use applicative::Applicative;
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
