//! # funkit
//!
//! Functional programming building blocks for Rust: null-safe optional
//! values, message-carrying results, persistent linked lists, and
//! stack-safe recursion.
//!
//! ## Overview
//!
//! This library is a small, pure computation toolkit. Every value is
//! immutable, every operation is synchronous, and failure travels as
//! data rather than as control flow. It includes:
//!
//! - **Type Classes**: Functor, Applicative, Monad, Foldable, Semigroup,
//!   Monoid, emulated over Generic Associated Types
//! - **Data Types**: [`Maybe`](data::Maybe) and [`Outcome`](data::Outcome)
//! - **Persistent Data**: [`PersistentList`](persistent::PersistentList),
//!   an immutable cons list with structural sharing
//! - **Control**: [`Trampoline`](control::Trampoline) for stack-safe
//!   recursion
//! - **Function Composition**: `compose!`, `pipe!`, and `curry2!`-style
//!   macros plus the `identity`/`constant`/`flip` combinators
//!
//! ## Feature Flags
//!
//! - `typeclass`: type class traits (Functor, Monad, etc.)
//! - `compose`: function composition utilities
//! - `control`: the trampoline
//! - `data`: `Maybe` and `Outcome`
//! - `persistent`: `PersistentList`
//!
//! All features are enabled by default.
//!
//! ## Example
//!
//! ```rust
//! use funkit::prelude::*;
//!
//! let doubled = Maybe::just(21).fmap(|n| n * 2);
//! assert_eq!(doubled, Maybe::just(42));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use funkit::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "data")]
    pub use crate::data::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "data")]
pub mod data;

#[cfg(feature = "persistent")]
pub mod persistent;
