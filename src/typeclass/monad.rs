//! Monad type class - sequencing computations within a context.
//!
//! `Monad` extends [`Applicative`] with `flat_map`, which lets the result
//! of one computation decide the next computation. Absence and failure
//! short-circuit: binding over `Nothing` or `Error` never invokes the
//! supplied function.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy:
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! These laws are verified in `tests/monad_laws.rs`.

use super::applicative::Applicative;

/// A type class for types that support sequencing of dependent
/// computations.
///
/// The result element type carries a `Clone` bound so that the list
/// instance can concatenate the per-element result lists over shared
/// nodes.
///
/// # Examples
///
/// ```rust
/// use funkit::typeclass::Monad;
/// use funkit::data::Maybe;
///
/// let halved = Maybe::just(10).flat_map(|n| {
///     if n % 2 == 0 { Maybe::just(n / 2) } else { Maybe::nothing() }
/// });
/// assert_eq!(halved, Maybe::just(5));
/// ```
pub trait Monad: Applicative {
    /// Applies a context-returning function to the inner value(s) and
    /// flattens the result.
    ///
    /// In Haskell this is `>>=` (bind). `Nothing`, `Error`, and the empty
    /// list short-circuit without invoking the function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::typeclass::Monad;
    /// use funkit::data::Maybe;
    ///
    /// let chained = Maybe::just(5).flat_map(|n| Maybe::just(n * 2));
    /// assert_eq!(chained, Maybe::just(10));
    ///
    /// let none: Maybe<i32> = Maybe::nothing();
    /// assert_eq!(none.flat_map(|n| Maybe::just(n * 2)), Maybe::nothing());
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        B: Clone,
        F: FnMut(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map`, matching the naming of `Option::and_then`
    /// and `Result::and_then`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone,
        F: FnMut(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }
}
