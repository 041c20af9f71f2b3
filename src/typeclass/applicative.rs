//! Applicative type class - applying functions within contexts.
//!
//! `Applicative` extends [`Functor`] with the ability to lift plain
//! values into the context (`pure`) and to apply a wrapped function to a
//! wrapped value (`apply`). For `PersistentList`, `apply` is the
//! cartesian product of functions and values.
//!
//! # Laws
//!
//! All `Applicative` implementations must satisfy:
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! pure(compose).apply(u).apply(v).apply(w) == u.apply(v.apply(w))
//! ```
//!
//! These laws are verified in `tests/applicative_laws.rs`.

use super::functor::Functor;

/// A type class for types that support lifting values and applying
/// wrapped functions.
///
/// The wrapped function must implement `Fn` (not merely `FnOnce`) and
/// the argument must be `Clone`, because a container may hold several
/// functions that each get applied to several values.
///
/// # Examples
///
/// ```rust
/// use funkit::typeclass::Applicative;
/// use funkit::data::Maybe;
///
/// // Lifting a plain value
/// let lifted: Maybe<i32> = <Maybe<()>>::pure(42);
/// assert_eq!(lifted, Maybe::just(42));
///
/// // Applying a wrapped function
/// let function: Maybe<fn(i32) -> i32> = Maybe::just(|x| x + 1);
/// assert_eq!(function.apply(Maybe::just(5)), Maybe::just(6));
/// ```
pub trait Applicative: Functor {
    /// Lifts a plain value into the applicative context.
    ///
    /// For `Maybe` this is `Just`, for `Outcome` it is `Ok`, and for
    /// `PersistentList` it is the single-element list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::typeclass::Applicative;
    /// use funkit::data::{Maybe, Outcome};
    ///
    /// let x: Maybe<i32> = <Maybe<()>>::pure(42);
    /// assert_eq!(x, Maybe::just(42));
    ///
    /// let y: Outcome<i32> = <Outcome<()>>::pure(42);
    /// assert_eq!(y, Outcome::ok(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values with a binary function.
    ///
    /// If either side represents failure or absence, the result does too.
    /// For `PersistentList`, every pairing of left and right elements is
    /// produced, left-major.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::typeclass::Applicative;
    /// use funkit::data::Maybe;
    ///
    /// let sum = Maybe::just(1).map2(Maybe::just(2), |a, b| a + b);
    /// assert_eq!(sum, Maybe::just(3));
    ///
    /// let none: Maybe<i32> = Maybe::nothing();
    /// assert_eq!(Maybe::just(1).map2(none, |a, b| a + b), Maybe::nothing());
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        B: Clone,
        F: FnMut(Self::Inner, B) -> C;

    /// Applies a function inside the context to a value inside the context.
    ///
    /// Available when `Self` wraps a function type. Any failing or absent
    /// side makes the whole application fail; the function side is
    /// inspected first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::typeclass::Applicative;
    /// use funkit::data::Maybe;
    ///
    /// let function: Maybe<fn(i32) -> i32> = Maybe::just(|x| x + 1);
    /// assert_eq!(function.apply(Maybe::just(5)), Maybe::just(6));
    ///
    /// let absent: Maybe<fn(i32) -> i32> = Maybe::nothing();
    /// assert_eq!(absent.apply(Maybe::just(5)), Maybe::nothing());
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: Fn(B) -> Output,
        B: Clone;

    /// Combines two applicative values into a tuple.
    ///
    /// Equivalent to `map2(other, |a, b| (a, b))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::typeclass::Applicative;
    /// use funkit::data::Maybe;
    ///
    /// let paired = Maybe::just(1).product(Maybe::just("hello"));
    /// assert_eq!(paired, Maybe::just((1, "hello")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
        B: Clone,
    {
        self.map2(other, |a, b| (a, b))
    }
}
