//! Functor type class - mapping over container values.
//!
//! A `Functor` is a container whose contents can be transformed without
//! changing the container's shape: mapping over a `Nothing`, an `Error`,
//! or an empty list leaves the structure untouched.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy:
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! These laws are verified for every implementation in this crate by the
//! property tests in `tests/functor_laws.rs`.

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their
/// contents.
///
/// The mapping function takes `FnMut` so that multi-element containers
/// such as `PersistentList` can apply it once per element; single-slot
/// containers call it at most once.
///
/// # Examples
///
/// ```rust
/// use funkit::typeclass::Functor;
/// use funkit::data::Maybe;
///
/// let x = Maybe::just(5);
/// let y = x.fmap(|n| n.to_string());
/// assert_eq!(y, Maybe::just("5".to_string()));
///
/// let none: Maybe<i32> = Maybe::nothing();
/// assert_eq!(none.fmap(|n| n.to_string()), Maybe::nothing());
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value(s) inside the functor, consuming it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::typeclass::Functor;
    /// use funkit::data::Maybe;
    ///
    /// let doubled = Maybe::just(5).fmap(|n| n * 2);
    /// assert_eq!(doubled, Maybe::just(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Applies a function to references of the value(s) inside the functor.
    ///
    /// Useful when the functor should remain available afterwards, or when
    /// the inner type does not implement `Clone`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::typeclass::Functor;
    /// use funkit::data::Maybe;
    ///
    /// let text = Maybe::just("hello".to_string());
    /// let length = text.fmap_ref(|s| s.len());
    /// assert_eq!(length, Maybe::just(5));
    /// // text is still available here
    /// assert!(text.is_just());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;

    /// Replaces the value(s) inside the functor with a constant value.
    ///
    /// This is mapping with a constant function, and deliberately nothing
    /// more: deriving the shape independently (say, always producing a
    /// `Just`) would violate the identity law by turning `Nothing` into
    /// `Just`. Defining it as `fmap` keeps the operation structure
    /// preserving for every implementation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::typeclass::Functor;
    /// use funkit::data::Maybe;
    ///
    /// assert_eq!(Maybe::just(5).replace("new"), Maybe::just("new"));
    ///
    /// let none: Maybe<i32> = Maybe::nothing();
    /// assert_eq!(none.replace("new"), Maybe::nothing());
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone,
    {
        self.fmap(move |_| value.clone())
    }

    /// Discards the value(s) inside the functor, replacing them with `()`.
    ///
    /// Equivalent to `replace(())`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.fmap(|_| ())
    }
}
