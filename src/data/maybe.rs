//! Optional values with a defensive construction check.
//!
//! [`Maybe<T>`] is a two-variant algebraic type: `Just(value)` or
//! `Nothing`. Unlike a bare `Option`, its checked constructor refuses to
//! wrap a value that is itself logically absent: for types with a native
//! absence representation (see [`Nullable`]), `try_just` rejects the
//! absent sentinel with [`InvalidValueError`] instead of producing a
//! `Just` that lies about presence. Absence is routed through
//! [`Maybe::nothing`] or the `From<Option<T>>` conversion.

use std::fmt;

use crate::typeclass::{Applicative, Foldable, Functor, Monad, Monoid, Semigroup, TypeConstructor};

use super::outcome::Outcome;

/// The error returned when a `Just` would wrap a logically-absent value.
///
/// Raised only by [`Maybe::try_just`]; it is not recoverable within the
/// type. The caller either avoids the call or routes the absent value
/// through [`Maybe::nothing`].
///
/// # Examples
///
/// ```rust
/// use funkit::data::{InvalidValueError, Maybe};
///
/// let rejected = Maybe::try_just(None::<i32>);
/// assert_eq!(rejected, Err(InvalidValueError));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidValueError;

impl fmt::Display for InvalidValueError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "Just cannot wrap an absent value; route absence through Maybe::nothing"
        )
    }
}

impl std::error::Error for InvalidValueError {}

/// A trait for types with a native representation of absence.
///
/// This is the gate for [`Maybe::try_just`]'s defensive check: a plain
/// Rust value cannot be null, so the check only means something for types
/// that can encode "no value" themselves. `Option<T>` is the canonical
/// case, with `None` as the absent sentinel.
pub trait Nullable {
    /// Returns `true` if this value is the absent sentinel for its type.
    fn is_null(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    #[inline]
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

/// An optional value: either `Just(value)` or `Nothing`.
///
/// `Maybe` is immutable once constructed. Equality is structural:
/// `Nothing` equals `Nothing`, `Just(a)` equals `Just(b)` exactly when
/// `a == b`, and `Just` never equals `Nothing`.
///
/// # Examples
///
/// ```rust
/// use funkit::data::Maybe;
/// use funkit::typeclass::{Functor, Monad};
///
/// let present = Maybe::just(2);
/// assert_eq!(present.fmap(|n| n * 10), Maybe::just(20));
///
/// let absent: Maybe<i32> = Maybe::nothing();
/// assert_eq!(absent.flat_map(|n| Maybe::just(n * 10)), Maybe::nothing());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    /// No value.
    Nothing,
    /// A present value.
    Just(T),
}

impl<T> Maybe<T> {
    /// Wraps a present value.
    ///
    /// For ordinary Rust types this constructor is total: an owned `T`
    /// cannot be null. For types that can natively encode absence, use
    /// [`Maybe::try_just`] to get the defensive check.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::data::Maybe;
    ///
    /// let wrapped = Maybe::just(5);
    /// assert!(wrapped.is_just());
    /// ```
    #[inline]
    #[must_use]
    pub const fn just(value: T) -> Self {
        Self::Just(value)
    }

    /// The absent value.
    ///
    /// All `Nothing`s of the same element type are value-equal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::data::Maybe;
    ///
    /// let absent: Maybe<i32> = Maybe::nothing();
    /// assert!(absent.is_nothing());
    /// assert_eq!(absent, Maybe::nothing());
    /// ```
    #[inline]
    #[must_use]
    pub const fn nothing() -> Self {
        Self::Nothing
    }

    /// Returns `true` if this is a `Just` value.
    #[inline]
    #[must_use]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if this is `Nothing`.
    #[inline]
    #[must_use]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Total case analysis: exactly one of the two branches is invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::data::Maybe;
    ///
    /// let described = Maybe::just(5).fold(|n| format!("got {n}"), || String::from("empty"));
    /// assert_eq!(described, "got 5");
    ///
    /// let absent: Maybe<i32> = Maybe::nothing();
    /// let described = absent.fold(|n| format!("got {n}"), || String::from("empty"));
    /// assert_eq!(described, "empty");
    /// ```
    #[inline]
    pub fn fold<R, J, N>(self, on_just: J, on_nothing: N) -> R
    where
        J: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        match self {
            Self::Just(value) => on_just(value),
            Self::Nothing => on_nothing(),
        }
    }

    /// Converts to an [`Outcome`], supplying the error message for the
    /// absent case.
    ///
    /// `Just` becomes `Ok`; `Nothing` becomes `Error(error_message)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::data::{Maybe, Outcome};
    ///
    /// assert_eq!(Maybe::just(5).into_outcome("missing"), Outcome::ok(5));
    ///
    /// let absent: Maybe<i32> = Maybe::nothing();
    /// assert_eq!(absent.into_outcome("missing"), Outcome::error("missing"));
    /// ```
    #[must_use]
    pub fn into_outcome(self, error_message: impl Into<String>) -> Outcome<T> {
        match self {
            Self::Just(value) => Outcome::ok(value),
            Self::Nothing => Outcome::error(error_message),
        }
    }
}

impl<T: Nullable> Maybe<T> {
    /// Wraps a value after checking it is not the absent sentinel for its
    /// type.
    ///
    /// This is the defensive construction invariant: a `Just` must never
    /// wrap a logically-absent value, even though the type could carry
    /// one. Callers holding a possibly-absent value either pre-validate
    /// or convert via `From<Option<T>>`, which routes `None` to
    /// `Nothing`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidValueError`] when `value.is_null()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::data::Maybe;
    ///
    /// assert_eq!(Maybe::try_just(Some(5)), Ok(Maybe::just(Some(5))));
    /// assert!(Maybe::try_just(None::<i32>).is_err());
    /// ```
    pub fn try_just(value: T) -> Result<Self, InvalidValueError> {
        if value.is_null() {
            Err(InvalidValueError)
        } else {
            Ok(Self::Just(value))
        }
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Flattens one level of nesting.
    ///
    /// `Nothing` and `Just(Nothing)` both flatten to `Nothing`;
    /// `Just(Just(value))` flattens to `Just(value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::data::Maybe;
    ///
    /// assert_eq!(Maybe::just(Maybe::just(5)).join(), Maybe::just(5));
    ///
    /// let inner_absent: Maybe<Maybe<i32>> = Maybe::just(Maybe::nothing());
    /// assert_eq!(inner_absent.join(), Maybe::nothing());
    ///
    /// let outer_absent: Maybe<Maybe<i32>> = Maybe::nothing();
    /// assert_eq!(outer_absent.join(), Maybe::nothing());
    /// ```
    #[inline]
    #[must_use]
    pub fn join(self) -> Maybe<T> {
        match self {
            Self::Just(inner) => inner,
            Self::Nothing => Maybe::Nothing,
        }
    }
}

/// Composes two `Maybe`-producing functions (Kleisli composition).
///
/// The returned function feeds its input through `first`; when that
/// yields `Just`, the wrapped value goes through `second`. When `first`
/// yields `Nothing`, the composition short-circuits and `second` is not
/// invoked.
///
/// # Examples
///
/// ```rust
/// use funkit::data::{Maybe, kleisli};
///
/// let add_three = |n: i32| Maybe::just(n + 3);
/// let double = |n: i32| Maybe::just(n * 2);
///
/// let composed = kleisli(add_three, double);
/// assert_eq!(composed(1), Maybe::just(8));
/// ```
pub fn kleisli<A, B, C, F, G>(first: F, second: G) -> impl Fn(A) -> Maybe<C>
where
    F: Fn(A) -> Maybe<B>,
    G: Fn(B) -> Maybe<C>,
{
    move |input| match first(input) {
        Maybe::Just(value) => second(value),
        Maybe::Nothing => Maybe::Nothing,
    }
}

/// Adapts a `Maybe`-producing function into an [`Outcome`]-producing one.
///
/// The fallback error message is supplied by the caller and used whenever
/// the adapted function yields `Nothing`.
///
/// # Examples
///
/// ```rust
/// use funkit::data::{Maybe, Outcome, to_outcome};
///
/// let parse_positive = |n: i32| if n > 0 { Maybe::just(n) } else { Maybe::nothing() };
/// let validated = to_outcome(parse_positive, "not positive");
///
/// assert_eq!(validated(5), Outcome::ok(5));
/// assert_eq!(validated(-5), Outcome::error("not positive"));
/// ```
pub fn to_outcome<A, B, F>(function: F, error_message: impl Into<String>) -> impl Fn(A) -> Outcome<B>
where
    F: Fn(A) -> Maybe<B>,
{
    let message = error_message.into();
    move |input| function(input).into_outcome(message.clone())
}

// =============================================================================
// Conversions
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    /// `Some` becomes `Just`; `None` becomes `Nothing`.
    ///
    /// This is the sanctioned route for a possibly-absent native value.
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Just(value),
            None => Self::Nothing,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Just(value) => Some(value),
            Maybe::Nothing => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => write!(formatter, "Just {value}"),
            Self::Nothing => write!(formatter, "Nothing"),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}

impl<T> Functor for Maybe<T> {
    #[inline]
    fn fmap<B, F>(self, mut function: F) -> Maybe<B>
    where
        F: FnMut(T) -> B,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    #[inline]
    fn fmap_ref<B, F>(&self, mut function: F) -> Maybe<B>
    where
        F: FnMut(&T) -> B,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }
}

impl<T> Applicative for Maybe<T> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Just(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, mut function: F) -> Maybe<C>
    where
        B: Clone,
        F: FnMut(T, B) -> C,
    {
        match (self, other) {
            (Maybe::Just(a), Maybe::Just(b)) => Maybe::Just(function(a, b)),
            _ => Maybe::Nothing,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        T: Fn(B) -> Output,
        B: Clone,
    {
        match (self, other) {
            (Maybe::Just(function), Maybe::Just(value)) => Maybe::Just(function(value)),
            _ => Maybe::Nothing,
        }
    }
}

impl<T> Monad for Maybe<T> {
    /// `Just(x)` yields `function(x)`; `Nothing` yields `Nothing` without
    /// invoking the function, so an absent value triggers no side effect.
    #[inline]
    fn flat_map<B, F>(self, mut function: F) -> Maybe<B>
    where
        B: Clone,
        F: FnMut(T) -> Maybe<B>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }
}

impl<T> Foldable for Maybe<T> {
    #[inline]
    fn fold_left<B, F>(self, initial: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        match self {
            Self::Just(value) => function(initial, value),
            Self::Nothing => initial,
        }
    }

    #[inline]
    fn fold_right<B, F>(self, initial: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        match self {
            Self::Just(value) => function(value, initial),
            Self::Nothing => initial,
        }
    }

    #[inline]
    fn length(&self) -> usize {
        match self {
            Self::Just(_) => 1,
            Self::Nothing => 0,
        }
    }
}

impl<T: Semigroup> Semigroup for Maybe<T> {
    /// Combines the wrapped values when both sides are present;
    /// `Nothing` is neutral on either side.
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Just(a), Self::Just(b)) => Self::Just(a.combine(b)),
            (Self::Nothing, other) => other,
            (this, Self::Nothing) => this,
        }
    }
}

impl<T: Semigroup> Monoid for Maybe<T> {
    #[inline]
    fn empty() -> Self {
        Self::Nothing
    }
}
