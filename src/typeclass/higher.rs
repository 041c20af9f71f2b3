//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over type constructors like `Maybe<_>` or
//! `PersistentList<_>` directly. This module provides the
//! [`TypeConstructor`] trait, a GAT-based workaround that lets the
//! Functor/Applicative/Monad traits speak about "the same container,
//! holding a different element type".

/// A trait representing a type constructor.
///
/// This trait emulates Higher-Kinded Types (HKT) using Generic Associated
/// Types. An implementing type is a type constructor applied to some
/// element type `A` (for example `Maybe<A>`), and `WithType<B>` names the
/// same constructor applied to `B` (for example `Maybe<B>`).
///
/// # Laws
///
/// For any `F: TypeConstructor`:
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` should
///    be the same type as `F`.
///
/// # Example
///
/// ```rust
/// use funkit::typeclass::TypeConstructor;
/// use funkit::data::Maybe;
///
/// fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
/// assert_inner::<Maybe<i32>>();
/// ```
pub trait TypeConstructor {
    /// The element type this constructor is currently applied to.
    ///
    /// For `Maybe<i32>`, this is `i32`.
    type Inner;

    /// The same type constructor applied to a different element type `B`.
    ///
    /// For `Maybe<i32>`, `WithType<String>` is `Maybe<String>`. The
    /// constraint keeps the result usable as a type constructor in turn,
    /// so transformations can be chained.
    type WithType<B>: TypeConstructor<Inner = B>;
}
