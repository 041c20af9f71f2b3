//! Foldable type class - collapsing structures to summary values.
//!
//! A `Foldable` container can be reduced to a single value by walking its
//! elements with an accumulator. Both directions are provided:
//! `fold_left` consumes elements head-to-tail, `fold_right` tail-to-head.
//!
//! Both folds are iterative. In particular `fold_right` is implemented by
//! reversing first, so deep structures never grow the call stack.

use super::higher::TypeConstructor;

/// A type class for structures that can be folded to a summary value.
///
/// # Examples
///
/// ```rust
/// use funkit::typeclass::Foldable;
/// use funkit::persistent::PersistentList;
///
/// let list: PersistentList<i32> = (1..=4).collect();
///
/// // ((((0 - 1) - 2) - 3) - 4) = -10
/// assert_eq!(list.clone().fold_left(0, |acc, x| acc - x), -10);
///
/// // (1 - (2 - (3 - (4 - 0)))) = -2
/// assert_eq!(list.fold_right(0, |x, acc| x - acc), -2);
/// ```
pub trait Foldable: TypeConstructor {
    /// Folds the structure from the left (head first).
    ///
    /// Computes `f(...f(f(initial, x0), x1)..., xn)`.
    fn fold_left<B, F>(self, initial: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure from the right (last element first).
    ///
    /// Computes `f(x0, f(x1, ...f(xn, initial)))`.
    fn fold_right<B, F>(self, initial: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Returns the number of elements in the structure.
    fn length(&self) -> usize;

    /// Returns `true` if the structure contains no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.length() == 0
    }
}

#[cfg(all(test, feature = "data"))]
mod tests {
    use super::*;
    use crate::data::Maybe;
    use rstest::rstest;

    #[rstest]
    fn maybe_fold_left_just() {
        assert_eq!(Maybe::just(5).fold_left(10, |acc, x| acc + x), 15);
    }

    #[rstest]
    fn maybe_fold_left_nothing_returns_initial() {
        let none: Maybe<i32> = Maybe::nothing();
        assert_eq!(none.fold_left(10, |acc, x| acc + x), 10);
    }

    #[rstest]
    fn maybe_fold_right_just() {
        assert_eq!(Maybe::just(5).fold_right(10, |x, acc| x - acc), -5);
    }

    #[rstest]
    fn maybe_length() {
        assert_eq!(Maybe::just(5).length(), 1);
        let none: Maybe<i32> = Maybe::nothing();
        assert_eq!(none.length(), 0);
        assert!(none.is_empty());
    }
}
