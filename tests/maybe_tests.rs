//! Unit tests for the Maybe<T> type.
//!
//! Tests cover:
//! - Structural equality between Just and Nothing values
//! - The defensive construction check (try_just)
//! - Functor behavior, including the constant-map edge case
//! - Applicative apply across every Just/Nothing combination
//! - Monad bind, including the no-invocation guarantee on Nothing
//! - Kleisli composition and conversions to Outcome

#![cfg(feature = "data")]

use funkit::data::{InvalidValueError, Maybe, Outcome, kleisli, to_outcome};
use funkit::typeclass::{Applicative, Functor, Monad};
use proptest::prelude::*;
use rstest::rstest;

// =============================================================================
// Equality
// =============================================================================

#[rstest]
fn nothing_equals_nothing() {
    assert_eq!(Maybe::<i32>::nothing(), Maybe::<i32>::nothing());
}

#[rstest]
fn two_justs_with_same_value_are_equal() {
    assert_eq!(Maybe::just(1), Maybe::just(1));
}

#[rstest]
fn nothing_is_not_equal_to_just_anything() {
    assert_ne!(Maybe::<&str>::nothing(), Maybe::just("anything"));
}

#[rstest]
fn two_justs_with_different_values_are_not_equal() {
    assert_ne!(Maybe::just(true), Maybe::just(false));
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn try_just_rejects_the_absent_sentinel() {
    let rejected = Maybe::try_just(None::<i32>);
    assert_eq!(rejected, Err(InvalidValueError));
}

#[rstest]
fn try_just_accepts_a_present_value() {
    let accepted = Maybe::try_just(Some(5));
    assert_eq!(accepted, Ok(Maybe::just(Some(5))));
}

#[rstest]
fn from_option_routes_absence_through_nothing() {
    assert_eq!(Maybe::from(None::<i32>), Maybe::nothing());
    assert_eq!(Maybe::from(Some(5)), Maybe::just(5));
}

// =============================================================================
// Functor
// =============================================================================

#[rstest]
fn fmap_maps_nothing_to_nothing() {
    let absent: Maybe<i32> = Maybe::nothing();
    assert_eq!(absent.fmap(|n| n + 1), Maybe::nothing());
}

#[rstest]
fn fmap_maps_value_to_new_value() {
    assert_eq!(Maybe::just(1).fmap(|n| n + 1), Maybe::just(2));
}

proptest! {
    /// The constant map keeps Nothing as Nothing - it must not conjure a Just
    #[test]
    fn prop_replace_maps_nothing_to_nothing(replacement in any::<i32>()) {
        let absent: Maybe<String> = Maybe::nothing();
        prop_assert_eq!(absent.replace(replacement), Maybe::nothing());
    }

    /// The constant map overwrites any present value
    #[test]
    fn prop_replace_maps_just_anything_to_just_constant(text in any::<String>(), replacement in any::<i32>()) {
        prop_assert_eq!(Maybe::just(text).replace(replacement), Maybe::just(replacement));
    }
}

// =============================================================================
// Applicative
// =============================================================================

proptest! {
    /// pure wraps any value in Just
    #[test]
    fn prop_pure_returns_just_a_value(value in any::<i32>()) {
        prop_assert_eq!(<Maybe<()>>::pure(value), Maybe::just(value));
    }

    /// Just function applied to Just value yields Just result
    #[test]
    fn prop_apply_just_function_to_just_value(value in any::<i32>()) {
        let halve: Maybe<fn(i32) -> i32> = Maybe::just(|x| x / 2);
        prop_assert_eq!(halve.apply(Maybe::just(value)), Maybe::just(value / 2));
    }

    /// Nothing function applied to Just value yields Nothing
    #[test]
    fn prop_apply_nothing_function_to_just_value(value in any::<i32>()) {
        let absent: Maybe<fn(i32) -> i32> = Maybe::nothing();
        prop_assert_eq!(absent.apply(Maybe::just(value)), Maybe::nothing());
    }
}

#[rstest]
fn apply_just_function_to_nothing_yields_nothing() {
    let halve: Maybe<fn(i32) -> i32> = Maybe::just(|x| x / 2);
    assert_eq!(halve.apply(Maybe::nothing()), Maybe::nothing());
}

#[rstest]
fn apply_nothing_function_to_nothing_yields_nothing() {
    let absent: Maybe<fn(i32) -> i32> = Maybe::nothing();
    assert_eq!(absent.apply(Maybe::nothing()), Maybe::nothing());
}

// =============================================================================
// Monad
// =============================================================================

#[rstest]
fn bind_nothing_returns_nothing() {
    let absent: Maybe<i32> = Maybe::nothing();
    let result = absent.flat_map(|_| Maybe::just(1));
    assert_eq!(result, Maybe::nothing());
}

#[rstest]
fn bind_nothing_does_not_invoke_function() {
    let absent: Maybe<i32> = Maybe::nothing();
    let mut was_called = false;

    let _ = absent.flat_map(|_| {
        was_called = true;
        Maybe::<i32>::nothing()
    });

    assert!(!was_called);
}

#[rstest]
fn bind_just_invokes_function() {
    let mut was_called = false;

    let _ = Maybe::just(1).flat_map(|_| {
        was_called = true;
        Maybe::<i32>::nothing()
    });

    assert!(was_called);
}

#[rstest]
fn bind_just_returns_value_from_function() {
    let returned = Maybe::just(2);
    let result = Maybe::just(1).flat_map(|_| returned);
    assert_eq!(result, returned);
}

#[rstest]
fn join_flattens_each_nesting_shape() {
    assert_eq!(Maybe::just(Maybe::just(5)).join(), Maybe::just(5));
    assert_eq!(Maybe::just(Maybe::<i32>::nothing()).join(), Maybe::nothing());
    assert_eq!(Maybe::<Maybe<i32>>::nothing().join(), Maybe::nothing());
}

// =============================================================================
// Kleisli Composition
// =============================================================================

#[rstest]
fn kleisli_composition_returns_combined_result() {
    let add_three = |n: i32| Maybe::just(n + 3);
    let double = |n: i32| Maybe::just(n * 2);

    let composed = kleisli(add_three, double);

    assert_eq!(composed(1), Maybe::just((1 + 3) * 2));
}

#[rstest]
fn kleisli_returns_nothing_when_first_function_produces_nothing() {
    let fail = |_: i32| Maybe::<i32>::nothing();
    let double = |n: i32| Maybe::just(n * 2);

    let composed = kleisli(fail, double);

    assert_eq!(composed(1), Maybe::nothing());
}

#[rstest]
fn kleisli_does_not_invoke_second_function_when_first_produces_nothing() {
    use std::cell::Cell;

    let was_called = Cell::new(false);

    let fail = |_: i32| Maybe::<i32>::nothing();
    let probe = |n: i32| {
        was_called.set(true);
        Maybe::just(n)
    };

    let composed = kleisli(fail, probe);
    let _ = composed(0);

    assert!(!was_called.get());
}

#[rstest]
fn kleisli_returns_nothing_when_second_function_produces_nothing() {
    let add_three = |n: i32| Maybe::just(n + 3);
    let fail = |_: i32| Maybe::<i32>::nothing();

    let composed = kleisli(add_three, fail);

    assert_eq!(composed(1), Maybe::nothing());
}

// =============================================================================
// Conversions to Outcome
// =============================================================================

#[rstest]
fn into_outcome_wraps_just_as_ok() {
    assert_eq!(Maybe::just(5).into_outcome("missing"), Outcome::ok(5));
}

#[rstest]
fn into_outcome_uses_fallback_message_for_nothing() {
    let absent: Maybe<i32> = Maybe::nothing();
    assert_eq!(absent.into_outcome("missing"), Outcome::error("missing"));
}

#[rstest]
fn to_outcome_adapts_a_maybe_producing_function() {
    let positive = |n: i32| if n > 0 { Maybe::just(n) } else { Maybe::nothing() };
    let validated = to_outcome(positive, "not positive");

    assert_eq!(validated(5), Outcome::ok(5));
    assert_eq!(validated(-5), Outcome::error("not positive"));
}
