//! Integration tests for the Toto value type
//!
//! Tests construction, equality, addition, and conversions.

use hubbardi_foundation::Toto;
use proptest::prelude::*;

// =============================================================================
// Construction
// =============================================================================

#[test]
fn toto_holds_constructed_value() {
    assert_eq!(Toto::new(2).i(), 2);
    assert_eq!(Toto::new(-7).i(), -7);
}

#[test]
fn toto_default_is_zero() {
    let t = Toto::default();
    assert_eq!(t.i(), 0);
    assert_eq!(t, Toto::new(0));
}

// =============================================================================
// Addition
// =============================================================================

#[test]
fn toto_add_zero_yields_other_operand() {
    let a = Toto::new(0);
    let b = Toto::new(2);

    let c = a + b;
    assert_eq!(c, b);
}

#[test]
fn toto_add_is_integer_sum() {
    assert_eq!(Toto::new(40) + Toto::new(2), Toto::new(42));
}

#[test]
fn toto_add_assign() {
    let mut t = Toto::new(1);
    t += Toto::new(1);
    t += Toto::new(1);
    assert_eq!(t, Toto::new(3));
}

#[test]
fn toto_sum_over_iterator() {
    let total: Toto = (1..=4).map(Toto::new).sum();
    assert_eq!(total, Toto::new(10));
}

#[test]
fn toto_checked_add_detects_overflow() {
    assert!(Toto::new(i64::MAX).checked_add(Toto::new(1)).is_none());
    assert_eq!(
        Toto::new(1).checked_add(Toto::new(1)),
        Some(Toto::new(2))
    );
}

// =============================================================================
// Equality
// =============================================================================

#[test]
fn toto_equality_depends_only_on_value() {
    assert_eq!(Toto::new(5), Toto::from(5i64));
    assert_ne!(Toto::new(5), Toto::new(6));
}

#[test]
fn toto_ordering_follows_value() {
    assert!(Toto::new(1) < Toto::new(2));
    assert_eq!(Toto::new(3).max(Toto::new(-3)), Toto::new(3));
}

proptest! {
    #[test]
    fn toto_equality_is_reflexive(i in any::<i64>()) {
        let x = Toto::new(i);
        prop_assert_eq!(x, x);
        prop_assert_eq!(x == x, x == Toto::new(i));
    }

    #[test]
    fn toto_addition_is_associative(a in any::<i64>(), b in any::<i64>(), c in any::<i64>()) {
        let (a, b, c) = (Toto::new(a), Toto::new(b), Toto::new(c));
        prop_assert_eq!((a + b) + c, a + (b + c));
    }
}
