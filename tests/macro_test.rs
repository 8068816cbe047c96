//! Tests for `#[bi_predicate]`, `pred!`, `all!` and `any!`.

use std::cell::Cell;

use tola_bipred::prelude::*;
use tola_bipred::{all, any};

// =============================================================================
// #[bi_predicate]
// =============================================================================

#[bi_predicate]
fn left_is_zero(l: i64, _r: i64) -> bool {
    l == 0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DivByZero;

#[bi_predicate(name = Divisible)]
fn divides(l: i64, r: i64) -> Result<bool, DivByZero> {
    // checked_rem is None only for a zero divisor or i64::MIN % -1
    match l.checked_rem(r) {
        Some(rem) => Ok(rem == 0),
        None if r == 0 => Err(DivByZero),
        None => Ok(true),
    }
}

mod nested {
    use tola_bipred::bi_predicate;

    #[bi_predicate]
    pub fn same_sign(l: i64, r: i64) -> bool {
        l.signum() == r.signum()
    }
}

#[test]
fn test_function_is_kept() {
    assert!(left_is_zero(0, 9));
    assert_eq!(divides(9, 3), Ok(true));
}

#[test]
fn test_plain_predicate_type() {
    assert!(LeftIsZero.test(0, 5));
    assert!(!LeftIsZero.test(5, 0));
    assert!(LeftIsZero.and(Less).test(0, 1));
    assert_eq!(LeftIsZero, LeftIsZero::default());
}

#[test]
fn test_fallible_predicate_type() {
    assert_eq!(Divisible.evaluate(10, 5), Ok(true));
    assert_eq!(Divisible.evaluate(10, 3), Ok(false));
    assert_eq!(Divisible.evaluate(10, 0), Err(DivByZero));
    assert_eq!(Divisible.evaluate(i64::MIN, -1), Ok(true));
    assert_eq!(Divisible.evaluate(i64::MIN, 0), Err(DivByZero));
    assert_eq!(Divisible.evaluate(i64::MAX, i64::MIN), Ok(false));

    // a nonzero right operand guards the division
    let guarded = NotEqual.widen().and(Divisible);
    assert_eq!(guarded.evaluate(0, 0), Ok(false));
}

#[test]
fn test_visibility_follows_function() {
    assert!(nested::SameSign.test(-3, -9));
    assert!(!nested::SameSign.test(-3, 9));
}

// =============================================================================
// pred!
// =============================================================================

#[test]
fn test_pred_precedence() {
    let p = pred!(Greater & !LeftIsZero | within(-1, 1));
    let q = Greater.and(LeftIsZero.negate()).or(within(-1, 1));

    for l in -3..=3 {
        for r in -3..=3 {
            assert_eq!(p.test(l, r), q.test(l, r), "({l}, {r})");
        }
    }
}

#[test]
fn test_pred_parentheses_and_double_operators() {
    let p = pred!((Less || Equal) && !within(-10, 10));

    assert!(p.test(-20, 30));
    assert!(p.test(50, 50));
    assert!(!p.test(5, 6));
    assert!(!p.test(60, 50));
}

#[test]
fn test_pred_with_method_operands() {
    let limit = within(0, 100);
    let p = pred!(limit.by_ref() & GreaterOrEqual);

    assert!(p.test(10, 10));
    assert!(!p.test(101, 0));
    assert!(limit.test(1, 1));
}

#[test]
fn test_pred_short_circuits_in_written_order() {
    let calls = Cell::new(0);
    let counted = from_fn(|_, _| {
        calls.set(calls.get() + 1);
        true
    });

    let p = pred!(Never & counted.by_ref() | Always | counted.by_ref());
    assert!(p.test(0, 0));
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_pred_fallible_operands() {
    let p = pred!(LeftIsZero.widen() | Divisible);

    assert_eq!(p.evaluate(0, 0), Ok(true));
    assert_eq!(p.evaluate(6, 3), Ok(true));
    assert_eq!(p.evaluate(6, 0), Err(DivByZero));
}

#[test]
fn test_pred_turbofish_and_macro_operands() {
    let p = pred!(LeftIsZero.widen::<DivByZero>() | Divisible);
    assert_eq!(p.evaluate(0, 0), Ok(true));
    assert_eq!(p.evaluate(i64::MIN, -1), Ok(true));
    assert_eq!(p.evaluate(7, 0), Err(DivByZero));

    let q = pred!(!any![Less, Equal] & all![within(0, 9), NotEqual]);
    assert!(q.test(5, 2));
    assert!(!q.test(2, 5));
    assert!(!q.test(12, 2));
}

// =============================================================================
// all! / any!
// =============================================================================

#[test]
fn test_all_any_fold() {
    let p = all![Greater, within(0, 10), NotEqual];
    assert!(p.test(4, 2));
    assert!(!p.test(11, 2));

    let q = any![LeftIsZero, Equal, Less,];
    assert!(q.test(0, -1));
    assert!(q.test(2, 2));
    assert!(!q.test(3, 2));
}
