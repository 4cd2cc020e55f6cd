//! Literal digit-string scenarios.

use fibo_types::{Fibo, MalformedInputKind, one, zero};

use crate::common::fibo;

#[test]
fn zero_is_one_digit() {
    assert_eq!(Fibo::new().length(), 1);
    assert_eq!(zero().length(), 1);
    assert_eq!(zero().to_string(), "0");
    assert_eq!(*one(), Fibo::from(1u8));
}

#[test]
fn adjacent_ones_fold_upward() {
    assert_eq!(fibo("11"), fibo("100"));
    assert_eq!(fibo("11").to_string(), "100");
}

#[test]
fn addition_scenario() {
    assert_eq!(fibo("1001") + fibo("10"), fibo("1011"));
}

#[test]
fn digit_wise_scenarios() {
    assert_eq!(fibo("1001") & fibo("1100"), *zero());
    assert_eq!(fibo("1100") | fibo("11"), fibo("10100"));
    assert_eq!(fibo("1001") ^ fibo("1010"), fibo("11"));
}

#[test]
fn shift_scenario() {
    assert_eq!(fibo("101") << 3, fibo("101000"));

    let mut value = fibo("101");
    value <<= 3;
    assert_eq!(value.to_string(), "101000");
}

#[test]
fn compound_assignment_forms() {
    let mut value = fibo("1001");
    value += fibo("10");
    assert_eq!(value.to_u64(), Some(8));

    value |= fibo("1");
    assert_eq!(value.to_string(), "10001");
    value &= fibo("10000");
    assert_eq!(value.to_string(), "10000");
    value ^= fibo("10000");
    assert!(value.is_zero());
}

#[test]
fn copies_are_independent() {
    let original = fibo("10101");
    let mut copy = original.clone();
    copy += one();
    assert_eq!(original.to_string(), "10101");
    assert_eq!(copy.to_u64(), Some(13));
}

#[test]
fn malformed_digit_string_leaves_value_untouched() {
    let mut current = fibo("1010");
    match "10201".parse::<Fibo>() {
        Ok(parsed) => current = parsed,
        Err(err) => {
            assert_eq!(
                err.kind(),
                MalformedInputKind::InvalidDigit {
                    symbol: '2',
                    index: 2
                }
            );
        }
    }
    assert_eq!(current, fibo("1010"));
}

#[test]
fn negative_integer_is_malformed() {
    let mut current = Fibo::from(9u8);
    match Fibo::try_from(-1i64) {
        Ok(parsed) => current = parsed,
        Err(err) => assert_eq!(err.kind(), MalformedInputKind::Negative { value: -1 }),
    }
    assert_eq!(current.to_u64(), Some(9));
    assert!(Fibo::try_from(isize::MIN).is_err());
    assert_eq!(Fibo::try_from(0i8).unwrap(), *zero());
}
