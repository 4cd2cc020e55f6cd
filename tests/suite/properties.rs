//! Algebraic and round-trip properties, checked exhaustively over small ranges.

use std::thread;

use fibo_types::{Fibo, zero};

use crate::common::{assert_canonical, mask_digits, reference_value};

#[test]
fn integer_round_trip() {
    for n in 0..=3000u64 {
        let value = Fibo::from(n);
        assert_canonical(&value);
        assert_eq!(value.to_u64(), Some(n));
    }
    for n in [
        4_181,
        1_000_000,
        u64::from(u32::MAX),
        12_200_160_415_121_876_738,
        u64::MAX - 1,
        u64::MAX,
    ] {
        assert_eq!(Fibo::from(n).to_u64(), Some(n), "value {n}");
    }
}

#[test]
fn every_raw_pattern_normalizes_to_its_value() {
    for mask in 0..(1u32 << 12) {
        let raw = mask_digits(mask, 12);
        let value = Fibo::from_digits_le(raw.iter().copied());
        assert_canonical(&value);
        assert_eq!(u128::from(value.to_u64().unwrap()), reference_value(&raw), "mask {mask:b}");
    }
}

#[test]
fn normalize_is_idempotent() {
    for n in 0..500u64 {
        let value = Fibo::from(n);
        assert_eq!(Fibo::from_digits_le(value.digits()), value);
        assert_eq!(Fibo::parse(&value.to_string()).unwrap(), value);
    }
}

#[test]
fn addition_matches_integers() {
    for a in 0..80u64 {
        for b in 0..80u64 {
            let sum = Fibo::from(a) + Fibo::from(b);
            assert_canonical(&sum);
            assert_eq!(sum.to_u64(), Some(a + b), "{a} + {b}");
        }
    }
}

#[test]
fn addition_is_commutative() {
    for a in 0..60u64 {
        for b in 0..60u64 {
            let (fa, fb) = (Fibo::from(a), Fibo::from(b));
            assert_eq!(&fa + &fb, &fb + &fa);
        }
    }
}

#[test]
fn addition_is_associative() {
    for a in 0..20u64 {
        for b in 0..20u64 {
            for c in 0..20u64 {
                let (fa, fb, fc) = (Fibo::from(a), Fibo::from(b), Fibo::from(c));
                assert_eq!((&fa + &fb) + &fc, &fa + (&fb + &fc));
            }
        }
    }
}

#[test]
fn large_sums_carry_correctly() {
    let big = Fibo::from(u64::MAX);
    let doubled = &big + &big;
    assert_canonical(&doubled);
    // 2^65 - 2 does not fit u64.
    assert_eq!(doubled.to_u64(), None);
    assert!(doubled > big);

    let half = Fibo::from(u64::MAX / 2);
    assert_eq!((&half + &half + Fibo::from(1u8)).to_u64(), Some(u64::MAX));
}

#[test]
fn order_matches_integers() {
    for a in 0..150u64 {
        for b in 0..150u64 {
            let (fa, fb) = (Fibo::from(a), Fibo::from(b));
            assert_eq!(fa.cmp(&fb), a.cmp(&b), "{a} vs {b}");
            assert_eq!(fa == fb, a == b);
        }
    }
}

#[test]
fn bitwise_results_stay_canonical() {
    for a in 0..64u64 {
        for b in 0..64u64 {
            let (fa, fb) = (Fibo::from(a), Fibo::from(b));
            for result in [&fa & &fb, &fa | &fb, &fa ^ &fb] {
                assert_canonical(&result);
            }
            assert!(&fa & &fb <= fa);
        }
    }
}

#[test]
fn shift_preserves_canonical_form() {
    for n in 0..200u64 {
        for shift in 0..6 {
            let shifted = Fibo::from(n) << shift;
            assert_canonical(&shifted);
            if n > 0 {
                assert_eq!(shifted.length(), Fibo::from(n).length() + shift);
            }
        }
    }
    assert_eq!(zero() << 10, *zero());
}

#[test]
fn shared_reads_across_threads() {
    let value = Fibo::from(987_654_321u64);
    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                assert_eq!(value.to_u64(), Some(987_654_321));
                assert_eq!(&value + zero(), value);
            });
        }
    });
}
