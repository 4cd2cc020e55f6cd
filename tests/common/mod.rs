//! Shared test utilities and fixtures

#![allow(dead_code)]

use fibo_types::Fibo;

/// Parse a digit string that the test knows is well-formed.
pub fn fibo(raw: &str) -> Fibo {
    Fibo::parse(raw).unwrap_or_else(|err| panic!("bad fixture {raw:?}: {err}"))
}

/// Reference decoding: sum `F(i+2)` over set digits, in u128 to stay clear of overflow.
pub fn reference_value(digits_le: &[bool]) -> u128 {
    let (mut weight, mut next) = (1u128, 2u128);
    let mut total = 0;
    for &set in digits_le {
        if set {
            total += weight;
        }
        (weight, next) = (next, weight + next);
    }
    total
}

/// Little-endian digits of `mask`, `width` of them.
pub fn mask_digits(mask: u32, width: u32) -> Vec<bool> {
    (0..width).map(|bit| mask & (1 << bit) != 0).collect()
}

pub fn assert_canonical(value: &Fibo) {
    let digits: Vec<bool> = value.digits().collect();
    assert!(
        digits.windows(2).all(|pair| !(pair[0] && pair[1])),
        "adjacent digits set in {value}"
    );
    assert!(
        digits.len() == 1 || digits.last() == Some(&true),
        "leading zero in {value}"
    );
}
