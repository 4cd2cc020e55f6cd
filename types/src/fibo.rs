//! The canonical Fibonacci integer.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::digits::Digits;
use crate::error::{MalformedInput, MalformedInputKind};
use crate::weights;

/// Non-negative integer stored in Zeckendorf form.
///
/// Digit `i` (least significant first) carries weight `F(i+2)`, so the
/// digits `1, 2, 3, 5, 8, …` read right to left. Every value is kept
/// canonical: no two adjacent digits are set and there are no leading zeros,
/// except that zero itself is a single unset digit. Canonical form is unique
/// per integer, so equality is structural.
///
/// # Serde
///
/// Serializes as its digit string. Deserialization accepts any `0`/`1`
/// string and normalizes it.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Fibo {
    digits: Digits,
}

static ZERO: LazyLock<Fibo> = LazyLock::new(Fibo::new);
static ONE: LazyLock<Fibo> = LazyLock::new(|| Fibo::from(1u64));

/// Shared canonical zero.
#[must_use]
pub fn zero() -> &'static Fibo {
    &ZERO
}

/// Shared canonical one.
#[must_use]
pub fn one() -> &'static Fibo {
    &ONE
}

impl Fibo {
    /// Canonical zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            digits: Digits::zero(),
        }
    }

    /// Parse a raw digit string, most-significant character first.
    ///
    /// The characters are taken as Zeckendorf digits as written, not as a
    /// binary number, and need not be canonical: `"11"` is `1 + 2` and
    /// normalizes to `"100"`.
    pub fn parse(raw: &str) -> Result<Self, MalformedInput> {
        if raw.is_empty() {
            return Err(MalformedInput::new(MalformedInputKind::Empty));
        }
        let mut msd_first = Vec::with_capacity(raw.len());
        for (index, symbol) in raw.chars().enumerate() {
            match symbol {
                '0' => msd_first.push(false),
                '1' => msd_first.push(true),
                _ => return Err(MalformedInput::invalid_digit(symbol, index)),
            }
        }
        msd_first.reverse();
        Ok(Self::from_digits_le(msd_first))
    }

    /// Build from raw little-endian digits, normalizing them.
    #[must_use]
    pub fn from_digits_le(digits: impl IntoIterator<Item = bool>) -> Self {
        let mut digits = Digits::from_raw(digits.into_iter().collect());
        digits.normalize();
        Self { digits }
    }

    /// Number of stored digits. Zero has length 1.
    #[must_use]
    pub fn length(&self) -> usize {
        self.digits.len()
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.digits.is_zero()
    }

    /// Canonical digits, least significant first.
    pub fn digits(&self) -> impl DoubleEndedIterator<Item = bool> + ExactSizeIterator + '_ {
        self.digits.as_slice().iter().copied()
    }

    /// Decoded integer value, or `None` if it does not fit in `u64`.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        weights::decode(self.digits.as_slice())
    }

    /// Add one unit of weight `F(pos+2)` in place.
    pub fn add_bit(&mut self, pos: usize) {
        self.digits.add_unit(pos);
        self.check_canonical();
    }

    pub(crate) fn digit(&self, pos: usize) -> bool {
        self.digits.get(pos)
    }

    pub(crate) fn digits_mut(&mut self) -> &mut Digits {
        &mut self.digits
    }

    pub(crate) fn check_canonical(&self) {
        debug_assert!(
            self.digits.is_canonical(),
            "non-canonical digits {}",
            self.digits.render()
        );
    }
}

impl Default for Fibo {
    fn default() -> Self {
        Self::new()
    }
}

impl From<u64> for Fibo {
    /// Greedy Zeckendorf decomposition: take each weight, largest first,
    /// whenever it still fits. The result is canonical without a separate
    /// normalization pass.
    fn from(value: u64) -> Self {
        let weights = weights::weights_up_to(value);
        let mut raw = vec![false; weights.len()];
        let mut remaining = value;
        for (pos, &weight) in weights.iter().enumerate().rev() {
            if weight <= remaining {
                raw[pos] = true;
                remaining -= weight;
            }
        }
        debug_assert_eq!(remaining, 0);
        let fibo = Self {
            digits: Digits::from_raw(raw),
        };
        fibo.check_canonical();
        fibo
    }
}

macro_rules! from_unsigned {
    ($($ty:ty),*) => {$(
        impl From<$ty> for Fibo {
            fn from(value: $ty) -> Self {
                Self::from(value as u64)
            }
        }
    )*};
}

from_unsigned!(u8, u16, u32, usize);

macro_rules! try_from_signed {
    ($($ty:ty),*) => {$(
        impl TryFrom<$ty> for Fibo {
            type Error = MalformedInput;

            fn try_from(value: $ty) -> Result<Self, Self::Error> {
                u64::try_from(value)
                    .map(Self::from)
                    .map_err(|_| MalformedInput::negative(value as i64))
            }
        }
    )*};
}

try_from_signed!(i8, i16, i32, i64, isize);

impl FromStr for Fibo {
    type Err = MalformedInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Fibo {
    type Error = MalformedInput;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Fibo {
    type Error = MalformedInput;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Fibo> for String {
    fn from(value: Fibo) -> Self {
        value.digits.render()
    }
}

impl fmt::Display for Fibo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.digits.render())
    }
}

impl fmt::Debug for Fibo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Fibo").field(&self.digits.render()).finish()
    }
}
