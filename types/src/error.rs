//! Construction errors.

use std::fmt;

use thiserror::Error;

/// What made a constructor input unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedInputKind {
    /// The digit string had no characters at all.
    Empty,
    /// A character other than `0` or `1`, at a 0-based char index counted
    /// from the most-significant end.
    InvalidDigit { symbol: char, index: usize },
    /// A native integer below zero.
    Negative { value: i64 },
}

impl fmt::Display for MalformedInputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedInputKind::Empty => f.write_str("digit string is empty"),
            MalformedInputKind::InvalidDigit { symbol, index } => {
                write!(f, "invalid digit {symbol:?} at index {index}; expected '0' or '1'")
            }
            MalformedInputKind::Negative { value } => {
                write!(f, "negative value {value} has no Fibonacci representation")
            }
        }
    }
}

/// The single error raised by `Fibo` constructors.
///
/// Construction is atomic: when this is returned no value was built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed input: {kind}")]
pub struct MalformedInput {
    kind: MalformedInputKind,
}

impl MalformedInput {
    #[must_use]
    pub const fn new(kind: MalformedInputKind) -> Self {
        Self { kind }
    }

    #[must_use]
    pub const fn kind(&self) -> MalformedInputKind {
        self.kind
    }

    pub(crate) const fn invalid_digit(symbol: char, index: usize) -> Self {
        Self::new(MalformedInputKind::InvalidDigit { symbol, index })
    }

    pub(crate) const fn negative(value: i64) -> Self {
        Self::new(MalformedInputKind::Negative { value })
    }
}
