//! Operand parsing and binary expression evaluation.

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};
use fibo_types::Fibo;

/// Prefix marking a decimal operand, e.g. `#42`.
const DECIMAL_PREFIX: char = '#';

/// Largest digit shift `eval` accepts.
pub const MAX_SHIFT: usize = 1 << 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    And,
    Or,
    Xor,
    Shl,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl FromStr for Op {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "+" => Op::Add,
            "&" => Op::And,
            "|" => Op::Or,
            "^" => Op::Xor,
            "<<" => Op::Shl,
            "==" => Op::Eq,
            "!=" => Op::Ne,
            "<" => Op::Lt,
            "<=" => Op::Le,
            ">" => Op::Gt,
            ">=" => Op::Ge,
            other => bail!("unknown operator '{other}'"),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Value(Fibo),
    Truth(bool),
}

impl Outcome {
    /// Render the result, optionally followed by its decimal value.
    #[must_use]
    pub fn render(&self, decimal: bool) -> String {
        match self {
            Outcome::Value(value) => render_value(value, decimal),
            Outcome::Truth(truth) => truth.to_string(),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}

#[must_use]
pub fn render_value(value: &Fibo, decimal: bool) -> String {
    match value.to_u64() {
        Some(n) if decimal => format!("{value} (= {n})"),
        _ => value.to_string(),
    }
}

/// Digit string, or a decimal integer after `#`.
pub fn parse_operand(raw: &str) -> Result<Fibo> {
    let parsed = match raw.strip_prefix(DECIMAL_PREFIX) {
        Some(decimal) => parse_decimal(decimal),
        None => Fibo::parse(raw).map_err(anyhow::Error::from),
    };
    parsed.with_context(|| format!("invalid operand '{raw}'"))
}

/// Unsigned values take the full `u64` range; a leading `-` goes through the
/// signed conversion so it is reported as a negative input.
fn parse_decimal(decimal: &str) -> Result<Fibo> {
    let not_decimal = || format!("'{decimal}' is not a decimal integer");
    if decimal.starts_with('-') {
        let n: i64 = decimal.parse().with_context(not_decimal)?;
        Ok(Fibo::try_from(n)?)
    } else {
        let n: u64 = decimal.parse().with_context(not_decimal)?;
        Ok(Fibo::from(n))
    }
}

fn parse_shift(raw: &str) -> Result<usize> {
    let n: usize = raw
        .parse()
        .map_err(|_| anyhow!("shift count '{raw}' is not a non-negative integer"))?;
    if n > MAX_SHIFT {
        bail!("shift count {n} exceeds the limit of {MAX_SHIFT}");
    }
    Ok(n)
}

pub fn evaluate(lhs: &str, op: Op, rhs: &str) -> Result<Outcome> {
    let lhs = parse_operand(lhs)?;
    let operand = || parse_operand(rhs);
    tracing::debug!(%lhs, ?op, rhs, "evaluate");
    Ok(match op {
        Op::Shl => Outcome::Value(lhs << parse_shift(rhs)?),
        Op::Add => Outcome::Value(lhs + operand()?),
        Op::And => Outcome::Value(lhs & operand()?),
        Op::Or => Outcome::Value(lhs | operand()?),
        Op::Xor => Outcome::Value(lhs ^ operand()?),
        Op::Eq => Outcome::Truth(lhs == operand()?),
        Op::Ne => Outcome::Truth(lhs != operand()?),
        Op::Lt => Outcome::Truth(lhs < operand()?),
        Op::Le => Outcome::Truth(lhs <= operand()?),
        Op::Gt => Outcome::Truth(lhs > operand()?),
        Op::Ge => Outcome::Truth(lhs >= operand()?),
    })
}
