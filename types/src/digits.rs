//! Little-endian digit storage.
//!
//! Index `i` carries weight `F(i+2)`. The store only knows how to grow,
//! read, write and trim; adjacency rules live in [`crate::engine`].

/// Growable boolean digit sequence, least-significant digit first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct Digits(Vec<bool>);

impl Digits {
    /// Single unset digit: the canonical zero.
    pub(crate) fn zero() -> Self {
        Self(vec![false])
    }

    /// Wrap raw little-endian digits. An empty input becomes zero.
    pub(crate) fn from_raw(mut raw: Vec<bool>) -> Self {
        if raw.is_empty() {
            raw.push(false);
        }
        Self(raw)
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    /// Digit at `pos`; positions past the end read as unset.
    pub(crate) fn get(&self, pos: usize) -> bool {
        self.0.get(pos).copied().unwrap_or(false)
    }

    /// Write digit `pos`, growing at the high end when needed.
    pub(crate) fn set(&mut self, pos: usize, value: bool) {
        if pos >= self.0.len() {
            if !value {
                return;
            }
            self.grow_to(pos + 1);
        }
        self.0[pos] = value;
    }

    /// Extend with unset high digits until `len` digits are stored.
    pub(crate) fn grow_to(&mut self, len: usize) {
        if len > self.0.len() {
            self.0.resize(len, false);
        }
    }

    /// Drop leading zeros, keeping at least one digit.
    pub(crate) fn trim(&mut self) {
        let keep = self.0.iter().rposition(|&d| d).map_or(1, |top| top + 1);
        self.0.truncate(keep);
    }

    /// Insert `n` unset digits at the low end.
    pub(crate) fn shift_up(&mut self, n: usize) {
        let len = self.0.len();
        self.grow_to(len + n);
        self.0.rotate_right(n);
    }

    pub(crate) fn is_zero(&self) -> bool {
        !self.0.iter().any(|&d| d)
    }

    pub(crate) fn as_slice(&self) -> &[bool] {
        &self.0
    }

    /// Most-significant-first rendering.
    pub(crate) fn render(&self) -> String {
        self.0
            .iter()
            .rev()
            .map(|&d| if d { '1' } else { '0' })
            .collect()
    }
}
