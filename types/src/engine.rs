//! Carry resolution.
//!
//! This is the only code that reasons about adjacency. Everything above it
//! either hands over raw digits for [`Digits::normalize`] or adds value one
//! Fibonacci unit at a time through [`Digits::add_unit`].
//!
//! Both rely on two identities, written in digit positions (index `i` has
//! weight `F(i+2)`):
//!
//! ```text
//! d[i] + d[i+1] = d[i+2]              F(k) + F(k+1) = F(k+2)
//! 2 * d[i]      = d[i+1] + d[i-2]     2F(k) = F(k+1) + F(k-2)
//! ```

use crate::digits::Digits;

impl Digits {
    /// Resolve an adjacent pair starting at `pos`, then keep resolving the
    /// pair that the new high digit may form, until the cascade settles.
    ///
    /// Returns how many pairs were folded.
    pub(crate) fn resolve_pair(&mut self, pos: usize) -> usize {
        let mut pos = pos;
        let mut folded = 0;
        while self.get(pos) && self.get(pos + 1) {
            self.set(pos, false);
            self.set(pos + 1, false);
            self.set(pos + 2, true);
            folded += 1;
            pos += 2;
        }
        if folded > 1 {
            tracing::trace!(folded, top = pos, "carry cascade");
        }
        folded
    }

    /// Rewrite an arbitrary digit pattern into canonical form.
    ///
    /// Positions are visited from the top down. Once a position has been
    /// visited no adjacent pair exists at or above it, so a cascade started
    /// lower can only run through digits that are already settled.
    pub(crate) fn normalize(&mut self) {
        let mut folded = 0;
        for pos in (0..self.len()).rev() {
            folded += self.resolve_pair(pos);
        }
        self.trim();
        tracing::trace!(folded, len = self.len(), "normalized");
    }

    /// Add one unit of weight `F(pos+2)`.
    ///
    /// Expects canonical digits and leaves them canonical. Collisions are
    /// pushed downward with an explicit carry position, so the call depth
    /// stays flat however long the chain gets.
    pub(crate) fn add_unit(&mut self, pos: usize) {
        let mut carry = pos;
        let mut collisions = 0usize;
        loop {
            if !self.get(carry) {
                self.set(carry, true);
                self.resolve_pair(carry);
                if carry > 0 {
                    self.resolve_pair(carry - 1);
                }
                break;
            }

            collisions += 1;
            // Canonical input means the digit above a set digit is clear.
            debug_assert!(!self.get(carry + 1), "add_unit on non-canonical digits");
            self.set(carry, false);
            self.set(carry + 1, true);
            self.resolve_pair(carry + 1);

            carry = match carry {
                // F(2) + F(2) = F(3): fully absorbed.
                0 => break,
                // F(3) + F(3) = F(4) + F(2).
                1 => 0,
                _ => carry - 2,
            };
        }
        self.trim();
        if collisions > 0 {
            tracing::trace!(pos, collisions, "unit carried");
        }
    }

    /// True when no two adjacent digits are set and there is no leading zero.
    pub(crate) fn is_canonical(&self) -> bool {
        let digits = self.as_slice();
        let no_pairs = digits.windows(2).all(|w| !(w[0] && w[1]));
        let minimal = digits.len() == 1 || digits.last().copied().unwrap_or(false);
        no_pairs && minimal
    }
}
