//! Arithmetic, digit-wise combination, shifting and ordering.
//!
//! `&`, `|` and `^` combine the Zeckendorf digit arrays position by position.
//! They are not the integer bitwise operators: `4 | 1` is `"101" | "1"`,
//! which stays `"101"`.

use std::cmp::Ordering;
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Shl,
    ShlAssign,
};

use crate::fibo::Fibo;

impl Fibo {
    fn combine(&mut self, rhs: &Fibo, op: impl Fn(bool, bool) -> bool) {
        let len = self.length().max(rhs.length());
        let digits = self.digits_mut();
        digits.grow_to(len);
        for pos in 0..len {
            let value = op(digits.get(pos), rhs.digit(pos));
            digits.set(pos, value);
        }
    }
}

impl AddAssign<&Fibo> for Fibo {
    fn add_assign(&mut self, rhs: &Fibo) {
        for (pos, set) in rhs.digits().enumerate() {
            if set {
                self.add_bit(pos);
            }
        }
    }
}

impl BitAndAssign<&Fibo> for Fibo {
    fn bitand_assign(&mut self, rhs: &Fibo) {
        // A subset of canonical digits cannot hold an adjacent pair.
        self.combine(rhs, |a, b| a && b);
        self.digits_mut().trim();
        self.check_canonical();
    }
}

impl BitOrAssign<&Fibo> for Fibo {
    fn bitor_assign(&mut self, rhs: &Fibo) {
        self.combine(rhs, |a, b| a || b);
        self.digits_mut().normalize();
        self.check_canonical();
    }
}

impl BitXorAssign<&Fibo> for Fibo {
    fn bitxor_assign(&mut self, rhs: &Fibo) {
        self.combine(rhs, |a, b| a != b);
        self.digits_mut().normalize();
        self.check_canonical();
    }
}

impl ShlAssign<usize> for Fibo {
    /// Move every digit up `n` positions, filling the low end with zeros.
    ///
    /// This relabels digit weights; it is not multiplication by any fixed
    /// factor. Zero stays zero.
    fn shl_assign(&mut self, n: usize) {
        if n == 0 || self.is_zero() {
            return;
        }
        self.digits_mut().shift_up(n);
        self.check_canonical();
    }
}

impl Shl<usize> for Fibo {
    type Output = Fibo;

    fn shl(mut self, n: usize) -> Fibo {
        self <<= n;
        self
    }
}

impl Shl<usize> for &Fibo {
    type Output = Fibo;

    fn shl(self, n: usize) -> Fibo {
        self.clone() << n
    }
}

macro_rules! forward_binop {
    ($Trait:ident, $method:ident, $AssignTrait:ident, $assign:ident) => {
        impl $AssignTrait<Fibo> for Fibo {
            fn $assign(&mut self, rhs: Fibo) {
                self.$assign(&rhs);
            }
        }

        impl $Trait<&Fibo> for Fibo {
            type Output = Fibo;

            fn $method(mut self, rhs: &Fibo) -> Fibo {
                self.$assign(rhs);
                self
            }
        }

        impl $Trait<Fibo> for Fibo {
            type Output = Fibo;

            fn $method(mut self, rhs: Fibo) -> Fibo {
                self.$assign(&rhs);
                self
            }
        }

        impl $Trait<&Fibo> for &Fibo {
            type Output = Fibo;

            fn $method(self, rhs: &Fibo) -> Fibo {
                self.clone().$method(rhs)
            }
        }

        impl $Trait<Fibo> for &Fibo {
            type Output = Fibo;

            fn $method(self, rhs: Fibo) -> Fibo {
                self.clone().$method(&rhs)
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign);
forward_binop!(BitAnd, bitand, BitAndAssign, bitand_assign);
forward_binop!(BitOr, bitor, BitOrAssign, bitor_assign);
forward_binop!(BitXor, bitxor, BitXorAssign, bitxor_assign);

impl Ord for Fibo {
    /// Canonical values carry no leading zeros, so a longer value is
    /// always larger; equal lengths compare from the top digit down.
    fn cmp(&self, other: &Self) -> Ordering {
        self.length().cmp(&other.length()).then_with(|| {
            self.digits()
                .rev()
                .zip(other.digits().rev())
                .map(|(a, b)| a.cmp(&b))
                .find(|ord| ord.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }
}

impl PartialOrd for Fibo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
