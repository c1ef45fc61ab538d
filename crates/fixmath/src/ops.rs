// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core arithmetic in three tiers.
//!
//! | tier                | add / sub / mul                   | overflow                    |
//! |---------------------|-----------------------------------|-----------------------------|
//! | default (operators) | `+` `-` `*`                       | wraps (two's complement)    |
//! | overflow-checked    | `overflow_add/sub/mul`            | saturates to `MAX` / `MIN`  |
//! | fast                | `fast_add/sub/mul`                | caller guarantees none      |
//!
//! Division (`/`) is always saturating and has no fast tier. Remainder (`%`)
//! guards the one trapping input pair; [`Fix64::fast_rem`] does not.

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

use crate::div::div_raw;
use crate::raw;
use crate::Fix64;

/// The four 32x32 partial products of a Q31.32 multiply, already aligned.
struct Partials {
    /// `(lo * lo) >> 32`.
    lo: i64,
    lo_hi: i64,
    hi_lo: i64,
    /// `hi * hi`, not yet shifted into place.
    hi_hi: i64,
}

const fn partials(x: i64, y: i64) -> Partials {
    let xlo = (x & 0xFFFF_FFFF) as u64;
    let xhi = x >> raw::FRAC_BITS;
    let ylo = (y & 0xFFFF_FFFF) as u64;
    let yhi = y >> raw::FRAC_BITS;

    Partials {
        lo: ((xlo * ylo) >> raw::FRAC_BITS) as i64,
        lo_hi: (xlo as i64).wrapping_mul(yhi),
        hi_lo: xhi.wrapping_mul(ylo as i64),
        hi_hi: xhi.wrapping_mul(yhi),
    }
}

/// Raw multiply with silent wraparound.
pub(crate) const fn mul_raw(x: i64, y: i64) -> i64 {
    let p = partials(x, y);
    p.lo.wrapping_add(p.lo_hi)
        .wrapping_add(p.hi_lo)
        .wrapping_add(p.hi_hi << raw::FRAC_BITS)
}

/// `x + y`, flagging a carry into the sign bit.
const fn add_flagging_carry(x: i64, y: i64, overflow: bool) -> (i64, bool) {
    let sum = x.wrapping_add(y);
    (sum, overflow | ((x ^ y ^ sum) & i64::MIN != 0))
}

/// Raw multiply saturating to `MAX`/`MIN` on overflow.
pub(crate) const fn overflow_mul_raw(x: i64, y: i64) -> i64 {
    let p = partials(x, y);

    let (sum, overflow) = add_flagging_carry(p.lo, p.lo_hi, false);
    let (sum, overflow) = add_flagging_carry(sum, p.hi_lo, overflow);
    let (sum, overflow) = add_flagging_carry(sum, p.hi_hi << raw::FRAC_BITS, overflow);

    let signs_equal = (x ^ y) & i64::MIN == 0;

    // Equal operand signs must give a non-negative product and vice versa.
    if signs_equal {
        if sum < 0 || (overflow && x > 0) {
            return raw::MAX;
        }
    } else if sum > 0 {
        return raw::MIN;
    }

    // The top 32 bits of hi*hi are dropped by the shift; anything other than
    // sign extension there is lost magnitude.
    let top_carry = p.hi_hi >> raw::FRAC_BITS;
    if top_carry != 0 && top_carry != -1 {
        return if signs_equal { raw::MAX } else { raw::MIN };
    }

    // Mixed signs, both magnitudes above one: the product must be below the
    // negative operand.
    if !signs_equal {
        let (pos_op, neg_op) = if x > y { (x, y) } else { (y, x) };
        if sum > neg_op && neg_op < -raw::ONE && pos_op > raw::ONE {
            return raw::MIN;
        }
    }

    raw::saturate(sum)
}

impl Fix64 {
    /// Adds with overflow detection: if both operands share a sign and the
    /// sum does not, the result saturates to [`Fix64::MAX`] / [`Fix64::MIN`].
    #[must_use]
    pub const fn overflow_add(self, rhs: Self) -> Self {
        let x = self.raw();
        let y = rhs.raw();
        let sum = x.wrapping_add(y);
        if (!(x ^ y) & (x ^ sum)) & i64::MIN != 0 {
            return if x > 0 { Self::MAX } else { Self::MIN };
        }
        Self::from_raw(raw::saturate(sum))
    }

    /// Subtracts with overflow detection, saturating like [`Fix64::overflow_add`].
    #[must_use]
    pub const fn overflow_sub(self, rhs: Self) -> Self {
        let x = self.raw();
        let y = rhs.raw();
        let diff = x.wrapping_sub(y);
        if ((x ^ y) & (x ^ diff)) & i64::MIN != 0 {
            return if x < 0 { Self::MIN } else { Self::MAX };
        }
        Self::from_raw(raw::saturate(diff))
    }

    /// Multiplies with overflow detection, saturating to [`Fix64::MAX`] /
    /// [`Fix64::MIN`].
    #[must_use]
    pub const fn overflow_mul(self, rhs: Self) -> Self {
        Self::from_raw(overflow_mul_raw(self.raw(), rhs.raw()))
    }

    /// Adds without overflow checking. The caller guarantees the sum is in range.
    #[must_use]
    pub const fn fast_add(self, rhs: Self) -> Self {
        Self::from_raw(self.raw().wrapping_add(rhs.raw()))
    }

    /// Subtracts without overflow checking. The caller guarantees the
    /// difference is in range.
    #[must_use]
    pub const fn fast_sub(self, rhs: Self) -> Self {
        Self::from_raw(self.raw().wrapping_sub(rhs.raw()))
    }

    /// Multiplies without overflow checking. The caller guarantees the product
    /// is in range.
    #[must_use]
    pub const fn fast_mul(self, rhs: Self) -> Self {
        Self::from_raw(mul_raw(self.raw(), rhs.raw()))
    }

    /// Saturating division; identical to the `/` operator but usable in
    /// `const` contexts.
    #[must_use]
    pub const fn const_div(self, rhs: Self) -> Self {
        Self::from_raw(div_raw(self.raw(), rhs.raw()))
    }

    /// Guarded remainder; identical to the `%` operator.
    ///
    /// Returns zero for the two inputs the raw remainder cannot handle: a zero
    /// divisor, and the `NAN` code divided by a raw `-1`.
    #[must_use]
    pub const fn const_rem(self, rhs: Self) -> Self {
        match self.raw().checked_rem(rhs.raw()) {
            Some(r) => Self::from_raw(r),
            None => Self::ZERO,
        }
    }

    /// Unguarded remainder.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero, or if `self` is [`Fix64::NAN`] and `rhs` is
    /// `Fix64::from_raw(-1)`. Callers must avoid both.
    #[must_use]
    pub const fn fast_rem(self, rhs: Self) -> Self {
        Self::from_raw(self.raw() % rhs.raw())
    }
}

impl Add for Fix64 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.fast_add(rhs)
    }
}

impl Sub for Fix64 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.fast_sub(rhs)
    }
}

impl Mul for Fix64 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.fast_mul(rhs)
    }
}

impl Div for Fix64 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self.const_div(rhs)
    }
}

impl Rem for Fix64 {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self {
        self.const_rem(rhs)
    }
}

impl Neg for Fix64 {
    type Output = Self;

    /// `-NAN` is defined as [`Fix64::MAX`].
    fn neg(self) -> Self {
        if self.raw() == raw::NAN {
            Self::MAX
        } else {
            Self::from_raw(-self.raw())
        }
    }
}

impl AddAssign for Fix64 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Fix64 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Fix64 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Fix64 {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl RemAssign for Fix64 {
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}
