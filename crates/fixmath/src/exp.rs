// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Binary logarithm, binary exponential and the functions built on them.

use crate::error::MathError;
use crate::raw;
use crate::Fix64;

impl Fix64 {
    /// Base-2 logarithm, at least nine decimals of accuracy.
    ///
    /// Turner's binary logarithm: normalise into `[1, 2)` while counting the
    /// exponent, then square 32 times, emitting one fractional bit per step.
    ///
    /// # Errors
    ///
    /// [`MathError::NonPositiveLog`] when `self <= 0`.
    pub fn log2(self) -> Result<Self, MathError> {
        if self.raw() <= 0 {
            return Err(MathError::NonPositiveLog(self));
        }

        let mut bit: i64 = 1 << (raw::FRAC_BITS - 1);
        let mut y: i64 = 0;

        let mut x = self.raw();
        while x < raw::ONE {
            x <<= 1;
            y -= raw::ONE;
        }
        while x >= raw::ONE << 1 {
            x >>= 1;
            y += raw::ONE;
        }

        let mut z = Self::from_raw(x);
        for _ in 0..raw::FRAC_BITS {
            z = z.fast_mul(z);
            if z.raw() >= raw::ONE << 1 {
                z = Self::from_raw(z.raw() >> 1);
                y += bit;
            }
            bit >>= 1;
        }

        Ok(Self::from_raw(y))
    }

    /// `2^self`, at least six decimals of accuracy.
    ///
    /// The fractional part is summed as the power series of `e^(f·ln 2)` until
    /// a term vanishes; the integer part is applied as a shift. Negative
    /// exponents go through the reciprocal.
    ///
    /// - `self <= LOG2_MIN` gives zero.
    /// - `self >= LOG2_MAX` saturates to [`Fix64::MAX`]; the negative mirror
    ///   gives `1 / MAX`.
    pub fn pow2(self) -> Self {
        if self.raw() == 0 {
            return Self::ONE;
        }
        if self <= Self::LOG2_MIN {
            return Self::ZERO;
        }

        let negative = self.is_negative();
        let x = if negative { -self } else { self };

        if x == Self::ONE {
            return if negative { Self::HALF } else { Self::from_int(2) };
        }
        if x >= Self::LOG2_MAX {
            return if negative {
                Self::ONE / Self::MAX
            } else {
                Self::MAX
            };
        }

        let integer_part = x.to_i64();
        let fraction = x.fract();

        let mut result = Self::ONE;
        let mut term = Self::ONE;
        let mut i: i32 = 1;
        while term.raw() != 0 {
            term = fraction.fast_mul(term).fast_mul(Self::LN2) / Self::from_int(i);
            result += term;
            i += 1;
        }

        let result = Self::from_raw(result.raw() << integer_part);
        if negative {
            Self::ONE / result
        } else {
            result
        }
    }

    /// Natural logarithm, `log2(x) · ln 2`, at least seven decimals of accuracy.
    ///
    /// # Errors
    ///
    /// [`MathError::NonPositiveLog`] when `self <= 0`.
    pub fn ln(self) -> Result<Self, MathError> {
        Ok(self.log2()?.fast_mul(Self::LN2))
    }

    /// `self` raised to `exponent`, about five significant digits.
    ///
    /// - `1^e` and `b^0` are exactly one.
    /// - `0^e` is zero for positive `e` and saturates to [`Fix64::MAX`] for
    ///   negative `e`.
    /// - Results beyond the range saturate to [`Fix64::MAX`]; vanishing ones
    ///   are zero.
    ///
    /// # Errors
    ///
    /// [`MathError::NonPositiveLog`] for a negative base (with a non-zero
    /// exponent).
    pub fn pow(self, exponent: Self) -> Result<Self, MathError> {
        if self == Self::ONE || exponent.raw() == 0 {
            return Ok(Self::ONE);
        }
        if self.raw() == 0 {
            return Ok(if exponent.is_negative() {
                Self::MAX
            } else {
                Self::ZERO
            });
        }

        let log2 = self.log2()?;
        Ok(exponent.overflow_mul(log2).pow2())
    }
}
