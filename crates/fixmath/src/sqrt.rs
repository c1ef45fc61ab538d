// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Digit-by-digit square root over the raw magnitude.

use crate::error::MathError;
use crate::raw;
use crate::Fix64;

/// Raw square root of a non-negative Q31.32 value.
///
/// The classic base-4 digit-by-digit method needs `2 * 64` bits of radicand to
/// produce a 64-bit Q31.32 result. Instead it runs twice: the first pass yields
/// the integer half of the root, then remainder and partial root are rescaled
/// by `2^32` and the second pass yields the fractional half. The last step
/// rounds to nearest.
const fn sqrt_raw(value: u64) -> u64 {
    const HALF_WIDTH: u32 = raw::NUM_BITS / 2;

    let mut num = value;
    let mut result: u64 = 0;
    let mut bit: u64 = 1 << (raw::NUM_BITS - 2);
    while bit > num {
        bit >>= 2;
    }

    let mut pass = 0;
    while pass < 2 {
        while bit != 0 {
            if num >= result + bit {
                num -= result + bit;
                result = (result >> 1) + bit;
            } else {
                result >>= 1;
            }
            bit >>= 2;
        }

        if pass == 0 {
            if num > (1_u64 << HALF_WIDTH) - 1 {
                // `num` cannot take a 32-bit shift. Fold in the next digit by
                // hand: num - (result + 0.5)^2 + result^2 = num - result - 0.5.
                num -= result;
                num = (num << HALF_WIDTH).wrapping_sub(0x8000_0000);
                result = (result << HALF_WIDTH) + 0x8000_0000;
            } else {
                num <<= HALF_WIDTH;
                result <<= HALF_WIDTH;
            }
            bit = 1 << (HALF_WIDTH - 2);
        }
        pass += 1;
    }

    if num > result {
        result += 1;
    }
    result
}

impl Fix64 {
    /// Square root, correctly rounded to the nearest raw unit.
    ///
    /// # Errors
    ///
    /// [`MathError::NegativeSqrt`] when `self < 0`.
    pub fn sqrt(self) -> Result<Self, MathError> {
        if self.is_negative() {
            return Err(MathError::NegativeSqrt(self));
        }
        Ok(Self::from_raw(sqrt_raw(self.raw() as u64) as i64))
    }
}
