// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Bit-wise long division for Q31.32.
//!
//! The quotient is built from the top down without a 128-bit intermediate:
//! the remainder is shifted left into its own leading-zero run, one native
//! `u64` division produces the next block of quotient bits, and the loop
//! continues until the remainder is exhausted or every bit position (down to
//! one guard bit below the fractional LSB) has been produced. The guard bit
//! rounds half-up.

use crate::raw;

/// Raw Q31.32 division.
///
/// - A zero divisor saturates to `MAX` regardless of the dividend.
/// - Quotient overflow saturates to `MAX`/`MIN` according to the operand signs.
/// - The result never lands on a reserved code: magnitudes are capped at `MAX`,
///   so the most negative result is `-MAX == MIN`.
pub(crate) const fn div_raw(x: i64, y: i64) -> i64 {
    if y == 0 {
        return raw::MAX;
    }

    let negative = (x ^ y) < 0;
    let mut remainder = x.unsigned_abs();
    let mut divider = y.unsigned_abs();
    let mut quotient: u64 = 0;
    // One position above the integer bits, plus one guard bit below the LSB.
    let mut bit_pos: i32 = (raw::NUM_BITS / 2 + 1) as i32;

    // A divider that is a multiple of 2^4 can be pre-shifted.
    while divider & 0xF == 0 && bit_pos >= 4 {
        divider >>= 4;
        bit_pos -= 4;
    }

    while remainder != 0 && bit_pos >= 0 {
        let mut shift = remainder.leading_zeros() as i32;
        if shift > bit_pos {
            shift = bit_pos;
        }
        remainder <<= shift;
        bit_pos -= shift;

        let div = remainder / divider;
        remainder %= divider;
        quotient = quotient.wrapping_add(div << bit_pos);

        // Quotient bits above the representable range.
        if div & !(u64::MAX >> bit_pos) != 0 {
            return if negative { raw::MIN } else { raw::MAX };
        }

        remainder <<= 1;
        bit_pos -= 1;
    }

    // Round half-up on the guard bit: (q + 1) >> 1 without the carry-out.
    let magnitude = (quotient >> 1) + (quotient & 1);
    if magnitude > raw::MAX as u64 {
        return if negative { raw::MIN } else { raw::MAX };
    }
    let magnitude = magnitude as i64;
    if negative {
        -magnitude
    } else {
        magnitude
    }
}
