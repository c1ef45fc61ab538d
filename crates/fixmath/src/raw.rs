// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Raw Q31.32 encoding shared by the runtime and the table generator.
//!
//! This file is compiled twice:
//! - as `fixmath::raw` inside the library, and
//! - as a `#[path]` module inside `build.rs`, which uses it to quantize the
//!   lookup tables.
//!
//! Both sides therefore agree bit-for-bit on how a real number becomes a raw
//! integer. Keep this module free of crate-internal imports.
//!
//! The representation is an `i64` storing an integer scaled by `2^32`:
//! `real_value = raw / 2^32`.

/// Number of fractional bits in the Q31.32 encoding.
pub(crate) const FRAC_BITS: u32 = 32;

/// Total bit width of the raw integer.
pub(crate) const NUM_BITS: u32 = 64;

/// The raw integer corresponding to `1.0`.
pub(crate) const ONE: i64 = 1_i64 << FRAC_BITS;

/// Mask selecting the fractional bits of a raw value.
pub(crate) const FRAC_MASK: i64 = ONE - 1;

/// Reserved code: positive infinity.
pub(crate) const POSITIVE_INFINITY: i64 = i64::MAX;

/// Reserved code: negative infinity.
pub(crate) const NEGATIVE_INFINITY: i64 = i64::MIN + 1;

/// Reserved code: not-a-number.
pub(crate) const NAN: i64 = i64::MIN;

/// Largest ordinary value.
pub(crate) const MAX: i64 = i64::MAX - 1;

/// Smallest ordinary value.
pub(crate) const MIN: i64 = i64::MIN + 2;

pub(crate) const PI: i64 = 0x3_243F_6A88;
pub(crate) const PI_TIMES_2: i64 = 0x6_487E_D511;
pub(crate) const PI_OVER_2: i64 = 0x1_921F_B544;

/// Number of entries in each lookup table.
///
/// Chosen so that `angle_raw >> 15` lands on the nearest table slot for any
/// angle in `[0, π/2)`.
pub(crate) const LUT_SIZE: usize = (PI_OVER_2 >> 15) as usize;

/// Bytes per serialized table entry (little-endian `i64`).
pub(crate) const LUT_ENTRY_BYTES: usize = 8;

const SCALE_F64: f64 = 4_294_967_296.0;

/// Clamps a raw value into the ordinary range `[MIN, MAX]`, folding the
/// reserved codes onto the nearest bound.
pub(crate) const fn saturate(raw: i64) -> i64 {
    if raw > MAX {
        MAX
    } else if raw < MIN {
        MIN
    } else {
        raw
    }
}

/// Converts an `f64` to raw Q31.32 by truncating `value * 2^32` toward zero.
///
/// Semantics:
/// - `NaN` maps to the `NAN` code.
/// - `+∞`/`-∞` map to the infinity codes.
/// - Finite values outside the range saturate to `MAX`/`MIN`.
///
/// Scaling by a power of two is exact in binary floating point, so the only
/// rounding step is the final truncation, which Rust defines identically on
/// every target.
pub(crate) fn from_f64(value: f64) -> i64 {
    if value.is_nan() {
        return NAN;
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            POSITIVE_INFINITY
        } else {
            NEGATIVE_INFINITY
        };
    }

    let scaled = value * SCALE_F64;
    // `MAX as f64` and `MIN as f64` both round to ±2^63.
    if scaled >= MAX as f64 {
        MAX
    } else if scaled <= MIN as f64 {
        MIN
    } else {
        scaled as i64
    }
}

/// Converts raw Q31.32 to the nearest `f64`.
pub(crate) fn to_f64(raw: i64) -> f64 {
    raw as f64 / SCALE_F64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lut_size_matches_quarter_turn_resolution() {
        assert_eq!(LUT_SIZE, 205_887);
    }

    #[test]
    fn from_f64_truncates_toward_zero() {
        assert_eq!(from_f64(1.5), ONE + ONE / 2);
        assert_eq!(from_f64(-1.0), -ONE);
        // 2^-33 is below the resolution and truncates away.
        assert_eq!(from_f64(1.0 / 8_589_934_592.0), 0);
        assert_eq!(from_f64(-1.0 / 8_589_934_592.0), 0);
    }

    #[test]
    fn from_f64_maps_non_finite_to_reserved_codes() {
        assert_eq!(from_f64(f64::NAN), NAN);
        assert_eq!(from_f64(f64::INFINITY), POSITIVE_INFINITY);
        assert_eq!(from_f64(f64::NEG_INFINITY), NEGATIVE_INFINITY);
        assert_eq!(from_f64(1.0e300), MAX);
        assert_eq!(from_f64(-1.0e300), MIN);
    }

    #[test]
    fn saturate_folds_reserved_codes() {
        assert_eq!(saturate(POSITIVE_INFINITY), MAX);
        assert_eq!(saturate(NEGATIVE_INFINITY), MIN);
        assert_eq!(saturate(NAN), MIN);
        assert_eq!(saturate(42), 42);
    }
}
