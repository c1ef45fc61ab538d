// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The Q31.32 value type and its constants.

use bytemuck::{Pod, Zeroable};

use crate::div::div_raw;
use crate::raw;

/// Deterministic signed fixed-point number in Q31.32 format.
///
/// The value is stored in a single `i64`:
///
/// ```text
/// real_value = raw / 2^32
/// ```
///
/// # Reserved codes
///
/// Three raw codes are reserved as sentinels and never produced as an ordinary
/// result by the saturating operations:
///
/// | raw            | meaning                          |
/// |----------------|----------------------------------|
/// | `i64::MAX`     | [`Fix64::POSITIVE_INFINITY`]     |
/// | `i64::MIN + 1` | [`Fix64::NEGATIVE_INFINITY`]     |
/// | `i64::MIN`     | [`Fix64::NAN`]                   |
///
/// The ordinary range is therefore `[Fix64::MIN, Fix64::MAX]`
/// = `[i64::MIN + 2, i64::MAX - 1]`.
///
/// # Determinism contract
///
/// - Equality, ordering and hashing are those of the raw integer.
/// - Every operation is integer-only; identical raw inputs give identical raw
///   outputs on every platform.
/// - The operators `+ - *` wrap silently (two's complement). Saturating
///   behaviour is available through the `overflow_*` methods, and the `fast_*`
///   methods document a caller-guaranteed no-overflow contract.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Pod, Zeroable)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[repr(transparent)]
pub struct Fix64 {
    raw: i64,
}

impl Fix64 {
    /// `0`.
    pub const ZERO: Self = Self::from_raw(0);
    /// `1`.
    pub const ONE: Self = Self::from_raw(raw::ONE);
    /// `0.5`.
    pub const HALF: Self = Self::from_raw(raw::ONE >> 1);
    /// `10`.
    pub const TEN: Self = Self::from_raw(10 * raw::ONE);
    /// Largest ordinary value, `2^31 - 2^-31`.
    pub const MAX: Self = Self::from_raw(raw::MAX);
    /// Smallest ordinary value, `-2^31 + 2^-31`.
    pub const MIN: Self = Self::from_raw(raw::MIN);
    /// Reserved code for positive infinity.
    pub const POSITIVE_INFINITY: Self = Self::from_raw(raw::POSITIVE_INFINITY);
    /// Reserved code for negative infinity.
    pub const NEGATIVE_INFINITY: Self = Self::from_raw(raw::NEGATIVE_INFINITY);
    /// Reserved code for not-a-number.
    pub const NAN: Self = Self::from_raw(raw::NAN);
    /// The resolution of the type, `2^-32`.
    pub const PRECISION: Self = Self::from_raw(1);

    /// π.
    pub const PI: Self = Self::from_raw(raw::PI);
    /// π / 2.
    pub const PI_OVER_2: Self = Self::from_raw(raw::PI_OVER_2);
    /// 2π.
    pub const PI_TIMES_2: Self = Self::from_raw(raw::PI_TIMES_2);
    /// 1 / π.
    pub const PI_INV: Self = Self::from_raw(0x517C_C1B7);
    /// 2 / π.
    pub const PI_OVER_2_INV: Self = Self::from_raw(0xA2F9_836E);
    /// Degrees-to-radians factor, π / 180.
    pub const DEG_TO_RAD: Self = Self::from_raw(div_raw(raw::PI, 180 * raw::ONE));
    /// Radians-to-degrees factor, 180 / π.
    pub const RAD_TO_DEG: Self = Self::from_raw(div_raw(180 * raw::ONE, raw::PI));

    /// ln 2.
    pub const LN2: Self = Self::from_raw(0xB172_17F7);
    /// Exponents at or above this saturate [`Fix64::pow2`].
    pub const LOG2_MAX: Self = Self::from_raw(0x1F_0000_0000);
    /// Exponents at or below this flush [`Fix64::pow2`] to zero.
    pub const LOG2_MIN: Self = Self::from_raw(-0x20_0000_0000);

    /// `10^-1`.
    pub const EN1: Self = Self::from_raw(div_raw(raw::ONE, 10 * raw::ONE));
    /// `10^-2`.
    pub const EN2: Self = Self::from_raw(div_raw(raw::ONE, 100 * raw::ONE));
    /// `10^-3`.
    pub const EN3: Self = Self::from_raw(div_raw(raw::ONE, 1_000 * raw::ONE));
    /// `10^-4`.
    pub const EN4: Self = Self::from_raw(div_raw(raw::ONE, 10_000 * raw::ONE));
    /// `10^-5`.
    pub const EN5: Self = Self::from_raw(div_raw(raw::ONE, 100_000 * raw::ONE));
    /// `10^-6`.
    pub const EN6: Self = Self::from_raw(div_raw(raw::ONE, 1_000_000 * raw::ONE));
    /// `10^-7`.
    pub const EN7: Self = Self::from_raw(div_raw(raw::ONE, 10_000_000 * raw::ONE));
    /// `10^-8`.
    pub const EN8: Self = Self::from_raw(div_raw(raw::ONE, 100_000_000 * raw::ONE));
    /// Tolerance used by callers that need an approximate zero test (`10^-3`).
    pub const EPSILON: Self = Self::EN3;

    /// Table slots per radian: `(LUT_SIZE - 1) / (π/2)`.
    pub const LUT_INTERVAL: Self =
        Self::from_raw(div_raw((raw::LUT_SIZE as i64 - 1) * raw::ONE, raw::PI_OVER_2));

    /// Constructs a value directly from raw Q31.32 bits.
    ///
    /// This is an exact reinterpretation (no scaling). It is the intended entry
    /// point for values read back from a replay log or the network.
    #[must_use]
    pub const fn from_raw(raw: i64) -> Self {
        Self { raw }
    }

    /// Returns the raw Q31.32 integer.
    pub const fn raw(self) -> i64 {
        self.raw
    }

    /// Returns `true` for the [`Fix64::NAN`] code.
    pub const fn is_nan(self) -> bool {
        self.raw == raw::NAN
    }

    /// Returns `true` for either infinity code.
    pub const fn is_infinite(self) -> bool {
        self.raw == raw::POSITIVE_INFINITY || self.raw == raw::NEGATIVE_INFINITY
    }

    /// Returns `-1`, `0` or `1` according to the sign of `self`.
    pub const fn signum(self) -> i32 {
        if self.raw < 0 {
            -1
        } else if self.raw > 0 {
            1
        } else {
            0
        }
    }

    /// Returns `true` if `self` is strictly negative.
    pub const fn is_negative(self) -> bool {
        self.raw < 0
    }

    /// Absolute value. `abs` of the `NAN` code is [`Fix64::MAX`]; `abs(MIN)`
    /// is `MAX` by construction of the range.
    #[must_use]
    pub const fn abs(self) -> Self {
        if self.raw == raw::NAN {
            return Self::MAX;
        }
        self.fast_abs()
    }

    /// Branchless absolute value. Undefined (wraps) for the `NAN` code.
    #[must_use]
    pub const fn fast_abs(self) -> Self {
        let mask = self.raw >> 63;
        Self::from_raw(self.raw.wrapping_add(mask) ^ mask)
    }

    /// Largest integral value `<= self` (clears the fractional bits).
    #[must_use]
    pub const fn floor(self) -> Self {
        Self::from_raw(self.raw & !raw::FRAC_MASK)
    }

    /// Smallest integral value `>= self`.
    #[must_use]
    pub const fn ceil(self) -> Self {
        if self.raw & raw::FRAC_MASK == 0 {
            self
        } else {
            Self::from_raw(self.floor().raw.wrapping_add(raw::ONE))
        }
    }

    /// Rounds to the nearest integral value, ties to even.
    #[must_use]
    pub const fn round(self) -> Self {
        let fractional = self.raw & raw::FRAC_MASK;
        let integral = self.floor();
        let half = raw::ONE >> 1;
        if fractional < half {
            return integral;
        }
        let up = Self::from_raw(integral.raw.wrapping_add(raw::ONE));
        if fractional > half {
            return up;
        }
        if integral.raw & raw::ONE == 0 {
            integral
        } else {
            up
        }
    }

    /// The fractional bits of `self`, always in `[0, 1)`.
    #[must_use]
    pub const fn fract(self) -> Self {
        Self::from_raw(self.raw & raw::FRAC_MASK)
    }

    /// The 8-byte little-endian wire form of the raw integer.
    pub const fn to_le_bytes(self) -> [u8; 8] {
        self.raw.to_le_bytes()
    }

    /// Reads a value from its 8-byte little-endian wire form.
    #[must_use]
    pub const fn from_le_bytes(bytes: [u8; 8]) -> Self {
        Self::from_raw(i64::from_le_bytes(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_have_expected_raw_bits() {
        assert_eq!(Fix64::ONE.raw(), 1_i64 << 32);
        assert_eq!(Fix64::HALF.raw(), 1_i64 << 31);
        assert_eq!(Fix64::MAX.raw(), i64::MAX - 1);
        assert_eq!(Fix64::MIN.raw(), i64::MIN + 2);
        assert_eq!(Fix64::EN1.raw(), 429_496_730);
        assert_eq!(Fix64::EN2.raw(), 42_949_673);
        assert_eq!(Fix64::LUT_INTERVAL.to_i64(), 131_071);
    }

    #[test]
    fn floor_ceil_round_fract() {
        let x = Fix64::from_raw(5 * raw::ONE / 2);
        assert_eq!(x.floor(), Fix64::from_int(2));
        assert_eq!(x.ceil(), Fix64::from_int(3));
        assert_eq!(x.round(), Fix64::from_int(2));
        assert_eq!(x.fract(), Fix64::HALF);

        let y = Fix64::from_raw(7 * raw::ONE / 2);
        assert_eq!(y.round(), Fix64::from_int(4));

        let neg = Fix64::from_raw(-5 * raw::ONE / 2);
        assert_eq!(neg.floor(), Fix64::from_int(-3));
        assert_eq!(neg.ceil(), Fix64::from_int(-2));
        assert_eq!(neg.round(), Fix64::from_int(-2));
    }

    #[test]
    fn abs_saturates_reserved_minimum() {
        assert_eq!(Fix64::NAN.abs(), Fix64::MAX);
        assert_eq!(Fix64::MIN.abs(), Fix64::MAX);
        assert_eq!(Fix64::from_int(-3).abs(), Fix64::from_int(3));
        assert_eq!(Fix64::from_int(-3).fast_abs(), Fix64::from_int(3));
    }

    #[test]
    fn signum_and_sentinels() {
        assert_eq!(Fix64::from_int(-2).signum(), -1);
        assert_eq!(Fix64::ZERO.signum(), 0);
        assert_eq!(Fix64::PRECISION.signum(), 1);
        assert!(Fix64::NAN.is_nan());
        assert!(Fix64::POSITIVE_INFINITY.is_infinite());
        assert!(Fix64::NEGATIVE_INFINITY.is_infinite());
        assert!(!Fix64::MAX.is_infinite());
    }

    #[test]
    fn le_bytes_are_the_raw_integer() {
        let x = Fix64::from_raw(0x0123_4567_89AB_CDEF);
        assert_eq!(x.to_le_bytes(), 0x0123_4567_89AB_CDEF_i64.to_le_bytes());
        assert_eq!(Fix64::from_le_bytes(x.to_le_bytes()), x);
    }

    #[test]
    fn pod_cast_views_raw_integers() {
        let values = [Fix64::ONE, Fix64::from_raw(-7)];
        let raws: &[i64] = bytemuck::cast_slice(&values);
        assert_eq!(raws, &[1_i64 << 32, -7]);
    }
}
