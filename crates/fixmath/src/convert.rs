// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Explicit conversions, decimal formatting and literal parsing.
//!
//! There are no implicit numeric conversions: every boundary crossing is a
//! named constructor or accessor, so precision loss is visible at the call
//! site. Float conversions are for boundary crossings (config files, debug
//! overlays); values that feed the simulation should be built from integers,
//! ratios, decimal literals or raw bits.

use core::fmt;
use core::str::FromStr;

use crate::div::div_raw;
use crate::error::ParseFix64Error;
use crate::raw;
use crate::Fix64;

/// Fraction digits beyond this are ignored when parsing; they cannot move the
/// result by more than `2^32 / 10^18` of a raw unit.
const MAX_PARSED_FRACTION_DIGITS: u32 = 18;

/// Fraction digits printed by `Display` when no precision is requested.
const DEFAULT_DISPLAY_DIGITS: usize = 10;

impl Fix64 {
    /// Converts an `i32` exactly.
    #[must_use]
    pub const fn from_int(value: i32) -> Self {
        Self::from_raw((value as i64) << raw::FRAC_BITS)
    }

    /// Converts an `i64`, saturating to [`Fix64::MAX`] / [`Fix64::MIN`]
    /// outside the Q31.32 range.
    #[must_use]
    pub const fn from_i64(value: i64) -> Self {
        Self::from_raw(raw::saturate(value.saturating_mul(raw::ONE)))
    }

    /// The exact quotient `num / den` in fixed point (saturating division,
    /// so `den == 0` gives [`Fix64::MAX`]).
    ///
    /// This is the preferred way to write fractional constants:
    /// `Fix64::from_ratio(48, 100)` is bit-identical everywhere, while a float
    /// literal depends on how it was rounded on the way in.
    #[must_use]
    pub const fn from_ratio(num: i64, den: i64) -> Self {
        Self::from_raw(div_raw(
            Self::from_i64(num).raw(),
            Self::from_i64(den).raw(),
        ))
    }

    /// Converts an `f64` by truncating `value * 2^32` toward zero.
    ///
    /// `NaN` maps to [`Fix64::NAN`], infinities to the infinity codes, and
    /// out-of-range finite values saturate.
    #[must_use]
    pub fn from_f64(value: f64) -> Self {
        Self::from_raw(raw::from_f64(value))
    }

    /// Converts an `f32`; see [`Fix64::from_f64`]. Widening to `f64` is exact.
    #[must_use]
    pub fn from_f32(value: f32) -> Self {
        Self::from_f64(f64::from(value))
    }

    /// The nearest `f64` to `self`.
    pub fn to_f64(self) -> f64 {
        raw::to_f64(self.raw())
    }

    /// The nearest `f32` to `self` (single rounding, ties to even).
    pub fn to_f32(self) -> f32 {
        self.raw() as f32 / 4_294_967_296.0_f32
    }

    /// The integer part, dropping the fractional bits (rounds toward negative
    /// infinity, like [`Fix64::floor`]).
    pub const fn to_i64(self) -> i64 {
        self.raw() >> raw::FRAC_BITS
    }

    /// [`Fix64::to_i64`] narrowed to `i32`. Every ordinary value fits.
    pub const fn to_i32(self) -> i32 {
        self.to_i64() as i32
    }
}

#[cfg(feature = "decimal")]
impl Fix64 {
    /// Converts a [`rust_decimal::Decimal`], truncating toward zero at the
    /// `2^-32` resolution.
    pub fn from_decimal(value: rust_decimal::Decimal) -> Result<Self, crate::ConversionError> {
        use rust_decimal::prelude::ToPrimitive;

        let out_of_range = || crate::ConversionError::OutOfRange(value.to_string());
        let scaled = value
            .checked_mul(rust_decimal::Decimal::from(raw::ONE))
            .ok_or_else(out_of_range)?
            .trunc();
        let raw_value = scaled.to_i64().ok_or_else(out_of_range)?;
        if !(raw::MIN..=raw::MAX).contains(&raw_value) {
            return Err(out_of_range());
        }
        Ok(Self::from_raw(raw_value))
    }

    /// Converts to a [`rust_decimal::Decimal`]. Exact for values whose binary
    /// fraction fits in 28 decimal places; the rest round at the last place.
    pub fn to_decimal(self) -> rust_decimal::Decimal {
        rust_decimal::Decimal::from(self.raw()) / rust_decimal::Decimal::from(raw::ONE)
    }
}

impl fmt::Display for Fix64 {
    /// Exact decimal rendering from the raw integer (no float round trip).
    ///
    /// Digits beyond the requested precision are truncated. Without an explicit
    /// precision, up to ten fraction digits are printed with trailing zeros
    /// trimmed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.raw() {
            raw::NAN => return f.pad("NaN"),
            raw::POSITIVE_INFINITY => return f.pad("+Inf"),
            raw::NEGATIVE_INFINITY => return f.pad("-Inf"),
            _ => {}
        }

        let magnitude = self.raw().unsigned_abs();
        let integral = magnitude >> raw::FRAC_BITS;
        let mut fraction = magnitude & (raw::FRAC_MASK as u64);

        let (digits, trim) = match f.precision() {
            Some(p) => (p, false),
            None => (DEFAULT_DISPLAY_DIGITS, true),
        };

        let mut frac_text = String::with_capacity(digits);
        for _ in 0..digits {
            fraction *= 10;
            let digit = (fraction >> raw::FRAC_BITS) as u8;
            fraction &= raw::FRAC_MASK as u64;
            frac_text.push(char::from(b'0' + digit));
        }
        if trim {
            let kept = frac_text.trim_end_matches('0').len();
            frac_text.truncate(kept);
        }

        let shows_nonzero = integral != 0 || frac_text.bytes().any(|b| b != b'0');
        let mut out = String::with_capacity(24);
        if self.raw() < 0 && shows_nonzero {
            out.push('-');
        }
        out.push_str(&integral.to_string());
        if !frac_text.is_empty() {
            out.push('.');
            out.push_str(&frac_text);
        }
        f.pad(&out)
    }
}

impl fmt::Debug for Fix64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fix64")
            .field("value", &format_args!("{self}"))
            .field("raw", &format_args!("{:#018x}", self.raw()))
            .finish()
    }
}

impl FromStr for Fix64 {
    type Err = ParseFix64Error;

    /// Parses a decimal literal such as `"3"`, `"-0.125"` or `"+12.5"`.
    ///
    /// The conversion is exact up to truncation toward zero at the `2^-32`
    /// resolution, with no float round trip.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ParseFix64Error::Empty);
        }

        let (negative, unsigned) = match trimmed.as_bytes()[0] {
            b'-' => (true, &trimmed[1..]),
            b'+' => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let (int_text, frac_text) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        if int_text.is_empty() && frac_text.is_empty() {
            return Err(ParseFix64Error::Empty);
        }
        if let Some(found) = int_text
            .chars()
            .chain(frac_text.chars())
            .find(|c| !c.is_ascii_digit())
        {
            return Err(ParseFix64Error::InvalidDigit {
                input: text.to_owned(),
                found,
            });
        }

        let out_of_range = || ParseFix64Error::OutOfRange(text.to_owned());

        let mut integral: i128 = 0;
        for b in int_text.bytes() {
            integral = integral * 10 + i128::from(b - b'0');
            if integral > i128::from(i32::MAX) + 1 {
                return Err(out_of_range());
            }
        }

        let mut numerator: i128 = 0;
        let mut denominator: i128 = 1;
        for b in frac_text.bytes().take(MAX_PARSED_FRACTION_DIGITS as usize) {
            numerator = numerator * 10 + i128::from(b - b'0');
            denominator *= 10;
        }
        let fraction_raw = (numerator << raw::FRAC_BITS) / denominator;

        let magnitude = (integral << raw::FRAC_BITS) + fraction_raw;
        let signed = if negative { -magnitude } else { magnitude };
        if signed > i128::from(raw::MAX) || signed < i128::from(raw::MIN) {
            return Err(out_of_range());
        }
        Ok(Self::from_raw(signed as i64))
    }
}
