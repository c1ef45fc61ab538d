// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Trigonometry over raw fixed-point radians.
//!
//! Strategy:
//! - range-reduce into `[0, π/2)` with two mirror flags ([`clamp_to_first_quadrant`])
//! - look up the quarter-wave tables from [`crate::lut`]
//! - linearly interpolate between the nearest slot and its neighbour
//! - apply the flips to reconstruct the full wave
//!
//! `atan` is a series expansion and `atan2` a rational approximation; neither
//! touches a table. `acos` is derived from `atan` and `sqrt`, with a table
//! lookup offered as [`Fix64::fast_acos`].

use crate::error::MathError;
use crate::lut::{self, Lut, LUT_SIZE};
use crate::raw;
use crate::Fix64;

const LAST_INDEX: i64 = LUT_SIZE as i64 - 1;

/// An angle reduced into the first quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadrantAngle {
    /// The reduced angle, in `[0, π/2)`.
    pub angle: Fix64,
    /// The original angle lies in the second or fourth quadrant: read the
    /// table right-to-left.
    pub flip_horizontal: bool,
    /// The original angle lies in the third or fourth quadrant: negate the
    /// result.
    pub flip_vertical: bool,
}

/// Reduces `angle` modulo 2π and folds it into `[0, π/2)`.
///
/// Only one modulo is taken; the π and π/2 reductions are single subtractions.
pub fn clamp_to_first_quadrant(angle: Fix64) -> QuadrantAngle {
    let mut reduced = angle.raw() % raw::PI_TIMES_2;
    if angle.raw() < 0 {
        reduced += raw::PI_TIMES_2;
    }

    let flip_vertical = reduced >= raw::PI;
    while reduced >= raw::PI {
        reduced -= raw::PI;
    }

    let flip_horizontal = reduced >= raw::PI_OVER_2;
    if reduced >= raw::PI_OVER_2 {
        reduced -= raw::PI_OVER_2;
    }

    QuadrantAngle {
        angle: Fix64::from_raw(reduced),
        flip_horizontal,
        flip_vertical,
    }
}

/// Linear interpolation in `table` at `angle` (a first-quadrant angle).
///
/// Returns the raw interpolated value; `mirrored` reads the table right to
/// left. The final addition saturates so the tangent pole cannot wrap.
fn interpolate(table: &Lut, angle: Fix64, mirrored: bool) -> i64 {
    let raw_index = angle.fast_mul(Fix64::LUT_INTERVAL);
    let rounded = raw_index.round();
    let index_error = raw_index.fast_sub(rounded);
    let index = rounded.to_i64();
    let step = i64::from(index_error.signum());

    let (nearest_slot, second_slot) = if mirrored {
        (LAST_INDEX - index, LAST_INDEX - index - step)
    } else {
        (index, index + step)
    };
    let nearest = table.clamped(nearest_slot);
    let second = table.clamped(second_slot);

    let delta = index_error
        .fast_mul(nearest.fast_sub(second).fast_abs())
        .raw();
    let delta = if mirrored { -delta } else { delta };
    nearest.overflow_add(Fix64::from_raw(delta)).raw()
}

/// Shift applied by `cos` so it can delegate to `sin`: `+π/2` for
/// non-positive angles, `π/2 - 2π` for positive ones (keeps the sum in range).
const fn cos_phase(x: Fix64) -> Fix64 {
    let xl = x.raw();
    let shift = if xl > 0 {
        -raw::PI - raw::PI_OVER_2
    } else {
        raw::PI_OVER_2
    };
    Fix64::from_raw(xl.wrapping_add(shift))
}

impl Fix64 {
    /// Sine, interpolated from the quarter-wave table.
    ///
    /// About nine decimals of accuracy for moderate angles; the single 2π
    /// reduction loses accuracy as `|x|` grows.
    pub fn sin(self) -> Self {
        let q = clamp_to_first_quadrant(self);
        let value = interpolate(&lut::SIN, q.angle, q.flip_horizontal);
        Self::from_raw(if q.flip_vertical { -value } else { value })
    }

    /// Sine from the nearest table slot without interpolation (4-5 decimals).
    ///
    /// The table size makes `angle_raw >> 15` the slot index directly.
    pub fn fast_sin(self) -> Self {
        let q = clamp_to_first_quadrant(self);
        let index = (q.angle.raw() >> 15).min(LAST_INDEX);
        let slot = if q.flip_horizontal {
            LAST_INDEX - index
        } else {
            index
        };
        let value = lut::SIN.clamped(slot).raw();
        Self::from_raw(if q.flip_vertical { -value } else { value })
    }

    /// Cosine, via a phase shift into [`Fix64::sin`].
    pub fn cos(self) -> Self {
        cos_phase(self).sin()
    }

    /// Cosine, via a phase shift into [`Fix64::fast_sin`].
    pub fn fast_cos(self) -> Self {
        cos_phase(self).fast_sin()
    }

    /// `(sin(self), cos(self))`.
    pub fn sin_cos(self) -> (Self, Self) {
        (self.sin(), self.cos())
    }

    /// Tangent, interpolated from the tangent table.
    ///
    /// Near the poles the table saturates and so does the result. The last
    /// table slot holds [`Fix64::MAX`], so within about one slot (`2^15` raw)
    /// of `±π/2` the result keeps its sign but its magnitude can be off by
    /// orders of magnitude.
    pub fn tan(self) -> Self {
        let mut clamped = self.raw() % raw::PI;
        let mut flip = false;
        if clamped < 0 {
            clamped = -clamped;
            flip = true;
        }
        if clamped > raw::PI_OVER_2 {
            flip = !flip;
            clamped = raw::PI_OVER_2 - (clamped - raw::PI_OVER_2);
        }

        let value = Self::from_raw(interpolate(&lut::TAN, Self::from_raw(clamped), false));
        if flip {
            -value
        } else {
            value
        }
    }

    /// Arctangent by Euler's series, at least seven decimals of accuracy.
    ///
    /// `|z| > 1` is evaluated as `π/2 - atan(1/z)`. The series stops at the
    /// first zero term or after 28 terms.
    pub fn atan(self) -> Self {
        if self.raw() == 0 {
            return Self::ZERO;
        }

        let negative = self.is_negative();
        let mut z = if negative { -self } else { self };

        let invert = z > Self::ONE;
        if invert {
            z = Self::ONE / z;
        }

        let two = Self::from_int(2);
        let three = Self::from_int(3);

        let mut result = Self::ONE;
        let mut term = Self::ONE;

        let z_sq = z * z;
        let z_sq2 = z_sq * two;
        let z_sq_plus_one = z_sq + Self::ONE;
        let z_sq12 = z_sq_plus_one * two;
        let mut dividend = z_sq2;
        let mut divisor = z_sq_plus_one * three;

        for _ in 2..30 {
            term *= dividend / divisor;
            result += term;

            dividend += z_sq2;
            divisor += z_sq12;

            if term.raw() == 0 {
                break;
            }
        }

        result = result * z / z_sq_plus_one;
        if invert {
            result = Self::PI_OVER_2 - result;
        }
        if negative {
            -result
        } else {
            result
        }
    }

    /// Four-quadrant arctangent of `self / x` (`self` is the `y` coordinate).
    ///
    /// A rational approximation with about two to three decimals of accuracy.
    /// `atan2(0, 0)` is zero. Ratios large enough to saturate the
    /// approximation's denominator return `±π/2` by the sign of `y`.
    pub fn atan2(self, x: Self) -> Self {
        let y = self;
        if x.raw() == 0 {
            return match y.signum() {
                1 => Self::PI_OVER_2,
                0 => Self::ZERO,
                _ => -Self::PI_OVER_2,
            };
        }

        let z = y / x;
        let c = Self::EN2 * Self::from_int(28);
        let c_z_sq = c.overflow_mul(z).overflow_mul(z);
        if Self::ONE.overflow_add(c_z_sq) == Self::MAX {
            return if y.is_negative() {
                -Self::PI_OVER_2
            } else {
                Self::PI_OVER_2
            };
        }

        if z.abs() < Self::ONE {
            let atan = z / (Self::ONE + c_z_sq);
            if x.is_negative() {
                if y.is_negative() {
                    return atan - Self::PI;
                }
                return atan + Self::PI;
            }
            atan
        } else {
            let atan = Self::PI_OVER_2 - z / z.overflow_mul(z).overflow_add(c);
            if y.is_negative() {
                return atan - Self::PI;
            }
            atan
        }
    }

    /// Arccosine, `atan(sqrt(1 - x²) / x)` with a `+π` correction for negative
    /// `x`.
    ///
    /// # Errors
    ///
    /// [`MathError::AcosDomain`] when `self` lies outside `[-1, 1]`.
    pub fn acos(self) -> Result<Self, MathError> {
        if self < -Self::ONE || self > Self::ONE {
            return Err(MathError::AcosDomain(self));
        }
        if self.raw() == 0 {
            return Ok(Self::PI_OVER_2);
        }

        let result = ((Self::ONE - self * self).sqrt()? / self).atan();
        Ok(if self.is_negative() {
            result + Self::PI
        } else {
            result
        })
    }

    /// Arcsine, `π/2 - acos(x)`.
    ///
    /// # Errors
    ///
    /// [`MathError::AcosDomain`] when `self` lies outside `[-1, 1]`.
    pub fn asin(self) -> Result<Self, MathError> {
        Ok(Self::PI_OVER_2.fast_sub(self.acos()?))
    }

    /// Arccosine interpolated from the arccosine table.
    ///
    /// Uses `acos(-x) = π - acos(x)`. Accuracy degrades within a few table
    /// slots of `|x| = 1`, where the curve is steepest.
    ///
    /// # Errors
    ///
    /// [`MathError::AcosDomain`] when `self` lies outside `[-1, 1]`.
    pub fn fast_acos(self) -> Result<Self, MathError> {
        if self < -Self::ONE || self > Self::ONE {
            return Err(MathError::AcosDomain(self));
        }

        let position = self.fast_abs().fast_mul(Self::from_raw(LAST_INDEX * raw::ONE));
        let index = position.to_i64();
        let weight = position.fract();
        let low = lut::ACOS.clamped(index);
        let high = lut::ACOS.clamped(index + 1);
        let value = low.fast_add(high.fast_sub(low).fast_mul(weight));

        Ok(if self.is_negative() {
            Self::PI.fast_sub(value)
        } else {
            value
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(actual: Fix64, expected: f64, tolerance: f64) -> bool {
        (actual.to_f64() - expected).abs() <= tolerance
    }

    #[test]
    fn quadrant_reduction() {
        let q = clamp_to_first_quadrant(Fix64::ZERO);
        assert_eq!(q.angle, Fix64::ZERO);
        assert!(!q.flip_horizontal && !q.flip_vertical);

        let q = clamp_to_first_quadrant(Fix64::from_int(2));
        assert_eq!(q.angle.raw(), 2 * raw::ONE - raw::PI_OVER_2);
        assert!(q.flip_horizontal && !q.flip_vertical);

        let q = clamp_to_first_quadrant(Fix64::from_int(4));
        assert_eq!(q.angle.raw(), 4 * raw::ONE - raw::PI);
        assert!(!q.flip_horizontal && q.flip_vertical);

        let q = clamp_to_first_quadrant(Fix64::from_int(-1));
        assert_eq!(q.angle.raw(), raw::PI_TIMES_2 - raw::ONE - raw::PI - raw::PI_OVER_2);
        assert!(q.flip_horizontal && q.flip_vertical);
    }

    #[test]
    fn sin_cos_at_zero_are_exact() {
        assert_eq!(Fix64::ZERO.sin(), Fix64::ZERO);
        assert_eq!(Fix64::ZERO.cos(), Fix64::ONE);
        assert_eq!(Fix64::ZERO.fast_sin(), Fix64::ZERO);
        assert_eq!(Fix64::ZERO.fast_cos(), Fix64::ONE);
    }

    #[test]
    fn sin_matches_reference_points() {
        assert!(close(Fix64::HALF.sin(), 0.479_425_538_604_203, 1.0e-8));
        assert!(close(Fix64::from_int(-2).sin(), -0.909_297_426_825_681_7, 1.0e-8));
        assert!(close(Fix64::from_int(3).cos(), -0.989_992_496_600_445_4, 1.0e-8));
        assert!(close(Fix64::from_int(1).fast_sin(), 0.841_470_984_807_896_5, 1.0e-4));
    }

    #[test]
    fn tan_reference_points() {
        assert!(close(Fix64::ONE.tan(), 1.557_407_724_654_902, 1.0e-7));
        assert!(close(Fix64::from_int(-1).tan(), -1.557_407_724_654_902, 1.0e-7));
        assert!(close(Fix64::from_int(2).tan(), -2.185_039_863_261_519, 1.0e-6));
        assert!(Fix64::PI_OVER_2.tan() > Fix64::from_int(1_000_000));
    }

    #[test]
    fn tan_near_poles_keeps_sign_and_grows() {
        let near = Fix64::from_raw(1_000);
        assert!((Fix64::PI_OVER_2 - near).tan() > Fix64::from_int(1_000_000));
        assert!((near - Fix64::PI_OVER_2).tan() < Fix64::from_int(-1_000_000));
    }

    #[test]
    fn atan_reference_points() {
        assert_eq!(Fix64::ZERO.atan(), Fix64::ZERO);
        assert!(close(Fix64::ONE.atan(), core::f64::consts::FRAC_PI_4, 1.0e-8));
        assert!(close(Fix64::from_int(-3).atan(), -1.249_045_772_398_254_5, 1.0e-8));
        assert!(close(Fix64::from_ratio(1, 10).atan(), 0.099_668_652_491_162_03, 1.0e-8));
    }

    #[test]
    fn atan2_axes_and_quadrants() {
        let one = Fix64::ONE;
        assert_eq!(Fix64::ZERO.atan2(Fix64::ZERO), Fix64::ZERO);
        assert_eq!(one.atan2(Fix64::ZERO), Fix64::PI_OVER_2);
        assert_eq!((-one).atan2(Fix64::ZERO), -Fix64::PI_OVER_2);
        assert_eq!(Fix64::ZERO.atan2(-one), Fix64::PI);
        assert!(close(one.atan2(one), 0.785_398_163_397_448_3, 1.0e-2));
        assert!(close(one.atan2(-one), 2.356_194_490_192_345, 1.0e-2));
        assert!(close((-one).atan2(-one), -2.356_194_490_192_345, 1.0e-2));
        assert!(close((-one).atan2(one), -0.785_398_163_397_448_3, 1.0e-2));
    }

    #[test]
    fn atan2_saturating_ratio_returns_right_angle() {
        let tiny = Fix64::PRECISION;
        assert_eq!(Fix64::from_int(1_000).atan2(tiny), Fix64::PI_OVER_2);
        assert_eq!(Fix64::from_int(-1_000).atan2(tiny), -Fix64::PI_OVER_2);
    }

    #[test]
    fn acos_asin_domain_and_values() {
        assert_eq!(Fix64::ZERO.acos(), Ok(Fix64::PI_OVER_2));
        assert_eq!(Fix64::ONE.acos(), Ok(Fix64::ZERO));
        assert_eq!((-Fix64::ONE).acos(), Ok(Fix64::PI));
        assert!(close(Fix64::HALF.acos().unwrap_or(Fix64::NAN), 1.047_197_551_196_597_7, 1.0e-7));
        assert!(close(Fix64::HALF.asin().unwrap_or(Fix64::NAN), 0.523_598_775_598_298_8, 1.0e-7));

        let outside = Fix64::from_ratio(3, 2);
        assert_eq!(outside.acos(), Err(MathError::AcosDomain(outside)));
        assert_eq!((-outside).asin(), Err(MathError::AcosDomain(-outside)));
        assert_eq!(outside.fast_acos(), Err(MathError::AcosDomain(outside)));
    }

    #[test]
    fn fast_acos_uses_the_table() {
        assert_eq!(Fix64::ONE.fast_acos(), Ok(Fix64::ZERO));
        assert!(close(Fix64::ZERO.fast_acos().unwrap_or(Fix64::NAN), core::f64::consts::FRAC_PI_2, 1.0e-9));
        assert!(close((-Fix64::ONE).fast_acos().unwrap_or(Fix64::NAN), core::f64::consts::PI, 1.0e-9));
        assert!(close(Fix64::HALF.fast_acos().unwrap_or(Fix64::NAN), 1.047_197_551_196_597_7, 1.0e-8));
        assert!(close((-Fix64::HALF).fast_acos().unwrap_or(Fix64::NAN), 2.094_395_102_393_195_5, 1.0e-8));
    }
}
