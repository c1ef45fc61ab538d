// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Interpolation and easing helpers for gameplay code.
//!
//! Everything here is composed from the core operators. Constants are exact
//! fixed-point literals (integers, ratios or raw bits), never float literals,
//! so the helpers are as reproducible as the arithmetic underneath them.
//! Angles in [`delta_angle`] and [`move_towards_angle`] are in degrees.

use crate::Fix64;

const TWO: Fix64 = Fix64::from_int(2);
const THREE: Fix64 = Fix64::from_int(3);
const FOUR: Fix64 = Fix64::from_int(4);
const FIVE: Fix64 = Fix64::from_int(5);
const HALF_TURN: Fix64 = Fix64::from_int(180);
const FULL_TURN: Fix64 = Fix64::from_int(360);

/// `value` limited to `[min, max]`. Unlike [`Ord::clamp`] this never panics;
/// with `min > max` the lower bound wins.
pub fn clamp(value: Fix64, min: Fix64, max: Fix64) -> Fix64 {
    if value < min {
        return min;
    }
    if value > max {
        return max;
    }
    value
}

/// `value` limited to `[0, 1]`.
pub fn clamp01(value: Fix64) -> Fix64 {
    clamp(value, Fix64::ZERO, Fix64::ONE)
}

/// The largest of three values.
pub fn max3(a: Fix64, b: Fix64, c: Fix64) -> Fix64 {
    a.max(b).max(c)
}

/// Linear interpolation from `a` to `b`; `t` is clamped to `[0, 1]`.
pub fn lerp(a: Fix64, b: Fix64, t: Fix64) -> Fix64 {
    a + (b - a) * clamp01(t)
}

/// Where `value` lies between `a` and `b`, clamped to `[0, 1]`. Zero when
/// `a == b`.
pub fn inverse_lerp(a: Fix64, b: Fix64, value: Fix64) -> Fix64 {
    if a == b {
        return Fix64::ZERO;
    }
    clamp01((value - a) / (b - a))
}

/// Cubic Hermite spline through `(value1, tangent1)` and `(value2, tangent2)`.
///
/// `amount` 0 and 1 return the end points exactly.
pub fn hermite(
    value1: Fix64,
    tangent1: Fix64,
    value2: Fix64,
    tangent2: Fix64,
    amount: Fix64,
) -> Fix64 {
    if amount == Fix64::ZERO {
        return value1;
    }
    if amount == Fix64::ONE {
        return value2;
    }

    let s = amount;
    let s_squared = s * s;
    let s_cubed = s_squared * s;

    (TWO * value1 - TWO * value2 + tangent2 + tangent1) * s_cubed
        + (THREE * value2 - THREE * value1 - TWO * tangent1 - tangent2) * s_squared
        + tangent1 * s
        + value1
}

/// Hermite ease between `from` and `to` with flat tangents; `t` is clamped
/// to `[0, 1]`.
pub fn smooth_step(from: Fix64, to: Fix64, t: Fix64) -> Fix64 {
    hermite(from, Fix64::ZERO, to, Fix64::ZERO, clamp01(t))
}

/// Catmull-Rom spline through four control points, evaluated between
/// `value2` (`amount == 0`) and `value3` (`amount == 1`).
pub fn catmull_rom(
    value1: Fix64,
    value2: Fix64,
    value3: Fix64,
    value4: Fix64,
    amount: Fix64,
) -> Fix64 {
    let amount_squared = amount * amount;
    let amount_cubed = amount_squared * amount;

    Fix64::HALF
        * (TWO * value2
            + (value3 - value1) * amount
            + (TWO * value1 - FIVE * value2 + FOUR * value3 - value4) * amount_squared
            + (THREE * value2 - value1 - THREE * value3 + value4) * amount_cubed)
}

/// Point in a triangle from barycentric weights of `value2` and `value3`.
pub fn barycentric(
    value1: Fix64,
    value2: Fix64,
    value3: Fix64,
    amount1: Fix64,
    amount2: Fix64,
) -> Fix64 {
    value1 + (value2 - value1) * amount1 + (value3 - value1) * amount2
}

/// `|a - b|`.
pub fn distance(a: Fix64, b: Fix64) -> Fix64 {
    (a - b).abs()
}

/// Steps `current` towards `target` by at most `max_delta`, landing exactly
/// on `target` when it is within reach.
pub fn move_towards(current: Fix64, target: Fix64, max_delta: Fix64) -> Fix64 {
    let offset = target - current;
    if offset.abs() <= max_delta {
        return target;
    }
    current + Fix64::from_int(offset.signum()) * max_delta
}

/// `t` wrapped into `[0, length)`.
pub fn repeat(t: Fix64, length: Fix64) -> Fix64 {
    t - (t / length).floor() * length
}

/// Shortest signed difference from `current` to `target`, in degrees, in
/// `(-180, 180]`.
pub fn delta_angle(current: Fix64, target: Fix64) -> Fix64 {
    let delta = repeat(target - current, FULL_TURN);
    if delta > HALF_TURN {
        delta - FULL_TURN
    } else {
        delta
    }
}

/// [`move_towards`] for angles in degrees, taking the short way round.
pub fn move_towards_angle(current: Fix64, target: Fix64, max_delta: Fix64) -> Fix64 {
    let target = current + delta_angle(current, target);
    move_towards(current, target, max_delta)
}

/// One step of a critically damped spring towards `target`.
///
/// Returns the new value and the new velocity. `smooth_time` is floored at
/// `10^-4`, and the displacement is limited to `max_speed * smooth_time`.
/// The step never overshoots: if it would pass `target`, it lands there with
/// zero velocity.
pub fn smooth_damp(
    current: Fix64,
    target: Fix64,
    velocity: Fix64,
    smooth_time: Fix64,
    max_speed: Fix64,
    delta_time: Fix64,
) -> (Fix64, Fix64) {
    let smooth_time = smooth_time.max(Fix64::EN4);
    let omega = TWO / smooth_time;
    let x = omega * delta_time;
    let decay = Fix64::ONE
        / (Fix64::ONE
            + x
            + Fix64::from_ratio(48, 100) * x * x
            + Fix64::from_ratio(235, 1_000) * x * x * x);

    let original_target = target;
    let max_change = max_speed * smooth_time;
    let change = clamp(current - target, -max_change, max_change);
    let target = current - change;

    let temp = (velocity + omega * change) * delta_time;
    let mut velocity = (velocity - omega * temp) * decay;
    let mut output = target + (change + temp) * decay;

    if (original_target - current > Fix64::ZERO) == (output > original_target) {
        output = original_target;
        velocity = (output - original_target) / delta_time;
    }
    (output, velocity)
}
