// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Deterministic scalar abstraction for code layered on top of [`Fix64`].
//!
//! Vector, quaternion and bounds types are written against [`Scalar`] rather
//! than a concrete number type, so they inherit the determinism contract of
//! whichever implementation they are instantiated with.
//!
//! Determinism contract:
//! - Operations are pure and total for every input of the implementation's
//!   domain.
//! - Identical inputs give bit-identical outputs on every platform.
//! - Trigonometric functions take radians.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::Fix64;

/// Deterministic scalar arithmetic and basic transcendentals.
///
/// Arithmetic is required through the standard operator traits so generic
/// code can use `+`, `-`, `*`, `/` and unary `-` directly. `Ord` is required
/// because bounds and spatial queries compare scalars totally.
pub trait Scalar:
    Copy
    + Debug
    + Ord
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Returns the additive identity (zero).
    fn zero() -> Self;

    /// Returns the multiplicative identity (one).
    fn one() -> Self;

    /// Returns the sine of `self` (radians).
    fn sin(self) -> Self;

    /// Returns the cosine of `self` (radians).
    fn cos(self) -> Self;

    /// Returns both sine and cosine of `self` (radians).
    ///
    /// Default implementation computes `sin` and `cos` separately.
    fn sin_cos(self) -> (Self, Self) {
        (Self::sin(self), Self::cos(self))
    }

    /// Converts from `f32`. Intended for boundary crossings and test
    /// scaffolding, not for values that feed the simulation.
    fn from_f32(value: f32) -> Self;

    /// Converts to `f32` for interop and diagnostics.
    fn to_f32(self) -> f32;
}

impl Scalar for Fix64 {
    fn zero() -> Self {
        Self::ZERO
    }

    fn one() -> Self {
        Self::ONE
    }

    fn sin(self) -> Self {
        Self::sin(self)
    }

    fn cos(self) -> Self {
        Self::cos(self)
    }

    fn sin_cos(self) -> (Self, Self) {
        Self::sin_cos(self)
    }

    fn from_f32(value: f32) -> Self {
        Self::from_f32(value)
    }

    fn to_f32(self) -> f32 {
        Self::to_f32(self)
    }
}
