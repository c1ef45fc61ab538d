// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error types.
//!
//! Only domain violations are errors. Overflow, division by zero and
//! out-of-range powers saturate to [`Fix64::MAX`](crate::Fix64::MAX) /
//! [`Fix64::MIN`](crate::Fix64::MIN) instead.

use thiserror::Error;

use crate::Fix64;

/// Domain error raised by a transcendental function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// `sqrt` was called with a negative argument.
    #[error("square root of negative value {0}")]
    NegativeSqrt(Fix64),
    /// `acos`/`asin` argument outside `[-1, 1]`.
    #[error("acos/asin argument {0} outside [-1, 1]")]
    AcosDomain(Fix64),
    /// Logarithm of a non-positive value (also raised by `pow` with a negative base).
    #[error("logarithm of non-positive value {0}")]
    NonPositiveLog(Fix64),
}

/// Error returned when parsing a decimal literal into a [`Fix64`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFix64Error {
    /// The input was empty (after trimming whitespace).
    #[error("empty fixed-point literal")]
    Empty,
    /// The input contained a character that is not part of a decimal literal.
    #[error("invalid character {found:?} in fixed-point literal {input:?}")]
    InvalidDigit {
        /// The rejected literal.
        input: String,
        /// The first offending character.
        found: char,
    },
    /// The integer part does not fit in the Q31.32 range.
    #[error("fixed-point literal {0:?} is out of range")]
    OutOfRange(String),
}

/// Error returned by fallible conversions from external numeric types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The source value lies outside `[Fix64::MIN, Fix64::MAX]`.
    #[error("value {0} is outside the Q31.32 range")]
    OutOfRange(String),
}
