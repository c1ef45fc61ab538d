// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! fixmath: deterministic Q31.32 fixed-point arithmetic for lockstep simulation.
//!
//! [`Fix64`] stores `value * 2^32` in an `i64`. Every operation, including
//! the transcendental functions, is integer-only and produces the same raw
//! result on every platform, so a replay log or network stream of raw values
//! reproduces a simulation bit for bit.
//!
//! The sine, tangent and arccosine lookup tables are generated at build time
//! and embedded in the binary; there is no runtime initialisation.
//!
//! ```
//! use fixmath::Fix64;
//!
//! let x = Fix64::from_int(4);
//! assert_eq!(x.sqrt(), Ok(Fix64::from_int(2)));
//! assert_eq!(Fix64::ONE / Fix64::ZERO, Fix64::MAX);
//! assert_eq!(Fix64::ZERO.cos(), Fix64::ONE);
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::use_self
)]

mod convert;
mod div;
mod error;
mod exp;
mod fix64;
mod ops;
mod raw;
mod sqrt;

/// Build-time lookup tables backing the trigonometric functions.
pub mod lut;
/// Deterministic scalar trait for generic consumers.
pub mod scalar;
/// Range reduction and the trigonometric functions.
pub mod trig;
/// Clamping, interpolation and easing helpers.
pub mod util;

pub use error::{ConversionError, MathError, ParseFix64Error};
pub use fix64::Fix64;
pub use lut::LUT_SIZE;
pub use scalar::Scalar;
pub use trig::{clamp_to_first_quadrant, QuadrantAngle};
