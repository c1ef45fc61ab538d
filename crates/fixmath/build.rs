// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Generates the sine, tangent and arccosine lookup tables.
//!
//! Samples are computed with the pure-Rust `libm` crate (no dependency on the
//! host's C math library) and quantized through the same `raw` module the
//! runtime uses. Each table is written to `OUT_DIR` as `LUT_SIZE`
//! little-endian `i64` values and embedded with `include_bytes!`.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[allow(dead_code)]
#[path = "src/raw.rs"]
mod raw;

fn main() -> io::Result<()> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/raw.rs");

    let out_dir = env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "OUT_DIR is not set"))?;

    write_table(&out_dir.join("sin_lut.bin"), sin_sample)?;
    write_table(&out_dir.join("tan_lut.bin"), tan_sample)?;
    write_table(&out_dir.join("acos_lut.bin"), acos_sample)?;
    Ok(())
}

fn last_index() -> f64 {
    (raw::LUT_SIZE - 1) as f64
}

/// Angle in radians for slot `i` of the quarter-wave tables.
fn quarter_angle(i: usize) -> f64 {
    i as f64 * core::f64::consts::PI * 0.5 / last_index()
}

fn sin_sample(i: usize) -> i64 {
    raw::from_f64(libm::sin(quarter_angle(i)))
}

fn tan_sample(i: usize) -> i64 {
    let tan = libm::tan(quarter_angle(i));
    // The pole (and anything past the representable range) pins to MAX.
    if tan > raw::to_f64(raw::MAX) || tan < 0.0 {
        raw::MAX
    } else {
        raw::from_f64(tan)
    }
}

fn acos_sample(i: usize) -> i64 {
    raw::from_f64(libm::acos(i as f64 / last_index()))
}

fn write_table(path: &Path, sample: fn(usize) -> i64) -> io::Result<()> {
    let mut bytes = Vec::with_capacity(raw::LUT_SIZE * raw::LUT_ENTRY_BYTES);
    for i in 0..raw::LUT_SIZE {
        bytes.extend_from_slice(&sample(i).to_le_bytes());
    }
    fs::write(path, bytes)
}
