// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]

//! Pinned raw outputs of the table-free algorithms.
//!
//! These values are part of the determinism contract: a change to any of them
//! desynchronises replays recorded with an older build. Update them only with
//! a deliberate, versioned change to the algorithm.

use fixmath::Fix64;

fn raw(x: Fix64) -> i64 {
    x.raw()
}

#[test]
fn division_golden() {
    assert_eq!(raw(Fix64::from_int(7) / Fix64::from_int(3)), 0x2_5555_5555);
    assert_eq!(raw(Fix64::from_int(-1) / Fix64::from_int(7)), -0x2492_4925);
}

#[test]
fn multiply_golden() {
    let third = Fix64::ONE / Fix64::from_int(3);
    assert_eq!(raw(third * Fix64::from_int(3)), 0xFFFF_FFFF);
}

#[test]
fn sqrt_golden() {
    assert_eq!(Fix64::from_int(3).sqrt().map(raw), Ok(0x1_BB67_AE86));
    assert_eq!(Fix64::EN1.sqrt().map(raw), Ok(0x50F4_4D8A));
}

#[test]
fn log2_golden() {
    assert_eq!(Fix64::from_int(3).log2().map(raw), Ok(0x1_95C0_1A39));
    assert_eq!(Fix64::EN1.log2().map(raw), Ok(-14_267_572_522));
}

#[test]
fn pow2_golden() {
    assert_eq!(raw(Fix64::HALF.pow2()), 0x1_6A09_E666);
    assert_eq!(raw(Fix64::from_ratio(-7, 3).pow2()), 0x32CB_FD4B);
}

#[test]
fn atan_golden() {
    assert_eq!(raw(Fix64::HALF.atan()), 0x76B1_9C12);
    assert_eq!(raw(Fix64::from_int(5).atan()), 0x1_5F97_3154);
}
