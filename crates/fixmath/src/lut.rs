// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! First-quadrant lookup tables.
//!
//! The tables are produced by `build.rs` and embedded with `include_bytes!`,
//! so they exist before `main` runs and are never written afterwards. Every
//! table has [`LUT_SIZE`] little-endian raw entries; slot `i` samples the
//! function at `i / (LUT_SIZE - 1)` of the table's domain:
//!
//! | table  | domain      | entry             |
//! |--------|-------------|-------------------|
//! | `sin`  | `[0, π/2]`  | `sin(angle)`      |
//! | `tan`  | `[0, π/2]`  | `tan(angle)`, pole pinned to `MAX` |
//! | `acos` | `[0, 1]`    | `acos(x)`         |

use crate::raw;
use crate::Fix64;

/// Number of entries in each table (`PI_OVER_2_raw >> 15`).
pub const LUT_SIZE: usize = raw::LUT_SIZE;

const LUT_BYTES: usize = LUT_SIZE * raw::LUT_ENTRY_BYTES;

/// An embedded table of raw Q31.32 samples.
#[derive(Debug)]
pub struct Lut {
    name: &'static str,
    bytes: &'static [u8; LUT_BYTES],
}

/// Quarter-wave sine samples.
pub static SIN: Lut = Lut {
    name: "sin",
    bytes: include_bytes!(concat!(env!("OUT_DIR"), "/sin_lut.bin")),
};

/// Quarter-wave tangent samples.
pub static TAN: Lut = Lut {
    name: "tan",
    bytes: include_bytes!(concat!(env!("OUT_DIR"), "/tan_lut.bin")),
};

/// Arccosine samples over `[0, 1]`.
pub static ACOS: Lut = Lut {
    name: "acos",
    bytes: include_bytes!(concat!(env!("OUT_DIR"), "/acos_lut.bin")),
};

impl Lut {
    /// Every embedded table, in a fixed order.
    pub fn all() -> [&'static Self; 3] {
        [&SIN, &TAN, &ACOS]
    }

    /// Short table name (`"sin"`, `"tan"`, `"acos"`).
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Number of entries.
    pub const fn len(&self) -> usize {
        LUT_SIZE
    }

    /// Always `false`; present for API symmetry with slices.
    pub const fn is_empty(&self) -> bool {
        LUT_SIZE == 0
    }

    /// The serialized table: `len()` little-endian `i64` raw values.
    pub fn as_bytes(&self) -> &'static [u8] {
        self.bytes
    }

    /// Entry `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<Fix64> {
        (index < LUT_SIZE).then(|| self.entry(index))
    }

    /// Entry at a signed index clamped into `[0, LUT_SIZE - 1]`.
    ///
    /// Interpolating callers step one slot past the nearest entry; at the
    /// quadrant edges that neighbour is the edge entry itself.
    pub(crate) fn clamped(&self, index: i64) -> Fix64 {
        let last = (LUT_SIZE - 1) as i64;
        self.entry(index.clamp(0, last) as usize)
    }

    fn entry(&self, index: usize) -> Fix64 {
        let start = index * raw::LUT_ENTRY_BYTES;
        let le: i64 = bytemuck::pod_read_unaligned(&self.bytes[start..start + raw::LUT_ENTRY_BYTES]);
        Fix64::from_raw(i64::from_le(le))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_have_expected_size() {
        for lut in Lut::all() {
            assert_eq!(lut.len(), 205_887, "{}", lut.name());
            assert_eq!(lut.as_bytes().len(), 205_887 * 8);
            assert!(!lut.is_empty());
        }
    }

    #[test]
    fn table_endpoints() {
        assert_eq!(SIN.get(0), Some(Fix64::ZERO));
        assert_eq!(SIN.get(LUT_SIZE - 1), Some(Fix64::ONE));
        assert_eq!(TAN.get(0), Some(Fix64::ZERO));
        assert_eq!(TAN.get(LUT_SIZE - 1), Some(Fix64::MAX));
        assert_eq!(ACOS.get(LUT_SIZE - 1), Some(Fix64::ZERO));
        assert_eq!(SIN.get(LUT_SIZE), None);
    }

    #[test]
    fn clamped_lookup_pins_to_edges() {
        assert_eq!(SIN.clamped(-1), Fix64::ZERO);
        assert_eq!(SIN.clamped(LUT_SIZE as i64 + 5), Fix64::ONE);
    }

    #[test]
    fn sin_table_is_monotonic() {
        let mut prev = Fix64::MIN;
        for i in (0..LUT_SIZE).step_by(97) {
            let value = SIN.get(i).unwrap_or(Fix64::NAN);
            assert!(value >= prev, "slot {i}");
            prev = value;
        }
    }
}
