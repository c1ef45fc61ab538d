// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]

//! With the `serde` feature, a `Fix64` serializes as its raw `i64` and
//! nothing else, so a replay log stores exact bits.

use ciborium::value::Value;
use fixmath::Fix64;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Body {
    position: [Fix64; 2],
    heading: Fix64,
}

fn encode<T: Serialize>(value: &T) -> Vec<u8> {
    let mut bytes = Vec::new();
    ciborium::ser::into_writer(value, &mut bytes).expect("cbor encode");
    bytes
}

#[test]
fn fix64_encodes_as_raw_integer() {
    let x = Fix64::from_ratio(-3, 2);
    let value: Value = ciborium::de::from_reader(encode(&x).as_slice()).expect("cbor decode");
    match value {
        Value::Integer(raw) => assert_eq!(i128::from(raw), i128::from(x.raw())),
        other => panic!("expected integer, got {other:?}"),
    }
    assert_eq!(encode(&x), encode(&x.raw()));
}

#[test]
fn sentinels_survive_encoding() {
    for x in [Fix64::NAN, Fix64::POSITIVE_INFINITY, Fix64::NEGATIVE_INFINITY, Fix64::MIN] {
        let back: Fix64 = ciborium::de::from_reader(encode(&x).as_slice()).expect("cbor decode");
        assert_eq!(back, x);
    }
}

#[test]
fn structs_of_fix64_keep_exact_bits() {
    let body = Body {
        position: [Fix64::from_raw(0x1234_5678_9ABC), Fix64::PRECISION],
        heading: Fix64::PI,
    };
    let back: Body = ciborium::de::from_reader(encode(&body).as_slice()).expect("cbor decode");
    assert_eq!(back, body);
}
