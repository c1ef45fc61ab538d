// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]

use core::str::FromStr;

use fixmath::{ConversionError, Fix64};
use rust_decimal::Decimal;

fn dec(text: &str) -> Decimal {
    Decimal::from_str(text).expect("decimal literal")
}

#[test]
fn exact_binary_fractions_convert_both_ways() {
    let x = Fix64::from_decimal(dec("-12.375")).expect("in range");
    assert_eq!(x, Fix64::from_ratio(-99, 8));
    assert_eq!(x.to_decimal(), dec("-12.375"));
    assert_eq!(Fix64::ONE.to_decimal(), Decimal::ONE);
}

#[test]
fn decimal_conversion_truncates_toward_zero() {
    assert_eq!(
        Fix64::from_decimal(dec("0.1")).expect("in range"),
        Fix64::from_raw(429_496_729)
    );
    assert_eq!(
        Fix64::from_decimal(dec("-0.1")).expect("in range"),
        Fix64::from_raw(-429_496_729)
    );
}

#[test]
fn decimal_and_string_parsing_agree() {
    for text in ["3.14159", "-0.000001", "2147483647.5", "0"] {
        let parsed: Fix64 = text.parse().expect("literal");
        assert_eq!(Fix64::from_decimal(dec(text)).expect("in range"), parsed, "{text}");
    }
}

#[test]
fn out_of_range_decimals_are_rejected() {
    assert!(matches!(
        Fix64::from_decimal(dec("3000000000")),
        Err(ConversionError::OutOfRange(_))
    ));
    assert!(matches!(
        Fix64::from_decimal(dec("-2147483648")),
        Err(ConversionError::OutOfRange(_))
    ));
}
