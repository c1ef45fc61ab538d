// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Single-operation evaluation (`fixcheck eval`).
//!
//! Operands are decimal literals (`-1.25`), raw bit patterns (`raw:0x1_0000_0000`,
//! `raw:-4294967296`) or named constants (`pi`, `max`, `min`, `nan`, `+inf`,
//! `-inf`). Raw hex is read as a 64-bit pattern, so the hex printed by
//! `eval` can be pasted back in.

use anyhow::{bail, Context, Result};
use fixmath::Fix64;
use serde::Serialize;

use crate::ops::{self, Op};

/// Parses one command-line operand.
pub fn parse_operand(text: &str) -> Result<Fix64> {
    if let Some(raw) = text.strip_prefix("raw:") {
        return parse_raw(raw).with_context(|| format!("invalid raw operand {text:?}"));
    }
    match text.to_ascii_lowercase().as_str() {
        "pi" => return Ok(Fix64::PI),
        "max" => return Ok(Fix64::MAX),
        "min" => return Ok(Fix64::MIN),
        "nan" => return Ok(Fix64::NAN),
        "inf" | "+inf" => return Ok(Fix64::POSITIVE_INFINITY),
        "-inf" => return Ok(Fix64::NEGATIVE_INFINITY),
        _ => {}
    }
    text.parse::<Fix64>()
        .with_context(|| format!("invalid operand {text:?}"))
}

fn parse_raw(text: &str) -> Result<Fix64> {
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let digits: String = body.chars().filter(|&c| c != '_').collect();
    let raw = if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        u64::from_str_radix(hex, 16)? as i64
    } else {
        digits.parse::<i64>()?
    };
    Ok(Fix64::from_raw(if negative { raw.wrapping_neg() } else { raw }))
}

/// A value as printed by `fixcheck`: exact decimal plus raw bits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueRecord {
    /// Exact decimal rendering.
    pub value: String,
    /// Raw `i64` bits.
    pub raw: i64,
    /// Raw bits as 64-bit hex.
    pub hex: String,
}

impl From<Fix64> for ValueRecord {
    fn from(value: Fix64) -> Self {
        Self {
            value: value.to_string(),
            raw: value.raw(),
            hex: format!("{:#018x}", value.raw()),
        }
    }
}

/// Outcome of one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// Operation name.
    pub op: &'static str,
    /// Parsed operands.
    pub args: Vec<ValueRecord>,
    /// Result.
    pub result: ValueRecord,
}

impl Evaluation {
    /// One-line human form: `value (raw 0x...)`.
    pub fn to_text(&self) -> String {
        format!("{} (raw {})", self.result.value, self.result.hex)
    }
}

/// Parses `operands` and applies the operation called `name`.
///
/// Domain errors are returned as errors, so the binary exits non-zero.
pub fn evaluate(name: &str, operands: &[String]) -> Result<Evaluation> {
    let Some(op) = ops::find(name) else {
        let known: Vec<_> = ops::OPS.iter().map(|op| op.name).collect();
        bail!("unknown operation `{name}` (known: {})", known.join(", "));
    };
    if operands.len() != op.arity() {
        bail!(
            "`{}` takes {} operand(s), got {}",
            op.name,
            op.arity(),
            operands.len()
        );
    }

    let args = operands
        .iter()
        .map(String::as_str)
        .map(parse_operand)
        .collect::<Result<Vec<_>>>()?;
    let result = run(op, &args)?;
    tracing::debug!(op = op.name, ?args, ?result, "evaluated");

    Ok(Evaluation {
        op: op.name,
        args: args.into_iter().map(ValueRecord::from).collect(),
        result: result.into(),
    })
}

fn run(op: &Op, args: &[Fix64]) -> Result<Fix64> {
    let rendered: Vec<_> = args.iter().map(ToString::to_string).collect();
    let call = format!("{}({})", op.name, rendered.join(", "));
    let Some(outcome) = op.apply(args) else {
        bail!("{call}: wrong number of operands");
    };
    outcome.with_context(|| call)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operands(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn operand_forms() {
        assert_eq!(parse_operand("-1.25").expect("decimal"), Fix64::from_ratio(-5, 4));
        assert_eq!(parse_operand("raw:0x1_0000_0000").expect("hex"), Fix64::ONE);
        assert_eq!(parse_operand("raw:-4294967296").expect("int"), -Fix64::ONE);
        assert_eq!(parse_operand("raw:0x8000000000000000").expect("bits"), Fix64::NAN);
        assert_eq!(parse_operand("PI").expect("named"), Fix64::PI);
        assert_eq!(parse_operand("-inf").expect("named"), Fix64::NEGATIVE_INFINITY);
        assert!(parse_operand("raw:0xZZ").is_err());
        assert!(parse_operand("1.2.3").is_err());
    }

    #[test]
    fn hex_output_parses_back() {
        let eval = evaluate("div", &operands(&["-1", "7"])).expect("evaluates");
        let again = parse_operand(&format!("raw:{}", eval.result.hex)).expect("round trip");
        assert_eq!(again.raw(), eval.result.raw);
    }

    #[test]
    fn evaluates_and_reports() {
        let eval = evaluate("sqrt", &operands(&["4"])).expect("evaluates");
        assert_eq!(eval.result.raw, 2 << 32);
        assert_eq!(eval.to_text(), "2 (raw 0x0000000200000000)");

        let eval = evaluate("div", &operands(&["1", "0"])).expect("saturates");
        assert_eq!(eval.result.raw, Fix64::MAX.raw());
    }

    #[test]
    fn rejects_bad_requests() {
        assert!(evaluate("sqrt", &operands(&["-1"])).is_err());
        assert!(evaluate("sqrt", &operands(&["1", "2"])).is_err());
        assert!(evaluate("nope", &operands(&["1"])).is_err());
    }
}
