// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn fixcheck() -> Command {
    Command::cargo_bin("fixcheck").expect("fixcheck binary")
}

#[test]
fn eval_prints_value_and_raw_bits() {
    fixcheck()
        .args(["eval", "sqrt", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.41421356"))
        .stdout(predicate::str::contains("0x000000016a09e668"));
}

#[test]
fn eval_accepts_negative_and_raw_operands() {
    fixcheck()
        .args(["eval", "add", "raw:0x1_0000_0000", "-3"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("-2 (raw "));
}

#[test]
fn eval_json_reports_saturated_division() {
    let output = fixcheck()
        .args(["eval", "--json", "div", "1", "0"])
        .output()
        .expect("run fixcheck");
    assert!(output.status.success());
    let record: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(record["op"], "div");
    assert_eq!(record["result"]["raw"], i64::MAX - 1);
    assert_eq!(record["args"][1]["raw"], 0);
}

#[test]
fn eval_domain_error_exits_non_zero() {
    fixcheck()
        .args(["eval", "sqrt", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("square root of negative"));
}

#[test]
fn eval_rejects_unknown_ops_and_wrong_arity() {
    fixcheck()
        .args(["eval", "frobnicate", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown operation"));
    fixcheck()
        .args(["eval", "atan2", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("takes 2 operand"));
}

#[test]
fn digest_golden_round_trip_and_mismatch() {
    let dir = tempfile::tempdir().expect("tempdir");
    let golden = dir.path().join("golden.json");

    fixcheck()
        .args(["digest", "--samples", "64", "--seed", "7", "--out"])
        .arg(&golden)
        .assert()
        .success()
        .stdout(predicate::str::contains("atan2"));

    fixcheck()
        .args(["digest", "--golden"])
        .arg(&golden)
        .assert()
        .success()
        .stdout(predicate::str::contains("operations match"));

    let mut report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&golden).expect("read")).expect("json");
    report["digests"]["sin"] = serde_json::Value::String("00".repeat(32));
    fs::write(&golden, report.to_string()).expect("write");

    fixcheck()
        .args(["digest", "--golden"])
        .arg(&golden)
        .assert()
        .failure()
        .stderr(predicate::str::contains("digest mismatch for `sin`"));
}

#[test]
fn lut_lists_every_table() {
    fixcheck()
        .arg("lut")
        .assert()
        .success()
        .stdout(predicate::str::contains("sin"))
        .stdout(predicate::str::contains("tan"))
        .stdout(predicate::str::contains("acos"))
        .stdout(predicate::str::contains("205887"));
}

#[test]
fn rust_log_debug_shows_per_operation_records() {
    fixcheck()
        .env("RUST_LOG", "debug")
        .args(["digest", "--samples", "4"])
        .assert()
        .success()
        .stderr(predicate::str::contains("swept operation"));
}

#[test]
fn default_log_level_is_info() {
    fixcheck()
        .env_remove("RUST_LOG")
        .args(["digest", "--samples", "4"])
        .assert()
        .success()
        .stderr(predicate::str::contains("digest sweep complete"))
        .stderr(predicate::str::contains("swept operation").not());
}
