//! End to end tests for the `kv_check` binary.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_kv_check"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("kv_check"));
}

#[test]
fn shows_version() {
    Command::new(env!("CARGO_BIN_EXE_kv_check"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn rejects_unexpected_arguments() {
    Command::new(env!("CARGO_BIN_EXE_kv_check"))
        .arg("extra")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn counts_matching_records() {
    Command::new(env!("CARGO_BIN_EXE_kv_check"))
        .write_stdin("k1\tv1\nk2\tv2\n\n")
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn empty_input_reports_zero() {
    Command::new(env!("CARGO_BIN_EXE_kv_check"))
        .write_stdin("")
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn stops_reading_at_blank_line() {
    Command::new(env!("CARGO_BIN_EXE_kv_check"))
        .write_stdin("k1\tv1\n\nnot a record\n")
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn counts_to_end_of_input_without_blank_line() {
    Command::new(env!("CARGO_BIN_EXE_kv_check"))
        .write_stdin("k1\tv1\nk2\tv2\nk3\tv3\n")
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn accepts_opaque_key_suffixes() {
    Command::new(env!("CARGO_BIN_EXE_kv_check"))
        .write_stdin("kabc\tvabc\n\n")
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn mismatch_fails_with_line_and_values() {
    Command::new(env!("CARGO_BIN_EXE_kv_check"))
        .write_stdin("k1\tv1\nk2\tvX\n")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(
            predicate::str::contains("at line 2")
                .and(predicate::str::contains("\"v2\""))
                .and(predicate::str::contains("\"vX\"")),
        );
}

#[test]
fn missing_separator_fails() {
    Command::new(env!("CARGO_BIN_EXE_kv_check"))
        .write_stdin("k1 v1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no tab separator"));
}

#[test]
fn key_without_prefix_fails() {
    Command::new(env!("CARGO_BIN_EXE_kv_check"))
        .write_stdin("x1\tv1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not start with 'k'"));
}
