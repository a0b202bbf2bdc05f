// Copyright (c) 2026 rezky_nightky

use assert_cmd::Command;
use predicates::prelude::*;

fn heartfall() -> Command {
    Command::cargo_bin("heartfall").unwrap()
}

#[test]
fn version_prints_package_version() {
    heartfall()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn list_colors_names_every_theme() {
    heartfall()
        .arg("--list-colors")
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("AVAILABLE COLOR THEMES:"))
        .stdout(predicate::str::contains("red"))
        .stdout(predicate::str::contains("snow"));
}

#[test]
fn check_bitcolor_honors_forced_mode() {
    heartfall()
        .args(["--check-bitcolor", "--colormode", "24"])
        .assert()
        .success()
        .stdout(predicate::str::contains("effective: 24-bit truecolor"));
}

#[test]
fn out_of_range_fps_is_rejected() {
    heartfall()
        .args(["--fps", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to apply --fps 0 (min 1 max 240)"));
}

#[test]
fn unknown_color_is_rejected() {
    heartfall()
        .args(["--color", "plaid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid color: plaid"));
}

#[test]
fn help_lists_keys() {
    heartfall()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--caption"))
        .stdout(predicate::str::contains("pause / resume"));
}
