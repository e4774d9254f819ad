// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `envmatrix select`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[test]
fn trigger_flag_selects_matching_environments() {
    envmatrix_cmd()
        .args(["select", "--trigger", "DJANGO=1.7"])
        .current_dir(fixture("django-matrix"))
        .assert()
        .success()
        .stdout("py27-django17\npy33-django17\npy34-django17\n");
}

#[test]
fn triggers_intersect() {
    envmatrix_cmd()
        .args([
            "select",
            "--trigger",
            "DJANGO=1.8",
            "--trigger",
            "TRAVIS_PYTHON_VERSION=3.5",
        ])
        .current_dir(fixture("django-matrix"))
        .assert()
        .success()
        .stdout("py35-django18\n");
}

#[test]
fn triggers_are_read_from_environment() {
    envmatrix_cmd()
        .arg("select")
        .env("TRAVIS_PYTHON_VERSION", "3.6")
        .current_dir(fixture("django-matrix"))
        .assert()
        .success()
        .stdout("py36-django18\npy36-django19\npy36-django110\npy36-django111\n");
}

#[test]
fn no_triggers_selects_whole_matrix() {
    let output = envmatrix_cmd()
        .arg("select")
        .current_dir(fixture("django-matrix"))
        .output()
        .expect("command should run");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).lines().count(), 21);
}

#[test]
fn json_output_reports_derived_tags() {
    let output = envmatrix_cmd()
        .args(["select", "--trigger", "DJANGO=1.8", "-o", "json"])
        .current_dir(fixture("django-matrix"))
        .output()
        .expect("command should run");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["tags"], serde_json::json!(["django18"]));
    assert_eq!(value["environments"].as_array().unwrap().len(), 5);
}

#[test]
fn malformed_trigger_is_usage_error() {
    envmatrix_cmd()
        .args(["select", "--trigger", "DJANGO"])
        .current_dir(fixture("django-matrix"))
        .assert()
        .failure()
        .stderr(predicates::str::contains("expected NAME=VALUE"));
}
