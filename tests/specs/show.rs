// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `envmatrix show`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[test]
fn shows_selected_deps_with_ranges() {
    envmatrix_cmd()
        .args(["show", "py27-django18"])
        .current_dir(fixture("django-matrix"))
        .assert()
        .success()
        .stdout(predicates::str::contains("Django>=1.8,<1.9  [1.8, 1.9)  [django18]"))
        .stdout(predicates::str::contains("  mock"))
        .stdout(predicates::str::contains("Django>=1.7").not())
        .stdout(predicates::str::contains("coverage run setup.py test"));
}

#[test]
fn deps_depend_only_on_their_condition_tag() {
    let show = |env: &str| {
        let output = envmatrix_cmd()
            .args(["show", env, "-o", "json"])
            .current_dir(fixture("django-matrix"))
            .output()
            .expect("command should run");
        assert!(output.status.success());
        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        value["deps"]
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["requirement"].as_str().unwrap().to_string())
            .collect::<Vec<_>>()
    };

    assert_eq!(show("py34-django18"), show("py36-django18"));
    assert_eq!(show("py34-django18"), vec!["coverage", "Django>=1.8,<1.9"]);
}

#[test]
fn override_replaces_global_deps_and_commands() {
    envmatrix_cmd()
        .args(["show", "flake8"])
        .current_dir(fixture("django-matrix"))
        .assert()
        .success()
        .stdout(predicates::str::starts_with("flake8 (override)"))
        .stdout(predicates::str::contains("coverage").not());
}

#[test]
fn unknown_environment_exits_1() {
    envmatrix_cmd()
        .args(["show", "py99-django17"])
        .current_dir(fixture("django-matrix"))
        .assert()
        .code(1)
        .stderr(predicates::str::contains("unknown environment 'py99-django17'"));
}

#[test]
fn excluded_environment_exits_1() {
    envmatrix_cmd()
        .args(["show", "py35-django17"])
        .current_dir(fixture("django-matrix"))
        .assert()
        .code(1)
        .stderr(predicates::str::contains("is excluded"));
}

#[test]
fn wildcard_pin_reports_prefix_range() {
    envmatrix_cmd()
        .args(["show", "py34-django19"])
        .current_dir(fixture("django-matrix"))
        .assert()
        .success()
        .stdout(predicates::str::contains("Django==1.9.*  [1.9, 1.10)  [django19]"));
}
