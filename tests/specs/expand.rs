// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `envmatrix expand`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

// =============================================================================
// TEXT OUTPUT
// =============================================================================

#[test]
fn expands_single_expression_in_factor_order() {
    let project = Project::with_config("version = 1\nenvlist = \"py{27,34}-django{17,18}\"\n");

    envmatrix_cmd()
        .arg("expand")
        .current_dir(project.path())
        .assert()
        .success()
        .stdout("py27-django17\npy27-django18\npy34-django17\npy34-django18\n");
}

#[test]
fn expands_multiple_expressions_with_exclusions() {
    envmatrix_cmd()
        .arg("expand")
        .current_dir(fixture("django-matrix"))
        .assert()
        .success()
        .stdout(
            "py27-django17\npy27-django18\npy27-django19\npy27-django110\npy27-django111\n\
             py33-django17\npy33-django18\n\
             py34-django17\npy34-django18\npy34-django19\npy34-django110\npy34-django111\n\
             py35-django18\npy35-django19\npy35-django110\npy35-django111\n\
             py36-django18\npy36-django19\npy36-django110\npy36-django111\n\
             flake8\n",
        );
}

#[test]
fn show_excluded_appends_removed_combinations() {
    envmatrix_cmd()
        .args(["expand", "--show-excluded"])
        .current_dir(fixture("django-matrix"))
        .assert()
        .success()
        .stdout(predicates::str::contains("py35-django17 (excluded)"))
        .stdout(predicates::str::contains("py36-django17 (excluded)"))
        .stdout(predicates::str::contains("py33-django111 (excluded)"));
}

#[test]
fn config_flag_overrides_discovery() {
    let project = Project::empty();
    let config = fixture("flake8-only").join("envmatrix.toml");

    envmatrix_cmd()
        .arg("expand")
        .arg("-C")
        .arg(&config)
        .current_dir(project.path())
        .assert()
        .success()
        .stdout("flake8\n");
}

#[test]
fn config_env_var_overrides_discovery() {
    let project = Project::empty();

    envmatrix_cmd()
        .arg("expand")
        .env("ENVMATRIX_CONFIG", fixture("flake8-only").join("envmatrix.toml"))
        .current_dir(project.path())
        .assert()
        .success()
        .stdout("flake8\n");
}

#[test]
fn config_is_discovered_from_subdirectory() {
    let project = Project::with_config(crate::prelude::MINIMAL_CONFIG);
    project.file("src/pkg/__init__.py", "");

    envmatrix_cmd()
        .arg("expand")
        .current_dir(project.path().join("src/pkg"))
        .assert()
        .success()
        .stdout("py27\npy34\n");
}

// =============================================================================
// JSON OUTPUT
// =============================================================================

#[test]
fn json_output_lists_environments_and_counts() {
    let output = envmatrix_cmd()
        .args(["expand", "-o", "json"])
        .current_dir(fixture("django-matrix"))
        .output()
        .expect("command should run");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total"], 21);
    assert_eq!(value["excluded"], 5);
    assert_eq!(value["environments"].as_array().unwrap().len(), 21);
    assert_eq!(value["environments"][20]["name"], "flake8");
}
