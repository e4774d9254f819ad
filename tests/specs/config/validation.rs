// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for config validation.
//!
//! Every configuration error exits 2 with `error:` on stderr and nothing on
//! stdout.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use yare::parameterized;

use crate::prelude::*;

// =============================================================================
// CONFIG VALIDATION SPECS
// =============================================================================

#[test]
fn unknown_config_key_fails() {
    let project = Project::with_config(&format!("{MINIMAL_CONFIG}unknown_key = true\n"));

    envmatrix_cmd()
        .arg("check")
        .current_dir(project.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unknown field"));
}

#[parameterized(
    empty_factor = { "envlist = \"py{}-django{17,18}\"\n", "factor 'py' has no tags" },
    unbalanced = { "envlist = \"py{27,34\"\n", "malformed expression" },
    nested = { "envlist = \"py{2{7}}\"\n", "malformed expression" },
    dangling_exclusion = {
        "envlist = \"py{27,34}\"\nexclude = [\"py39\"]\n",
        "references undeclared tag 'py39'"
    },
    bad_requirement = { "envlist = \"py27\"\ndeps = [\"Django=>1.8\"]\n", "invalid dependency" },
    dangling_trigger = {
        "envlist = \"py27\"\n[trigger.PY]\n\"3.9\" = \"py39\"\n",
        "maps to undeclared tag 'py39'"
    },
)]
fn config_errors_exit_2(body: &str, message: &str) {
    let project = Project::with_config(&format!("version = 1\n{body}"));

    for command in ["expand", "check"] {
        envmatrix_cmd()
            .arg(command)
            .current_dir(project.path())
            .assert()
            .code(2)
            .stdout("")
            .stderr(predicates::str::starts_with("error: "))
            .stderr(predicates::str::contains(message));
    }
}

#[test]
fn unsupported_version_fails() {
    let project = Project::with_config("version = 2\nenvlist = \"py27\"\n");

    envmatrix_cmd()
        .arg("check")
        .current_dir(project.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported config version 2"));
}

#[test]
fn missing_config_fails() {
    let project = Project::empty();

    envmatrix_cmd()
        .arg("expand")
        .current_dir(project.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("no envmatrix.toml found"));
}

#[test]
fn missing_explicit_config_fails() {
    let project = Project::empty();

    envmatrix_cmd()
        .args(["expand", "-C", "nope.toml"])
        .current_dir(project.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("failed to read nope.toml"));
}

#[test]
fn valid_config_passes_check() {
    let project = Project::with_config(MINIMAL_CONFIG);

    envmatrix_cmd()
        .arg("check")
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("envmatrix.toml: ok"));
}
