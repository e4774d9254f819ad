// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Smallest config that loads.
#[allow(dead_code)]
pub const MINIMAL_CONFIG: &str = "version = 1\nenvlist = \"py{27,34}\"\n";

/// Returns a Command configured to run the envmatrix binary.
///
/// Inherited config and log variables are cleared so tests only see what
/// they set.
pub fn envmatrix_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("envmatrix"));
    cmd.env_remove("ENVMATRIX_CONFIG")
        .env_remove("ENVMATRIX_LOG")
        .env_remove("DJANGO")
        .env_remove("TRAVIS_PYTHON_VERSION");
    cmd
}

/// Get path to a test fixture directory
pub fn fixture(name: &str) -> PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Temporary project directory. A `.git` marker bounds config discovery.
pub struct Project {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl Project {
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    pub fn with_config(content: &str) -> Self {
        let project = Self::empty();
        project.config(content);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `envmatrix.toml` at the project root.
    pub fn config(&self, content: &str) {
        self.file("envmatrix.toml", content);
    }

    pub fn file(&self, path: &str, content: &str) {
        let path = self.dir.path().join(path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }
}
