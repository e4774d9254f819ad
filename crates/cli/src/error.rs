// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.
//!
//! Every configuration problem surfaces as a [`ConfigError`] while the
//! config is loaded and the matrix expanded, before any output is written.

use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors. All are fatal to the run.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A declared factor has zero tags, e.g. `py{}`.
    #[error("factor '{factor}' has no tags")]
    EmptyFactor { factor: String },

    /// An exclusion rule names a tag absent from every factor.
    #[error("exclusion rule '{rule}' references undeclared tag '{tag}'")]
    DanglingExclusion { rule: String, tag: String },

    /// Factor notation that cannot be split into factors and tags.
    #[error("malformed expression '{expr}': {reason}")]
    MalformedExpression { expr: String, reason: String },

    /// A dependency string that is not `[<condition>:] <package>[<clauses>]`.
    #[error("invalid dependency '{spec}': {reason}")]
    InvalidRequirement {
        spec: String,
        reason: DependencyError,
    },

    /// A trigger map entry pointing at a tag no factor declares.
    #[error("trigger '{trigger}' maps to undeclared tag '{tag}'")]
    DanglingTrigger { trigger: String, tag: String },

    #[error("unsupported config version {found} (expected {expected})")]
    UnsupportedVersion { found: i64, expected: i64 },

    #[error("no envmatrix.toml found in {} or its parents", .start.display())]
    NotFound { start: PathBuf },

    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },
}

/// Why a dependency string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DependencyError {
    #[error("missing requirement")]
    MissingRequirement,

    #[error("expected a package name")]
    MissingPackage,

    /// Only dotted numeric releases, optionally ending in `.*`, are accepted.
    #[error("cannot parse version clause '{clause}'")]
    BadClause { clause: String },

    #[error("version '{version}' is out of range")]
    BadVersion { version: String },

    #[error("'.*' is only allowed after == or != in '{clause}'")]
    MisplacedWildcard { clause: String },

    #[error("invalid condition term '{term}'")]
    BadCondition { term: String },
}

/// Process exit codes.
///
/// Usage errors reported by clap also exit 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    UnknownEnvironment = 1,
    ConfigError = 2,
    InternalError = 3,
}

impl ExitCode {
    /// Classify an error bubbled up to `main`.
    ///
    /// A config file that cannot be found or read is a configuration error;
    /// any other failure is internal.
    pub fn for_error(err: &anyhow::Error) -> Self {
        if err.chain().any(|cause| cause.is::<ConfigError>()) {
            ExitCode::ConfigError
        } else {
            ExitCode::InternalError
        }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
