// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.

/// Config file name looked up by discovery.
pub const CONFIG_FILE: &str = "envmatrix.toml";

/// The only supported config schema version.
pub const CONFIG_VERSION: i64 = 1;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "ENVMATRIX_CONFIG";

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "ENVMATRIX_LOG";

/// Lint defaults.
pub mod lint {
    /// Default style-check line length (PEP 8).
    pub const MAX_LINE_LENGTH: usize = 79;
}
