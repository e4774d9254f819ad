// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check command implementation.

use std::path::Path;

use envmatrix::cli::{Cli, OutputFormat};
use envmatrix::color;
use envmatrix::config::MatrixConfig;
use envmatrix::error::ExitCode;
use envmatrix::report::{self, CheckView};

/// Run the check command. Loading already validated the config.
pub fn run(cli: &Cli, path: &Path, config: &MatrixConfig) -> anyhow::Result<ExitCode> {
    let view = CheckView::new(&path.display().to_string(), config);
    let mut out = color::stdout(cli.color);
    report::formatter(OutputFormat::Text).write_check(&mut out, &view)?;
    Ok(ExitCode::Success)
}
