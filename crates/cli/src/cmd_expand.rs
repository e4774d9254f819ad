// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Expand command implementation.

use envmatrix::cli::{Cli, ExpandArgs};
use envmatrix::color;
use envmatrix::config::MatrixConfig;
use envmatrix::error::ExitCode;
use envmatrix::report::{self, MatrixView};

/// Run the expand command.
pub fn run(cli: &Cli, args: &ExpandArgs, config: &MatrixConfig) -> anyhow::Result<ExitCode> {
    let view = MatrixView::new(&config.matrix, args.show_excluded);
    let mut out = color::stdout(cli.color);
    report::formatter(args.output).write_matrix(&mut out, &view)?;
    Ok(ExitCode::Success)
}
