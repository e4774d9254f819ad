// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Select command implementation.

use envmatrix::cli::{Cli, SelectArgs};
use envmatrix::color;
use envmatrix::config::MatrixConfig;
use envmatrix::error::ExitCode;
use envmatrix::report::{self, SelectionView};
use envmatrix::trigger;

/// Run the select command.
pub fn run(cli: &Cli, args: &SelectArgs, config: &MatrixConfig) -> anyhow::Result<ExitCode> {
    // Explicit --trigger values replace the process environment entirely
    let inputs = if args.triggers.is_empty() {
        config.triggers.inputs_from(|name| std::env::var(name).ok())
    } else {
        args.triggers.clone()
    };

    let selection = trigger::select(&config.matrix, &config.triggers, &inputs);
    tracing::debug!(
        "selected {} of {} environments",
        selection.environments.len(),
        config.matrix.len()
    );

    let view = SelectionView::new(&inputs, &selection);
    let mut out = color::stdout(cli.color);
    report::formatter(args.output).write_selection(&mut out, &view)?;
    Ok(ExitCode::Success)
}
