// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Show command implementation.

use envmatrix::binding;
use envmatrix::cli::{Cli, ShowArgs};
use envmatrix::color;
use envmatrix::config::MatrixConfig;
use envmatrix::error::ExitCode;
use envmatrix::report;

/// Run the show command.
///
/// Unknown and excluded names are user errors, not config errors.
pub fn run(cli: &Cli, args: &ShowArgs, config: &MatrixConfig) -> anyhow::Result<ExitCode> {
    let Some(descriptor) = config.matrix.get(&args.env) else {
        if config.matrix.is_excluded(&args.env) {
            eprintln!("error: environment '{}' is excluded", args.env);
        } else {
            eprintln!("error: unknown environment '{}'", args.env);
        }
        return Ok(ExitCode::UnknownEnvironment);
    };

    let env = binding::bind(config, descriptor);
    let mut out = color::stdout(cli.color);
    report::formatter(args.output).write_environment(&mut out, &env)?;
    Ok(ExitCode::Success)
}
