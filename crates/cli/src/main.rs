// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use envmatrix::cli::{Cli, Command};
use envmatrix::config::{self, MatrixConfig, defaults};
use envmatrix::discovery;
use envmatrix::error::{ConfigError, ExitCode};

mod cmd_check;
mod cmd_expand;
mod cmd_select;
mod cmd_show;

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_env(defaults::LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .init();
}

/// Load config from `-C`, or the nearest `envmatrix.toml` above the cwd.
fn load_config(cli: &Cli) -> anyhow::Result<(PathBuf, MatrixConfig)> {
    let path = match &cli.config {
        Some(path) => path.clone(),
        None => {
            let cwd = std::env::current_dir().context("failed to read current directory")?;
            discovery::find_config(&cwd).ok_or(ConfigError::NotFound { start: cwd })?
        }
    };
    tracing::debug!("loading config from {}", path.display());
    let config = config::load(&path)?;
    Ok((path, config))
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let (path, config) = load_config(cli)?;
    match &cli.command {
        Command::Expand(args) => cmd_expand::run(cli, args, &config),
        Command::Show(args) => cmd_show::run(cli, args, &config),
        Command::Select(args) => cmd_select::run(cli, args, &config),
        Command::Check => cmd_check::run(cli, &path, &config),
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => code.into(),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::for_error(&err).into()
        }
    }
}
