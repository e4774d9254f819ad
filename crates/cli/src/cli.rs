// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::color::ColorMode;
use crate::config::defaults::CONFIG_ENV;
use crate::trigger::parse_assignment;

/// Expands test-environment factor matrices
#[derive(Parser)]
#[command(name = "envmatrix")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN", global = true)]
    pub color: ColorMode,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List every environment in the expanded matrix
    Expand(ExpandArgs),
    /// Show dependencies and commands bound to one environment
    Show(ShowArgs),
    /// Select environments matching external trigger values
    Select(SelectArgs),
    /// Validate config and exit
    Check,
}

#[derive(clap::Args)]
pub struct ExpandArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Also list combinations removed by exclusion rules
    #[arg(long)]
    pub show_excluded: bool,
}

#[derive(clap::Args)]
pub struct ShowArgs {
    /// Environment name, e.g. py27-django18
    #[arg(value_name = "ENV")]
    pub env: String,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct SelectArgs {
    /// Trigger value; read from the environment when none are given
    #[arg(long = "trigger", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub triggers: Vec<(String, String)>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
