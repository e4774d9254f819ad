// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color handling.
//!
//! Color is enabled when stdout is a terminal and `NO_COLOR` is unset,
//! unless `--color` forces a choice.

use std::io::IsTerminal;

use termcolor::{ColorChoice, StandardStream};

/// `--color` argument.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Resolve the color choice from explicit flags.
///
/// `no_color` wins over `force_color`.
pub fn resolve_color(force_color: bool, no_color: bool) -> ColorChoice {
    if no_color {
        ColorChoice::Never
    } else if force_color {
        ColorChoice::Always
    } else {
        ColorChoice::Auto
    }
}

/// Resolve the color choice for stdout.
pub fn choice(mode: ColorMode) -> ColorChoice {
    match mode {
        ColorMode::Always => resolve_color(true, false),
        ColorMode::Never => resolve_color(false, true),
        ColorMode::Auto => {
            let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
            resolve_color(false, no_color || !std::io::stdout().is_terminal())
        }
    }
}

/// Colored stdout stream for `mode`.
pub fn stdout(mode: ColorMode) -> StandardStream {
    StandardStream::stdout(choice(mode))
}

/// Color scheme for text output.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Section headers.
    pub fn header() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    /// Environment names.
    pub fn env_name() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    /// Excluded environments.
    pub fn excluded() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }

    /// Version ranges and other secondary detail.
    pub fn detail() -> ColorSpec {
        ColorSpec::new()
    }

    /// Successful validation.
    pub fn pass() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
