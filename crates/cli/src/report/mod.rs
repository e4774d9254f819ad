// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting.
//!
//! Commands build a view and hand it to the formatter for the requested
//! output format.

mod json;
mod text;

use std::io;

use serde::Serialize;
use termcolor::WriteColor;

use crate::binding::BoundEnvironment;
use crate::cli::OutputFormat;
use crate::config::MatrixConfig;
use crate::matrix::Matrix;
use crate::trigger::Selection;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// One row of an environment listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvRow {
    pub name: String,
    pub excluded: bool,
}

/// The expanded matrix, optionally with excluded combinations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatrixView {
    pub environments: Vec<EnvRow>,
    pub total: usize,
    pub excluded: usize,
}

impl MatrixView {
    pub fn new(matrix: &Matrix, show_excluded: bool) -> Self {
        let mut environments: Vec<EnvRow> = matrix
            .environments()
            .iter()
            .map(|d| EnvRow {
                name: d.name(),
                excluded: false,
            })
            .collect();
        if show_excluded {
            environments.extend(matrix.excluded().iter().map(|d| EnvRow {
                name: d.name(),
                excluded: true,
            }));
        }
        Self {
            environments,
            total: matrix.len(),
            excluded: matrix.excluded().len(),
        }
    }
}

/// Environments picked by trigger values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionView {
    pub triggers: Vec<(String, String)>,
    pub tags: Vec<String>,
    pub environments: Vec<String>,
}

impl SelectionView {
    pub fn new(inputs: &[(String, String)], selection: &Selection<'_>) -> Self {
        Self {
            triggers: inputs.to_vec(),
            tags: selection.tags.clone(),
            environments: selection.environments.iter().map(|d| d.name()).collect(),
        }
    }
}

/// Config validation summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckView {
    pub config: String,
    pub expressions: usize,
    pub environments: usize,
    pub excluded: usize,
    pub max_line_length: usize,
}

impl CheckView {
    pub fn new(path: &str, config: &MatrixConfig) -> Self {
        Self {
            config: path.to_string(),
            expressions: config.expressions.len(),
            environments: config.matrix.len(),
            excluded: config.matrix.excluded().len(),
            max_line_length: config.lint.max_line_length,
        }
    }
}

/// Writes views in one output format.
pub trait ReportFormatter {
    fn write_matrix(&self, out: &mut dyn WriteColor, view: &MatrixView) -> io::Result<()>;

    fn write_environment(&self, out: &mut dyn WriteColor, env: &BoundEnvironment)
    -> io::Result<()>;

    fn write_selection(&self, out: &mut dyn WriteColor, view: &SelectionView) -> io::Result<()>;

    fn write_check(&self, out: &mut dyn WriteColor, view: &CheckView) -> io::Result<()>;
}

/// Formatter for `format`.
pub fn formatter(format: OutputFormat) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
