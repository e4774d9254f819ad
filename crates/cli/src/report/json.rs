// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format output.

use std::io;

use serde::Serialize;
use termcolor::WriteColor;

use super::{CheckView, MatrixView, ReportFormatter, SelectionView};
use crate::binding::BoundEnvironment;

/// JSON format formatter. One document per call, newline terminated.
pub struct JsonFormatter;

fn write_json<T: Serialize>(out: &mut dyn WriteColor, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

impl ReportFormatter for JsonFormatter {
    fn write_matrix(&self, out: &mut dyn WriteColor, view: &MatrixView) -> io::Result<()> {
        write_json(out, view)
    }

    fn write_environment(
        &self,
        out: &mut dyn WriteColor,
        env: &BoundEnvironment,
    ) -> io::Result<()> {
        write_json(out, env)
    }

    fn write_selection(&self, out: &mut dyn WriteColor, view: &SelectionView) -> io::Result<()> {
        write_json(out, view)
    }

    fn write_check(&self, out: &mut dyn WriteColor, view: &CheckView) -> io::Result<()> {
        write_json(out, view)
    }
}
