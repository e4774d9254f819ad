// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format output.

use std::io;

use termcolor::{ColorSpec, WriteColor};

use super::{CheckView, MatrixView, ReportFormatter, SelectionView};
use crate::binding::BoundEnvironment;
use crate::color::scheme;

/// Text format formatter.
pub struct TextFormatter;

fn colored(out: &mut dyn WriteColor, spec: &ColorSpec, text: &str) -> io::Result<()> {
    out.set_color(spec)?;
    write!(out, "{text}")?;
    out.reset()
}

impl ReportFormatter for TextFormatter {
    fn write_matrix(&self, out: &mut dyn WriteColor, view: &MatrixView) -> io::Result<()> {
        for row in &view.environments {
            if row.excluded {
                colored(out, &scheme::excluded(), &row.name)?;
                writeln!(out, " (excluded)")?;
            } else {
                writeln!(out, "{}", row.name)?;
            }
        }
        Ok(())
    }

    fn write_environment(
        &self,
        out: &mut dyn WriteColor,
        env: &BoundEnvironment,
    ) -> io::Result<()> {
        colored(out, &scheme::env_name(), &env.name)?;
        if env.overridden {
            write!(out, " (override)")?;
        }
        writeln!(out)?;
        writeln!(out, "  tags: {}", env.tags.join(", "))?;

        colored(out, &scheme::header(), "deps:")?;
        writeln!(out)?;
        if env.deps.is_empty() {
            writeln!(out, "  (none)")?;
        }
        for dep in &env.deps {
            write!(out, "  {}", dep.requirement)?;
            if !dep.range.is_unbounded() {
                write!(out, "  ")?;
                colored(out, &scheme::detail(), &dep.range.to_string())?;
            }
            if let Some(condition) = &dep.condition {
                write!(out, "  [{condition}]")?;
            }
            writeln!(out)?;
        }

        colored(out, &scheme::header(), "commands:")?;
        writeln!(out)?;
        if env.commands.is_empty() {
            writeln!(out, "  (none)")?;
        }
        for command in &env.commands {
            writeln!(out, "  {command}")?;
        }
        Ok(())
    }

    fn write_selection(&self, out: &mut dyn WriteColor, view: &SelectionView) -> io::Result<()> {
        for name in &view.environments {
            writeln!(out, "{name}")?;
        }
        Ok(())
    }

    fn write_check(&self, out: &mut dyn WriteColor, view: &CheckView) -> io::Result<()> {
        write!(out, "{}: ", view.config)?;
        colored(out, &scheme::pass(), "ok")?;
        writeln!(
            out,
            " ({} environments, {} excluded, {} expressions)",
            view.environments, view.excluded, view.expressions
        )?;
        writeln!(out, "  lint max_line_length: {}", view.max_line_length)
    }
}
