// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! `envmatrix.toml` is deserialized into [`RawConfig`] (unknown keys are
//! errors), then validated into a [`MatrixConfig`]: the envlist is parsed,
//! exclusion rules and dependency strings are checked, and the matrix is
//! expanded. Nothing is returned unless every step succeeds.

pub mod defaults;

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::deps::DependencySpec;
use crate::error::ConfigError;
use crate::matrix::{self, ExclusionRule, Matrix};
use crate::notation::{self, Expression};
use crate::trigger::TriggerMap;

/// File shape as written.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    pub version: i64,

    /// Factor expressions, comma or newline separated.
    pub envlist: String,

    /// Exclusion rules in factor notation.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Dependency strings, optionally conditional.
    #[serde(default)]
    pub deps: Vec<String>,

    /// Commands run in every environment.
    #[serde(default)]
    pub commands: Vec<String>,

    /// Per-environment overrides keyed by environment name.
    #[serde(default)]
    pub env: BTreeMap<String, RawEnvOverride>,

    /// Trigger name -> external value -> tag.
    #[serde(default)]
    pub trigger: BTreeMap<String, BTreeMap<String, String>>,

    #[serde(default)]
    pub lint: LintConfig,
}

/// `[env.<name>]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawEnvOverride {
    pub deps: Option<Vec<String>>,
    pub commands: Option<Vec<String>>,
}

/// `[lint]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LintConfig {
    #[serde(default = "LintConfig::default_max_line_length")]
    pub max_line_length: usize,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            max_line_length: Self::default_max_line_length(),
        }
    }
}

impl LintConfig {
    fn default_max_line_length() -> usize {
        defaults::lint::MAX_LINE_LENGTH
    }
}

/// Validated override for one environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverride {
    pub deps: Option<Vec<DependencySpec>>,
    pub commands: Option<Vec<String>>,
}

/// Validated configuration with the expanded matrix.
#[derive(Debug, Clone)]
pub struct MatrixConfig {
    pub expressions: Vec<Expression>,
    pub rules: Vec<ExclusionRule>,
    pub deps: Vec<DependencySpec>,
    pub commands: Vec<String>,
    pub overrides: BTreeMap<String, EnvOverride>,
    pub triggers: TriggerMap,
    pub lint: LintConfig,
    pub matrix: Matrix,
}

/// Load and validate a config file.
pub fn load(path: &Path) -> Result<MatrixConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content, path)
}

/// Parse and validate config content. `path` is used in error messages.
pub fn parse(content: &str, path: &Path) -> Result<MatrixConfig, ConfigError> {
    let raw: RawConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source: Box::new(source),
    })?;
    validate(raw)
}

/// Validate a deserialized config and expand its matrix.
pub fn validate(raw: RawConfig) -> Result<MatrixConfig, ConfigError> {
    if raw.version != defaults::CONFIG_VERSION {
        return Err(ConfigError::UnsupportedVersion {
            found: raw.version,
            expected: defaults::CONFIG_VERSION,
        });
    }

    let expressions = notation::parse_envlist(&raw.envlist)?;

    let mut rules = Vec::new();
    for rule in &raw.exclude {
        rules.extend(ExclusionRule::parse(rule)?);
    }

    let matrix = matrix::expand(&expressions, &rules)?;
    tracing::debug!(
        "expanded {} environments ({} excluded)",
        matrix.len(),
        matrix.excluded().len()
    );

    let deps = parse_deps(&raw.deps)?;
    warn_unknown_condition_tags(&deps, &matrix);

    let mut overrides = BTreeMap::new();
    for (name, raw_override) in &raw.env {
        if matrix.get(name).is_none() {
            tracing::warn!("[env.{}] does not match any environment in the matrix", name);
        }
        let deps = raw_override.deps.as_deref().map(parse_deps).transpose()?;
        if let Some(deps) = &deps {
            warn_unknown_condition_tags(deps, &matrix);
        }
        overrides.insert(
            name.clone(),
            EnvOverride {
                deps,
                commands: raw_override.commands.clone(),
            },
        );
    }

    let triggers = TriggerMap::new(raw.trigger);
    triggers.validate(matrix.declared_tags())?;

    Ok(MatrixConfig {
        expressions,
        rules,
        deps,
        commands: raw.commands,
        overrides,
        triggers,
        lint: raw.lint,
        matrix,
    })
}

fn parse_deps(raw: &[String]) -> Result<Vec<DependencySpec>, ConfigError> {
    raw.iter().map(|s| DependencySpec::parse(s)).collect()
}

/// Conditions naming undeclared tags can never match; flag them.
fn warn_unknown_condition_tags(deps: &[DependencySpec], matrix: &Matrix) {
    for spec in deps {
        let Some(condition) = &spec.condition else {
            continue;
        };
        for tag in condition.tags() {
            if !matrix.declared_tags().contains(tag) {
                tracing::warn!("dependency '{}' names undeclared tag '{}'", spec, tag);
            }
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
