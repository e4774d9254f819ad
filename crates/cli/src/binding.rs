// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command binding: what each expanded environment installs and runs.

use serde::Serialize;

use crate::config::MatrixConfig;
use crate::deps::{self, DependencySpec, VersionRange};
use crate::matrix::Descriptor;

/// A dependency selected for an environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoundDependency {
    pub requirement: String,
    pub package: String,
    /// Condition text that selected it, if any.
    pub condition: Option<String>,
    pub range: VersionRange,
}

impl BoundDependency {
    fn from_spec(spec: &DependencySpec) -> Self {
        Self {
            requirement: spec.requirement.to_string(),
            package: spec.requirement.package.clone(),
            condition: spec.condition.as_ref().map(ToString::to_string),
            range: spec.requirement.range(),
        }
    }
}

/// An environment with its dependencies and commands resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoundEnvironment {
    pub name: String,
    pub tags: Vec<String>,
    pub deps: Vec<BoundDependency>,
    pub commands: Vec<String>,
    /// True when an `[env.<name>]` table supplied deps or commands.
    pub overridden: bool,
}

/// Resolve deps and commands for one descriptor.
///
/// An override's deps or commands replace the global ones wholesale. Global
/// deps are filtered by condition; override deps are taken as written when
/// unconditional and filtered the same way otherwise.
pub fn bind(config: &MatrixConfig, descriptor: &Descriptor) -> BoundEnvironment {
    let name = descriptor.name();
    let env_override = config.overrides.get(&name);

    let dep_specs = match env_override.and_then(|o| o.deps.as_ref()) {
        Some(specs) => deps::select(specs, descriptor),
        None => deps::select(&config.deps, descriptor),
    };
    let commands = env_override
        .and_then(|o| o.commands.clone())
        .unwrap_or_else(|| config.commands.clone());

    BoundEnvironment {
        overridden: env_override.is_some_and(|o| o.deps.is_some() || o.commands.is_some()),
        tags: descriptor.tags().to_vec(),
        deps: dep_specs.into_iter().map(BoundDependency::from_spec).collect(),
        commands,
        name,
    }
}

#[cfg(test)]
#[path = "binding_tests.rs"]
mod tests;
