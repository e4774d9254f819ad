// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Trigger-to-environment resolution.
//!
//! A CI job is started with external values such as `DJANGO=1.8`. Trigger
//! maps translate those values into local tags, and the matrix is narrowed to
//! the environments carrying every translated tag.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::ConfigError;
use crate::matrix::{Descriptor, Matrix};

/// Trigger name -> (external value -> local tag).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriggerMap {
    maps: BTreeMap<String, BTreeMap<String, String>>,
}

impl TriggerMap {
    pub fn new(maps: BTreeMap<String, BTreeMap<String, String>>) -> Self {
        Self { maps }
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    /// Declared trigger names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.maps.keys().map(String::as_str)
    }

    pub fn tag_for(&self, name: &str, value: &str) -> Option<&str> {
        self.maps.get(name)?.get(value).map(String::as_str)
    }

    /// Every target tag must be declared by some factor.
    pub fn validate(&self, declared: &BTreeSet<String>) -> Result<(), ConfigError> {
        for (trigger, values) in &self.maps {
            if let Some(tag) = values.values().find(|tag| !declared.contains(*tag)) {
                return Err(ConfigError::DanglingTrigger {
                    trigger: trigger.clone(),
                    tag: tag.clone(),
                });
            }
        }
        Ok(())
    }

    /// Read trigger values from the environment for every declared trigger.
    pub fn inputs_from(&self, lookup: impl Fn(&str) -> Option<String>) -> Vec<(String, String)> {
        self.names()
            .filter_map(|name| lookup(name).map(|value| (name.to_string(), value)))
            .collect()
    }
}

/// Result of narrowing the matrix by trigger inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<'a> {
    /// Tags derived from the inputs, in input order.
    pub tags: Vec<String>,
    pub environments: Vec<&'a Descriptor>,
}

/// Select the environments carrying every tag the inputs map to.
///
/// Inputs with no trigger map, or whose value is not mapped, are ignored.
/// When no input maps to a tag the whole matrix is selected.
pub fn select<'a>(
    matrix: &'a Matrix,
    triggers: &TriggerMap,
    inputs: &[(String, String)],
) -> Selection<'a> {
    let mut tags: Vec<String> = Vec::new();
    for (name, value) in inputs {
        match triggers.tag_for(name, value) {
            Some(tag) => {
                if !tags.iter().any(|t| t == tag) {
                    tags.push(tag.to_string());
                }
            }
            None => tracing::debug!("trigger {}={} maps to no tag", name, value),
        }
    }

    let environments = matrix
        .environments()
        .iter()
        .filter(|d| tags.iter().all(|tag| d.has_tag(tag)))
        .collect();

    Selection { tags, environments }
}

/// Parse a `NAME=VALUE` command-line assignment.
pub fn parse_assignment(text: &str) -> Result<(String, String), String> {
    match text.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("expected NAME=VALUE, got {text:?}")),
    }
}

#[cfg(test)]
#[path = "trigger_tests.rs"]
mod tests;
