// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Matrix expansion.
//!
//! Expands factor expressions into the Cartesian product of their tags,
//! then drops every combination an exclusion rule matches. Output order is
//! deterministic: expressions in declared order, the first factor outermost,
//! tags in declared order.

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use serde::Serialize;

use crate::error::ConfigError;
use crate::notation::{self, Expression};

/// Separator between tags in an environment identifier.
pub const SEPARATOR: &str = "-";

/// A named axis of variation with an ordered set of tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Factor {
    pub name: String,
    pub tags: Vec<String>,
}

impl Factor {
    pub fn new(name: &str, tags: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            tags,
        }
    }
}

/// One concrete combination of tags, one per factor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Descriptor {
    tags: Vec<String>,
}

impl Descriptor {
    pub fn new(tags: Vec<String>) -> Self {
        Self { tags }
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Environment identifier: tags joined with [`SEPARATOR`].
    pub fn name(&self) -> String {
        self.tags.join(SEPARATOR)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl Serialize for Descriptor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name())
    }
}

/// Removes every descriptor that carries all of its tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionRule {
    source: String,
    tags: BTreeSet<String>,
}

impl ExclusionRule {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ordered: Vec<String> = tags.into_iter().map(Into::into).collect();
        Self {
            source: ordered.join(SEPARATOR),
            tags: ordered.into_iter().collect(),
        }
    }

    /// Parse a rule written in factor notation.
    ///
    /// Braces expand into one rule per combination, so
    /// `py{35,36}-django17` yields `py35-django17` and `py36-django17`.
    pub fn parse(input: &str) -> Result<Vec<ExclusionRule>, ConfigError> {
        let expression = notation::parse_expression(input)?;
        Ok(product(&expression.factors)?
            .into_iter()
            .map(|combo| ExclusionRule::new(combo.tags))
            .collect())
    }

    /// Rule text in environment-identifier form.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// True when every rule tag is among the descriptor's tags.
    pub fn matches(&self, descriptor: &Descriptor) -> bool {
        self.tags.iter().all(|tag| descriptor.has_tag(tag))
    }
}

/// The expanded environment set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matrix {
    environments: Vec<Descriptor>,
    excluded: Vec<Descriptor>,
    declared: BTreeSet<String>,
}

impl Matrix {
    /// Environments that survived exclusion, in expansion order.
    pub fn environments(&self) -> &[Descriptor] {
        &self.environments
    }

    /// Combinations removed by exclusion rules, in expansion order.
    pub fn excluded(&self) -> &[Descriptor] {
        &self.excluded
    }

    /// Every tag declared by any factor.
    pub fn declared_tags(&self) -> &BTreeSet<String> {
        &self.declared
    }

    pub fn len(&self) -> usize {
        self.environments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.environments.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Descriptor> {
        self.environments.iter().find(|d| d.name() == name)
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded.iter().any(|d| d.name() == name)
    }

    pub fn names(&self) -> Vec<String> {
        self.environments.iter().map(Descriptor::name).collect()
    }
}

/// Full Cartesian product of the factors' tags, first factor outermost.
pub fn product(factors: &[Factor]) -> Result<Vec<Descriptor>, ConfigError> {
    let mut combos: Vec<Vec<String>> = vec![Vec::new()];

    for factor in factors {
        if factor.tags.is_empty() {
            return Err(ConfigError::EmptyFactor {
                factor: factor.name.clone(),
            });
        }

        let mut next = Vec::with_capacity(combos.len() * factor.tags.len());
        for combo in &combos {
            for tag in &factor.tags {
                let mut extended = combo.clone();
                extended.push(tag.clone());
                next.push(extended);
            }
        }
        combos = next;
    }

    Ok(combos.into_iter().map(Descriptor::new).collect())
}

/// Expand expressions into a matrix, applying exclusion rules.
///
/// Rules are validated against the declared tags before anything is
/// expanded. A descriptor produced by an earlier expression is not repeated.
pub fn expand(expressions: &[Expression], rules: &[ExclusionRule]) -> Result<Matrix, ConfigError> {
    let mut declared = BTreeSet::new();
    for factor in expressions.iter().flat_map(|e| &e.factors) {
        if factor.tags.is_empty() {
            return Err(ConfigError::EmptyFactor {
                factor: factor.name.clone(),
            });
        }
        declared.extend(factor.tags.iter().cloned());
    }

    for rule in rules {
        if let Some(tag) = rule.tags().find(|tag| !declared.contains(*tag)) {
            return Err(ConfigError::DanglingExclusion {
                rule: rule.source().to_string(),
                tag: tag.to_string(),
            });
        }
    }

    let mut seen: HashSet<Descriptor> = HashSet::new();
    let mut environments = Vec::new();
    let mut excluded = Vec::new();

    for expression in expressions {
        for descriptor in product(&expression.factors)? {
            if !seen.insert(descriptor.clone()) {
                tracing::debug!("skipping duplicate environment {}", descriptor);
                continue;
            }
            match rules.iter().find(|rule| rule.matches(&descriptor)) {
                Some(rule) => {
                    tracing::debug!("{} excluded by rule {}", descriptor, rule.source());
                    excluded.push(descriptor);
                }
                None => environments.push(descriptor),
            }
        }
    }

    Ok(Matrix {
        environments,
        excluded,
        declared,
    })
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
