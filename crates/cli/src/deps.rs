// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Conditional dependency specifications.
//!
//! A dependency string is `[<condition>:] <package>[<clause>,...]`, for
//! example `django18: Django>=1.8,<1.9`. The condition selects which
//! environments receive the requirement:
//!
//! - `django18` matches environments carrying the tag `django18`
//! - `py27,py34` matches either tag
//! - `py27-django18` matches environments carrying both tags
//! - `!py27` matches environments without the tag

use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::{ConfigError, DependencyError};
use crate::matrix::Descriptor;
use crate::notation::is_tag_char;

/// `<package>[<extras>] <clauses>`
#[allow(clippy::expect_used)]
static REQUIREMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9](?:[A-Za-z0-9._-]*[A-Za-z0-9])?)\s*(\[[^\]]*\])?\s*(.*)$")
        .expect("valid regex pattern")
});

/// `<comparator> <version>[.*]`
#[allow(clippy::expect_used)]
static CLAUSE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(~=|===|==|!=|>=|<=|>|<)\s*([0-9]+(?:\.[0-9]+)*)(\.\*)?$")
        .expect("valid regex pattern")
});

// =============================================================================
// VERSIONS
// =============================================================================

/// Dotted numeric release version. Trailing zeros are insignificant,
/// so `1.8` and `1.8.0` compare equal.
#[derive(Debug, Clone)]
pub struct Version {
    parts: Vec<u64>,
    text: String,
}

impl Version {
    pub fn parse(text: &str) -> Option<Version> {
        let parts = text
            .split('.')
            .map(|p| p.parse::<u64>().ok())
            .collect::<Option<Vec<_>>>()?;
        if parts.is_empty() {
            return None;
        }
        Some(Version {
            parts,
            text: text.to_string(),
        })
    }

    pub fn parts(&self) -> &[u64] {
        &self.parts
    }

    fn part(&self, idx: usize) -> u64 {
        self.parts.get(idx).copied().unwrap_or(0)
    }

    /// Upper bound implied by `~=`: drop the last component, bump the new last.
    fn compatible_upper(&self) -> Option<Version> {
        match self.parts.len() {
            0 | 1 => None,
            len => next_release(&self.parts[..len - 1]),
        }
    }

    /// Upper bound implied by `==X.*`.
    fn prefix_upper(&self) -> Option<Version> {
        next_release(&self.parts)
    }

    /// True when the leading components equal `prefix`, padding with zeros.
    fn starts_with(&self, prefix: &Version) -> bool {
        (0..prefix.parts.len()).all(|i| self.part(i) == prefix.part(i))
    }
}

/// First release past every version beginning with `prefix`.
///
/// `None` when the last component cannot be bumped; the bound is then open.
fn next_release(prefix: &[u64]) -> Option<Version> {
    let (last, head) = prefix.split_last()?;
    let mut parts = head.to_vec();
    parts.push(last.checked_add(1)?);
    let text = parts
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(".");
    Some(Version { parts, text })
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.parts.len().max(other.parts.len());
        (0..len)
            .map(|i| self.part(i).cmp(&other.part(i)))
            .find(|o| *o != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for Version {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

// =============================================================================
// REQUIREMENTS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    Eq,
    Ne,
    Ge,
    Le,
    Gt,
    Lt,
    Compatible,
    Arbitrary,
}

impl Comparator {
    fn parse(s: &str) -> Option<Comparator> {
        Some(match s {
            "==" => Comparator::Eq,
            "!=" => Comparator::Ne,
            ">=" => Comparator::Ge,
            "<=" => Comparator::Le,
            ">" => Comparator::Gt,
            "<" => Comparator::Lt,
            "~=" => Comparator::Compatible,
            "===" => Comparator::Arbitrary,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Comparator::Eq => "==",
            Comparator::Ne => "!=",
            Comparator::Ge => ">=",
            Comparator::Le => "<=",
            Comparator::Gt => ">",
            Comparator::Lt => "<",
            Comparator::Compatible => "~=",
            Comparator::Arbitrary => "===",
        }
    }
}

/// One `<comparator><version>` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub comparator: Comparator,
    pub version: Version,
    /// `==1.8.*` style prefix match. Only set for `==` and `!=`.
    pub wildcard: bool,
}

impl Clause {
    pub fn allows(&self, version: &Version) -> bool {
        if self.wildcard {
            return version.starts_with(&self.version) == (self.comparator == Comparator::Eq);
        }
        match self.comparator {
            Comparator::Eq | Comparator::Arbitrary => version == &self.version,
            Comparator::Ne => version != &self.version,
            Comparator::Ge => version >= &self.version,
            Comparator::Le => version <= &self.version,
            Comparator::Gt => version > &self.version,
            Comparator::Lt => version < &self.version,
            Comparator::Compatible => {
                version >= &self.version
                    && self
                        .version
                        .compatible_upper()
                        .is_none_or(|upper| version < &upper)
            }
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.comparator.as_str(), self.version)?;
        if self.wildcard {
            f.write_str(".*")?;
        }
        Ok(())
    }
}

/// Lower-inclusive, upper-exclusive bounds implied by a requirement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VersionRange {
    pub lower: Option<Version>,
    pub upper: Option<Version>,
}

impl VersionRange {
    pub fn is_unbounded(&self) -> bool {
        self.lower.is_none() && self.upper.is_none()
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.lower, &self.upper) {
            (None, None) => f.write_str("any"),
            (Some(lo), None) => write!(f, "[{lo}, )"),
            (None, Some(hi)) => write!(f, "[, {hi})"),
            (Some(lo), Some(hi)) => write!(f, "[{lo}, {hi})"),
        }
    }
}

/// A package requirement such as `Django>=1.8,<1.9`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub package: String,
    pub extras: Option<String>,
    pub clauses: Vec<Clause>,
}

impl Requirement {
    pub fn parse(text: &str) -> Result<Requirement, DependencyError> {
        let text = text.trim();
        let caps = REQUIREMENT_REGEX
            .captures(text)
            .ok_or(DependencyError::MissingPackage)?;

        let package = caps.get(1).map_or("", |m| m.as_str()).to_string();
        let extras = caps.get(2).map(|m| m.as_str().to_string());
        let rest = caps.get(3).map_or("", |m| m.as_str()).trim();

        let mut clauses = Vec::new();
        if !rest.is_empty() {
            for raw in rest.split(',') {
                clauses.push(parse_clause(raw.trim())?);
            }
        }

        Ok(Requirement {
            package,
            extras,
            clauses,
        })
    }

    /// True when `version` satisfies every clause.
    pub fn allows(&self, version: &Version) -> bool {
        self.clauses.iter().all(|c| c.allows(version))
    }

    /// Tightest lower-inclusive and upper-exclusive bounds across the clauses.
    ///
    /// `>=`, `==` and `~=` contribute lower bounds; `<`, `~=` and `==X.*`
    /// contribute upper bounds. Other comparators leave the range unchanged.
    pub fn range(&self) -> VersionRange {
        let mut range = VersionRange::default();
        for clause in &self.clauses {
            let (lower, upper) = match clause.comparator {
                Comparator::Eq if clause.wildcard => {
                    (Some(clause.version.clone()), clause.version.prefix_upper())
                }
                Comparator::Ne if clause.wildcard => (None, None),
                Comparator::Ge | Comparator::Eq | Comparator::Arbitrary => {
                    (Some(clause.version.clone()), None)
                }
                Comparator::Lt => (None, Some(clause.version.clone())),
                Comparator::Compatible => {
                    (Some(clause.version.clone()), clause.version.compatible_upper())
                }
                Comparator::Ne | Comparator::Le | Comparator::Gt => (None, None),
            };
            if let Some(lo) = lower
                && range.lower.as_ref().is_none_or(|cur| lo > *cur)
            {
                range.lower = Some(lo);
            }
            if let Some(hi) = upper
                && range.upper.as_ref().is_none_or(|cur| hi < *cur)
            {
                range.upper = Some(hi);
            }
        }
        range
    }
}

fn parse_clause(raw: &str) -> Result<Clause, DependencyError> {
    let bad_clause = || DependencyError::BadClause {
        clause: raw.to_string(),
    };
    let caps = CLAUSE_REGEX.captures(raw).ok_or_else(bad_clause)?;
    let comparator = caps
        .get(1)
        .and_then(|m| Comparator::parse(m.as_str()))
        .ok_or_else(bad_clause)?;
    let text = caps.get(2).map_or("", |m| m.as_str());
    let version = Version::parse(text).ok_or_else(|| DependencyError::BadVersion {
        version: text.to_string(),
    })?;
    let wildcard = caps.get(3).is_some();
    if wildcard && !matches!(comparator, Comparator::Eq | Comparator::Ne) {
        return Err(DependencyError::MisplacedWildcard {
            clause: raw.to_string(),
        });
    }
    Ok(Clause {
        comparator,
        version,
        wildcard,
    })
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.package)?;
        if let Some(extras) = &self.extras {
            f.write_str(extras)?;
        }
        let clauses: Vec<String> = self.clauses.iter().map(Clause::to_string).collect();
        f.write_str(&clauses.join(","))
    }
}

// =============================================================================
// CONDITIONS
// =============================================================================

/// A tag that must be present (or absent, when negated).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagTest {
    pub tag: String,
    pub negated: bool,
}

/// OR of terms; each term is an AND of tag tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    terms: Vec<Vec<TagTest>>,
}

impl Condition {
    pub fn parse(text: &str) -> Result<Condition, DependencyError> {
        let mut terms = Vec::new();
        for term in text.split(',') {
            let mut tests = Vec::new();
            for part in term.trim().split('-') {
                let part = part.trim();
                let (negated, tag) = match part.strip_prefix('!') {
                    Some(tag) => (true, tag),
                    None => (false, part),
                };
                if tag.is_empty() || !tag.chars().all(is_tag_char) {
                    return Err(DependencyError::BadCondition {
                        term: term.trim().to_string(),
                    });
                }
                tests.push(TagTest {
                    tag: tag.to_string(),
                    negated,
                });
            }
            terms.push(tests);
        }
        Ok(Condition { terms })
    }

    pub fn matches(&self, descriptor: &Descriptor) -> bool {
        self.terms.iter().any(|term| {
            term.iter()
                .all(|test| descriptor.has_tag(&test.tag) != test.negated)
        })
    }

    /// Every tag the condition mentions.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().flatten().map(|t| t.tag.as_str())
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms: Vec<String> = self
            .terms
            .iter()
            .map(|term| {
                term.iter()
                    .map(|t| {
                        if t.negated {
                            format!("!{}", t.tag)
                        } else {
                            t.tag.clone()
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("-")
            })
            .collect();
        f.write_str(&terms.join(","))
    }
}

// =============================================================================
// DEPENDENCY SPECS
// =============================================================================

/// A requirement with an optional environment condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencySpec {
    pub condition: Option<Condition>,
    pub requirement: Requirement,
}

impl DependencySpec {
    /// Parse `[<condition>:] <requirement>`.
    ///
    /// The text before the first `:` is only treated as a condition when it
    /// looks like one; otherwise the whole string is the requirement.
    pub fn parse(text: &str) -> Result<DependencySpec, ConfigError> {
        let invalid = |reason: DependencyError| ConfigError::InvalidRequirement {
            spec: text.trim().to_string(),
            reason,
        };

        let (condition, requirement) = match text.split_once(':') {
            Some((head, tail)) if looks_like_condition(head) => {
                (Some(Condition::parse(head).map_err(invalid)?), tail)
            }
            _ => (None, text),
        };

        if requirement.trim().is_empty() {
            return Err(invalid(DependencyError::MissingRequirement));
        }
        let requirement = Requirement::parse(requirement).map_err(invalid)?;

        Ok(DependencySpec {
            condition,
            requirement,
        })
    }

    /// Unconditional specs match every environment.
    pub fn matches(&self, descriptor: &Descriptor) -> bool {
        self.condition
            .as_ref()
            .is_none_or(|condition| condition.matches(descriptor))
    }
}

impl fmt::Display for DependencySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.condition {
            Some(condition) => write!(f, "{condition}: {}", self.requirement),
            None => write!(f, "{}", self.requirement),
        }
    }
}

fn looks_like_condition(head: &str) -> bool {
    let head = head.trim();
    !head.is_empty()
        && head
            .chars()
            .all(|c| is_tag_char(c) || matches!(c, ',' | '-' | '!' | ' '))
}

/// Specs that apply to `descriptor`, in declared order.
pub fn select<'a>(specs: &'a [DependencySpec], descriptor: &Descriptor) -> Vec<&'a DependencySpec> {
    specs.iter().filter(|s| s.matches(descriptor)).collect()
}

#[cfg(test)]
#[path = "deps_tests.rs"]
mod tests;
