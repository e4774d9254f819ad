// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Factor notation parser.
//!
//! Grammar:
//!
//! ```text
//! envlist  := expr ("," | "\n") expr ...   separators inside braces do not split
//! expr     := segment ("-" segment)*
//! segment  := text? ("{" variant ("," variant)* "}")? text?
//! variant  := text?                        py{,3} yields `py` and `py3`
//! text     := [A-Za-z0-9_.]+
//! ```
//!
//! Each segment becomes one [`Factor`]. The tags of a factor are the full
//! segment texts (prefix + variant + suffix), so `py{27,34}` declares the
//! tags `py27` and `py34`.

use crate::error::ConfigError;
use crate::matrix::Factor;

/// A hyphen-joined sequence of factors, e.g. `py{27,34}-django{17,18}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    /// Expression text as written (trimmed).
    pub source: String,
    pub factors: Vec<Factor>,
}

/// Parse a full envlist into its expressions, in declared order.
///
/// Blank entries (`a,,b` or a trailing comma) are skipped; an envlist with no
/// expressions at all is malformed.
pub fn parse_envlist(input: &str) -> Result<Vec<Expression>, ConfigError> {
    let entries = split_top_level(input, input, |c| c == ',' || c == '\n')?;

    let expressions = entries
        .into_iter()
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(parse_expression)
        .collect::<Result<Vec<_>, _>>()?;

    if expressions.is_empty() {
        return Err(malformed(input, "envlist declares no environments"));
    }
    Ok(expressions)
}

/// Parse a single expression into its factors.
pub fn parse_expression(input: &str) -> Result<Expression, ConfigError> {
    let source = input.trim();
    if source.is_empty() {
        return Err(malformed(input, "empty expression"));
    }

    let mut factors = Vec::new();
    for segment in split_top_level(source, source, |c| c == '-')? {
        factors.push(parse_segment(segment.trim(), source)?);
    }

    Ok(Expression {
        source: source.to_string(),
        factors,
    })
}

/// Split `input` on separator characters that sit outside braces.
///
/// Also validates brace balance: nesting and stray `}` are rejected.
fn split_top_level<'a>(
    input: &'a str,
    expr: &str,
    is_separator: impl Fn(char) -> bool,
) -> Result<Vec<&'a str>, ConfigError> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;

    for (idx, c) in input.char_indices() {
        match c {
            '{' => {
                if depth > 0 {
                    return Err(malformed(expr, "nested '{' is not supported"));
                }
                depth += 1;
            }
            '}' => {
                if depth == 0 {
                    return Err(malformed(expr, "unbalanced '}'"));
                }
                depth -= 1;
            }
            c if depth == 0 && is_separator(c) => {
                parts.push(&input[start..idx]);
                start = idx + c.len_utf8();
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err(malformed(expr, "unclosed '{'"));
    }
    parts.push(&input[start..]);
    Ok(parts)
}

fn parse_segment(segment: &str, expr: &str) -> Result<Factor, ConfigError> {
    if segment.is_empty() {
        return Err(malformed(expr, "empty factor segment"));
    }

    let Some(open) = segment.find('{') else {
        check_text(segment, expr)?;
        return Ok(Factor::new(segment, vec![segment.to_string()]));
    };
    // Balance was checked by the splitter, so a closing brace follows.
    let close = match segment[open..].find('}') {
        Some(offset) => open + offset,
        None => return Err(malformed(expr, "unclosed '{'")),
    };

    let prefix = &segment[..open];
    let body = &segment[open + 1..close];
    let suffix = &segment[close + 1..];
    if suffix.contains('{') {
        return Err(malformed(
            expr,
            &format!("segment '{segment}' has more than one brace group"),
        ));
    }
    check_text(prefix, expr)?;
    check_text(suffix, expr)?;

    let name = if prefix.is_empty() && suffix.is_empty() {
        segment.to_string()
    } else {
        format!("{prefix}{suffix}")
    };

    if body.trim().is_empty() {
        return Err(ConfigError::EmptyFactor { factor: name });
    }

    let mut tags: Vec<String> = Vec::new();
    for variant in body.split(',') {
        let variant = variant.trim();
        check_text(variant, expr)?;
        let tag = format!("{prefix}{variant}{suffix}");
        if tag.is_empty() {
            return Err(malformed(
                expr,
                &format!("segment '{segment}' expands to an empty tag"),
            ));
        }
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }

    Ok(Factor::new(&name, tags))
}

/// Reject characters outside the tag alphabet.
fn check_text(text: &str, expr: &str) -> Result<(), ConfigError> {
    match text.chars().find(|c| !is_tag_char(*c)) {
        Some(c) => Err(malformed(expr, &format!("unexpected character {c:?}"))),
        None => Ok(()),
    }
}

/// Characters allowed in tags.
pub fn is_tag_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

fn malformed(expr: &str, reason: &str) -> ConfigError {
    ConfigError::MalformedExpression {
        expr: expr.trim().to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod tests;
