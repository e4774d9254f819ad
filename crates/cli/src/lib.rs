// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test-environment matrix expansion.
//!
//! An envlist such as `py{27,34}-django{17,18}` expands into concrete
//! environments. Exclusion rules remove combinations, conditional
//! dependencies bind to the environments whose tags they name, and trigger
//! maps narrow the matrix for a CI job.

pub mod binding;
pub mod cli;
pub mod color;
pub mod config;
pub mod deps;
pub mod discovery;
pub mod error;
pub mod matrix;
pub mod notation;
pub mod report;
pub mod trigger;

#[cfg(test)]
pub mod test_utils;
