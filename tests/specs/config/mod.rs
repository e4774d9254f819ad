// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for configuration.
//!
//! Tests that envmatrix correctly handles:
//! - Config file validation
//! - Config discovery failures

#![allow(clippy::unwrap_used, clippy::expect_used)]

#[path = "validation.rs"]
mod validation;
