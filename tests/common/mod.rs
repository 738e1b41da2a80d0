//! Common test utilities for Folio CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project and home directories plus CLI helpers
//! - Assertion macros: `assert_page!`, `assert_output_contains!`, etc.
//! - Fixtures: reusable content documents

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
