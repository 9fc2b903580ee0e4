//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - A test server over a temporary save root
//! - Architecture document fixtures
//! - Custom assertion macros

#![allow(dead_code)]

#[macro_use]
pub mod assertions;
pub mod fixtures;

pub use fixtures::*;
