//! Common test infrastructure for the symtab tests
//!
//! Shared helpers and fixtures used across the test suite.

#![allow(dead_code)]

pub mod fixtures;
pub mod harness;

pub use fixtures::*;
pub use harness::*;
