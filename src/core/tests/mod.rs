//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Directive and trigger parsing tests
//! - Action argument validation tests
//! - Canonical form and formatting tests
//! - Batch diagnostics tests

#[cfg(test)]
mod parser_tests;
