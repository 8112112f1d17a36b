//! Core module tests
//!
//! Contains test suites for core functionality:
//! - View filter tests (sorting, name prefix, month)
//! - Form validation tests
//! - Type tests (wire format, date parsing)
//! - Display formatting tests

#[cfg(test)]
mod types_tests;
