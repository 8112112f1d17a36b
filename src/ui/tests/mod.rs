//! UI module tests
//!
//! Contains test suites for the view-model:
//! - Fetch on mount and refresh
//! - Create and delete handlers, busy flag
//! - Status message lifecycle

#[cfg(test)]
mod controller_tests;
