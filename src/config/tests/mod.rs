//! Config module tests
//!
//! Contains test suites for settings resolution:
//! - Defaults, config file, environment and CLI layers
//! - Base URL validation
