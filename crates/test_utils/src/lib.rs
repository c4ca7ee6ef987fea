//! Test Utilities Crate
//!
//! Shared fixtures and builders for the provider admin test suite.
//!
//! # Modules
//!
//! - `fixtures`: pre-built entities for common scenarios
//! - `builders`: builder patterns with faked defaults

pub mod builders;
pub mod fixtures;

pub use builders::*;
pub use fixtures::*;
