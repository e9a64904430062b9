//! Error handling
//!
//! Defines error types for registry and credential operations.

pub mod types;

pub use types::*;
