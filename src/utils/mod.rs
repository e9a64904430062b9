//! Shared utilities
//!
//! Pure helpers with no registry state.

pub mod normalize;
