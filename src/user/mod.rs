//! User accounts
//!
//! The credential entity and its three construction modes.

pub mod account;

pub use account::{AuthMethod, Provenance, User};
