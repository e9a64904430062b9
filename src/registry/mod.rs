//! User registry
//!
//! Login-keyed storage with uniqueness enforcement, authentication, and
//! bulk import.

pub(crate) mod import;
pub mod store;

pub use store::UserRegistry;
