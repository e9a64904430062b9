//! Secret generation
//!
//! Password digests, salts, and one-time access codes.

pub mod generator;
pub mod hash;

pub use generator::{ACCESS_CODE_LEN, new_access_code, new_salt};
pub use hash::{digest_hex, hash_password};
