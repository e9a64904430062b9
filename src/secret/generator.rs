//! Salt and access code generation

use rand::distributions::Alphanumeric;
use rand::{Rng, RngCore};

const SALT_BYTES: usize = 16;

/// One-time access code length.
pub const ACCESS_CODE_LEN: usize = 6;

/// Generates a fresh random salt, rendered as lowercase hex.
pub fn new_salt() -> String {
    let mut bytes = [0u8; SALT_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Generates an access code of [`ACCESS_CODE_LEN`] characters drawn
/// uniformly from the alphanumeric alphabet (`A-Z`, `a-z`, `0-9`).
pub fn new_access_code() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ACCESS_CODE_LEN)
        .map(char::from)
        .collect()
}
