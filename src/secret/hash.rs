//! Password digest
//!
//! Salted one-way digest for stored credentials. The algorithm is a
//! substitutable component: anything implementing [`Digest`] with a fixed
//! output width works. The reference digest is MD5, which keeps hashes
//! migrated from the legacy store verifying unchanged.

use md5::{Digest, Md5};

/// Digests an arbitrary byte string with `D`, rendered as lowercase hex.
pub fn digest_hex<D: Digest>(input: &[u8]) -> String {
    hex::encode(D::digest(input))
}

/// Hashes the concatenation of salt and plaintext into a fixed-width
/// lowercase hex digest (32 characters for the reference digest).
pub fn hash_password(plain: &str, salt: &str) -> String {
    digest_hex::<Md5>(format!("{salt}{plain}").as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_deterministic() {
        let first = hash_password("testPass", "somesalt");
        let second = hash_password("testPass", "somesalt");
        assert_eq!(first, second);
        assert_eq!(32, first.len());
        assert!(first.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_hash_depends_on_salt_and_plaintext() {
        let base = hash_password("testPass", "somesalt");
        assert_ne!(base, hash_password("testPass", "othersalt"));
        assert_ne!(base, hash_password("otherPass", "somesalt"));
    }

    // Known vector from a legacy export: the imported prefix acts as salt.
    #[test]
    fn test_hash_matches_legacy_export() {
        assert_eq!(
            hash_password("QhQcIT", "[B@1f54bcc7"),
            "ee3a4a26aa61b10184a457b2b0ba8627"
        );
    }
}
