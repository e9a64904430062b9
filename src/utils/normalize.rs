//! Login and name normalization
//!
//! Pure functions that turn raw user input into the canonical form used as
//! registry keys and display fields.

use crate::error::RegistryError;

/// Strips a raw phone string down to digits and `+`.
pub fn normalize_phone(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Canonicalizes an email or login: trimmed and lowercased.
pub fn normalize_login(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Returns whether the identifier is a phone login: after normalization it
/// must be a single leading `+` followed by nothing but digits.
pub fn is_phone_login(raw: &str) -> bool {
    match normalize_phone(raw).strip_prefix('+') {
        Some(rest) => rest.chars().all(|c| c.is_ascii_digit()),
        None => false,
    }
}

/// Splits a full name into a first name and an optional last name.
///
/// Blank tokens are dropped; exactly one or two tokens are accepted.
pub fn split_full_name(raw: &str) -> Result<(String, Option<String>), RegistryError> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    match tokens.as_slice() {
        [first] => Ok(((*first).to_string(), None)),
        [first, last] => Ok(((*first).to_string(), Some((*last).to_string()))),
        _ => Err(RegistryError::IllegalFullName(raw.to_string())),
    }
}

/// Joins first and last name with a space and capitalizes the first
/// character of the result.
pub fn derive_full_name(first: &str, last: Option<&str>) -> String {
    let joined = match last {
        Some(last) => format!("{first} {last}"),
        None => first.to_string(),
    };
    let mut chars = joined.chars();
    match chars.next() {
        Some(head) => head.to_uppercase().chain(chars).collect(),
        None => joined,
    }
}

/// Uppercased first letters of the name parts, space-joined.
pub fn derive_initials(first: &str, last: Option<&str>) -> String {
    let initial = |part: &str| {
        part.chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default()
    };
    match last {
        Some(last) => format!("{} {}", initial(first), initial(last)),
        None => initial(first),
    }
}
