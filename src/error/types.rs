//! Error types
//!
//! Case-specific errors for registry and credential operations, with a
//! coarse classification for callers that only branch on the failure class.

use std::fmt;

/// Coarse failure class of a [`RegistryError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Conflict,
    NotFound,
    Authorization,
}

/// Registry and credential errors
#[derive(Debug)]
pub enum RegistryError {
    BlankFirstName,
    MissingContact,
    IllegalFullName(String),
    IllegalPhone(String),
    MalformedRecord { index: usize, row: String },
    EmailTaken(String),
    PhoneTaken(String),
    PhoneNotFound(String),
    LoginNotFound(String),
    WrongPassword,
}

impl RegistryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistryError::BlankFirstName
            | RegistryError::MissingContact
            | RegistryError::IllegalFullName(_)
            | RegistryError::IllegalPhone(_)
            | RegistryError::MalformedRecord { .. } => ErrorKind::Validation,
            RegistryError::EmailTaken(_) | RegistryError::PhoneTaken(_) => ErrorKind::Conflict,
            RegistryError::PhoneNotFound(_) | RegistryError::LoginNotFound(_) => {
                ErrorKind::NotFound
            }
            RegistryError::WrongPassword => ErrorKind::Authorization,
        }
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::BlankFirstName => write!(f, "First name must not be blank"),
            RegistryError::MissingContact => write!(f, "Email or phone must not be blank"),
            RegistryError::IllegalFullName(name) => write!(
                f,
                "Full name must contain only first and last name, current split is: {}",
                name
            ),
            RegistryError::IllegalPhone(phone) => {
                write!(f, "Phone number is not correct: {}", phone)
            }
            RegistryError::MalformedRecord { index, row } => {
                write!(f, "Malformed import record at row {}: {}", index, row)
            }
            RegistryError::EmailTaken(login) => {
                write!(f, "A user with this email already exists: {}", login)
            }
            RegistryError::PhoneTaken(phone) => {
                write!(f, "A user with this phone number already exists: {}", phone)
            }
            RegistryError::PhoneNotFound(phone) => {
                write!(f, "A user with this phone number does not exist: {}", phone)
            }
            RegistryError::LoginNotFound(login) => {
                write!(f, "No user registered under login: {}", login)
            }
            RegistryError::WrongPassword => {
                write!(f, "The entered password does not match the current password")
            }
        }
    }
}

impl std::error::Error for RegistryError {}
