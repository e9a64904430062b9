//! Credential entity
//!
//! An identity record created through one of three construction modes:
//! interactive password registration, bulk import of a precomputed hash, or
//! phone registration with a one-time access code. Identity fields are fixed
//! at construction; only the password hash (via an authorized change) and
//! the access code (via refresh) may be replaced. The profile summary is
//! rendered once at construction and never recomputed.

use std::collections::BTreeMap;

use crate::error::RegistryError;
use crate::notify::AccessCodeNotifier;
use crate::secret::{hash_password, new_access_code, new_salt};
use crate::utils::normalize::{
    derive_full_name, derive_initials, normalize_login, normalize_phone,
};

/// Authentication data, one variant per construction mode.
#[derive(Debug, Clone)]
pub enum AuthMethod {
    /// Interactive registration: salted hash of a chosen password.
    Password { password_hash: String, salt: String },
    /// Bulk import: hash and salt prefix carried over verbatim.
    Imported { password_hash: String, hash_prefix: String },
    /// Phone registration: a one-time access code is the only credential.
    PhoneOtp { access_code: String },
}

/// Provenance tag recorded in the entity's meta mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    Password,
    Sms,
    Csv,
}

impl Provenance {
    fn entry(self) -> (&'static str, &'static str) {
        match self {
            Provenance::Password => ("auth", "password"),
            Provenance::Sms => ("auth", "sms"),
            Provenance::Csv => ("src", "csv"),
        }
    }
}

/// A registered identity.
#[derive(Debug, Clone)]
pub struct User {
    first_name: String,
    last_name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    login: String,
    auth: AuthMethod,
    meta: BTreeMap<String, String>,
    profile_summary: String,
}

/// Validated identity fields shared by all construction modes.
struct Identity {
    first_name: String,
    last_name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    login: String,
    meta: BTreeMap<String, String>,
}

impl Identity {
    /// Runs the common validation: non-blank first name, at least one
    /// non-blank identity channel. A supplied phone drives the login key;
    /// otherwise the lowercased email does.
    fn new(
        first_name: String,
        last_name: Option<String>,
        email: Option<String>,
        raw_phone: Option<String>,
        provenance: Provenance,
    ) -> Result<Self, RegistryError> {
        if first_name.trim().is_empty() {
            return Err(RegistryError::BlankFirstName);
        }
        let phone = raw_phone
            .as_deref()
            .map(normalize_phone)
            .filter(|p| !p.is_empty());
        let login = match (&phone, &email) {
            (Some(phone), _) => phone.clone(),
            (None, Some(email)) if !email.trim().is_empty() => normalize_login(email),
            _ => return Err(RegistryError::MissingContact),
        };
        let (key, value) = provenance.entry();
        let meta = BTreeMap::from([(key.to_string(), value.to_string())]);
        Ok(Self {
            first_name,
            last_name,
            email,
            phone,
            login,
            meta,
        })
    }
}

impl User {
    /// Password mode: a fresh salt is generated and the plaintext is hashed.
    pub(crate) fn with_password(
        first_name: String,
        last_name: Option<String>,
        email: &str,
        password: &str,
    ) -> Result<Self, RegistryError> {
        let identity = Identity::new(
            first_name,
            last_name,
            Some(email.to_string()),
            None,
            Provenance::Password,
        )?;
        let salt = new_salt();
        let password_hash = hash_password(password, &salt);
        Ok(Self::finish(
            identity,
            AuthMethod::Password {
                password_hash,
                salt,
            },
        ))
    }

    /// Import mode: the supplied hash prefix acts as salt and the hash is
    /// stored verbatim, never re-hashed.
    pub(crate) fn from_import(
        first_name: String,
        last_name: Option<String>,
        email: &str,
        hash_prefix: &str,
        password_hash: &str,
    ) -> Result<Self, RegistryError> {
        let identity = Identity::new(
            first_name,
            last_name,
            Some(email.to_string()),
            None,
            Provenance::Csv,
        )?;
        Ok(Self::finish(
            identity,
            AuthMethod::Imported {
                password_hash: password_hash.to_string(),
                hash_prefix: hash_prefix.to_string(),
            },
        ))
    }

    /// Phone mode: a fresh access code is generated and handed to the
    /// notifier for out-of-band delivery.
    pub(crate) fn with_phone(
        first_name: String,
        last_name: Option<String>,
        raw_phone: &str,
        provenance: Provenance,
        notifier: &dyn AccessCodeNotifier,
    ) -> Result<Self, RegistryError> {
        let identity = Identity::new(
            first_name,
            last_name,
            None,
            Some(raw_phone.to_string()),
            provenance,
        )?;
        let access_code = new_access_code();
        let user = Self::finish(identity, AuthMethod::PhoneOtp {
            access_code: access_code.clone(),
        });
        if let Some(phone) = user.phone.as_deref() {
            notifier.deliver(phone, &access_code);
        }
        Ok(user)
    }

    fn finish(identity: Identity, auth: AuthMethod) -> Self {
        let mut user = Self {
            first_name: identity.first_name,
            last_name: identity.last_name,
            email: identity.email,
            phone: identity.phone,
            login: identity.login,
            auth,
            meta: identity.meta,
            profile_summary: String::new(),
        };
        user.profile_summary = user.render_profile();
        user
    }

    /// Renders the fixed-format profile. Absent values render as `null`.
    fn render_profile(&self) -> String {
        let meta = self
            .meta
            .iter()
            .map(|(key, value)| format!("{key}: {value}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "firstName: {}\nlastName: {}\nlogin: {}\nfullName: {}\ninitials: {}\nemail: {}\nphone: {}\nmeta: {{{}}}",
            self.first_name,
            self.last_name.as_deref().unwrap_or("null"),
            self.login,
            derive_full_name(&self.first_name, self.last_name.as_deref()),
            derive_initials(&self.first_name, self.last_name.as_deref()),
            self.email.as_deref().unwrap_or("null"),
            self.phone.as_deref().unwrap_or("null"),
            meta,
        )
    }

    /// Returns whether the candidate password hashes to the stored hash.
    ///
    /// Always false for phone-authenticated users: they have no password.
    pub fn check_password(&self, candidate: &str) -> bool {
        match &self.auth {
            AuthMethod::Password {
                password_hash,
                salt,
            } => hash_password(candidate, salt) == *password_hash,
            AuthMethod::Imported {
                password_hash,
                hash_prefix,
            } => hash_password(candidate, hash_prefix) == *password_hash,
            AuthMethod::PhoneOtp { .. } => false,
        }
    }

    /// Replaces the stored hash after re-validating the old password.
    /// The salt is never regenerated on change.
    pub fn change_password(&mut self, old: &str, new: &str) -> Result<(), RegistryError> {
        if !self.check_password(old) {
            return Err(RegistryError::WrongPassword);
        }
        match &mut self.auth {
            AuthMethod::Password {
                password_hash,
                salt,
            } => {
                *password_hash = hash_password(new, salt);
                Ok(())
            }
            AuthMethod::Imported {
                password_hash,
                hash_prefix,
            } => {
                *password_hash = hash_password(new, hash_prefix);
                Ok(())
            }
            // Unreachable in practice: the check above fails for OTP users.
            AuthMethod::PhoneOtp { .. } => Err(RegistryError::WrongPassword),
        }
    }

    /// Overwrites the access code with a fresh one and hands it to the
    /// notifier. Only the most recently generated code is valid.
    pub(crate) fn refresh_access_code(&mut self, notifier: &dyn AccessCodeNotifier) {
        if let AuthMethod::PhoneOtp { access_code } = &mut self.auth {
            *access_code = new_access_code();
            if let Some(phone) = self.phone.as_deref() {
                notifier.deliver(phone, access_code);
            }
        }
    }

    // --------------------
    // Getter methods
    // --------------------

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    /// Normalized registry key: lowercased email or normalized phone.
    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Current one-time access code, present only for phone users.
    pub fn access_code(&self) -> Option<&str> {
        match &self.auth {
            AuthMethod::PhoneOtp { access_code } => Some(access_code),
            _ => None,
        }
    }

    pub fn auth_method(&self) -> &AuthMethod {
        &self.auth
    }

    pub fn meta(&self) -> &BTreeMap<String, String> {
        &self.meta
    }

    /// Fixed-format profile rendering, computed once at construction.
    pub fn profile_summary(&self) -> &str {
        &self.profile_summary
    }
}
