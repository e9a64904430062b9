//! Registry store
//!
//! Owns the login-keyed user map. Every mutating operation takes `&mut
//! self`, so each check-then-insert runs to completion with exclusive
//! access; no two registrations for the same login can interleave.

use std::collections::HashMap;

use log::{debug, info};

use crate::error::RegistryError;
use crate::notify::{AccessCodeNotifier, LogNotifier};
use crate::registry::import::{self, RecordKind};
use crate::user::{Provenance, User};
use crate::utils::normalize::{is_phone_login, normalize_login, normalize_phone, split_full_name};

/// Normalized phone login length: `+` followed by 11 digits.
const PHONE_LOGIN_LEN: usize = 12;

/// Login-keyed user store.
///
/// An explicitly owned instance, not process-global state: tests and hosts
/// construct their own registries with no shared hidden state.
pub struct UserRegistry {
    users: HashMap<String, User>,
    notifier: Box<dyn AccessCodeNotifier>,
}

impl UserRegistry {
    /// Creates a registry whose access codes are delivered to the log.
    pub fn new() -> Self {
        Self::with_notifier(Box::new(LogNotifier))
    }

    /// Creates a registry with an injected code delivery channel.
    pub fn with_notifier(notifier: Box<dyn AccessCodeNotifier>) -> Self {
        Self {
            users: HashMap::new(),
            notifier,
        }
    }

    /// Registers a user by email and password.
    ///
    /// Fails with a conflict if the normalized email is already registered,
    /// or with a validation error for a malformed full name.
    pub fn register_by_password(
        &mut self,
        full_name: &str,
        email: &str,
        password: &str,
    ) -> Result<&User, RegistryError> {
        let login = normalize_login(email);
        if self.users.contains_key(&login) {
            return Err(RegistryError::EmailTaken(login));
        }
        let (first_name, last_name) = split_full_name(full_name)?;
        let user = User::with_password(first_name, last_name, email, password)?;
        info!("registered user {} by password", user.login());
        Ok(self.insert(user))
    }

    /// Registers a user by phone; a one-time access code becomes the
    /// credential.
    pub fn register_by_phone(
        &mut self,
        full_name: &str,
        raw_phone: &str,
    ) -> Result<&User, RegistryError> {
        self.register_phone_user(full_name, raw_phone, Provenance::Sms)
    }

    fn register_phone_user(
        &mut self,
        full_name: &str,
        raw_phone: &str,
        provenance: Provenance,
    ) -> Result<&User, RegistryError> {
        let phone = normalize_phone(raw_phone);
        if !is_valid_phone(&phone) {
            return Err(RegistryError::IllegalPhone(raw_phone.to_string()));
        }
        if self.users.contains_key(&phone) {
            return Err(RegistryError::PhoneTaken(phone));
        }
        let (first_name, last_name) = split_full_name(full_name)?;
        let user = User::with_phone(
            first_name,
            last_name,
            raw_phone,
            provenance,
            self.notifier.as_ref(),
        )?;
        info!("registered user {} by phone", user.login());
        Ok(self.insert(user))
    }

    /// Generates and delivers a fresh access code for a registered phone.
    pub fn request_access_code(&mut self, raw_phone: &str) -> Result<(), RegistryError> {
        let phone = normalize_phone(raw_phone);
        let Self { users, notifier } = self;
        match users.get_mut(&phone) {
            Some(user) => {
                user.refresh_access_code(notifier.as_ref());
                Ok(())
            }
            None => Err(RegistryError::PhoneNotFound(phone)),
        }
    }

    /// Authenticates and returns the profile summary on success.
    ///
    /// Phone-shaped identifiers are checked against the current access
    /// code, everything else against the password. An unknown login and a
    /// wrong credential are deliberately indistinguishable: both come back
    /// as `None`, so callers cannot probe for account existence.
    pub fn login(&self, raw_login: &str, credential: &str) -> Option<&str> {
        let is_phone = is_phone_login(raw_login);
        let login = if is_phone {
            normalize_phone(raw_login)
        } else {
            normalize_login(raw_login)
        };
        let user = self.users.get(&login)?;
        let authenticated = if is_phone {
            user.access_code() == Some(credential)
        } else {
            user.check_password(credential)
        };
        if authenticated {
            Some(user.profile_summary())
        } else {
            None
        }
    }

    /// Replaces a user's password after re-validating the old one.
    pub fn change_password(
        &mut self,
        raw_login: &str,
        old: &str,
        new: &str,
    ) -> Result<(), RegistryError> {
        let login = if is_phone_login(raw_login) {
            normalize_phone(raw_login)
        } else {
            normalize_login(raw_login)
        };
        match self.users.get_mut(&login) {
            Some(user) => user.change_password(old, new),
            None => Err(RegistryError::LoginNotFound(login)),
        }
    }

    /// Registers each well-formed record, in order, and returns the newly
    /// created users.
    ///
    /// The import is not transactional: rows registered before a malformed
    /// or conflicting row stay registered, and the failing row aborts the
    /// rest of the call.
    pub fn import_records<S: AsRef<str>>(
        &mut self,
        rows: &[S],
    ) -> Result<Vec<User>, RegistryError> {
        let mut logins = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            let record = import::parse_record(index, row.as_ref())?;
            let login = match record.kind {
                RecordKind::Imported {
                    email,
                    hash_prefix,
                    password_hash,
                } => self.register_imported(
                    &record.full_name,
                    &email,
                    &hash_prefix,
                    &password_hash,
                )?,
                RecordKind::Phone { raw_phone } => self
                    .register_phone_user(&record.full_name, &raw_phone, Provenance::Csv)?
                    .login()
                    .to_string(),
            };
            logins.push(login);
        }
        debug!("imported {} users", logins.len());
        Ok(logins.iter().filter_map(|login| self.users.get(login).cloned()).collect())
    }

    /// Registration path for imported records: same conflict check as
    /// password registration, but the supplied hash is stored verbatim.
    fn register_imported(
        &mut self,
        full_name: &str,
        email: &str,
        hash_prefix: &str,
        password_hash: &str,
    ) -> Result<String, RegistryError> {
        let login = normalize_login(email);
        if self.users.contains_key(&login) {
            return Err(RegistryError::EmailTaken(login));
        }
        let (first_name, last_name) = split_full_name(full_name)?;
        let user = User::from_import(first_name, last_name, email, hash_prefix, password_hash)?;
        debug!("imported user {}", user.login());
        let login = user.login().to_string();
        self.insert(user);
        Ok(login)
    }

    /// Empties the registry. Testing and administrative affordance only;
    /// there is no per-user deletion path.
    pub fn reset(&mut self) {
        self.users.clear();
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    // Callers have already checked the key is absent; the entry API keeps
    // the insert itself compare-and-insert shaped.
    fn insert(&mut self, user: User) -> &User {
        let login = user.login().to_string();
        self.users.entry(login).or_insert(user)
    }
}

impl Default for UserRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn is_valid_phone(phone: &str) -> bool {
    phone.len() == PHONE_LOGIN_LEN
        && phone
            .strip_prefix('+')
            .is_some_and(|rest| rest.chars().all(|c| c.is_ascii_digit()))
}
