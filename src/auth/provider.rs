//! Identity provider seam
//!
//! The application treats identity as an external service: it registers and
//! signs in users through the `IdentityProvider` trait and never sees
//! credentials beyond the call boundary. `LocalIdentityProvider` is the
//! bundled implementation, keeping argon2 password hashes in a local JSON
//! file.

use std::path::PathBuf;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use serde::{Deserialize, Serialize};

use crate::error::{FintrackError, FintrackResult};
use crate::models::User;
use crate::storage::file_io::{read_json, write_json_atomic};

/// Maximum email length accepted at the form edge
const EMAIL_MAX_LEN: usize = 254;
/// Password length bounds accepted at the form edge
const PASSWORD_MIN_LEN: usize = 6;
const PASSWORD_MAX_LEN: usize = 128;
/// Maximum display-name length
const NAME_MAX_LEN: usize = 100;

/// Issues and verifies user identities
pub trait IdentityProvider {
    /// Create a new identity and sign it in
    fn register(&self, name: &str, email: &str, password: &str) -> FintrackResult<User>;

    /// Sign in an existing identity
    fn login(&self, email: &str, password: &str) -> FintrackResult<User>;
}

/// One stored credential record
#[derive(Debug, Clone, Serialize, Deserialize)]
struct UserRecord {
    user: User,
    password_hash: String,
}

/// Serializable credential store
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct UserStore {
    users: Vec<UserRecord>,
}

/// Identity provider backed by a local credential file
pub struct LocalIdentityProvider {
    path: PathBuf,
}

impl LocalIdentityProvider {
    /// Create a provider storing credentials at `path`
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn load(&self) -> FintrackResult<UserStore> {
        read_json(&self.path)
    }

    fn save(&self, store: &UserStore) -> FintrackResult<()> {
        write_json_atomic(&self.path, store)
    }

    fn hash_password(password: &str) -> FintrackResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| FintrackError::Auth(format!("Failed to hash password: {}", e)))?;
        Ok(hash.to_string())
    }

    fn verify_password(password: &str, hash: &str) -> bool {
        match PasswordHash::new(hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}

impl IdentityProvider for LocalIdentityProvider {
    fn register(&self, name: &str, email: &str, password: &str) -> FintrackResult<User> {
        validate_name(name)?;
        validate_email(email)?;
        validate_password(password)?;

        let email = email.trim().to_lowercase();
        let mut store = self.load()?;

        if store
            .users
            .iter()
            .any(|r| r.user.email.eq_ignore_ascii_case(&email))
        {
            return Err(FintrackError::Auth(format!(
                "An account with the email {} already exists",
                email
            )));
        }

        let user = User::new(name.trim(), email);
        store.users.push(UserRecord {
            user: user.clone(),
            password_hash: Self::hash_password(password)?,
        });
        self.save(&store)?;

        Ok(user)
    }

    fn login(&self, email: &str, password: &str) -> FintrackResult<User> {
        let email = email.trim().to_lowercase();
        let store = self.load()?;

        let record = store
            .users
            .iter()
            .find(|r| r.user.email.eq_ignore_ascii_case(&email));

        // Same error for unknown email and wrong password
        match record {
            Some(record) if Self::verify_password(password, &record.password_hash) => {
                Ok(record.user.clone())
            }
            _ => Err(FintrackError::Auth("Invalid email or password".into())),
        }
    }
}

/// Validate a display name at the form edge
pub fn validate_name(name: &str) -> FintrackResult<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(FintrackError::Validation("Name is required".into()));
    }
    if name.len() > NAME_MAX_LEN {
        return Err(FintrackError::Validation(format!(
            "Name must be less than {} characters long",
            NAME_MAX_LEN
        )));
    }
    if !name
        .chars()
        .all(|c| c.is_alphabetic() || c == ' ' || c == '-' || c == '\'')
    {
        return Err(FintrackError::Validation(
            "Name can only contain letters, spaces, hyphens, and apostrophes".into(),
        ));
    }
    Ok(())
}

/// Validate an email address at the form edge
pub fn validate_email(email: &str) -> FintrackResult<()> {
    let email = email.trim();
    if email.is_empty() {
        return Err(FintrackError::Validation("Email is required".into()));
    }
    if email.len() > EMAIL_MAX_LEN {
        return Err(FintrackError::Validation(format!(
            "Email must be less than {} characters",
            EMAIL_MAX_LEN
        )));
    }
    // local@domain.tld with no whitespace, the same shape the signup form checks
    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => {
            return Err(FintrackError::Validation(
                "Please enter a valid email address".into(),
            ))
        }
    };
    let domain_ok = domain.split_once('.').is_some_and(|(host, tld)| {
        !host.is_empty() && !tld.is_empty() && !domain.chars().any(char::is_whitespace)
    });
    if local.is_empty() || local.chars().any(char::is_whitespace) || !domain_ok {
        return Err(FintrackError::Validation(
            "Please enter a valid email address".into(),
        ));
    }
    Ok(())
}

/// Validate a password at the form edge
pub fn validate_password(password: &str) -> FintrackResult<()> {
    if password.is_empty() {
        return Err(FintrackError::Validation("Password is required".into()));
    }
    if password.len() < PASSWORD_MIN_LEN {
        return Err(FintrackError::Validation(format!(
            "Password must be at least {} characters long",
            PASSWORD_MIN_LEN
        )));
    }
    if password.len() > PASSWORD_MAX_LEN {
        return Err(FintrackError::Validation(format!(
            "Password must be less than {} characters long",
            PASSWORD_MAX_LEN
        )));
    }
    Ok(())
}
