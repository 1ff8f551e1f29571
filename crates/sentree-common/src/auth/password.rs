//! Password storage and verification
//!
//! Two schemes are supported. `Plaintext` stores the password exactly as the
//! client sent it and compares by string equality, which is how existing
//! Sentree rows were written. `Argon2` stores an Argon2id PHC string with a
//! random salt.

use std::fmt;
use std::str::FromStr;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use serde::Deserialize;
use tracing::warn;

use crate::error::AppError;

/// How the `password` column is written and compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordScheme {
    #[default]
    Plaintext,
    Argon2,
}

impl PasswordScheme {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plaintext => "plaintext",
            Self::Argon2 => "argon2",
        }
    }
}

impl fmt::Display for PasswordScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PasswordScheme {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plaintext" | "plain" => Ok(Self::Plaintext),
            "argon2" | "argon2id" => Ok(Self::Argon2),
            other => Err(AppError::Config(format!("unknown password scheme: {other}"))),
        }
    }
}

/// Hash a password using Argon2id
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Verify a password against an Argon2 hash
///
/// # Errors
/// Returns an error if the hash is not a valid PHC string
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Password service for dependency injection
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordService {
    scheme: PasswordScheme,
}

impl PasswordService {
    /// Create a password service for the given scheme
    #[must_use]
    pub fn new(scheme: PasswordScheme) -> Self {
        Self { scheme }
    }

    #[must_use]
    pub fn scheme(&self) -> PasswordScheme {
        self.scheme
    }

    /// Produce the value to store in the `password` column
    ///
    /// # Errors
    /// Returns an error if hashing fails
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        match self.scheme {
            PasswordScheme::Plaintext => Ok(password.to_string()),
            PasswordScheme::Argon2 => hash_password(password),
        }
    }

    /// Check a supplied password against the stored column value
    ///
    /// A stored value that is not a valid hash under `Argon2` counts as a
    /// mismatch rather than an error, so rows written before switching
    /// schemes fail closed.
    pub fn verify(&self, password: &str, stored: &str) -> bool {
        match self.scheme {
            PasswordScheme::Plaintext => password == stored,
            PasswordScheme::Argon2 => verify_password(password, stored).unwrap_or_else(|e| {
                warn!(error = %e, "Stored password is not a valid Argon2 hash");
                false
            }),
        }
    }
}
