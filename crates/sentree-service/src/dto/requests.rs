//! Request DTOs for API endpoints
//!
//! The validation rules mirror the web client's form schemas. They only run
//! when strict validation is enabled; otherwise bodies are taken as sent.

use std::fmt;

use serde::Deserialize;
use validator::{Validate, ValidationErrors};

// ============================================================================
// Auth Requests
// ============================================================================

/// Account registration request
///
/// `number` is the country code and local number already concatenated by
/// the client.
#[derive(Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(email(message = "Invalid email"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    #[validate(length(min = 1, message = "Number is required"))]
    pub number: String,
}

impl RegisterRequest {
    const FIELDS: &'static [&'static str] = &["username", "email", "password", "number"];

    /// Validate and report the first failing field's message
    pub fn check(&self) -> Result<(), String> {
        self.validate()
            .map_err(|errors| first_message(&errors, Self::FIELDS))
    }
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .field("number", &self.number)
            .finish()
    }
}

/// Login request
#[derive(Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl LoginRequest {
    const FIELDS: &'static [&'static str] = &["username", "password"];

    /// Validate and report the first failing field's message
    pub fn check(&self) -> Result<(), String> {
        self.validate()
            .map_err(|errors| first_message(&errors, Self::FIELDS))
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"[redacted]")
            .finish()
    }
}

/// Pick a deterministic message: first failing field in form order
fn first_message(errors: &ValidationErrors, fields: &[&str]) -> String {
    let field_errors = errors.field_errors();

    fields
        .iter()
        .filter_map(|field| field_errors.get(*field))
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(ToString::to_string))
        .unwrap_or_else(|| "Invalid request body".to_string())
}
