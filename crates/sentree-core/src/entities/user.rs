//! User entity - a registered Sentree account

use std::fmt;

use crate::value_objects::UserId;

/// A persisted account row
///
/// `password` holds whatever the configured password scheme wrote at
/// registration: the raw string under the plaintext scheme, a PHC hash
/// otherwise.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub password: String,
    pub number: String,
}

impl User {
    /// Attach a store-generated id to a pending registration
    pub fn from_new(id: UserId, new_user: NewUser) -> Self {
        Self {
            id,
            username: new_user.username,
            email: new_user.email,
            password: new_user.password,
            number: new_user.number,
        }
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .field("number", &self.number)
            .finish()
    }
}

/// Account data awaiting insertion; the store assigns the id
#[derive(Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub number: String,
}

impl NewUser {
    /// Create a new pending account
    pub fn new(username: String, email: String, password: String, number: String) -> Self {
        Self {
            username,
            email,
            password,
            number,
        }
    }
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .field("number", &self.number)
            .finish()
    }
}
