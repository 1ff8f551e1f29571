//! User entity <-> model mapper

use sentree_core::entities::{NewUser, User};
use sentree_core::value_objects::UserId;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: UserId::new(model.id),
            username: model.username,
            email: model.email,
            password: model.password,
            number: model.number,
        }
    }
}

/// Borrowed column values for inserting a new account
pub struct UserInsert<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub number: &'a str,
}

impl<'a> UserInsert<'a> {
    pub fn new(user: &'a NewUser) -> Self {
        Self {
            username: &user.username,
            email: &user.email,
            password: &user.password,
            number: &user.number,
        }
    }
}
