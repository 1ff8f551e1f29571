//! Account service
//!
//! Handles registration and login against the users store.

use sentree_core::entities::{NewUser, User};
use sentree_core::value_objects::UserId;
use tracing::{error, info, instrument, warn};

use crate::dto::{LoginRequest, RegisterRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Account service
pub struct AccountService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AccountService<'a> {
    /// Create a new AccountService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new account
    ///
    /// The insert is the uniqueness check: a taken username or email comes
    /// back from the store as `DuplicateAccount` and no row is written.
    #[instrument(skip(self, request), fields(username = %request.username, email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<UserId> {
        if self.ctx.strict_validation() {
            request.check().map_err(|msg| {
                warn!(reason = %msg, "Registration rejected by validation");
                ServiceError::Validation(msg)
            })?;
        }

        let password = self
            .ctx
            .password_service()
            .hash(&request.password)
            .map_err(|e| {
                error!(error = %e, "Password hashing failed");
                ServiceError::from(e)
            })?;

        let new_user = NewUser::new(request.username, request.email, password, request.number);

        match self.ctx.user_repo().create(&new_user).await {
            Ok(user_id) => {
                info!(user_id = %user_id, "Account registered");
                Ok(user_id)
            }
            Err(e) => {
                let err = ServiceError::from(e);
                match &err {
                    ServiceError::DuplicateAccount => {
                        warn!("Registration failed: username or email already exists");
                    }
                    _ => error!(error = %err, "Registration failed"),
                }
                Err(err)
            }
        }
    }

    /// Authenticate with username and password
    ///
    /// Returns the full stored row on success. Read-only.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn authenticate(&self, request: LoginRequest) -> ServiceResult<User> {
        if self.ctx.strict_validation() {
            request.check().map_err(|msg| {
                warn!(reason = %msg, "Login rejected by validation");
                ServiceError::Validation(msg)
            })?;
        }

        let user = self
            .ctx
            .user_repo()
            .find_by_username(&request.username)
            .await
            .map_err(|e| {
                error!(error = %e, "Login lookup failed");
                ServiceError::from(e)
            })?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                ServiceError::NotFound
            })?;

        if !self
            .ctx
            .password_service()
            .verify(&request.password, &user.password)
        {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(ServiceError::WrongPassword);
        }

        info!(user_id = %user.id, "User logged in");
        Ok(user)
    }
}
