//! Service context - dependency container for services
//!
//! Holds the user repository and the account settings the services need.

use std::sync::Arc;

use sentree_common::{PasswordScheme, PasswordService};
use sentree_core::traits::UserRepository;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cheap to clone; the repository is shared behind an `Arc`.
#[derive(Clone)]
pub struct ServiceContext {
    user_repo: Arc<dyn UserRepository>,
    password_service: PasswordService,
    strict_validation: bool,
}

impl ServiceContext {
    /// Create a new service context
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_service: PasswordService,
        strict_validation: bool,
    ) -> Self {
        Self {
            user_repo,
            password_service,
            strict_validation,
        }
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the password service
    pub fn password_service(&self) -> &PasswordService {
        &self.password_service
    }

    /// Whether request bodies are re-validated before touching the store
    pub fn strict_validation(&self) -> bool {
        self.strict_validation
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("user_repo", &"dyn UserRepository")
            .field("password_scheme", &self.password_service.scheme())
            .field("strict_validation", &self.strict_validation)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    password_scheme: PasswordScheme,
    strict_validation: bool,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            user_repo: None,
            password_scheme: PasswordScheme::default(),
            strict_validation: false,
        }
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn password_scheme(mut self, scheme: PasswordScheme) -> Self {
        self.password_scheme = scheme;
        self
    }

    pub fn strict_validation(mut self, enabled: bool) -> Self {
        self.strict_validation = enabled;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if the user repository is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let user_repo = self
            .user_repo
            .ok_or_else(|| ServiceError::internal("user_repo is required"))?;

        Ok(ServiceContext::new(
            user_repo,
            PasswordService::new(self.password_scheme),
            self.strict_validation,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
