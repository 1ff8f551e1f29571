//! # sentree-service
//!
//! Application layer containing the account service, its dependency context, and DTOs.

pub mod dto;
pub mod services;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use dto::{
    HealthResponse, LoginRequest, ReadinessResponse, RegisterRequest, StatusResponse, UserResponse,
};
pub use services::{
    AccountService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
