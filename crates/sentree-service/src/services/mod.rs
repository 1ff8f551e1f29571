//! Business logic services

pub mod account;
pub mod context;
pub mod error;

pub use account::AccountService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
