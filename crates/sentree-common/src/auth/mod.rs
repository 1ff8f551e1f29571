//! Password storage schemes

mod password;

pub use password::{hash_password, verify_password, PasswordScheme, PasswordService};
