//! Axum extractors for request handling

mod body;

pub use body::AuthJson;
