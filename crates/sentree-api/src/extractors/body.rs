//! JSON body extractor for the auth routes
//!
//! Rejections render as the body envelope instead of axum's plain-text 4xx.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::response::ApiError;

/// JSON extractor whose rejection is `ApiError::InvalidBody`
#[derive(Debug, Clone)]
pub struct AuthJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for AuthJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e: JsonRejection| {
                debug!(error = %e.body_text(), "Rejected request body");
                ApiError::InvalidBody(e.body_text())
            })?;

        Ok(AuthJson(value))
    }
}
