//! Query-string extractor whose rejection speaks the API's error format.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// Like `axum::extract::Query`, but a bad query string is a `400 { message }`.
pub struct ListQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ListQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::debug!("rejected query string: {}", e.body_text());
                AppError::validation("Parameter pencarian tidak valid.")
            })?;
        Ok(ListQuery(value))
    }
}
