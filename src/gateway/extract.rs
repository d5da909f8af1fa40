//! Request extractors that coerce parameters into typed values.
//!
//! Wrap axum's `Query`, `Json` and `Path` so that a missing or malformed
//! parameter is rejected with 422 and an [`ApiError`] body instead of axum's
//! plain-text default rejection.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Query string parameters, e.g. `?doctor_id=1&status=pending`
#[derive(Debug)]
pub struct QueryParams<T>(pub T);

/// JSON request body
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

/// Path segment(s), e.g. `/books/{book_id}`
#[derive(Debug)]
pub struct PathParam<T>(pub T);

impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::warn!("[extract] rejected query {:?}: {}", parts.uri.query(), e);
                ApiError::unprocessable(e.body_text())
            })?;
        Ok(QueryParams(value))
    }
}

impl<S, T> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::warn!("[extract] rejected path {}: {}", parts.uri.path(), e);
                ApiError::unprocessable(e.body_text())
            })?;
        Ok(PathParam(value))
    }
}

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            tracing::warn!("[extract] rejected body: {}", e);
            ApiError::unprocessable(e.body_text())
        })?;
        Ok(JsonBody(value))
    }
}
