//! Extractors with API-shaped rejections
//!
//! axum's own extractors reject bad input with plain-text responses that
//! echo parser detail. The wrappers here turn every body, path or
//! multipart problem into `InvalidInput` with the usual
//! `{"error", "status"}` payload.

use axum::{
    extract::{
        multipart::MultipartRejection,
        rejection::{JsonRejection, PathRejection},
        FromRequest, FromRequestParts, Multipart, Path, Request,
    },
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::backend::error::ApiError;

/// `Json<T>` whose rejection is an [`ApiError`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                tracing::warn!("Rejected request body: {}", rejection.body_text());
                ApiError::invalid_input("Invalid request body")
            })?;

        Ok(Self(value))
    }
}

/// `Path<T>` whose rejection is an [`ApiError`]
#[derive(Debug, Clone, Copy)]
pub struct ApiPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: PathRejection| {
                tracing::warn!("Rejected path parameters: {}", rejection.body_text());
                ApiError::invalid_input("Invalid path parameter")
            })?;

        Ok(Self(value))
    }
}

/// `Multipart` whose rejection is an [`ApiError`]
pub struct ApiMultipart(pub Multipart);

impl<S> FromRequest<S> for ApiMultipart
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let multipart = Multipart::from_request(req, state)
            .await
            .map_err(|rejection: MultipartRejection| {
                tracing::warn!("Rejected multipart body: {}", rejection.body_text());
                ApiError::invalid_input("Invalid multipart body")
            })?;

        Ok(Self(multipart))
    }
}
