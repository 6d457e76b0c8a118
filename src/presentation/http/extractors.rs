// src/presentation/http/extractors.rs
use crate::{application::error::ApplicationError, domain::article::ArticleId};
use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use super::error::HttpError;

/// Article id taken from the `{id}` path segment.
#[derive(Debug, Clone, Copy)]
pub struct ArticleIdParam(pub ArticleId);

impl<S> FromRequestParts<S> for ArticleIdParam
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| HttpError::bad_request("invalid article id"))?;

        ArticleId::parse(&raw)
            .map(Self)
            .map_err(|err| HttpError::from_error(ApplicationError::from(err)))
    }
}

/// JSON body decoded regardless of the `Content-Type` header, with rejections
/// in the API error body.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| HttpError::bad_request(rejection.body_text()))?;

        serde_json::from_slice(&bytes)
            .map(Self)
            .map_err(|err| HttpError::bad_request(format!("invalid JSON body: {err}")))
    }
}

/// `Query` whose rejections use the API error body.
#[derive(Debug, FromRequestParts)]
#[from_request(via(Query), rejection(HttpError))]
pub struct ApiQuery<T>(pub T);
