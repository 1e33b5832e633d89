// src/presentation/http/extractors.rs
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use super::error::HttpError;

/// Integer id taken from the single path parameter of a route. Anything that
/// does not parse as the key type is a 400 before storage is touched.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection, "path parameter rejected");
                HttpError::bad_request()
            })?;

        raw.parse::<i32>().map(Self).map_err(|_| {
            tracing::debug!(value = %raw, "id is not an integer");
            HttpError::bad_request()
        })
    }
}

/// JSON body whose rejections (bad syntax, wrong field types, missing
/// content type) are reported as a plain 400. Unknown fields are ignored.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection, "request body rejected");
                HttpError::bad_request()
            })?;
        Ok(Self(value))
    }
}

/// Query string counterpart of [`JsonBody`].
#[derive(Debug, Clone)]
pub struct QueryParams<T>(pub T);

impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection, "query string rejected");
                HttpError::bad_request()
            })?;
        Ok(Self(value))
    }
}
