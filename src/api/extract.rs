//! Custom Axum extractors
//!
//! Each one turns axum's own rejection into a `ValidationError`, so bad input
//! always answers 400 with the JSON error body.

use async_trait::async_trait;
use axum::extract::{FromRequest, FromRequestParts, Json, Path, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::domain::{Username, ValidationError};
use crate::error::AppError;

/// JSON request body.
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ValidationError::MalformedBody(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Query string.
pub struct ValidQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ValidationError::InvalidFormat {
                field: "query",
                reason: rejection.body_text(),
            })?;
        Ok(Self(value))
    }
}

#[derive(Debug, Deserialize)]
struct UserQuery {
    username: Option<String>,
}

/// Extract and validate the `username` query parameter
pub struct UserParam(pub Username);

#[async_trait]
impl<S> FromRequestParts<S> for UserParam
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let ValidQuery(query) = ValidQuery::<UserQuery>::from_request_parts(parts, state).await?;
        let raw = query
            .username
            .ok_or(ValidationError::Missing { field: "username" })?;
        Ok(Self(Username::parse(raw)?))
    }
}

/// Extract a numeric record id from path
pub struct RecordId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ValidationError::Missing { field: "id" })?;

        let id = raw.parse::<i64>().map_err(|_| ValidationError::InvalidFormat {
            field: "id",
            reason: format!("expected an integer, got '{}'", raw),
        })?;

        Ok(Self(id))
    }
}

/// `?strict=true` turns a delete that matched nothing into a 404.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteOptions {
    #[serde(default)]
    pub strict: bool,
}
