//! Request extractors that reject with the standard failure envelope.
//!
//! Axum's stock `Json` / `Query` rejections answer with plain text; these
//! wrappers turn them into [`AppError::BadRequest`] instead.

use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use bookshelf_core::types::DbId;
use bookshelf_db::models::validation::CheckedInput;

use crate::error::AppError;

/// JSON body that is deserialized and then run through [`CheckedInput::check`].
///
/// Unknown fields are ignored; a body that does not parse yields
/// `400 "Invalid request body"`, a failing field rule `400 "Validation failed"`.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + CheckedInput,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                AppError::bad_request("Invalid request body", rejection.body_text())
            })?;
        value.check()?;
        Ok(Self(value))
    }
}

/// Query string that rejects with `400 "Invalid query parameters"`.
#[derive(Debug)]
pub struct QueryParams<T>(pub T);

impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                AppError::bad_request("Invalid query parameters", rejection.body_text())
            })?;
        Ok(Self(value))
    }
}

/// Parse a raw `{id}` path segment, rejecting with `400 "Invalid <entity> ID"`.
pub fn parse_id(raw: &str, entity: &str) -> Result<DbId, AppError> {
    raw.parse::<DbId>().map_err(|_| {
        AppError::bad_request(
            format!("Invalid {entity} ID"),
            format!("'{raw}' is not a valid {entity} id"),
        )
    })
}
