//! Custom Axum extractors
//!
//! Rejections are `ApiError`s so malformed ids and bodies get the same error
//! envelope as domain failures.

use std::marker::PhantomData;

use axum::extract::{FromRequest, FromRequestParts, RawPathParams, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::ValidationError;

/// Parse one numeric path parameter, naming it in the error.
pub fn parse_id(name: &str, value: &str) -> Result<i64, ValidationError> {
    value
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidFormat {
            field: name.to_owned(),
        })
}

/// Parse every path parameter as an id. The `{id}` segment is reported as `owner`.
async fn path_ids<S>(parts: &mut Parts, state: &S, owner: &str) -> Result<Vec<i64>, ApiError>
where
    S: Send + Sync,
{
    let params = RawPathParams::from_request_parts(parts, state)
        .await
        .map_err(|_| ValidationError::InvalidFormat { field: "id".into() })?;

    let ids = params
        .iter()
        .map(|(name, value)| parse_id(if name == "id" { owner } else { name }, value))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ids)
}

/// Extract the single numeric id of a `/{id}` route
pub struct ValidId(pub i64);

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match path_ids(parts, state, "id").await?.as_slice() {
            [id] => Ok(Self(*id)),
            _ => Err(ValidationError::InvalidFormat { field: "id".into() }.into()),
        }
    }
}

/// Names the owning id of a two-id route in error messages.
///
/// The router shares one `{id}` segment per resource, so the public name
/// (`studentId`, `courseId`, ...) is supplied here instead.
pub trait OwnerId {
    const NAME: &'static str;
}

/// Extract both numeric ids of a `/{id}/<relation>/{otherId}` route
pub struct ValidIdPair<O>(pub i64, pub i64, pub PhantomData<O>);

impl<S, O> FromRequestParts<S> for ValidIdPair<O>
where
    S: Send + Sync,
    O: OwnerId,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match path_ids(parts, state, O::NAME).await?.as_slice() {
            [first, second] => Ok(Self(*first, *second, PhantomData)),
            _ => Err(ValidationError::InvalidFormat {
                field: O::NAME.into(),
            }
            .into()),
        }
    }
}

/// JSON body whose rejection is a 400 in the error envelope
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::InvalidInput {
                message: rejection.body_text(),
            })?;

        Ok(Self(value))
    }
}
