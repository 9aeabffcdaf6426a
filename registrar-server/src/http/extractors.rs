//! Custom Axum extractors
//!
//! Rejections are turned into [`ApiError::Validation`] so every malformed
//! request gets the same 422 JSON body.

use std::num::IntErrorKind;

use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::{Draft, ValidationError};

/// Extract an integer entity id from the `{id}` path segment
///
/// Non-integers are a 422. Integers outside the id column's range cannot
/// name a row, so they are a 404.
pub struct EntityId(pub i32);

impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| invalid_id())?;

        parse_id(&raw).map(Self)
    }
}

fn invalid_id() -> ApiError {
    ApiError::Validation(ValidationError::InvalidFormat {
        field: "id",
        reason: "must be an integer",
    })
}

fn parse_id(raw: &str) -> Result<i32, ApiError> {
    raw.parse::<i32>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ApiError::NotFound {
            message: format!("no record with id '{}'", raw),
        },
        _ => invalid_id(),
    })
}

/// Decode a JSON body into a draft and run its field checks
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: Draft,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            ApiError::Validation(ValidationError::Malformed {
                reason: rejection.body_text(),
            })
        })?;

        value.validate()?;
        Ok(Self(value))
    }
}

/// Decode query parameters
pub struct ValidQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                ApiError::Validation(ValidationError::Malformed {
                    reason: rejection.body_text(),
                })
            })?;

        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_in_range_ids() {
        assert!(matches!(parse_id("42"), Ok(42)));
        assert!(matches!(parse_id("-1"), Ok(-1)));
    }

    #[test]
    fn out_of_range_id_is_not_found() {
        assert!(matches!(parse_id("3000000000"), Err(ApiError::NotFound { .. })));
        assert!(matches!(
            parse_id("-99999999999999999999"),
            Err(ApiError::NotFound { .. })
        ));
    }

    #[test]
    fn non_integer_id_is_invalid() {
        for raw in ["abc", "1.5", "", "+"] {
            assert!(matches!(
                parse_id(raw),
                Err(ApiError::Validation(ValidationError::InvalidFormat { field: "id", .. }))
            ));
        }
    }
}
