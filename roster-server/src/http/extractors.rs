//! Custom Axum extractors
//!
//! Both reject with [`ApiError`] so malformed requests still get a JSON
//! `{"error": ...}` body instead of axum's plain-text rejections.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// JSON request body
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest {
                message: rejection.body_text(),
            })?;

        Ok(Self(value))
    }
}

/// Integer student id from the `{id}` path segment.
///
/// A segment that is not an integer matches no student route, so it is
/// reported as 404.
pub struct StudentId(pub i32);

impl<S> FromRequestParts<S> for StudentId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound {
                message: "Student ID missing from path.".into(),
            })?;

        let id = raw.parse::<i32>().map_err(|_| ApiError::NotFound {
            message: format!("No student route matches '{}'.", raw),
        })?;

        Ok(Self(id))
    }
}
