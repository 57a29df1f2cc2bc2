//! API error type with IntoResponse
//!
//! Every failure becomes `{"error": <message>}` with a matching status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Request body failed a presence check (400)
    Validation(ValidationError),

    /// Body could not be read or parsed (400)
    BadRequest { message: String },

    /// No such student or route (404)
    NotFound { message: String },

    /// Id already taken (409)
    Conflict { message: String },

    /// Store unreachable before the operation ran (500)
    ConnectionFailed,

    /// Store rejected the operation (500, logged)
    Store { message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::ConnectionFailed | Self::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::BadRequest { message }
            | Self::NotFound { message }
            | Self::Conflict { message }
            | Self::Store { message } => message.clone(),
            Self::ConnectionFailed => DbError::Unavailable.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();

        match &self {
            Self::Store { .. } => tracing::error!("Store error: {}", message),
            Self::ConnectionFailed => tracing::error!("Request failed: no database connection"),
            _ => tracing::debug!(status = status.as_u16(), "{}", message),
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::Unavailable => Self::ConnectionFailed,
            DbError::Duplicate { .. } => Self::Conflict {
                message: e.to_string(),
            },
            DbError::NotFound { .. } => Self::NotFound {
                message: e.to_string(),
            },
            DbError::Sqlx(_) => Self::Store {
                message: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::Validation(ValidationError::Empty { field: "name" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "name cannot be empty");
    }

    #[tokio::test]
    async fn duplicate_is_409() {
        let response = ApiError::from(DbError::Duplicate { id: 5 }).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(
            body_json(response).await["error"],
            "Student with ID 5 already exists."
        );
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let response = ApiError::from(DbError::NotFound { id: 8 }).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "Student with ID 8 not found.");
    }

    #[tokio::test]
    async fn unavailable_is_500_with_fixed_message() {
        let response = ApiError::from(DbError::Unavailable).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"], "Database connection failed");
    }

    #[tokio::test]
    async fn store_error_body_has_only_error_key() {
        let response = ApiError::from(DbError::Sqlx(sqlx::Error::RowNotFound)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        let object = body.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert!(object.contains_key("error"));
    }
}
