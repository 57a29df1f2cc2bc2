//! Route handlers organized by resource

pub mod health;
pub mod stats;
pub mod students;
pub mod table;

use serde::Serialize;

use crate::http::error::ApiError;

/// `{"message": ...}` body shared by the mutating endpoints
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Fallback for unknown paths
pub async fn not_found() -> ApiError {
    ApiError::NotFound {
        message: "Not found".into(),
    }
}
