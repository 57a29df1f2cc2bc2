//! Store-layer error type

use thiserror::Error;

/// Errors from the connection helpers and repositories
#[derive(Debug, Error)]
pub enum DbError {
    /// No connection could be opened; the cause is logged where it happened
    #[error("Database connection failed")]
    Unavailable,

    /// Primary key collision on insert
    #[error("Student with ID {id} already exists.")]
    Duplicate { id: i32 },

    /// Update or delete matched no row
    #[error("Student with ID {id} not found.")]
    NotFound { id: i32 },

    /// Anything else the store reported
    #[error("{}", store_message(.0))]
    Sqlx(#[from] sqlx::Error),
}

impl DbError {
    /// Classify an insert failure.
    ///
    /// Uses the driver's error kind (MySQL code 1062) rather than message text.
    pub fn from_insert(err: sqlx::Error, id: i32) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                Self::Duplicate { id }
            }
            _ => Self::Sqlx(err),
        }
    }

    /// Outcomes the caller expects as part of normal operation
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Duplicate { .. } | Self::NotFound { .. })
    }
}

/// The store's own message when there is one, the driver's description otherwise
fn store_message(err: &sqlx::Error) -> String {
    match err {
        sqlx::Error::Database(db_err) => db_err.message().to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;
    use std::error::Error as StdError;

    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use sqlx::error::{DatabaseError, ErrorKind};

    use crate::http::ApiError;

    /// Driver error carrying a fixed kind, shaped like MySQL's 1062
    #[derive(Debug, Error)]
    #[error("{message}")]
    struct StubDbError {
        unique: bool,
        message: &'static str,
    }

    impl DatabaseError for StubDbError {
        fn message(&self) -> &str {
            self.message
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed("23000"))
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            if self.unique {
                ErrorKind::UniqueViolation
            } else {
                ErrorKind::CheckViolation
            }
        }
    }

    fn driver_error(unique: bool, message: &'static str) -> sqlx::Error {
        sqlx::Error::Database(Box::new(StubDbError { unique, message }))
    }

    #[test]
    fn unique_violation_becomes_duplicate() {
        let err = DbError::from_insert(
            driver_error(
                true,
                "Duplicate entry '7' for key 'students.PRIMARY'",
            ),
            7,
        );
        assert!(matches!(err, DbError::Duplicate { id: 7 }));

        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn duplicate_response_carries_exact_message() {
        let err = DbError::from_insert(driver_error(true, "dup"), 42);
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({"error": "Student with ID 42 already exists."}));
    }

    #[test]
    fn check_violation_stays_generic_with_store_message() {
        let err = DbError::from_insert(
            driver_error(false, "Check constraint 'students_chk_1' is violated."),
            8,
        );
        assert!(matches!(err, DbError::Sqlx(_)));
        assert_eq!(err.to_string(), "Check constraint 'students_chk_1' is violated.");

        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn messages_match_api_wording() {
        assert_eq!(DbError::Unavailable.to_string(), "Database connection failed");
        assert_eq!(
            DbError::Duplicate { id: 7 }.to_string(),
            "Student with ID 7 already exists."
        );
        assert_eq!(
            DbError::NotFound { id: 9 }.to_string(),
            "Student with ID 9 not found."
        );
    }

    #[test]
    fn non_database_insert_errors_stay_generic() {
        let err = DbError::from_insert(sqlx::Error::RowNotFound, 1);
        assert!(matches!(err, DbError::Sqlx(_)));
        assert!(!err.is_expected());
    }

    #[test]
    fn expected_outcomes() {
        assert!(DbError::Duplicate { id: 1 }.is_expected());
        assert!(DbError::NotFound { id: 1 }.is_expected());
        assert!(!DbError::Unavailable.is_expected());
    }
}
