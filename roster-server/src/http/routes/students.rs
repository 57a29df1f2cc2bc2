//! Student endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};

use super::MessageResponse;
use crate::db::{with_connection, with_transaction, SampleOutcome, StudentRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, StudentId};
use crate::http::server::AppState;
use crate::models::{NewStudent, NewStudentRequest, Student, StudentChanges, UpdateStudentRequest};

/// GET /students - all students ordered by id
async fn list_students(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Student>>, ApiError> {
    let students = with_connection(&state.db, |conn| {
        Box::pin(async move { StudentRepo::new(conn).list().await })
    })
    .await?;

    Ok(Json(students))
}

/// POST /students - add one student
async fn add_student(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<NewStudentRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let student = NewStudent::try_from(req)?;
    let message = format!("Student {} added.", student.name);

    with_transaction(&state.db, move |conn| {
        Box::pin(async move { StudentRepo::new(conn).insert(&student).await })
    })
    .await?;

    Ok((StatusCode::CREATED, Json(MessageResponse::new(message))))
}

/// POST /students/sample - insert the fixed sample rows once
async fn insert_sample_data(
    State(state): State<Arc<AppState>>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let outcome = with_transaction(&state.db, |conn| {
        Box::pin(async move { StudentRepo::new(conn).insert_samples().await })
    })
    .await?;

    let (status, message) = match outcome {
        SampleOutcome::Inserted(count) => (
            StatusCode::CREATED,
            format!("{} sample records inserted.", count),
        ),
        SampleOutcome::AlreadyPresent => (StatusCode::OK, "Sample data already exists.".to_string()),
    };

    Ok((status, Json(MessageResponse::new(message))))
}

/// PUT /students/{id} - replace name and marks
async fn update_student(
    State(state): State<Arc<AppState>>,
    StudentId(id): StudentId,
    JsonBody(req): JsonBody<UpdateStudentRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let changes = StudentChanges::try_from(req)?;

    with_transaction(&state.db, move |conn| {
        Box::pin(async move { StudentRepo::new(conn).update(id, &changes).await })
    })
    .await?;

    Ok(Json(MessageResponse::new(format!(
        "Student with ID {} updated.",
        id
    ))))
}

/// DELETE /students/{id}
async fn delete_student(
    State(state): State<Arc<AppState>>,
    StudentId(id): StudentId,
) -> Result<Json<MessageResponse>, ApiError> {
    with_transaction(&state.db, move |conn| {
        Box::pin(async move { StudentRepo::new(conn).delete(id).await })
    })
    .await?;

    Ok(Json(MessageResponse::new(format!(
        "Student with ID {} deleted.",
        id
    ))))
}

/// Student routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/students", get(list_students).post(add_student))
        .route("/students/sample", post(insert_sample_data))
        .route("/students/{id}", put(update_student).delete(delete_student))
}
