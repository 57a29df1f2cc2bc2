//! Table lifecycle endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use super::MessageResponse;
use crate::db::{with_connection, with_transaction, TableRepo, TABLE_NAME};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// GET /table/status response
#[derive(Debug, Serialize)]
pub struct TableStatus {
    pub exists: bool,
}

/// GET /table/status
async fn table_status(State(state): State<Arc<AppState>>) -> Result<Json<TableStatus>, ApiError> {
    let exists = with_connection(&state.db, |conn| {
        Box::pin(async move { TableRepo::new(conn).exists().await })
    })
    .await?;

    Ok(Json(TableStatus { exists }))
}

/// POST /table/create
async fn create_table(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MessageResponse>, ApiError> {
    with_transaction(&state.db, |conn| {
        Box::pin(async move { TableRepo::new(conn).create().await })
    })
    .await?;

    Ok(Json(MessageResponse::new(format!(
        "'{}' table created successfully.",
        TABLE_NAME
    ))))
}

/// POST /table/drop
async fn drop_table(State(state): State<Arc<AppState>>) -> Result<Json<MessageResponse>, ApiError> {
    with_transaction(&state.db, |conn| {
        Box::pin(async move { TableRepo::new(conn).drop_table().await })
    })
    .await?;

    Ok(Json(MessageResponse::new(format!(
        "'{}' table dropped successfully.",
        TABLE_NAME
    ))))
}

/// Table routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/table/status", get(table_status))
        .route("/table/create", post(create_table))
        .route("/table/drop", post(drop_table))
}
