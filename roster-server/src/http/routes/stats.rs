//! Aggregate stats endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::db::{with_connection, StudentRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::Stats;

/// GET /stats
async fn get_stats(State(state): State<Arc<AppState>>) -> Result<Json<Stats>, ApiError> {
    let stats = with_connection(&state.db, |conn| {
        Box::pin(async move { StudentRepo::new(conn).stats().await })
    })
    .await?;

    Ok(Json(stats))
}

/// Stats routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/stats", get(get_stats))
}
