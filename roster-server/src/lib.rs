//! roster-server: HTTP API over a single `students` table
//!
//! Each request opens its own database connection, runs one operation
//! (inside a transaction when it writes) and closes the connection again.
//! There is no pool and no shared mutable state between requests.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::DbConfig;
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
