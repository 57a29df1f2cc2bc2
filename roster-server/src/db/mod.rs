//! Database layer - per-request connections and repositories
//!
//! - One connection per request, no pool
//! - Every connection is closed on every exit path
//! - Writes run inside a transaction: commit on success, rollback on error
//! - Rely on table constraints for uniqueness and marks range

pub mod connection;
pub mod error;
pub mod repos;

pub use connection::{open, with_connection, with_transaction, StoreFuture};
pub use error::DbError;
pub use repos::{SampleOutcome, StudentRepo, TableRepo, TABLE_NAME};
