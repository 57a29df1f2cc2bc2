//! Repository implementations for database access
//!
//! Repositories borrow a single connection (or an open transaction) for the
//! duration of one operation. They never commit; the helpers in
//! [`crate::db::connection`] own that decision.

pub mod students;
pub mod table;

pub use students::{SampleOutcome, StudentRepo};
pub use table::{TableRepo, TABLE_NAME};
