//! Command implementations for the roster CLI

pub mod check;
pub mod db_args;
pub mod serve;

pub use check::run_check;
pub use serve::run_serve;
