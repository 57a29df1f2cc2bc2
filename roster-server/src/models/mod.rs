//! Domain models with validation at construction
//!
//! Request bodies are checked for presence when they are built into these
//! types. Range rules (marks in 0..=100) are left to the table constraint.

pub mod stats;
pub mod student;
pub mod validation;

pub use stats::Stats;
pub use student::{
    NewStudent, NewStudentRequest, Student, StudentChanges, UpdateStudentRequest, SAMPLE_STUDENTS,
};
pub use validation::ValidationError;
