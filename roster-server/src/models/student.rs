//! Student records and the request bodies that create or change them

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// Fixed rows written by the sample-data endpoint
pub const SAMPLE_STUDENTS: [(i32, &str, i32); 4] = [
    (101, "Aditi Sharma", 92),
    (102, "Rohan Gupta", 75),
    (103, "Priya Singh", 88),
    (104, "Vikram Reddy", 64),
];

/// One row of the `students` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub marks: i32,
}

/// POST /students body
///
/// Form-driven clients send numbers as strings, so `id` and `marks` accept
/// either a JSON integer or an integer-valued string.
#[derive(Debug, Deserialize)]
pub struct NewStudentRequest {
    #[serde(deserialize_with = "int_or_string")]
    pub id: i32,
    pub name: String,
    #[serde(deserialize_with = "int_or_string")]
    pub marks: i32,
}

/// PUT /students/{id} body
#[derive(Debug, Deserialize)]
pub struct UpdateStudentRequest {
    pub name: String,
    #[serde(deserialize_with = "int_or_string")]
    pub marks: i32,
}

/// A student ready to insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub id: i32,
    pub name: String,
    pub marks: i32,
}

impl NewStudent {
    pub fn new(id: i32, name: &str, marks: i32) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            name: validate_name(name)?,
            marks,
        })
    }
}

impl TryFrom<NewStudentRequest> for NewStudent {
    type Error = ValidationError;

    fn try_from(req: NewStudentRequest) -> Result<Self, Self::Error> {
        Self::new(req.id, &req.name, req.marks)
    }
}

/// New values for an existing student; the id never changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentChanges {
    pub name: String,
    pub marks: i32,
}

impl TryFrom<UpdateStudentRequest> for StudentChanges {
    type Error = ValidationError;

    fn try_from(req: UpdateStudentRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: validate_name(&req.name)?,
            marks: req.marks,
        })
    }
}

/// Presence check only; the name is stored exactly as sent.
fn validate_name(name: &str) -> Result<String, ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::Empty { field: "name" });
    }
    Ok(name.to_owned())
}

fn int_or_string<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrString {
        Int(i64),
        Str(String),
    }

    match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(n) => i32::try_from(n)
            .map_err(|_| de::Error::custom(format!("integer out of range: {}", n))),
        IntOrString::Str(s) => s
            .trim()
            .parse::<i32>()
            .map_err(|_| de::Error::custom(format!("invalid integer: '{}'", s))),
    }
}
