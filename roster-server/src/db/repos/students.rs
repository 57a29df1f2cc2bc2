//! Student repository - list, insert, update, delete, stats
//!
//! Not-found is detected from the affected-row count, never with a separate
//! existence query. Duplicate ids surface from the primary key constraint.

use sqlx::{MySql, MySqlConnection, QueryBuilder};

use crate::db::DbError;
use crate::models::{NewStudent, Stats, Student, StudentChanges, SAMPLE_STUDENTS};

/// Result of the sample-data insert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleOutcome {
    /// All sample rows were written
    Inserted(usize),
    /// At least one sample id was already present; nothing was written
    AlreadyPresent,
}

/// Student repository
pub struct StudentRepo<'c> {
    conn: &'c mut MySqlConnection,
}

impl<'c> StudentRepo<'c> {
    pub fn new(conn: &'c mut MySqlConnection) -> Self {
        Self { conn }
    }

    /// All students ordered by id.
    pub async fn list(&mut self) -> Result<Vec<Student>, DbError> {
        let students: Vec<Student> =
            sqlx::query_as("SELECT id, name, marks FROM students ORDER BY id")
                .fetch_all(&mut *self.conn)
                .await?;

        Ok(students)
    }

    /// Insert one student. A taken id maps to [`DbError::Duplicate`].
    pub async fn insert(&mut self, student: &NewStudent) -> Result<(), DbError> {
        sqlx::query("INSERT INTO students (id, name, marks) VALUES (?, ?, ?)")
            .bind(student.id)
            .bind(&student.name)
            .bind(student.marks)
            .execute(&mut *self.conn)
            .await
            .map_err(|e| DbError::from_insert(e, student.id))?;

        tracing::debug!(id = student.id, "student inserted");
        Ok(())
    }

    /// Insert the fixed sample rows in one statement.
    ///
    /// Skips the insert entirely if any sample id is already taken. Only the
    /// sample ids are checked; other rows in the table do not matter.
    pub async fn insert_samples(&mut self) -> Result<SampleOutcome, DbError> {
        let mut check: QueryBuilder<MySql> =
            QueryBuilder::new("SELECT COUNT(*) FROM students WHERE id IN (");
        let mut ids = check.separated(", ");
        for (id, _, _) in SAMPLE_STUDENTS {
            ids.push_bind(id);
        }
        ids.push_unseparated(")");

        let existing: i64 = check
            .build_query_scalar::<i64>()
            .fetch_one(&mut *self.conn)
            .await?;
        if existing > 0 {
            return Ok(SampleOutcome::AlreadyPresent);
        }

        let mut insert: QueryBuilder<MySql> =
            QueryBuilder::new("INSERT INTO students (id, name, marks) ");
        insert.push_values(SAMPLE_STUDENTS, |mut row, (id, name, marks)| {
            row.push_bind(id).push_bind(name).push_bind(marks);
        });
        insert.build().execute(&mut *self.conn).await?;

        Ok(SampleOutcome::Inserted(SAMPLE_STUDENTS.len()))
    }

    /// Replace name and marks of an existing student.
    pub async fn update(&mut self, id: i32, changes: &StudentChanges) -> Result<(), DbError> {
        let result = sqlx::query("UPDATE students SET name = ?, marks = ? WHERE id = ?")
            .bind(&changes.name)
            .bind(changes.marks)
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound { id });
        }
        Ok(())
    }

    /// Delete a student by id.
    pub async fn delete(&mut self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound { id });
        }
        Ok(())
    }

    /// Count, average and maximum of marks in one query.
    pub async fn stats(&mut self) -> Result<Stats, DbError> {
        let (total, avg, max): (i64, Option<f64>, Option<i64>) = sqlx::query_as(
            r#"
            SELECT
                COUNT(*),
                CAST(AVG(marks) AS DOUBLE),
                CAST(MAX(marks) AS SIGNED)
            FROM students
            "#,
        )
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(Stats::from_aggregates(total, avg, max))
    }
}
