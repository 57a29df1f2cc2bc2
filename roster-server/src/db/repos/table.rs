//! Table lifecycle - exists, create, drop

use sqlx::MySqlConnection;

use crate::db::DbError;

/// Name of the only table this service manages
pub const TABLE_NAME: &str = "students";

const CREATE_TABLE_SQL: &str = r#"
    CREATE TABLE students (
        id INT PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        marks INT CHECK (marks >= 0 AND marks <= 100)
    )
"#;

/// Table lifecycle repository
pub struct TableRepo<'c> {
    conn: &'c mut MySqlConnection,
}

impl<'c> TableRepo<'c> {
    pub fn new(conn: &'c mut MySqlConnection) -> Self {
        Self { conn }
    }

    /// Whether `students` exists in the connected database.
    pub async fn exists(&mut self) -> Result<bool, DbError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM information_schema.tables
            WHERE table_schema = DATABASE() AND table_name = ?
            "#,
        )
        .bind(TABLE_NAME)
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(count > 0)
    }

    /// Create the table. Fails if it already exists.
    pub async fn create(&mut self) -> Result<(), DbError> {
        sqlx::query(CREATE_TABLE_SQL)
            .execute(&mut *self.conn)
            .await?;
        tracing::info!(table = TABLE_NAME, "table created");
        Ok(())
    }

    /// Drop the table. Fails if it does not exist.
    pub async fn drop_table(&mut self) -> Result<(), DbError> {
        sqlx::query("DROP TABLE students")
            .execute(&mut *self.conn)
            .await?;
        tracing::info!(table = TABLE_NAME, "table dropped");
        Ok(())
    }
}
