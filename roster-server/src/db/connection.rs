//! Connection factory and scoped connection/transaction helpers
//!
//! Every handler goes through [`with_connection`] or [`with_transaction`]:
//! acquire, run one operation, commit or roll back, then close the
//! connection whatever the outcome.

use futures::future::BoxFuture;
use sqlx::{Connection, MySqlConnection};

use super::DbError;
use crate::config::DbConfig;

/// Future returned by store operations run inside the helpers
pub type StoreFuture<'c, T> = BoxFuture<'c, Result<T, DbError>>;

/// Open a new connection.
///
/// Returns `None` when the store is unreachable or rejects the credentials.
/// The cause is logged here so callers only need to report a uniform failure.
pub async fn open(config: &DbConfig) -> Option<MySqlConnection> {
    match MySqlConnection::connect_with(&config.connect_options()).await {
        Ok(conn) => Some(conn),
        Err(e) => {
            tracing::error!(
                host = %config.host,
                port = config.port,
                database = %config.database,
                error = %e,
                "database connection failed"
            );
            None
        }
    }
}

async fn release(conn: MySqlConnection) {
    if let Err(e) = conn.close().await {
        tracing::warn!(error = %e, "failed to close database connection");
    }
}

/// Run a read-only operation on a fresh connection.
///
/// # Example
///
/// ```ignore
/// let exists = with_connection(&config, |conn| {
///     Box::pin(async move { TableRepo::new(conn).exists().await })
/// })
/// .await?;
/// ```
pub async fn with_connection<T, F>(config: &DbConfig, op: F) -> Result<T, DbError>
where
    F: for<'c> FnOnce(&'c mut MySqlConnection) -> StoreFuture<'c, T>,
{
    let mut conn = open(config).await.ok_or(DbError::Unavailable)?;
    let result = op(&mut conn).await;
    release(conn).await;
    result
}

/// Run a write operation inside a transaction on a fresh connection.
///
/// Commits when `op` succeeds and rolls back when it fails. The connection
/// is closed afterwards in both cases.
pub async fn with_transaction<T, F>(config: &DbConfig, op: F) -> Result<T, DbError>
where
    F: for<'c> FnOnce(&'c mut MySqlConnection) -> StoreFuture<'c, T>,
{
    let mut conn = open(config).await.ok_or(DbError::Unavailable)?;
    let result = run_in_transaction(&mut conn, op).await;
    release(conn).await;
    result
}

async fn run_in_transaction<T, F>(conn: &mut MySqlConnection, op: F) -> Result<T, DbError>
where
    F: for<'c> FnOnce(&'c mut MySqlConnection) -> StoreFuture<'c, T>,
{
    let mut tx = conn.begin().await?;
    let outcome = op(&mut *tx).await;

    match outcome {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if err.is_expected() {
                tracing::debug!(reason = %err, "rolling back transaction");
            } else {
                tracing::warn!(error = %err, "rolling back transaction");
            }
            if let Err(rollback_err) = tx.rollback().await {
                tracing::error!(error = %rollback_err, "rollback failed");
            }
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    fn unreachable_config() -> DbConfig {
        DbConfig {
            host: "127.0.0.1".into(),
            port: 1,
            ..DbConfig::default()
        }
    }

    #[tokio::test]
    async fn open_returns_none_when_unreachable() {
        assert!(open(&unreachable_config()).await.is_none());
    }

    #[tokio::test]
    async fn operation_is_skipped_without_a_connection() {
        let called = Arc::new(AtomicBool::new(false));
        let flag = called.clone();

        let result = with_transaction(&unreachable_config(), move |_conn| {
            Box::pin(async move {
                flag.store(true, Ordering::SeqCst);
                Ok(())
            })
        })
        .await;

        assert!(matches!(result, Err(DbError::Unavailable)));
        assert!(!called.load(Ordering::SeqCst));
    }

    // Integration tests require a real database
    // Run with: RDS_HOST=... RDS_DB=... cargo test -p roster-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn connection_runs_query() {
        let config = DbConfig::from_env();
        let value = with_connection(&config, |conn| {
            Box::pin(async move {
                let value: i64 = sqlx::query_scalar("SELECT 1").fetch_one(&mut *conn).await?;
                Ok(value)
            })
        })
        .await
        .expect("query failed");

        assert_eq!(value, 1);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn failed_operation_rolls_back() {
        let config = DbConfig::from_env();

        let result: Result<(), DbError> = with_transaction(&config, |conn| {
            Box::pin(async move {
                sqlx::query("CREATE TEMPORARY TABLE rollback_probe (id INT)")
                    .execute(&mut *conn)
                    .await?;
                Err(DbError::NotFound { id: 0 })
            })
        })
        .await;

        assert!(matches!(result, Err(DbError::NotFound { id: 0 })));
    }
}
