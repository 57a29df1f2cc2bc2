//! Connectivity check command

use anyhow::{bail, Result};
use clap::Parser;

use roster_server::db::{with_connection, DbError, TableRepo, TABLE_NAME};
use roster_server::DbConfig;

use super::db_args::DbArgs;

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub db: DbArgs,
}

/// Open one connection and report whether the table exists
pub async fn run_check(args: CheckArgs) -> Result<()> {
    let config = DbConfig::from(args.db);

    let exists = match with_connection(&config, |conn| {
        Box::pin(async move { TableRepo::new(conn).exists().await })
    })
    .await
    {
        Ok(exists) => exists,
        Err(DbError::Unavailable) => bail!(
            "Database connection failed ({}@{}:{}/{})",
            config.user,
            config.host,
            config.port,
            config.database
        ),
        Err(e) => bail!("Database check failed: {}", e),
    };

    println!(
        "connected to {}:{}/{}",
        config.host, config.port, config.database
    );
    if exists {
        println!("table '{}' exists", TABLE_NAME);
    } else {
        println!("table '{}' does not exist", TABLE_NAME);
    }

    Ok(())
}
