//! Database connection flags shared by every command

use clap::Args;
use roster_server::config::{
    DEFAULT_DATABASE, DEFAULT_HOST, DEFAULT_PASSWORD, DEFAULT_PORT, DEFAULT_USER,
};
use roster_server::DbConfig;

#[derive(Args, Debug, Clone)]
pub struct DbArgs {
    /// Database host
    #[arg(long = "db-host", env = "RDS_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Database port
    #[arg(long = "db-port", env = "RDS_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Database user
    #[arg(long = "db-user", env = "RDS_USER", default_value = DEFAULT_USER)]
    pub user: String,

    /// Database password
    #[arg(
        long = "db-password",
        env = "RDS_PASSWORD",
        default_value = DEFAULT_PASSWORD,
        hide_env_values = true
    )]
    pub password: String,

    /// Database name
    #[arg(long = "db-name", env = "RDS_DB", default_value = DEFAULT_DATABASE)]
    pub database: String,
}

impl From<DbArgs> for DbConfig {
    fn from(args: DbArgs) -> Self {
        Self {
            host: args.host,
            port: args.port,
            user: args.user,
            password: args.password,
            database: args.database,
        }
    }
}
