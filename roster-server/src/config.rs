//! Database configuration - connection parameters and environment loading
//!
//! Configuration is loaded from environment variables:
//! - `RDS_HOST`: database host (default: localhost)
//! - `RDS_PORT`: database port (default: 3306)
//! - `RDS_USER`: user name (default: admin)
//! - `RDS_PASSWORD`: password (default: empty)
//! - `RDS_DB`: database name (default: school)

use std::fmt;

use sqlx::mysql::MySqlConnectOptions;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 3306;
pub const DEFAULT_USER: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "";
pub const DEFAULT_DATABASE: &str = "school";

/// Connection parameters for the students database.
///
/// Built once at process start and handed to every request; nothing reads
/// the environment after that.
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl DbConfig {
    /// Create config from environment variables.
    ///
    /// For library and test callers. The `roster` binary reads the same
    /// variables through its clap flags, which default to the constants above.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary key lookup (for testing)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            host: lookup("RDS_HOST").unwrap_or(defaults.host),
            port: lookup("RDS_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            user: lookup("RDS_USER").unwrap_or(defaults.user),
            password: lookup("RDS_PASSWORD").unwrap_or(defaults.password),
            database: lookup("RDS_DB").unwrap_or(defaults.database),
        }
    }

    /// Driver connect options for this configuration
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            user: DEFAULT_USER.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            database: DEFAULT_DATABASE.to_string(),
        }
    }
}

// Keep the password out of logs.
impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("database", &self.database)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_when_env_is_empty() {
        let config = DbConfig::from_lookup(|_| None);
        assert_eq!(config, DbConfig::default());
        assert_eq!(config.port, 3306);
        assert_eq!(config.database, "school");
    }

    #[test]
    fn env_values_override_defaults() {
        let env: HashMap<&str, &str> = [
            ("RDS_HOST", "db.internal"),
            ("RDS_PORT", "3307"),
            ("RDS_USER", "registrar"),
            ("RDS_PASSWORD", "secret"),
            ("RDS_DB", "grades"),
        ]
        .into_iter()
        .collect();

        let config = DbConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.host, "db.internal");
        assert_eq!(config.port, 3307);
        assert_eq!(config.user, "registrar");
        assert_eq!(config.password, "secret");
        assert_eq!(config.database, "grades");
    }

    #[test]
    fn unparsable_port_falls_back() {
        let config = DbConfig::from_lookup(|key| (key == "RDS_PORT").then(|| "nope".to_string()));
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn debug_hides_password() {
        let config = DbConfig {
            password: "hunter2".into(),
            ..DbConfig::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("localhost"));
    }
}
