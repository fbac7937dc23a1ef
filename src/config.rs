//! Application configuration management.
//!
//! Store connection parameters and the HTTP port are read from environment
//! variables with `envy`, after an optional `.env` file has been loaded.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use sqlx::postgres::PgConnectOptions;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `DATABASE_HOST` (optional): store host, defaults to `localhost`
/// - `DATABASE_PORT` (optional): store port, defaults to 5432
/// - `DATABASE_NAME` (optional): database name, defaults to `bankdb`
/// - `DATABASE_USER` (required): store user
/// - `DATABASE_PASSWORD` (required): store credential
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 5000
/// - `RUN_MIGRATIONS` (optional): apply `migrations/` at startup, defaults to true
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_database_host")]
    pub database_host: String,

    #[serde(default = "default_database_port")]
    pub database_port: u16,

    #[serde(default = "default_database_name")]
    pub database_name: String,

    pub database_user: String,

    /// Never printed; `Debug` renders it as redacted.
    pub database_password: SecretString,

    #[serde(default = "default_server_port")]
    pub server_port: u16,

    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
}

fn default_database_host() -> String {
    "localhost".to_string()
}

fn default_database_port() -> u16 {
    5432
}

fn default_database_name() -> String {
    "bankdb".to_string()
}

fn default_server_port() -> u16 {
    5000
}

fn default_run_migrations() -> bool {
    true
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_USER` or `DATABASE_PASSWORD` is missing,
    /// or if a numeric/boolean variable cannot be parsed.
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();

        // database_user -> DATABASE_USER
        envy::from_env::<Config>()
    }

    /// Connection parameters for the store, handed to the connection factory.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.database_host)
            .port(self.database_port)
            .database(&self.database_name)
            .username(&self.database_user)
            .password(self.database_password.expose_secret())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_apply_when_optional_vars_are_absent() {
        let config: Config = envy::from_iter(vars(&[
            ("DATABASE_USER", "bank"),
            ("DATABASE_PASSWORD", "hunter2"),
        ]))
        .unwrap();

        assert_eq!(config.database_host, "localhost");
        assert_eq!(config.database_port, 5432);
        assert_eq!(config.database_name, "bankdb");
        assert_eq!(config.server_port, 5000);
        assert!(config.run_migrations);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config: Config = envy::from_iter(vars(&[
            ("DATABASE_HOST", "db.internal"),
            ("DATABASE_PORT", "6543"),
            ("DATABASE_NAME", "ledger"),
            ("DATABASE_USER", "bank"),
            ("DATABASE_PASSWORD", "hunter2"),
            ("SERVER_PORT", "8080"),
            ("RUN_MIGRATIONS", "false"),
        ]))
        .unwrap();

        assert_eq!(config.database_host, "db.internal");
        assert_eq!(config.database_port, 6543);
        assert_eq!(config.database_name, "ledger");
        assert_eq!(config.server_port, 8080);
        assert!(!config.run_migrations);

        let options = config.connect_options();
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_database(), Some("ledger"));
        assert_eq!(options.get_username(), "bank");
    }

    #[test]
    fn missing_credentials_are_rejected() {
        let result = envy::from_iter::<_, Config>(vars(&[("DATABASE_USER", "bank")]));
        assert!(result.is_err());
    }

    #[test]
    fn debug_output_redacts_password() {
        let config: Config = envy::from_iter(vars(&[
            ("DATABASE_USER", "bank"),
            ("DATABASE_PASSWORD", "hunter2"),
        ]))
        .unwrap();

        let rendered = format!("{config:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("REDACTED"));
    }
}
