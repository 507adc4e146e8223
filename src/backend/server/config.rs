/**
 * Server Configuration
 *
 * This module handles loading of server configuration from environment
 * variables (after `dotenv` has read an optional `.env` file) and the
 * creation of the PostgreSQL connection pool.
 *
 * # Variables
 *
 * - `DATABASE_URL` - Postgres DSN; without it data routes answer 503
 * - `DATABASE_MAX_CONNECTIONS` - pool size (default 10)
 * - `JWT_SECRET` - HMAC key for session tokens; required in production
 * - `SERVER_PORT` - listen port (default 3000)
 * - `UPLOAD_DIR` - where avatars are written (default `public/uploads`)
 * - `APP_ENV` - `production` marks the session cookie `Secure`
 * - `BCRYPT_COST` - password hashing cost
 *
 * # Error Handling
 *
 * Malformed values fail startup. A database that cannot be reached is
 * logged and the server continues without it.
 */

use std::path::PathBuf;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;

const DEV_JWT_SECRET: &str = "linkfolio-development-secret-change-me";

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be set")]
    Missing { key: &'static str },

    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: Option<String>,
    pub max_connections: u32,
    pub jwt_secret: String,
    pub port: u16,
    pub upload_dir: PathBuf,
    pub environment: Environment,
    pub bcrypt_cost: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            max_connections: 10,
            jwt_secret: DEV_JWT_SECRET.to_string(),
            port: 3000,
            upload_dir: PathBuf::from("public/uploads"),
            environment: Environment::Development,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let environment = match lookup("APP_ENV").as_deref() {
            Some("production") => Environment::Production,
            _ => Environment::Development,
        };

        let jwt_secret = match lookup("JWT_SECRET").filter(|s| !s.is_empty()) {
            Some(secret) => secret,
            None if environment == Environment::Production => {
                return Err(ConfigError::Missing { key: "JWT_SECRET" });
            }
            None => {
                tracing::warn!("JWT_SECRET not set, using the development secret");
                defaults.jwt_secret
            }
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL").filter(|s| !s.is_empty()),
            max_connections: parse_or("DATABASE_MAX_CONNECTIONS", &lookup, defaults.max_connections)?,
            jwt_secret,
            port: parse_or("SERVER_PORT", &lookup, defaults.port)?,
            upload_dir: lookup("UPLOAD_DIR").map(PathBuf::from).unwrap_or(defaults.upload_dir),
            environment,
            bcrypt_cost: parse_or("BCRYPT_COST", &lookup, defaults.bcrypt_cost)?,
        })
    }

    /// Whether cookies should carry the `Secure` attribute
    pub fn secure_cookies(&self) -> bool {
        self.environment == Environment::Production
    }
}

fn parse_or<T, F>(key: &'static str, lookup: &F, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(default),
    }
}

/// Create the connection pool and run migrations
///
/// Returns `None` if `DATABASE_URL` is not set or the connection fails;
/// the server keeps running and data routes answer 503.
pub async fn load_database(config: &ServerConfig) -> Option<PgPool> {
    let database_url = match &config.database_url {
        Some(url) => url,
        None => {
            tracing::warn!("DATABASE_URL not set. Database features will be disabled.");
            return None;
        }
    };

    tracing::info!("Connecting to database...");

    let pool = match PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Database features will be disabled.");
            return None;
        }
    };

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => tracing::info!("Database migrations completed successfully"),
        Err(e) => {
            tracing::error!("Failed to run database migrations: {}", e);
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Some(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.max_connections, 10);
        assert!(config.database_url.is_none());
        assert_eq!(config.environment, Environment::Development);
        assert!(!config.secure_cookies());
    }

    #[test]
    fn test_values_are_read() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/linkfolio"),
            ("SERVER_PORT", "8080"),
            ("JWT_SECRET", "s3cret"),
            ("APP_ENV", "production"),
            ("UPLOAD_DIR", "/var/lib/linkfolio/avatars"),
            ("BCRYPT_COST", "6"),
        ]))
        .unwrap();

        assert_eq!(config.database_url.as_deref(), Some("postgres://localhost/linkfolio"));
        assert_eq!(config.port, 8080);
        assert_eq!(config.jwt_secret, "s3cret");
        assert!(config.secure_cookies());
        assert_eq!(config.upload_dir, PathBuf::from("/var/lib/linkfolio/avatars"));
        assert_eq!(config.bcrypt_cost, 6);
    }

    #[test]
    fn test_invalid_number_is_an_error() {
        let err = ServerConfig::from_lookup(lookup_from(&[("SERVER_PORT", "eighty")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: "SERVER_PORT",
                value: "eighty".to_string()
            }
        );
    }

    #[test]
    fn test_production_requires_jwt_secret() {
        let err = ServerConfig::from_lookup(lookup_from(&[("APP_ENV", "production")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing { key: "JWT_SECRET" });

        let err = ServerConfig::from_lookup(lookup_from(&[("APP_ENV", "production"), ("JWT_SECRET", "")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::Missing { key: "JWT_SECRET" });
    }

    #[test]
    fn test_development_falls_back_to_dev_secret() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.jwt_secret, DEV_JWT_SECRET);
    }
}
