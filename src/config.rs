// Process configuration read from the environment
// `.env` is loaded by main before Settings::from_env runs

use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 30000;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Origin allowed by CORS; any origin when `None`
    pub cors_origin: Option<String>,
}

/// PostgreSQL settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
}

impl Settings {
    /// Reads settings from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, falling back to defaults
    ///
    /// # Keys
    /// - `SERVER_HOST`, `SERVER_PORT`, `CORS_ORIGIN`
    /// - `DATABASE_URL`, or its parts `DB_USER`, `DB_PASSWORD`, `DB_HOST`,
    ///   `DB_PORT`, `DB_NAME`
    /// - `DB_MAX_CONNECTIONS`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = lookup("SERVER_HOST").unwrap_or_else(|| {
            tracing::warn!("SERVER_HOST not set, using default {}", DEFAULT_HOST);
            DEFAULT_HOST.to_string()
        });

        let port = match lookup("SERVER_PORT") {
            Some(value) => parse("SERVER_PORT", value)?,
            None => {
                tracing::warn!("SERVER_PORT not set, using default {}", DEFAULT_PORT);
                DEFAULT_PORT
            }
        };

        let url = match lookup("DATABASE_URL") {
            Some(url) => url,
            None => {
                if lookup("DB_HOST").is_none() {
                    tracing::warn!("DATABASE_URL not set, using default");
                }
                let db_port: u16 = match lookup("DB_PORT") {
                    Some(value) => parse("DB_PORT", value)?,
                    None => 5432,
                };
                format!(
                    "postgresql://{}:{}@{}:{}/{}",
                    lookup("DB_USER").unwrap_or_else(|| "postgres".to_string()),
                    lookup("DB_PASSWORD").unwrap_or_else(|| "postgres".to_string()),
                    lookup("DB_HOST").unwrap_or_else(|| "localhost".to_string()),
                    db_port,
                    lookup("DB_NAME").unwrap_or_else(|| "socialnet".to_string()),
                )
            }
        };

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(value) => parse("DB_MAX_CONNECTIONS", value)?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            server: ServerSettings {
                host,
                port,
                cors_origin: lookup("CORS_ORIGIN"),
            },
            database: DatabaseSettings {
                url,
                max_connections,
            },
        })
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { key, value })
}
