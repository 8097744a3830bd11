//! Server configuration parsed from environment variables.
//!
//! `.env` is loaded by `main` before this runs, so values may come from either
//! the process environment or the dotenv file.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} required")]
    Missing(&'static str),
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    pub db_max_connections: u32,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Required:
    /// - `DATABASE_URL`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `DB_MAX_CONNECTIONS`: default 5 (unparseable values fall back to the default)
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is unset or `PORT` is not a valid port.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw.clone() })?,
            None => DEFAULT_PORT,
        };

        let db_max_connections = lookup("DB_MAX_CONNECTIONS")
            .and_then(|v| v.trim().parse::<u32>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS);

        Ok(Self { database_url, port, db_max_connections })
    }
}
