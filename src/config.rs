//! Runtime configuration read from the environment (and `.env` via `dotenvy`).
//!
//! | variable       | default            |
//! |----------------|--------------------|
//! | `DATABASE_URL` | `sqlite::memory:`  |
//! | `BIND_ADDR`    | `0.0.0.0:3000`     |
//! | `API_PREFIX`   | `/api`             |

use std::net::{AddrParseError, SocketAddr};

pub const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_API_PREFIX: &str = "/api";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid BIND_ADDR '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },
    #[error("API_PREFIX must be empty or start with '/', got '{0}'")]
    InvalidApiPrefix(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    /// Mount point of the entity routers, without a trailing slash.
    pub api_prefix: String,
}

impl AppConfig {
    /// Load `.env` if present, then read the process environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `BIND_ADDR` or `API_PREFIX` is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(err) = dotenvy::dotenv() {
            tracing::debug!(error = %err, "No .env file loaded");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup; unset keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `BIND_ADDR` or `API_PREFIX` is malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let bind_value = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_value
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: bind_value.clone(),
                source,
            })?;

        let raw_prefix = lookup("API_PREFIX").unwrap_or_else(|| DEFAULT_API_PREFIX.to_string());
        let api_prefix = raw_prefix.trim_end_matches('/').to_string();
        if !api_prefix.is_empty() && !api_prefix.starts_with('/') {
            return Err(ConfigError::InvalidApiPrefix(raw_prefix));
        }

        Ok(Self {
            database_url,
            bind_addr,
            api_prefix,
        })
    }
}
