//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `CONTACTS_*` environment variables, or a
//! configuration file, in that order of precedence.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_DB_MIN_IDLE: u32 = 2;
const DEFAULT_DB_CONNECTION_TIMEOUT_SECS: u64 = 30;

/// Settings for the HTTP listener and the optional PostgreSQL backend.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CONTACTS")]
pub struct ServerSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection URL. Contacts are kept in memory when unset.
    pub database_url: Option<String>,
    /// Maximum number of pooled connections.
    pub db_max_connections: Option<u32>,
    /// Minimum number of idle pooled connections.
    pub db_min_idle: Option<u32>,
    /// Seconds to wait for a pooled connection.
    pub db_connection_timeout_secs: Option<u64>,
}

impl ServerSettings {
    /// Return the configured bind address, falling back to the default.
    pub fn bind_addr(&self) -> &str {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Return the database URL when one is configured and not blank.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Maximum pool size, defaulting to 10.
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }

    /// Minimum idle connections, defaulting to 2.
    pub fn db_min_idle(&self) -> u32 {
        self.db_min_idle.unwrap_or(DEFAULT_DB_MIN_IDLE)
    }

    /// Pool checkout timeout, defaulting to 30 seconds.
    pub fn db_connection_timeout(&self) -> Duration {
        Duration::from_secs(
            self.db_connection_timeout_secs
                .unwrap_or(DEFAULT_DB_CONNECTION_TIMEOUT_SECS),
        )
    }
}
