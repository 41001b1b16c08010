// ABOUTME: Server configuration loaded from environment variables
// ABOUTME: Host, port, database location and log filter with validated defaults

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

use todoboard_config::{
    DEFAULT_DATABASE_PATH, DEFAULT_DB_MAX_CONNECTIONS, DEFAULT_HOST, DEFAULT_LOG_FILTER,
    DEFAULT_PORT, PORT, TODOBOARD_DATABASE_PATH, TODOBOARD_DB_MAX_CONNECTIONS, TODOBOARD_HOST,
    TODOBOARD_LOG, TODOBOARD_PORT,
};
use todoboard_storage::StorageConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
    #[error("Invalid host address: {0}")]
    InvalidHost(String),
    #[error("Invalid database connection count: {0}")]
    InvalidMaxConnections(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub database_path: PathBuf,
    pub max_connections: u32,
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let host_str = get(TODOBOARD_HOST).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host = host_str
            .trim()
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidHost(host_str.clone()))?;

        let port = match get(TODOBOARD_PORT).or_else(|| get(PORT)) {
            Some(port_str) => port_str.trim().parse::<u16>()?,
            None => DEFAULT_PORT,
        };

        // Validate port is in valid range
        if port == 0 {
            return Err(ConfigError::PortOutOfRange(port));
        }

        let database_path = get(TODOBOARD_DATABASE_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH));

        let max_connections = match get(TODOBOARD_DB_MAX_CONNECTIONS) {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(count) if count > 0 => count,
                _ => return Err(ConfigError::InvalidMaxConnections(raw)),
            },
            None => DEFAULT_DB_MAX_CONNECTIONS,
        };

        let log_filter = get(TODOBOARD_LOG).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Config {
            host,
            port,
            database_path,
            max_connections,
            log_filter,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn storage_config(&self) -> StorageConfig {
        StorageConfig {
            max_connections: self.max_connections,
            ..StorageConfig::with_path(&self.database_path)
        }
    }
}
