// Process configuration read from the environment.
//
// Purpose
// - Collect host, port, route prefix, CORS origins and database settings in
//   one typed value before anything is wired.
//
// Boundaries
// - `.env` loading happens in the binary; this module only reads variables.

use std::net::{SocketAddr, ToSocketAddrs};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a valid port number, got {value:?}")]
    InvalidPort { key: &'static str, value: String },

    #[error("cannot resolve listen address {0}")]
    UnresolvedAddress(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

impl DatabaseConfig {
    pub fn connection_url(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.name
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub prefix: String,
    pub cors_allow_origins: AllowedOrigins,
    /// `None` unless `DB_HOST` is set; the project catalog then reads the store.
    pub database: Option<DatabaseConfig>,
}

fn parse_port(key: &'static str, value: Option<String>, default: u16) -> Result<u16, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidPort { key, value: raw }),
    }
}

fn parse_origins(raw: &str) -> AllowedOrigins {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect();
    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        AllowedOrigins::Any
    } else {
        AllowedOrigins::List(origins)
    }
}

/// Leading slash kept, trailing slash dropped; `/` and blank mean no prefix.
fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let database = match lookup("DB_HOST") {
            None => None,
            Some(host) => Some(DatabaseConfig {
                user: or("DB_USER", "psql"),
                password: or("DB_PASSWORD", "psql"),
                host,
                port: parse_port("DB_PORT", lookup("DB_PORT"), 5432)?,
                name: or("DB_NAME", "entropydb"),
            }),
        };

        Ok(Self {
            host: or("HOST", "localhost"),
            port: parse_port("PORT", lookup("PORT"), 18080)?,
            prefix: normalize_prefix(&or("PREFIX", "/api")),
            cors_allow_origins: parse_origins(&or("CORS_ALLOW_ORIGINS", "*")),
            database,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let address = format!("{}:{}", self.host, self.port);
        address
            .to_socket_addrs()
            .ok()
            .and_then(|mut addrs| addrs.next())
            .ok_or(ConfigError::UnresolvedAddress(address))
    }
}
