use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use http::HeaderValue;
use thiserror::Error;

pub const HOST_VAR: &str = "HOST";
pub const PORT_VAR: &str = "PORT";
pub const ORIGINS_VAR: &str = "CORS_ALLOWED_ORIGINS";

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:3001", "http://localhost:3002"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid HOST {value:?}: expected an IP address or `localhost`")]
    InvalidHost { value: String },
    #[error("invalid PORT {value:?}: expected an integer in 0..=65535")]
    InvalidPort { value: String },
    #[error("invalid origin {value:?} in CORS_ALLOWED_ORIGINS")]
    InvalidOrigin { value: String },
    #[error("CORS_ALLOWED_ORIGINS cannot contain `*` while credentials are allowed")]
    WildcardOrigin,
}

/// Listener address and CORS policy for the HTTP server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub allowed_origins: Vec<HeaderValue>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .into_iter()
                .map(HeaderValue::from_static)
                .collect(),
        }
    }
}

impl ServerConfig {
    /// Reads `HOST`, `PORT` and `CORS_ALLOWED_ORIGINS`, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(HOST_VAR) {
            config.host = parse_host(&value)?;
        }
        if let Some(value) = lookup(PORT_VAR) {
            config.port = value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { value })?;
        }
        if let Some(value) = lookup(ORIGINS_VAR) {
            config.allowed_origins = parse_origins(&value)?;
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_host(value: &str) -> Result<IpAddr, ConfigError> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("localhost") {
        return Ok(IpAddr::V4(Ipv4Addr::LOCALHOST));
    }
    trimmed.parse::<IpAddr>().map_err(|_| ConfigError::InvalidHost {
        value: value.to_string(),
    })
}

// Empty entries are skipped, so an empty variable disables cross-origin access.
fn parse_origins(value: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            if origin == "*" {
                return Err(ConfigError::WildcardOrigin);
            }
            HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidOrigin {
                value: origin.to_string(),
            })
        })
        .collect()
}
