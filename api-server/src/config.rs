// Server configuration from environment variables

use edenai_client::{ConfigError, GatewayConfig};
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Request body limit: 5 MiB of image as base64 plus JSON overhead
pub const BODY_LIMIT_BYTES: usize = 8 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, thiserror::Error)]
pub enum ServerConfigError {
    #[error(transparent)]
    Gateway(#[from] ConfigError),

    #[error("invalid BIND_ADDR '{0}'")]
    InvalidBindAddr(String),

    #[error("invalid LOG_FORMAT '{0}' (expected 'text' or 'json')")]
    InvalidLogFormat(String),
}

/// Logging settings, read before anything else so startup errors get logged
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub format: LogFormat,
    pub dir: Option<PathBuf>,
}

impl LogConfig {
    pub fn from_env() -> Result<Self, ServerConfigError> {
        let format = match env::var("LOG_FORMAT").ok().as_deref().map(str::trim) {
            None | Some("") => LogFormat::Text,
            Some(value) if value.eq_ignore_ascii_case("text") => LogFormat::Text,
            Some(value) if value.eq_ignore_ascii_case("json") => LogFormat::Json,
            Some(other) => return Err(ServerConfigError::InvalidLogFormat(other.to_string())),
        };
        let dir = env::var("LOG_DIR")
            .ok()
            .filter(|d| !d.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self { format, dir })
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub gateway: GatewayConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ServerConfigError> {
        let raw_addr = env::var("BIND_ADDR")
            .ok()
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .trim()
            .parse()
            .map_err(|_| ServerConfigError::InvalidBindAddr(raw_addr.clone()))?;

        Ok(Self {
            bind_addr,
            gateway: GatewayConfig::from_env()?,
        })
    }
}
