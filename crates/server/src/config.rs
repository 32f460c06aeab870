//! Server configuration

use crate::error::{Result, ServerError};
use std::net::SocketAddr;

/// Default HTTP port for the rolldice service
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Configuration for binding the HTTP server.
///
/// # Example
///
/// ```
/// use server::config::ServerConfig;
///
/// let config = ServerConfig::new("0.0.0.0", 8080);
/// assert!(config.http_addr().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to (e.g., "0.0.0.0" or "127.0.0.1")
    pub host: String,
    /// HTTP port
    pub http_port: u16,
}

impl ServerConfig {
    /// Create a new server config
    pub fn new(host: impl Into<String>, http_port: u16) -> Self {
        Self {
            host: host.into(),
            http_port,
        }
    }

    /// Get the HTTP socket address
    pub fn http_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.http_port)
            .parse()
            .map_err(|_| ServerError::InvalidAddress(format!("{}:{}", self.host, self.http_port)))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            http_port: DEFAULT_HTTP_PORT,
        }
    }
}
