//! Server configuration module
//! Handles dynamic configuration parameters for the auction server

use crate::constants::{DEFAULT_HOST, DEFAULT_PORT};
use crate::error::{BidcastError, Result};
use std::env;
use std::net::SocketAddr;

/// Server configuration parameters
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables if available
    pub fn from_env() -> Result<Self> {
        let host = env::var("BIDCAST_HOST").unwrap_or(DEFAULT_HOST.to_string());
        let port = match env::var("BIDCAST_PORT") {
            Ok(p) => p.parse().map_err(|_| {
                BidcastError::ConfigError(format!("BIDCAST_PORT is not a valid port: {}", p))
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    /// Resolve the bind address for the server
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| {
                BidcastError::ConfigError(format!("Invalid server address: {}", e))
            })
    }
}
