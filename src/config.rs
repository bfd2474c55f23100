//! Configuration module for environment variables and application settings

use std::env;
use std::net::{IpAddr, SocketAddr};

use crate::error::ServerError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ServerError> {
        Ok(Self {
            server: ServerConfig::from_values(
                env::var("SERVER_HOST").ok(),
                env::var("PORT").ok(),
                env::var("SERVER_PORT").ok(),
            )?,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        self.server.socket_addr()
    }
}

impl ServerConfig {
    /// Builds the server settings from raw values.
    ///
    /// `PORT` (set by hosting platforms such as Heroku) wins over `SERVER_PORT`.
    pub fn from_values(
        host: Option<String>,
        port: Option<String>,
        server_port: Option<String>,
    ) -> Result<Self, ServerError> {
        let host = host
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match port.or(server_port) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| ServerError::Config(format!("invalid port {raw:?}: {e}")))?,
            None => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| ServerError::Config(format!("invalid host {:?}: {}", self.host, e)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = ServerConfig::from_values(None, None, None).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_platform_port_takes_precedence() {
        let config = ServerConfig::from_values(
            Some("127.0.0.1".to_string()),
            Some("8080".to_string()),
            Some("9090".to_string()),
        )
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_server_port_used_without_platform_port() {
        let config = ServerConfig::from_values(None, None, Some("9090".to_string())).unwrap();
        assert_eq!(config.port, 9090);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = ServerConfig::from_values(None, Some("not-a-port".to_string()), None).unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }

    #[test]
    fn test_invalid_host_is_rejected() {
        let config = ServerConfig::from_values(Some("localhost:80".to_string()), None, None).unwrap();
        assert!(matches!(config.socket_addr(), Err(ServerError::Config(_))));
    }
}
