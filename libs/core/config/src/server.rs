use crate::{env_or_default, env_parse_or_default, ConfigError, FromEnv};
use std::net::{Ipv4Addr, SocketAddr};

/// Bind configuration for a gRPC server
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Accept and send zstd-compressed messages
    pub enable_compression: bool,
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            enable_compression: true,
        }
    }

    /// Get the server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parse the address into a bindable socket address
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.address()
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::ParseError {
                key: "GRPC_HOST".to_string(),
                details: format!("{} ({})", e, self.address()),
            })
    }
}

impl FromEnv for ServerConfig {
    /// Reads:
    /// - GRPC_HOST: defaults to 0.0.0.0
    /// - GRPC_PORT: defaults to 8083
    /// - GRPC_COMPRESSION: defaults to true
    fn from_env() -> Result<Self, ConfigError> {
        let host = env_or_default("GRPC_HOST", &Ipv4Addr::UNSPECIFIED.to_string());
        let port = env_parse_or_default("GRPC_PORT", "8083")?;
        let enable_compression = env_parse_or_default("GRPC_COMPRESSION", "true")?;

        Ok(Self {
            host,
            port,
            enable_compression,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(Ipv4Addr::UNSPECIFIED.to_string(), 8083)
    }
}
