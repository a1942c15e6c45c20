use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::ConfigError;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Where the application is being hosted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Runtime {
    /// Plain TCP listener on `host:port`.
    Local,
    /// AWS Lambda behind API Gateway; `host` and `port` are ignored.
    Lambda,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Fallback tracing filter when `RUST_LOG` is not set.
    pub log_level: String,
    pub runtime: Runtime,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            runtime: Runtime::Local,
        }
    }
}

impl ServerConfig {
    /// Reads `HOST`, `PORT`, `LOG_LEVEL` and `AWS_LAMBDA_RUNTIME_API` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST") {
            config.host = host
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidHost(host.clone()))?;
        }

        if let Some(port) = lookup("PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }

        if let Some(level) = lookup("LOG_LEVEL") {
            if !level.trim().is_empty() {
                config.log_level = level.trim().to_string();
            }
        }

        // Set by the Lambda execution environment
        if lookup("AWS_LAMBDA_RUNTIME_API").is_some() {
            config.runtime = Runtime::Lambda;
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
