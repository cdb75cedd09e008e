use std::net::{IpAddr, SocketAddr};
use thiserror::Error;

pub const HOST_VAR: &str = "USERS_API_HOST";
pub const PORT_VAR: &str = "USERS_API_PORT";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid IP address: {value}")]
    InvalidHost { var: &'static str, value: String },

    #[error("{var} is not a valid port: {value}")]
    InvalidPort { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup, falling back to defaults
    /// for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup(HOST_VAR).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host: IpAddr = host.parse().map_err(|_| ConfigError::InvalidHost {
            var: HOST_VAR,
            value: host.clone(),
        })?;

        let port: u16 = match lookup(PORT_VAR) {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort {
                var: PORT_VAR,
                value: raw.clone(),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
