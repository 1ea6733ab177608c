//! Runtime configuration read from the environment at startup.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const HOST_VAR: &str = "MERGINGTON_HOST";
pub const PORT_VAR: &str = "MERGINGTON_PORT";
pub const STATIC_DIR_VAR: &str = "MERGINGTON_STATIC_DIR";

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid IP address: {value}")]
    InvalidHost { var: &'static str, value: String },
    #[error("{var} is not a valid port: {value}")]
    InvalidPort { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    /// Directory served under `/static`, holding the built frontend.
    pub static_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), DEFAULT_PORT),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the config from any variable source; unset variables keep
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(HOST_VAR) {
            let ip = value.parse::<IpAddr>().map_err(|_| ConfigError::InvalidHost {
                var: HOST_VAR,
                value: value.clone(),
            })?;
            config.addr.set_ip(ip);
        }

        if let Some(value) = lookup(PORT_VAR) {
            let port = value.parse::<u16>().map_err(|_| ConfigError::InvalidPort {
                var: PORT_VAR,
                value: value.clone(),
            })?;
            config.addr.set_port(port);
        }

        if let Some(value) = lookup(STATIC_DIR_VAR) {
            config.static_dir = PathBuf::from(value);
        }

        Ok(config)
    }
}
