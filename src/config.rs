//! Server settings read from the environment.

use std::net::SocketAddr;
use std::time::Duration;

use crate::core::YfClientBuilder;

pub const ENV_BIND: &str = "FAIRVALUE_BIND";
pub const ENV_TIMEOUT_SECS: &str = "FAIRVALUE_TIMEOUT_SECS";
pub const ENV_USER_AGENT: &str = "FAIRVALUE_USER_AGENT";

pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?}")]
    InvalidVar { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    /// Upstream request timeout; the HTTP client's default when unset.
    pub timeout: Option<Duration>,
    pub user_agent: Option<String>,
}

impl ServerConfig {
    /// Reads the settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to a value that does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the settings through `lookup`, which maps a variable name to its value.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to a value that does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_blank = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let bind_raw = non_blank(ENV_BIND).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidVar {
                name: ENV_BIND,
                value: bind_raw.clone(),
            })?;

        let timeout = non_blank(ENV_TIMEOUT_SECS)
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .map(Duration::from_secs)
                    .map_err(|_| ConfigError::InvalidVar {
                        name: ENV_TIMEOUT_SECS,
                        value: raw,
                    })
            })
            .transpose()?;

        Ok(Self {
            bind,
            timeout,
            user_agent: non_blank(ENV_USER_AGENT),
        })
    }

    /// A provider client builder carrying the upstream settings.
    pub fn client_builder(&self) -> YfClientBuilder {
        let mut builder = crate::YfClient::builder();
        if let Some(ua) = &self.user_agent {
            builder = builder.user_agent(ua.clone());
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder
    }
}
