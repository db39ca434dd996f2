use std::{net::SocketAddr, path::PathBuf, time::Duration};

use dotenv::dotenv;

use crate::error::ConfigError;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_AUTH_TOKEN: &str = "dev-token-CHANGE";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3043";

pub const ENV_BACKEND_URL: &str = "CARELINE_BACKEND_URL";
pub const ENV_AUTH_TOKEN: &str = "CARELINE_AUTH_TOKEN";
pub const ENV_TIMEOUT_SECS: &str = "CARELINE_TIMEOUT_SECS";
pub const ENV_BIND: &str = "CARELINE_BIND";
pub const ENV_ACTIVITY_LOG: &str = "CARELINE_ACTIVITY_LOG";

/// Everything [`RequestClient`](crate::services::RequestClient) needs to reach the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub auth_token: String,
    /// `None` waits for the network stack to resolve or reject.
    pub request_timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_token: auth_token.into(),
            request_timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL, DEFAULT_AUTH_TOKEN)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub activity_log: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub client: ClientConfig,
    pub server: ServerConfig,
}

impl Config {
    /// Loads `.env` (if any) and reads the `CARELINE_*` variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(ENV_BACKEND_URL).unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
        if base_url.trim().is_empty() {
            return Err(ConfigError::Empty {
                name: ENV_BACKEND_URL,
            });
        }

        let auth_token = lookup(ENV_AUTH_TOKEN).unwrap_or_else(|| DEFAULT_AUTH_TOKEN.to_string());

        let request_timeout = match lookup(ENV_TIMEOUT_SECS) {
            Some(raw) if !raw.trim().is_empty() => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| ConfigError::InvalidValue {
                        name: ENV_TIMEOUT_SECS,
                        value: raw.clone(),
                        reason: e.to_string(),
                    })?;
                Some(Duration::from_secs(secs))
            }
            _ => None,
        };

        let raw_bind = lookup(ENV_BIND).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_bind
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue {
                name: ENV_BIND,
                value: raw_bind.clone(),
                reason: e.to_string(),
            })?;

        let activity_log = lookup(ENV_ACTIVITY_LOG)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(Config {
            client: ClientConfig {
                base_url: base_url.trim().to_string(),
                auth_token,
                request_timeout,
            },
            server: ServerConfig {
                bind_addr,
                activity_log,
            },
        })
    }
}
