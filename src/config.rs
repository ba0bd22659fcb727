use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_SEARCH_URL: &str = "https://www.marktplaats.nl/q/solis+espresso+apparaat";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone)]
pub struct Config {
    pub search_url: String,
    pub user_agent: String,
    pub timeout: Duration,
    pub bind_addr: SocketAddr,
}

#[derive(Debug)]
pub enum ConfigError {
    Invalid { key: String, value: String, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid { key, value, reason } => {
                write!(f, "Invalid value for {key} ({value:?}): {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl ConfigError {
    pub fn invalid(key: &str, value: &str, reason: impl ToString) -> Self {
        ConfigError::Invalid {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl Config {
    /// Defaults, overridden by `LISTING_SCOUT_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let search_url = get("LISTING_SCOUT_SEARCH_URL")
            .unwrap_or_else(|| DEFAULT_SEARCH_URL.to_string());

        let user_agent = get("LISTING_SCOUT_USER_AGENT")
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        let timeout_secs = match get("LISTING_SCOUT_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::invalid("LISTING_SCOUT_TIMEOUT_SECS", &raw, e))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let addr = get("LISTING_SCOUT_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let bind_addr = addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::invalid("LISTING_SCOUT_ADDR", &addr, e))?;

        Ok(Self {
            search_url,
            user_agent,
            timeout: Duration::from_secs(timeout_secs),
            bind_addr,
        })
    }
}
