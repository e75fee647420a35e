//! Server configuration loaded from environment variables.

use std::time::Duration;

use crate::server::error::config::ConfigError;

const DEFAULT_USER_AGENT: &str = concat!("guildhall/", env!("CARGO_PKG_VERSION"));
const DEFAULT_REMOTE_MAX_ATTEMPTS: u32 = 3;
const DEFAULT_REMOTE_TIMEOUT_SECS: u64 = 10;

pub struct Config {
    /// Base URL of the remote guild API, without a trailing slash
    pub guild_api_url: String,
    /// Key sent with every request to the remote guild API
    pub guild_api_key: String,
    /// Redis/Valkey URL backing the session store
    pub valkey_url: String,
    pub user_agent: String,
    /// Attempts made for read requests that fail with a transient error
    pub remote_max_attempts: u32,
    pub remote_timeout: Duration,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is not set
    /// - `Err(ConfigError::InvalidEnvValue)` - A variable is set but cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            guild_api_url: required("GUILD_API_URL")?.trim_end_matches('/').to_string(),
            guild_api_key: required("GUILD_API_KEY")?,
            valkey_url: required("VALKEY_URL")?,
            user_agent: std::env::var("USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
            remote_max_attempts: optional_number("REMOTE_MAX_ATTEMPTS", DEFAULT_REMOTE_MAX_ATTEMPTS)?,
            remote_timeout: Duration::from_secs(optional_number(
                "REMOTE_TIMEOUT_SECS",
                DEFAULT_REMOTE_TIMEOUT_SECS,
            )?),
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

fn optional_number<T>(var: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialOrd + From<u8>,
    T::Err: std::fmt::Display,
{
    let Ok(raw) = std::env::var(var) else {
        return Ok(default);
    };

    let value = raw.trim().parse::<T>().map_err(|e| ConfigError::InvalidEnvValue {
        var: var.to_string(),
        reason: e.to_string(),
    })?;

    if value < T::from(1) {
        return Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    Ok(value)
}
