//! Configuration pulled from environment variables (and `.env`, if present)

use std::fmt;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "https://api.monzo.com";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 10;

const PORT: &str = "PORT";
const PERSONAL_ACCESS_TOKEN: &str = "MONZO_PERSONAL_ACCESS_TOKEN";
const SWEEP_POT_ID: &str = "MONZO_SWEEP_POT_ID";
const SWEEP_THRESHOLD: &str = "MONZO_SWEEP_THRESHOLD";
const ACCOUNT_ID: &str = "MONZO_ACCOUNT_ID";
const API_BASE_URL: &str = "MONZO_API_BASE_URL";
const API_TIMEOUT_SECS: &str = "MONZO_API_TIMEOUT_SECS";

#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("required environment variable {0} is not set")]
    Missing(&'static str),
    #[error("environment variable {name} has invalid value {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Clone)]
pub struct Settings {
    pub port: String,
    /// Bearer credential for the Monzo API.
    pub personal_access_token: String,
    pub sweep_pot_id: String,
    /// Minimum inbound amount, in minor units, that triggers a sweep.
    pub sweep_threshold: f64,
    pub account_id: String,
    pub api_base_url: String,
    pub api_timeout: Duration,
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|name| dotenv::var(name).ok())
    }

    /// Builds settings from any key lookup, so tests don't need to touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| -> Result<String, SettingsError> {
            match lookup(name) {
                Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
                _ => Err(SettingsError::Missing(name)),
            }
        };

        let threshold = required(SWEEP_THRESHOLD)?;
        let sweep_threshold = threshold
            .parse::<f64>()
            .ok()
            .filter(|it| it.is_finite())
            .ok_or_else(|| SettingsError::Invalid {
                name: SWEEP_THRESHOLD,
                value: threshold.clone(),
            })?;

        let api_timeout = match lookup(API_TIMEOUT_SECS) {
            Some(value) => {
                let secs = value.trim().parse::<u64>().map_err(|_| SettingsError::Invalid {
                    name: API_TIMEOUT_SECS,
                    value: value.clone(),
                })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_API_TIMEOUT_SECS),
        };

        let api_base_url = lookup(API_BASE_URL)
            .map(|it| it.trim().trim_end_matches('/').to_string())
            .filter(|it| !it.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Ok(Self {
            port: required(PORT)?,
            personal_access_token: required(PERSONAL_ACCESS_TOKEN)?,
            sweep_pot_id: required(SWEEP_POT_ID)?,
            sweep_threshold,
            account_id: required(ACCOUNT_ID)?,
            api_base_url,
            api_timeout,
        })
    }
}

// keep the token out of logs
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("port", &self.port)
            .field("sweep_pot_id", &self.sweep_pot_id)
            .field("sweep_threshold", &self.sweep_threshold)
            .field("account_id", &self.account_id)
            .field("api_base_url", &self.api_base_url)
            .field("api_timeout", &self.api_timeout)
            .finish_non_exhaustive()
    }
}
