use std::time::Duration;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8089";
const DEFAULT_LISTING_REFRESH_SECONDS: u64 = 300;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// Interval between two runs of the per-bloc room listing.
    pub listing_refresh: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let listing_refresh = match lookup("LISTING_REFRESH_SECONDS") {
            Some(value) => match value.parse::<u64>() {
                Ok(seconds) if seconds > 0 => Duration::from_secs(seconds),
                _ => {
                    return Err(ConfigError::InvalidEnvVar {
                        name: "LISTING_REFRESH_SECONDS".to_string(),
                        value,
                    }
                    .into())
                }
            },
            None => Duration::from_secs(DEFAULT_LISTING_REFRESH_SECONDS),
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: lookup("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            listing_refresh,
        })
    }
}
