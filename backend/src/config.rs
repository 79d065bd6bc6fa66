//! Runtime settings, read once from the environment at startup.
//!
//! | variable                   | default     | meaning                                   |
//! |----------------------------|-------------|-------------------------------------------|
//! | `PANEN_HOST`               | `127.0.0.1` | bind address                              |
//! | `PANEN_PORT`               | `8080`      | bind port                                 |
//! | `PANEN_WEBHOOK_URL`        | unset       | webhook receiving the submissions         |
//! | `PANEN_RELAY`              | `false`     | submit through `/api/requests`            |
//! | `PANEN_RELAY_TIMEOUT_SECS` | `30`        | upstream timeout for relayed submissions  |
//! | `PANEN_OPEN_BROWSER`       | `true`      | open the UI in a browser after startup    |
//!
//! An unset webhook URL is allowed so the page can still be served; the
//! config endpoint then answers 503 and the form cannot submit.

use reqwest::Url;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a valid port number, got {value:?}")]
    InvalidPort { var: &'static str, value: String },

    #[error("{var} must be an http(s) URL, got {value:?}")]
    InvalidUrl { var: &'static str, value: String },

    #[error("{var} must be true or false, got {value:?}")]
    InvalidBool { var: &'static str, value: String },

    #[error("{var} must be a positive number of seconds, got {value:?}")]
    InvalidDuration { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub webhook_url: Option<Url>,
    pub relay: bool,
    pub relay_timeout: Duration,
    pub open_browser: bool,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds settings from an arbitrary variable lookup. Blank values count
    /// as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let host = get("PANEN_HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let port = match get("PANEN_PORT") {
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort {
                var: "PANEN_PORT",
                value,
            })?,
            None => 8080,
        };

        let webhook_url = get("PANEN_WEBHOOK_URL")
            .map(|value| parse_webhook_url("PANEN_WEBHOOK_URL", value))
            .transpose()?;

        let relay = parse_bool("PANEN_RELAY", get("PANEN_RELAY"), false)?;
        let open_browser = parse_bool("PANEN_OPEN_BROWSER", get("PANEN_OPEN_BROWSER"), true)?;

        let relay_timeout = match get("PANEN_RELAY_TIMEOUT_SECS") {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidDuration {
                        var: "PANEN_RELAY_TIMEOUT_SECS",
                        value,
                    })
                }
            },
            None => Duration::from_secs(30),
        };

        Ok(Self {
            host,
            port,
            webhook_url,
            relay,
            relay_timeout,
            open_browser,
        })
    }

    pub fn bind_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_webhook_url(var: &'static str, value: String) -> Result<Url, ConfigError> {
    let parsed = Url::parse(value.trim());
    match parsed {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(url),
        _ => Err(ConfigError::InvalidUrl { var, value }),
    }
}

fn parse_bool(var: &'static str, value: Option<String>, default: bool) -> Result<bool, ConfigError> {
    let Some(value) = value else {
        return Ok(default);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool { var, value }),
    }
}
