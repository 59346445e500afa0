//! Application configuration

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{Error, Result};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Base URL of the code-hosting application's REST API
    pub host_base_url: String,
    pub host_token: Option<String>,
    /// JSON file with per-repository webhook settings
    pub settings_file: Option<PathBuf>,
    /// Timeout applied to each outbound notification request
    pub notify_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_var("PORT", env::var("PORT").ok(), 3000)?,
            host_base_url: env::var("HOST_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:7990".to_string()),
            host_token: env::var("HOST_TOKEN").ok(),
            settings_file: env::var("SETTINGS_FILE").ok().map(PathBuf::from),
            notify_timeout: Duration::from_secs(parse_var(
                "NOTIFY_TIMEOUT_SECS",
                env::var("NOTIFY_TIMEOUT_SECS").ok(),
                10,
            )?),
        })
    }

    /// Address the HTTP ingress binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parse an optional variable, falling back to `default` when unset.
/// A set but malformed value is an error rather than a silent default.
fn parse_var<T: FromStr>(name: &str, value: Option<String>, default: T) -> Result<T> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| Error::Config(format!("{} has invalid value {:?}", name, raw))),
    }
}
