// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::error::ConfigError;
use std::env;
use std::time::Duration;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Connection settings for the NetBox API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the NetBox instance, without trailing slash
    pub server_url: String,
    /// API token sent as `Authorization: Token <token>`
    pub api_token: String,
    /// Skip TLS certificate validation
    pub allow_insecure_https: bool,
    /// Timeout applied to every request
    pub request_timeout: Duration,
    /// Extra headers sent with every request
    pub headers: Vec<(String, String)>,
    /// HTTPS proxy URL
    pub https_proxy: Option<String>,
    /// Log level (e.g., trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: String::new(),
            api_token: String::new(),
            allow_insecure_https: false,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            headers: Vec::new(),
            https_proxy: None,
            log_level: "info".to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(server_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            server_url: normalize_server_url(&server_url.into()),
            api_token: api_token.into(),
            ..Default::default()
        }
    }

    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let server_url = env::var("NETBOX_SERVER_URL")
            .map_err(|_| ConfigError::Missing("NETBOX_SERVER_URL"))?;
        let api_token =
            env::var("NETBOX_API_TOKEN").map_err(|_| ConfigError::Missing("NETBOX_API_TOKEN"))?;
        let allow_insecure_https = env::var("NETBOX_ALLOW_INSECURE_HTTPS")
            .map(|val| val.to_lowercase() == "true")
            .unwrap_or(false);
        let request_timeout = match env::var("NETBOX_REQUEST_TIMEOUT") {
            Ok(val) => {
                let secs = val.trim().parse::<u64>().map_err(|_| {
                    ConfigError::InvalidConfig(format!(
                        "NETBOX_REQUEST_TIMEOUT must be a number of seconds, got '{val}'"
                    ))
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };
        let headers = match env::var("NETBOX_HEADERS") {
            Ok(val) => parse_headers(&val)?,
            Err(_) => Vec::new(),
        };
        let https_proxy = env::var("NETBOX_PROXY_HTTPS")
            .or_else(|_| env::var("HTTPS_PROXY"))
            .ok();

        let config = Self {
            server_url: normalize_server_url(&server_url),
            api_token,
            allow_insecure_https,
            request_timeout,
            headers,
            https_proxy,
            log_level: log_level_from_env(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.server_url.starts_with("http://") || self.server_url.starts_with("https://")) {
            return Err(ConfigError::InvalidConfig(format!(
                "server url '{}' must start with http:// or https://",
                self.server_url
            )));
        }

        if self.api_token.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "NETBOX_API_TOKEN cannot be empty".to_string(),
            ));
        }

        if self.request_timeout.is_zero() {
            return Err(ConfigError::InvalidConfig(
                "request timeout must be greater than 0".to_string(),
            ));
        }

        if !VALID_LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::InvalidConfig(format!(
                "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error",
                self.log_level
            )));
        }

        Ok(())
    }
}

/// Reads `NETBOX_LOG_LEVEL`, lowercased, defaulting to `info`.
pub fn log_level_from_env() -> String {
    env::var("NETBOX_LOG_LEVEL")
        .map(|val| val.to_lowercase())
        .unwrap_or_else(|_| "info".to_string())
}

fn normalize_server_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Parses `key=value` pairs separated by commas. Empty entries are skipped.
fn parse_headers(raw: &str) -> Result<Vec<(String, String)>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                Ok((key.trim().to_string(), value.trim().to_string()))
            }
            _ => Err(ConfigError::InvalidConfig(format!(
                "NETBOX_HEADERS entry '{entry}' must be of the form key=value"
            ))),
        })
        .collect()
}
