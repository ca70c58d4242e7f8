// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// Errors returned by a [`TagRegistry`](crate::registry::TagRegistry) query.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Transport-level issue (DNS, TLS, socket, timeout, etc.).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The registry answered with a non-success status code.
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },
    /// Response body was not a valid tag list.
    #[error("failed to decode tag list: {0}")]
    Decode(#[from] serde_json::Error),
    /// Server URL is not an absolute http(s) URL.
    #[error("invalid server url: {0}")]
    InvalidUrl(String),
    /// A configured header name or value cannot be sent.
    #[error("invalid header: {0}")]
    InvalidHeader(String),
}

/// Errors raised while loading or validating client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable is not set")]
    Missing(&'static str),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
