// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! HTTP implementation of [`TagRegistry`] over the NetBox REST API.

use crate::config::ClientConfig;
use crate::error::RegistryError;
use crate::registry::{TagList, TagListParams, TagRegistry};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;
use std::time::Instant;
use tracing::{debug, error};

/// Tag listing endpoint, relative to the server URL.
const TAGS_ENDPOINT: &str = "/api/extras/tags/";
const USER_AGENT: &str = concat!("netbox-tags/", env!("CARGO_PKG_VERSION"));

/// NetBox API client, cheap to clone.
#[derive(Debug, Clone)]
pub struct NetBoxClient {
    client: Client,
    server_url: String,
}

impl NetBoxClient {
    pub fn new(config: &ClientConfig) -> Result<Self, RegistryError> {
        let server_url = config.server_url.trim_end_matches('/').to_string();
        if !(server_url.starts_with("http://") || server_url.starts_with("https://")) {
            return Err(RegistryError::InvalidUrl(server_url));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Token {}", config.api_token))
                .map_err(|_| RegistryError::InvalidHeader("Authorization".to_string()))?,
        );
        for (key, value) in &config.headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|_| RegistryError::InvalidHeader(key.clone()))?;
            let value =
                HeaderValue::from_str(value).map_err(|_| RegistryError::InvalidHeader(key.clone()))?;
            headers.insert(name, value);
        }

        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(config.request_timeout)
            .danger_accept_invalid_certs(config.allow_insecure_https);
        if let Some(proxy) = &config.https_proxy {
            builder = builder.proxy(reqwest::Proxy::https(proxy)?);
        }

        Ok(Self {
            client: builder.build()?,
            server_url,
        })
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }
}

#[async_trait::async_trait]
impl TagRegistry for NetBoxClient {
    async fn list_tags(&self, params: &TagListParams) -> Result<TagList, RegistryError> {
        let url = format!("{}{}", self.server_url, TAGS_ENDPOINT);
        let time = Instant::now();
        let response = self
            .client
            .get(&url)
            .query(&params.to_query())
            .send()
            .await?;
        let elapsed = time.elapsed();

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("{status}: Failed to list tags from {url}: {body:?}");
            return Err(RegistryError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let list: TagList = serde_json::from_slice(&bytes)?;
        debug!(
            "Listed {} of {} tags matching {:?} in {} ms",
            list.results.len(),
            list.count,
            params.name,
            elapsed.as_millis()
        );
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_relative_url() {
        let config = ClientConfig::new("netbox.example.com", "token");
        assert!(matches!(
            NetBoxClient::new(&config),
            Err(RegistryError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_rejects_unsendable_header() {
        let config = ClientConfig {
            headers: vec![("bad header".to_string(), "value".to_string())],
            ..ClientConfig::new("https://netbox.example.com", "token")
        };
        assert!(matches!(
            NetBoxClient::new(&config),
            Err(RegistryError::InvalidHeader(name)) if name == "bad header"
        ));
    }

    #[test]
    fn test_trims_trailing_slash() {
        let config = ClientConfig {
            server_url: "https://netbox.example.com/".to_string(),
            ..ClientConfig::new("https://unused", "token")
        };
        let client = NetBoxClient::new(&config).expect("client should build");
        assert_eq!(client.server_url(), "https://netbox.example.com");
    }
}
