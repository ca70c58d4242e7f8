// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Helpers for tests running against a mock NetBox server

use mockito::{Matcher, Mock, ServerGuard};
use netbox_tags::client::NetBoxClient;
use netbox_tags::config::ClientConfig;
use serde_json::json;

pub const API_TOKEN: &str = "0123456789abcdef";

/// Client pointed at the mock server
pub fn client_for(server: &ServerGuard) -> NetBoxClient {
    NetBoxClient::new(&ClientConfig::new(server.url(), API_TOKEN)).expect("failed to build client")
}

/// Mocks the tag list endpoint for an exact name lookup
pub async fn mock_tag_lookup(
    server: &mut ServerGuard,
    name: &str,
    count: u64,
    tags: &[(i64, &str, &str)],
) -> Mock {
    let results: Vec<_> = tags
        .iter()
        .map(|(id, name, slug)| {
            json!({
                "id": id,
                "url": format!("{}/api/extras/tags/{id}/", server.url()),
                "display": name,
                "name": name,
                "slug": slug,
                "color": "9e9e9e",
                "description": "",
            })
        })
        .collect();
    let body = json!({
        "count": count,
        "next": null,
        "previous": null,
        "results": results,
    });

    server
        .mock("GET", "/api/extras/tags/")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("name".into(), name.into()),
            Matcher::UrlEncoded("limit".into(), "2".into()),
        ]))
        .match_header("Authorization", format!("Token {API_TOKEN}").as_str())
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}
