// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Tag registry abstraction.
//!
//! [`TagRegistry`] is the one capability the resolver needs from NetBox:
//! listing tags filtered by name. The HTTP implementation lives in
//! [`crate::client`]; tests substitute an in-memory registry.

use crate::error::RegistryError;
use serde::{Deserialize, Serialize};

/// Query parameters for the tag list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagListParams {
    /// Exact tag name filter.
    pub name: Option<String>,
    /// Maximum number of results in the returned page.
    pub limit: Option<u64>,
}

impl TagListParams {
    pub fn exact_name(name: impl Into<String>, limit: u64) -> Self {
        Self {
            name: Some(name.into()),
            limit: Some(limit),
        }
    }

    /// Query string pairs, omitting unset filters.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::with_capacity(2);
        if let Some(name) = &self.name {
            query.push(("name", name.clone()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        query
    }
}

/// A tag as listed by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// One page of a paginated tag listing.
///
/// `count` is the total number of matches on the server, which may exceed
/// `results.len()` when the page is capped by a limit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagList {
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<Tag>,
}

#[async_trait::async_trait]
pub trait TagRegistry: Send + Sync {
    async fn list_tags(&self, params: &TagListParams) -> Result<TagList, RegistryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_name_query() {
        let params = TagListParams::exact_name("prod", 2);
        assert_eq!(
            params.to_query(),
            vec![("name", "prod".to_string()), ("limit", "2".to_string())]
        );
    }

    #[test]
    fn test_empty_query() {
        assert!(TagListParams::default().to_query().is_empty());
    }

    #[test]
    fn test_deserialize_tag_list_page() {
        let body = r#"{
            "count": 3,
            "next": "https://netbox.example.com/api/extras/tags/?limit=2&name=prod&offset=2",
            "previous": null,
            "results": [
                {
                    "id": 5,
                    "url": "https://netbox.example.com/api/extras/tags/5/",
                    "display": "prod",
                    "name": "prod",
                    "slug": "prod-slug",
                    "color": "9e9e9e",
                    "description": "",
                    "tagged_items": 12
                },
                {
                    "id": 9,
                    "name": "prod",
                    "slug": "prod-2"
                }
            ]
        }"#;
        let list: TagList = serde_json::from_str(body).unwrap();
        assert_eq!(list.count, 3);
        assert!(list.next.is_some());
        assert_eq!(list.results.len(), 2);
        assert_eq!(list.results[0].id, 5);
        assert_eq!(list.results[0].slug, "prod-slug");
        assert_eq!(list.results[0].color.as_deref(), Some("9e9e9e"));
        assert_eq!(list.results[1].description, None);
    }

    #[test]
    fn test_deserialize_rejects_tag_without_name() {
        let body = r#"{"count": 1, "results": [{"id": 5, "slug": "prod"}]}"#;
        assert!(serde_json::from_str::<TagList>(body).is_err());
    }
}
