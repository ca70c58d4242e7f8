// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::tags::{tag_ids, tag_names, NestedTag};
use serde::Serialize;
use std::collections::BTreeSet;

pub const TAGS_KEY: &str = "tags";
pub const TAG_IDS_KEY: &str = "tag_ids";
pub const TAG_NAMES_KEY: &str = "tag_names";

/// Tag fields persisted on a resource.
///
/// `tags` is the user editable set of names. `tag_ids` and `tag_names` are
/// computed, ordered like the resolved tags they came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagState {
    pub tags: BTreeSet<String>,
    pub tag_ids: Vec<i64>,
    pub tag_names: Vec<String>,
}

impl TagState {
    pub fn from_resolved(tags: &[NestedTag]) -> Self {
        Self {
            tags: tags.iter().map(|tag| tag.name.clone()).collect(),
            tag_ids: tag_ids(tags),
            tag_names: tag_names(tags),
        }
    }
}
