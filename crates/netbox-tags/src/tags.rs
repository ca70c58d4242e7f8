// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Tag name resolution.
//!
//! Every requested name is looked up on its own, in input order, with an
//! exact name filter. A name resolves only if the registry reports exactly
//! one match; anything else becomes a warning diagnostic and the remaining
//! names are still processed.

use crate::diagnostic::{Diagnostic, Diagnostics};
use crate::registry::{Tag, TagList, TagListParams, TagRegistry};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Page size for a lookup. Two hits are enough to know a name is not unique.
pub const TAG_LOOKUP_LIMIT: u64 = 2;

/// Canonical reference to a registry tag, as attached to a resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NestedTag {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

impl From<&Tag> for NestedTag {
    fn from(tag: &Tag) -> Self {
        Self {
            id: tag.id,
            name: tag.name.clone(),
            slug: tag.slug.clone(),
        }
    }
}

/// Outcome of a [`resolve_tags`] call.
///
/// Each requested name contributes exactly one entry to either `tags` or
/// `diagnostics`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagResolution {
    pub tags: Vec<NestedTag>,
    pub diagnostics: Diagnostics,
}

impl TagResolution {
    pub fn into_parts(self) -> (Vec<NestedTag>, Diagnostics) {
        (self.tags, self.diagnostics)
    }
}

/// Resolves each name in `names` against `registry`.
///
/// Never fails: registry errors, unknown names and ambiguous names all
/// become warning diagnostics. Duplicated names are looked up again.
pub async fn resolve_tags<R, I, S>(registry: &R, names: I) -> TagResolution
where
    R: TagRegistry + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut resolution = TagResolution::default();

    for name in names {
        let name = name.as_ref();
        let params = TagListParams::exact_name(name, TAG_LOOKUP_LIMIT);

        match registry.list_tags(&params).await {
            Err(err) => {
                warn!("Failed to retrieve tag {name} from netbox: {err}");
                resolution.diagnostics.push(Diagnostic::warning(
                    format!("Error retrieving tag {name} from netbox"),
                    format!("API Error trying to retrieve tag {name} from netbox"),
                ));
            }
            Ok(list) => match unique_tag(&list) {
                Some(tag) => {
                    debug!("Resolved tag {name} to slug {}", tag.slug);
                    resolution.tags.push(NestedTag::from(tag));
                }
                None => {
                    warn!(
                        "Tag {name} matched {} tags in netbox, expected exactly one",
                        list.count
                    );
                    resolution.diagnostics.push(Diagnostic::warning(
                        format!("Error retrieving tag {name} from netbox"),
                        format!("Could not map tag {name} to unique tag in netbox"),
                    ));
                }
            },
        }
    }

    resolution
}

// A count of one with an empty page means the server lied about its results.
fn unique_tag(list: &TagList) -> Option<&Tag> {
    if list.count == 1 {
        list.results.first()
    } else {
        None
    }
}

/// Names of `tags`, in order.
pub fn tag_names(tags: &[NestedTag]) -> Vec<String> {
    tags.iter().map(|tag| tag.name.clone()).collect()
}

/// Ids of `tags`, in order.
pub fn tag_ids(tags: &[NestedTag]) -> Vec<i64> {
    tags.iter().map(|tag| tag.id).collect()
}
