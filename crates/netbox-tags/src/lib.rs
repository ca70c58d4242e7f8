// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Resolution of user supplied tag names against the NetBox tag registry.
//!
//! Resources carry tags by name. Before a resource can be written, each name
//! has to be mapped to exactly one tag known to NetBox. Names that cannot be
//! mapped do not fail the operation: they surface as warning
//! [`Diagnostic`]s next to the tags that did resolve.
//!
//! ```rust,ignore
//! use netbox_tags::{client::NetBoxClient, config::ClientConfig, resolve_tags};
//!
//! let client = NetBoxClient::new(&ClientConfig::from_env()?)?;
//! let resolution = resolve_tags(&client, ["prod", "dev"]).await;
//! for diagnostic in resolution.diagnostics.iter() {
//!     eprintln!("{diagnostic}");
//! }
//! ```

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::todo))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

pub mod client;
pub mod config;
pub mod diagnostic;
pub mod error;
pub mod registry;
pub mod state;
pub mod tags;

pub use diagnostic::{Diagnostic, Diagnostics, Severity};
pub use error::{ConfigError, RegistryError};
pub use registry::{Tag, TagList, TagListParams, TagRegistry};
pub use state::TagState;
pub use tags::{resolve_tags, tag_ids, tag_names, NestedTag, TagResolution};
