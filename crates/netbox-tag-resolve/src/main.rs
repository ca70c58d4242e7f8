// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::todo))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

use std::env;
use std::process::ExitCode;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use netbox_tags::{
    client::NetBoxClient,
    config::{log_level_from_env, ClientConfig},
    resolve_tags, TagState,
};

#[tokio::main]
pub async fn main() -> ExitCode {
    let log_level = log_level_from_env();
    let env_filter = format!("h2=off,hyper=off,rustls=off,{}", log_level);

    let filter = match EnvFilter::try_new(env_filter) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("could not parse log level in configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_level(true)
        .with_thread_names(false)
        .with_thread_ids(false)
        .with_line_number(false)
        .with_file(false)
        .with_target(true)
        .without_time()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("setting default subscriber failed: {e}");
        return ExitCode::FAILURE;
    }

    debug!("Logging subsystem enabled");

    let config = match ClientConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Error creating config: {e}");
            return ExitCode::FAILURE;
        }
    };

    let client = match NetBoxClient::new(&config) {
        Ok(c) => c,
        Err(e) => {
            error!("Error creating NetBox client for {}: {e}", config.server_url);
            return ExitCode::FAILURE;
        }
    };

    let names: Vec<String> = env::args().skip(1).collect();
    info!(
        "Resolving {} tags against {}",
        names.len(),
        client.server_url()
    );

    let resolution = resolve_tags(&client, &names).await;
    for diagnostic in &resolution.diagnostics {
        warn!("{diagnostic}");
    }

    let state = TagState::from_resolved(&resolution.tags);
    match serde_json::to_string_pretty(&state) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            error!("Failed to serialize tag state: {e}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
