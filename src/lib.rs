//! Library root for `meetup-bot`.
//!
//! Meetup-bot is a Slack bot that answers chat commands about a Meetup group:
//! - `!nextevent [N]` and `!getevents [N]` show upcoming events
//! - `!setgroup <urlname>` chooses the group to query
//! - `!help` lists the commands
//!
//! The bot integrates with Slack for chat, the Meetup REST API for events,
//! and a JSON file for the configured group. The architecture is built around
//! extensible traits that allow for different implementations of each service.

pub mod base;
pub mod interaction;
pub mod runtime;
pub mod service;

use base::{config::Config, types::Void};
use rustls::crypto;
use tracing::info;

/// Public async entry for the binary crate.
///
/// Sets up necessary services and starts the meetup-bot runtime:
/// - Initializes the crypto provider
/// - Creates the runtime context with settings, events, and chat clients
/// - Starts the main event loop for processing messages
pub async fn start(config: Config) -> Void {
    info!("Starting meetup-bot ...");

    // Start the crypto provider.
    crypto::ring::default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("A rustls crypto provider was already installed."))?;

    // Initialize the runtime.
    let runtime = runtime::Runtime::new(config).await?;

    // Start the runtime.
    runtime.start().await?;

    Ok(())
}
