//! Service integrations for external APIs and clients.
//!
//! This module contains implementations for various services used by the meetup-bot:
//! - Chat services (e.g., Slack)
//! - Events services (e.g., the Meetup API)
//! - Settings storage (e.g., a JSON file)
//!
//! Each service module defines both generic traits and concrete implementations,
//! allowing for extensibility and easy testing.

pub mod chat;
pub mod events;
pub mod settings;
