//! Command handling for meetup-bot.
//!
//! This module provides functionality for turning chat messages into replies:
//! - The registry of named commands
//! - Dispatching each inbound message to at most one command
//! - The built-in event and group commands, and their text formatting

pub mod commands;
pub mod dispatch;
pub mod format;
pub mod registry;
