//! Core components, types, and utilities for the meetup-bot.
//!
//! This module contains fundamental building blocks used throughout the application:
//! - Configuration handling and environment variables.
//! - Fixed replies sent back to chat users.
//! - The error taxonomy and common types.

pub mod config;
pub mod error;
pub mod messages;
pub mod types;
