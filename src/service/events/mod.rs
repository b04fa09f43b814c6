//! Events API integration for meetup-bot.
//!
//! The `GenericEventsClient` trait abstracts the remote events endpoint so that
//! command handlers can be exercised without network access. The default
//! implementation talks to the Meetup REST API.

pub mod meetup;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

use crate::base::types::{EventRecord, Res};

// Traits.

/// Generic events client trait that clients must implement.
#[async_trait]
pub trait GenericEventsClient: Send + Sync + 'static {
    /// Fetch the events of a group, in the order the API returns them.
    ///
    /// Issues exactly one request per call. An empty `group_identifier` fails
    /// with `BotError::InvalidInput` before any request is made; transport
    /// and decode failures surface as `BotError::Remote`.
    async fn fetch_upcoming_events(&self, group_identifier: &str, scroll_mode: &str) -> Res<Vec<EventRecord>>;

    /// Check whether a group with this identifier exists.
    async fn group_exists(&self, group_identifier: &str) -> Res<bool>;
}

// Structs.

/// Events client for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct EventsClient {
    inner: Arc<dyn GenericEventsClient>,
}

impl Deref for EventsClient {
    type Target = dyn GenericEventsClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl EventsClient {
    pub fn new(inner: Arc<dyn GenericEventsClient>) -> Self {
        Self { inner }
    }
}
