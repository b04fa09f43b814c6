//! Meetup REST API implementation of the events client.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, instrument};

use crate::base::{
    config::Config,
    error::BotError,
    types::{EventRecord, Res},
};

use super::{EventsClient, GenericEventsClient};

// Extra methods on `EventsClient` applied by the meetup implementation.

impl EventsClient {
    /// Creates a new Meetup events client.
    pub fn meetup(config: &Config) -> Res<Self> {
        let client = MeetupEventsClient::new(&config.meetup_host, &config.meetup_api_key)?;
        Ok(Self { inner: Arc::new(client) })
    }
}

// Specific implementations.

/// Meetup events client implementation.
#[derive(Clone)]
pub struct MeetupEventsClient {
    client: Client,
    host: Url,
    api_key: String,
}

impl MeetupEventsClient {
    /// Create a new Meetup events client against `host`.
    pub fn new(host: &str, api_key: &str) -> Res<Self> {
        let host = Url::parse(host)?;

        if host.cannot_be_a_base() {
            return Err(anyhow::anyhow!("Meetup host `{}` cannot be used as a base URL.", host));
        }

        Ok(Self {
            client: Client::new(),
            host,
            api_key: api_key.to_string(),
        })
    }

    /// Build `{host}/{segments...}` with the credential query parameters attached.
    fn build_url(&self, segments: &[&str], extra_query: &[(&str, &str)]) -> Url {
        let mut url = self.host.clone();

        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }

        {
            let mut query = url.query_pairs_mut();
            for (key, value) in extra_query {
                query.append_pair(key, value);
            }
            query.append_pair("key", &self.api_key).append_pair("sign", "true");
        }

        url
    }
}

#[async_trait]
impl GenericEventsClient for MeetupEventsClient {
    #[instrument(name = "MeetupEventsClient::fetch_upcoming_events", skip(self))]
    async fn fetch_upcoming_events(&self, group_identifier: &str, scroll_mode: &str) -> Res<Vec<EventRecord>> {
        if group_identifier.is_empty() {
            return Err(BotError::InvalidInput("a group identifier is required to fetch events".to_string()).into());
        }

        let url = self.build_url(&[group_identifier, "events"], &[("scroll", scroll_mode)]);

        let events = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(BotError::from)?
            .json::<Vec<EventRecord>>()
            .await
            .map_err(BotError::from)?;

        debug!("Fetched {} events", events.len());

        Ok(events)
    }

    #[instrument(name = "MeetupEventsClient::group_exists", skip(self))]
    async fn group_exists(&self, group_identifier: &str) -> Res<bool> {
        if group_identifier.is_empty() {
            return Err(BotError::InvalidInput("a group identifier is required to look up a group".to_string()).into());
        }

        let url = self.build_url(&[group_identifier], &[]);

        let response = self.client.get(url).send().await.map_err(BotError::from)?;

        // Meetup answers 404 for unknown group names.
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }

        response.error_for_status().map_err(BotError::from)?;

        Ok(true)
    }
}
