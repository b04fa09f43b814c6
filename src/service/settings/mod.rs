//! Persisted bot settings.
//!
//! The only mutable setting is the configured group identifier. Storage is
//! abstracted behind `GenericSettingsStore` so handlers receive the
//! capability explicitly instead of reaching for process-wide state.

pub mod json_file;
pub mod memory;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{info, instrument};

use crate::base::types::{Res, Void};

// Types.

/// The persisted settings document.
///
/// The group is written as `urlname`. Documents using the older
/// `groupIdentifier` key still load; when both keys are present a non-empty
/// `urlname` wins, and `groupIdentifier` is dropped on the next write.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredSettings")]
pub struct Settings {
    /// The events API name of the group to query.
    #[serde(rename = "urlname", skip_serializing_if = "Option::is_none")]
    pub group_identifier: Option<String>,
    /// Keys this version does not know about; written back untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// On-disk shape of `Settings`, with both group keys read separately.
#[derive(Deserialize)]
struct StoredSettings {
    #[serde(default)]
    urlname: Option<String>,
    #[serde(rename = "groupIdentifier", default)]
    legacy_group_identifier: Option<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl From<StoredSettings> for Settings {
    fn from(stored: StoredSettings) -> Self {
        let group_identifier = match stored.urlname {
            Some(urlname) if !urlname.is_empty() => Some(urlname),
            urlname => stored.legacy_group_identifier.or(urlname),
        };

        Self {
            group_identifier,
            extra: stored.extra,
        }
    }
}

impl Settings {
    /// The configured group, treating an empty string as unset.
    pub fn group_identifier(&self) -> Option<&str> {
        self.group_identifier.as_deref().filter(|group| !group.is_empty())
    }
}

// Traits.

/// Generic settings store trait that backends must implement.
///
/// `load` on a store with nothing persisted yet initializes it with empty
/// settings rather than failing. `save` replaces the whole document.
#[async_trait]
pub trait GenericSettingsStore: Send + Sync + 'static {
    /// Read the current settings.
    async fn load(&self) -> Res<Settings>;

    /// Replace the persisted settings.
    async fn save(&self, settings: &Settings) -> Void;
}

// Structs.

/// Settings client for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
/// Concurrent `set_group_identifier` calls are not serialized; the last write wins.
#[derive(Clone)]
pub struct SettingsClient {
    inner: Arc<dyn GenericSettingsStore>,
}

impl Deref for SettingsClient {
    type Target = dyn GenericSettingsStore;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl SettingsClient {
    pub fn new(inner: Arc<dyn GenericSettingsStore>) -> Self {
        Self { inner }
    }

    /// Read the current settings.
    pub async fn get(&self) -> Res<Settings> {
        self.inner.load().await
    }

    /// Store a new group identifier, keeping every other setting.
    #[instrument(skip(self))]
    pub async fn set_group_identifier(&self, value: &str) -> Void {
        let mut settings = self.inner.load().await?;
        settings.group_identifier = Some(value.to_string());
        self.inner.save(&settings).await?;

        info!("Group identifier updated.");

        Ok(())
    }
}
