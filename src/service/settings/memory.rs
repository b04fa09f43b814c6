//! In-memory settings store, used when nothing needs to outlive the process.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::base::types::{Res, Void};

use super::{GenericSettingsStore, Settings, SettingsClient};

impl SettingsClient {
    /// Creates a settings client with empty, in-memory settings.
    pub fn memory() -> Self {
        Self::memory_with(Settings::default())
    }

    /// Creates an in-memory settings client seeded with `settings`.
    pub fn memory_with(settings: Settings) -> Self {
        Self {
            inner: Arc::new(MemorySettingsStore { settings: RwLock::new(settings) }),
        }
    }
}

#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    settings: RwLock<Settings>,
}

#[async_trait]
impl GenericSettingsStore for MemorySettingsStore {
    async fn load(&self) -> Res<Settings> {
        Ok(self.settings.read().await.clone())
    }

    async fn save(&self, settings: &Settings) -> Void {
        *self.settings.write().await = settings.clone();
        Ok(())
    }
}
