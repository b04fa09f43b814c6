//! Settings stored as a JSON document on disk.

use std::{
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
    sync::Arc,
};

use async_trait::async_trait;
use tempfile::NamedTempFile;
use tracing::{info, instrument};

use crate::base::{
    error::BotError,
    types::{Res, Void},
};

use super::{GenericSettingsStore, Settings, SettingsClient};

// Extra methods on `SettingsClient` applied by the JSON file implementation.

impl SettingsClient {
    /// Creates a settings client backed by the JSON file at `path`.
    pub fn json_file(path: impl Into<PathBuf>) -> Self {
        Self {
            inner: Arc::new(JsonFileSettingsStore::new(path)),
        }
    }
}

// Specific implementations.

/// JSON file settings store.
#[derive(Debug, Clone)]
pub struct JsonFileSettingsStore {
    path: PathBuf,
}

impl JsonFileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory holding the settings file, where the temp files are created.
    fn dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn io_error(&self, source: impl Into<std::io::Error>) -> BotError {
        BotError::config_io(&self.path, source)
    }

    /// Write the whole document to a fresh temp file, then rename it over the original.
    ///
    /// Every write gets its own uniquely named temp file, so concurrent saves never
    /// share a partially written file. Readers see either the old or the new document.
    async fn write_atomically(&self, contents: Vec<u8>) -> Void {
        let dir = self.dir();
        let path = self.path.clone();

        let result = tokio::task::spawn_blocking(move || -> std::io::Result<()> {
            let mut temp = NamedTempFile::new_in(&dir)?;

            temp.write_all(&contents)?;
            temp.as_file().sync_all()?;
            temp.persist(&path).map_err(|e| e.error)?;

            Ok(())
        })
        .await?;

        result.map_err(|e| self.io_error(e))?;

        Ok(())
    }
}

#[async_trait]
impl GenericSettingsStore for JsonFileSettingsStore {
    #[instrument(name = "JsonFileSettingsStore::load", skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> Res<Settings> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes).map_err(|e| self.io_error(e))?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("Settings file not found, creating an empty one.");

                let settings = Settings::default();
                self.save(&settings).await?;

                Ok(settings)
            }
            Err(e) => Err(self.io_error(e).into()),
        }
    }

    #[instrument(name = "JsonFileSettingsStore::save", skip_all, fields(path = %self.path.display()))]
    async fn save(&self, settings: &Settings) -> Void {
        let contents = serde_json::to_vec_pretty(settings).map_err(|e| self.io_error(e))?;

        self.write_atomically(contents).await
    }
}
