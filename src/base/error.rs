//! Failure taxonomy shared by the services and command handlers.
//!
//! Services return `anyhow` errors wrapping a [`BotError`]; callers that need
//! to react to a specific kind use [`BotError::classify`].

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotError {
    /// A required input was missing or empty, e.g. no group is configured yet.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The events API could not be reached or answered with something unusable.
    #[error("events API request failed: {0}")]
    Remote(#[from] reqwest::Error),

    /// The settings file could not be read or written.
    #[error("settings store `{}` failed: {source}", .path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BotError {
    pub fn config_io(path: impl Into<PathBuf>, source: impl Into<std::io::Error>) -> Self {
        Self::ConfigIo {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Find the `BotError` carried by an `anyhow` error, if any.
    pub fn classify(err: &anyhow::Error) -> Option<&BotError> {
        err.downcast_ref::<BotError>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_finds_wrapped_error() {
        let err: anyhow::Error = BotError::InvalidInput("group".to_string()).into();

        assert!(matches!(BotError::classify(&err), Some(BotError::InvalidInput(_))));
    }

    #[test]
    fn classify_ignores_foreign_errors() {
        let err = anyhow::anyhow!("something else");

        assert!(BotError::classify(&err).is_none());
    }

    #[test]
    fn config_io_accepts_json_errors() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = BotError::config_io("settings.json", json_err);

        assert!(err.to_string().starts_with("settings store `settings.json` failed"));
    }
}
