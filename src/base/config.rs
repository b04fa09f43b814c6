//! Load configuration via `config` crate with env-override support.

use std::{ops::Deref, path::PathBuf, sync::Arc};

use serde::Deserialize;

use super::types::Res;

/// Default Meetup API host.
fn default_meetup_host() -> String {
    "https://api.meetup.com".to_string()
}

/// Default location of the persisted group setting.
fn default_settings_path() -> PathBuf {
    PathBuf::from("settings.json")
}

/// Default character that starts every command trigger.
fn default_command_prefix() -> String {
    "!".to_string()
}

/// Default window of events requested from the Meetup API.
fn default_scroll_mode() -> String {
    "next_upcoming".to_string()
}

/// Default number of events listed by `getevents`.
fn default_max_listed_events() -> usize {
    10
}

/// Configuration for the meetup-bot application.
#[derive(Debug, Clone)]
pub struct Config {
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ConfigInner {
    /// Slack app token (`SLACK_APP_TOKEN`).
    pub slack_app_token: String,
    /// Slack bot token (`SLACK_BOT_TOKEN`).
    pub slack_bot_token: String,
    /// Meetup API key (`MEETUP_API_KEY`).
    pub meetup_api_key: String,
    /// Meetup API host (`MEETUP_HOST`).
    #[serde(default = "default_meetup_host")]
    pub meetup_host: String,
    /// Path of the JSON file holding the configured group (`SETTINGS_PATH`).
    #[serde(default = "default_settings_path")]
    pub settings_path: PathBuf,
    /// Prefix placed before every command name (`COMMAND_PREFIX`).
    #[serde(default = "default_command_prefix")]
    pub command_prefix: String,
    /// Scroll mode passed to the events endpoint (`SCROLL_MODE`).
    #[serde(default = "default_scroll_mode")]
    pub scroll_mode: String,
    /// Number of events `getevents` lists when no count is given (`MAX_LISTED_EVENTS`).
    #[serde(default = "default_max_listed_events")]
    pub max_listed_events: usize,
    /// Send a generic failure reply when a command fails (`REPLY_ON_FAILURE`).
    #[serde(default)]
    pub reply_on_failure: bool,
}

impl Default for ConfigInner {
    fn default() -> Self {
        Self {
            slack_app_token: String::new(),
            slack_bot_token: String::new(),
            meetup_api_key: String::new(),
            meetup_host: default_meetup_host(),
            settings_path: default_settings_path(),
            command_prefix: default_command_prefix(),
            scroll_mode: default_scroll_mode(),
            max_listed_events: default_max_listed_events(),
            reply_on_failure: false,
        }
    }
}

impl Config {
    pub fn load(explicit_path: Option<&std::path::Path>) -> Res<Self> {
        let mut cfg = config::Config::builder();

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if std::path::Path::new(".hidden/config.toml").exists() {
            cfg = cfg.add_source(config::File::with_name(".hidden/config.toml"));
        } else if std::path::Path::new("auth.json").exists() {
            cfg = cfg.add_source(config::File::with_name("auth.json"));
        }

        // Environment wins over any file.
        cfg = cfg.add_source(config::Environment::default().prefix("MEETUP_BOT"));

        let result = Config {
            inner: Arc::new(cfg.build()?.try_deserialize()?),
        };

        result.validate()?;

        Ok(result)
    }

    /// Check the values that cannot be expressed through serde alone.
    pub fn validate(&self) -> Res<()> {
        if self.meetup_api_key.trim().is_empty() {
            return Err(anyhow::anyhow!("Meetup API key must not be empty."));
        }

        if reqwest::Url::parse(&self.meetup_host).is_err() {
            return Err(anyhow::anyhow!("Meetup host `{}` is not a valid URL.", self.meetup_host));
        }

        if self.command_prefix.is_empty() || self.command_prefix.chars().any(char::is_whitespace) {
            return Err(anyhow::anyhow!("Command prefix must be non-empty and contain no whitespace."));
        }

        if self.max_listed_events < 1 || self.max_listed_events > 100 {
            return Err(anyhow::anyhow!("Max listed events must be between 1 and 100."));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn config_with(inner: ConfigInner) -> Config {
        Config { inner: Arc::new(inner) }
    }

    #[test]
    fn load_applies_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "slack_app_token = \"xapp-test\"\nslack_bot_token = \"xoxb-test\"\nmeetup_api_key = \"key\"").unwrap();

        let config = Config::load(Some(file.path())).unwrap();

        assert_eq!(config.meetup_host, "https://api.meetup.com");
        assert_eq!(config.settings_path, PathBuf::from("settings.json"));
        assert_eq!(config.command_prefix, "!");
        assert_eq!(config.scroll_mode, "next_upcoming");
        assert_eq!(config.max_listed_events, 10);
        assert!(!config.reply_on_failure);
    }

    #[test]
    fn load_reads_json_credentials() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"slack_app_token":"xapp","slack_bot_token":"xoxb","meetup_api_key":"abc","command_prefix":"?"}}"#).unwrap();

        let config = Config::load(Some(file.path())).unwrap();

        assert_eq!(config.meetup_api_key, "abc");
        assert_eq!(config.command_prefix, "?");
    }

    #[test]
    fn validate_rejects_empty_api_key() {
        let config = config_with(ConfigInner::default());

        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_prefix_and_limits() {
        let base = ConfigInner {
            meetup_api_key: "key".to_string(),
            ..Default::default()
        };

        assert!(config_with(base.clone()).validate().is_ok());
        assert!(config_with(ConfigInner { command_prefix: "".to_string(), ..base.clone() }).validate().is_err());
        assert!(config_with(ConfigInner { command_prefix: "! ".to_string(), ..base.clone() }).validate().is_err());
        assert!(config_with(ConfigInner { max_listed_events: 0, ..base.clone() }).validate().is_err());
        assert!(config_with(ConfigInner { meetup_host: "not a url".to_string(), ..base }).validate().is_err());
    }
}
