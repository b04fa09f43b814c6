//! Runtime services and shared state for the meetup-bot.

use tracing::{info, instrument};

use crate::{
    base::{
        config::Config,
        types::{Res, Void},
    },
    interaction::{commands, dispatch::Dispatcher},
    service::{chat::ChatClient, events::EventsClient, settings::SettingsClient},
};

/// Runtime service context that can be shared across the application.
///
/// This struct holds the dispatcher, the chat client, and configuration.
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The command dispatcher.
    pub dispatcher: Dispatcher,
    /// The chat client instance.
    pub chat: ChatClient,
}

impl Runtime {
    /// Create a new runtime instance.
    #[instrument(skip_all)]
    pub async fn new(config: Config) -> Res<Self> {
        // Initialize the settings store; an unusable store is fatal at startup.
        let settings = SettingsClient::json_file(&config.settings_path);
        let current = settings.get().await?;

        match current.group_identifier() {
            Some(group) => info!("Configured group: {}", group),
            None => info!("No group configured yet."),
        }

        // Initialize the events client.
        let events = EventsClient::meetup(&config)?;

        // Initialize the commands.
        let dispatcher = Self::dispatcher(&config, settings, events)?;

        // Initialize the chat client.
        let chat = ChatClient::slack(&config, dispatcher.clone()).await?;

        Ok(Self { config, dispatcher, chat })
    }

    /// Build the dispatcher over the built-in commands.
    pub fn dispatcher(config: &Config, settings: SettingsClient, events: EventsClient) -> Res<Dispatcher> {
        let registry = commands::default_registry(config, settings, events)?;
        let dispatcher = Dispatcher::new(registry).with_reply_on_failure(config.reply_on_failure);

        info!("Available commands: {}", dispatcher.registry().triggers().join(", "));

        Ok(dispatcher)
    }

    pub async fn start(&self) -> Void {
        info!(
            commands = self.dispatcher.registry().triggers().len(),
            settings = %self.config.settings_path.display(),
            "Starting the chat listener."
        );

        self.chat.start().await
    }
}
