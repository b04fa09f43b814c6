//! Slack implementation of the chat client, over socket mode.

use crate::{
    base::{
        config::Config,
        types::{InboundMessage, Res, Void},
    },
    interaction::dispatch::Dispatcher,
};
use async_trait::async_trait;
use hyper_rustls::HttpsConnector;
use hyper_util::client::legacy::connect::HttpConnector;
use slack_morphism::prelude::*;
use tracing::{debug, info, instrument, warn};

use std::sync::Arc;

use super::{ChatClient, GenericChatClient};

// Type aliases.

type FullClient = slack_morphism::SlackClient<SlackClientHyperConnector<HttpsConnector<HttpConnector>>>;

// Extra methods on `ChatClient` applied by the slack implementation.

impl ChatClient {
    /// Creates a new Slack chat client.
    pub async fn slack(config: &Config, dispatcher: Dispatcher) -> Res<Self> {
        let client = SlackChatClient::new(config, dispatcher).await?;
        Ok(Self { inner: Arc::new(client) })
    }
}

impl From<SlackChatClient> for ChatClient {
    fn from(client: SlackChatClient) -> Self {
        Self { inner: Arc::new(client) }
    }
}

// Structs.

/// User state for the slack socket client.
struct SlackUserState {
    dispatcher: Dispatcher,
    chat: ChatClient,
    bot_user_id: String,
}

/// Slack client implementation.
#[derive(Clone)]
struct SlackChatClient {
    app_token: SlackApiToken,
    bot_token: SlackApiToken,
    bot_user_id: String,
    client: Arc<FullClient>,
    dispatcher: Dispatcher,
}

impl SlackChatClient {
    /// Create a new Slack chat client.
    #[instrument(name = "SlackChatClient::new", skip_all)]
    pub async fn new(config: &Config, dispatcher: Dispatcher) -> Res<Self> {
        // Initialize tokens.

        let app_token = SlackApiToken::new(SlackApiTokenValue(config.slack_app_token.clone()));
        let bot_token = SlackApiToken::new(SlackApiTokenValue(config.slack_bot_token.clone()));

        // Initialize the Slack client.

        let https_connector = HttpsConnector::<HttpConnector>::builder().with_native_roots()?.https_only().enable_all_versions().build();
        let connector = SlackClientHyperConnector::with_connector(https_connector);
        let client = Arc::new(slack_morphism::SlackClient::new(connector));

        // Get the bot's user ID; this also verifies the bot token.

        let session = client.open_session(&bot_token);
        let bot_user = session.auth_test().await?;
        let bot_user_id = bot_user.user_id.0;

        info!("Slack bot user ID: {}", bot_user_id);

        Ok(Self {
            app_token,
            bot_token,
            bot_user_id,
            client,
            dispatcher,
        })
    }
}

#[async_trait]
impl GenericChatClient for SlackChatClient {
    fn bot_user_id(&self) -> &str {
        &self.bot_user_id
    }

    async fn start(&self) -> Void {
        // Initialize the socket mode listener.

        let socket_mode_callbacks = SlackSocketModeListenerCallbacks::new().with_push_events(handle_push_event);

        // Initialize the socket mode listener environment.

        let listener_environment = Arc::new(SlackClientEventsListenerEnvironment::new(self.client.clone()).with_user_state(SlackUserState {
            dispatcher: self.dispatcher.clone(),
            chat: ChatClient::from(self.clone()),
            bot_user_id: self.bot_user_id.clone(),
        }));

        let socket_mode_listener = Arc::new(SlackClientSocketModeListener::new(
            &SlackClientSocketModeConfig::new(),
            listener_environment.clone(),
            socket_mode_callbacks,
        ));

        // Register an app token to listen for events.
        socket_mode_listener.listen_for(&self.app_token).await?;

        // Serve until Ctrl-C.
        socket_mode_listener.serve().await;

        Ok(())
    }

    #[instrument(skip(self, text))]
    async fn send_message(&self, channel_id: &str, text: &str) -> Void {
        let message = SlackMessageContent::new().with_text(text.to_string());

        let request = SlackApiChatPostMessageRequest::new(SlackChannelId(channel_id.to_string()), message).with_as_user(true);

        let session = self.client.open_session(&self.bot_token);

        let _ = session.chat_post_message(&request).await.map_err(|e| anyhow::anyhow!("Failed to send message: {}", e))?;

        Ok(())
    }
}

// Socket mode listener callbacks for Slack.

/// Handles push events from Slack.
#[instrument(skip_all)]
async fn handle_push_event(event_callback: SlackPushEventCallback, _client: Arc<SlackHyperClient>, states: SlackClientEventsUserState) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let event = event_callback.event;
    let states = states.read().await;
    let user_state = states.get_user_state::<SlackUserState>().ok_or(anyhow::anyhow!("Failed to get user state"))?;

    match event {
        SlackEventCallbackBody::Message(slack_message_event) => {
            let sender = &slack_message_event.sender;
            if is_from_bot(sender.user.as_ref().map(|user| user.0.as_str()), sender.bot_id.as_ref().map(|bot| bot.0.as_str()), &user_state.bot_user_id) {
                debug!("Skipping message event from a bot.");
                return Ok(());
            }

            let Some(text) = slack_message_event.content.as_ref().and_then(|c| c.text.clone()) else {
                debug!("Skipping message event without text.");
                return Ok(());
            };

            let channel_id = slack_message_event.origin.channel.as_ref().ok_or(anyhow::anyhow!("Failed to get channel ID"))?.0.to_owned();

            user_state.dispatcher.on_message(InboundMessage::new(channel_id, text), user_state.chat.clone());
        }
        _ => {
            warn!("Received unhandled push event.")
        }
    }

    Ok(())
}

/// Never answer ourselves or other bots.
fn is_from_bot(sender_user: Option<&str>, sender_bot_id: Option<&str>, bot_user_id: &str) -> bool {
    sender_bot_id.is_some() || sender_user == Some(bot_user_id)
}
