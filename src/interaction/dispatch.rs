//! Routes inbound chat messages to the matching command.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{Instrument, error, info, instrument, warn};

use crate::{
    base::{
        messages,
        types::{InboundMessage, Void},
    },
    service::chat::ChatClient,
};

use super::registry::{Command, CommandRegistry};

/// Dispatches messages to at most one command each.
///
/// Every handler runs in its own task, so a slow handler never holds up other
/// messages and a failing one never reaches the chat event loop.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    registry: Arc<CommandRegistry>,
    reply_on_failure: bool,
}

impl Dispatcher {
    pub fn new(registry: CommandRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            reply_on_failure: false,
        }
    }

    /// Send a generic failure reply when a handler fails, instead of staying silent.
    pub fn with_reply_on_failure(mut self, enabled: bool) -> Self {
        self.reply_on_failure = enabled;
        self
    }

    /// The commands this dispatcher routes to.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Handle one inbound message.
    ///
    /// Returns the spawned task when a command matched. Callers are free to
    /// drop the handle; the reply is sent to the message's channel when the
    /// handler resolves.
    #[instrument(skip_all, fields(channel_id = %message.channel_id))]
    pub fn on_message(&self, message: InboundMessage, chat: ChatClient) -> Option<JoinHandle<()>> {
        let command = self.registry.lookup(&message.text)?.clone();
        let reply_on_failure = self.reply_on_failure;

        info!("Dispatching `{}` ...", command.name);

        Some(tokio::spawn(
            async move {
                // Process the command.
                let result = dispatch_internal(&command, message, &chat, reply_on_failure).await;

                // Log any errors.
                if let Err(err) = &result {
                    error!("Error while replying: {}", err);
                }
            }
            .in_current_span(),
        ))
    }
}

#[instrument(skip_all, fields(command = %command.name))]
async fn dispatch_internal(command: &Command, message: InboundMessage, chat: &ChatClient, reply_on_failure: bool) -> Void {
    let reply = match (command.handler)(message.text).await {
        Ok(reply) => reply,
        Err(err) => {
            error!("Command `{}` failed: {:#}", command.name, err);

            if reply_on_failure {
                chat.send_message(&message.channel_id, messages::GENERIC_FAILURE).await?;
            }

            return Ok(());
        }
    };

    if reply.trim().is_empty() {
        warn!("Command `{}` produced an empty reply.", command.name);
        return Ok(());
    }

    chat.send_message(&message.channel_id, &reply).await
}
