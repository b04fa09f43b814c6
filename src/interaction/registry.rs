//! The registry of chat commands and their handlers.

use std::{future::Future, pin::Pin, sync::Arc};

use crate::base::types::{Res, Void};

// Types.

/// The deferred reply of a command handler.
pub type HandlerFuture = Pin<Box<dyn Future<Output = Res<String>> + Send>>;

/// A command handler; it receives the full message text.
pub type BoxedHandler = Arc<dyn Fn(String) -> HandlerFuture + Send + Sync>;

/// A named command.
#[derive(Clone)]
pub struct Command {
    pub name: String,
    pub usage: String,
    pub handler: BoxedHandler,
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command").field("name", &self.name).field("usage", &self.usage).finish_non_exhaustive()
    }
}

/// Ordered mapping from command name to handler.
///
/// Built once at startup; the dispatcher only ever reads it. A message
/// matches a command when it starts with the command's trigger (the prefix
/// followed by the name), case-sensitively. When several triggers match, the
/// longest name wins.
#[derive(Clone, Debug)]
pub struct CommandRegistry {
    prefix: String,
    commands: Vec<Command>,
}

impl CommandRegistry {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            commands: Vec::new(),
        }
    }

    /// Register a command under `name`.
    ///
    /// Names must be unique, non-empty and free of whitespace.
    pub fn register<F, Fut>(&mut self, name: &str, usage: &str, handler: F) -> Void
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Res<String>> + Send + 'static,
    {
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(anyhow::anyhow!("Invalid command name `{}`.", name));
        }

        if self.commands.iter().any(|c| c.name == name) {
            return Err(anyhow::anyhow!("Command `{}` is already registered.", name));
        }

        self.commands.push(Command {
            name: name.to_string(),
            usage: usage.to_string(),
            handler: Arc::new(move |text| -> HandlerFuture { Box::pin(handler(text)) }),
        });

        Ok(())
    }

    /// Find the command whose trigger starts `text`, preferring the longest name.
    pub fn lookup(&self, text: &str) -> Option<&Command> {
        let rest = text.strip_prefix(self.prefix.as_str())?;

        self.commands.iter().filter(|c| rest.starts_with(c.name.as_str())).max_by_key(|c| c.name.len())
    }

    /// The literal text a message must start with to run `name`.
    pub fn trigger(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }

    /// Every trigger, in registration order.
    pub fn triggers(&self) -> Vec<String> {
        self.commands.iter().map(|c| self.trigger(&c.name)).collect()
    }

    /// Human readable command list, one command per line.
    pub fn help_text(&self) -> String {
        let mut help = String::from("Available commands:");

        for command in &self.commands {
            help.push_str(&format!("\n`{}`", self.trigger(&command.name)));
            if !command.usage.is_empty() {
                help.push_str(&format!(" {}", command.usage));
            }
        }

        help
    }
}
