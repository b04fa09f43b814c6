//! The built-in chat commands.
//!
//! - `getevents [N]` lists the next N upcoming events of the configured group.
//! - `nextevent [N]` shows the next event, or the next N.
//! - `setgroup <urlname>` validates and stores the group to query.
//! - `help` lists the commands.

use std::future::Future;

use tracing::{debug, error, instrument, warn};

use crate::{
    base::{
        config::Config,
        error::BotError,
        messages,
        types::{EventRecord, Res, Void},
    },
    service::{events::EventsClient, settings::SettingsClient},
};

use super::{
    format::{format_events, parse_count},
    registry::CommandRegistry,
};

pub const GET_EVENTS: &str = "getevents";
pub const NEXT_EVENT: &str = "nextevent";
pub const SET_GROUP: &str = "setgroup";
pub const HELP: &str = "help";

/// Services and settings shared by the built-in handlers.
#[derive(Clone)]
pub struct CommandContext {
    pub settings: SettingsClient,
    pub events: EventsClient,
    pub scroll_mode: String,
    /// Trigger of `setgroup`, quoted in replies that point users at it.
    pub setgroup_trigger: String,
}

/// Build the registry with every built-in command.
pub fn default_registry(config: &Config, settings: SettingsClient, events: EventsClient) -> Res<CommandRegistry> {
    let mut registry = CommandRegistry::new(config.command_prefix.clone());

    let context = CommandContext {
        settings,
        events,
        scroll_mode: config.scroll_mode.clone(),
        setgroup_trigger: registry.trigger(SET_GROUP),
    };

    let max_listed_events = config.max_listed_events;
    register_with_context(&mut registry, GET_EVENTS, "[N]", &context, move |ctx, args| async move {
        upcoming_events(&ctx, &args, max_listed_events).await
    })?;

    register_with_context(&mut registry, NEXT_EVENT, "[N]", &context, |ctx, args| async move { upcoming_events(&ctx, &args, 1).await })?;

    register_with_context(&mut registry, SET_GROUP, "<urlname>", &context, |ctx, args| async move { set_group(&ctx, &args).await })?;

    let help = format!("{}\n`{}`", registry.help_text(), registry.trigger(HELP));
    registry.register(HELP, "", move |_| std::future::ready(Ok(help.clone())))?;

    Ok(registry)
}

/// Register a handler that receives the context and the text after its trigger.
fn register_with_context<F, Fut>(registry: &mut CommandRegistry, name: &str, usage: &str, context: &CommandContext, handler: F) -> Void
where
    F: Fn(CommandContext, String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Res<String>> + Send + 'static,
{
    let trigger = registry.trigger(name);
    let context = context.clone();

    registry.register(name, usage, move |text| {
        let args = text.strip_prefix(trigger.as_str()).unwrap_or(text.as_str()).to_string();
        handler(context.clone(), args)
    })
}

/// Reply with up to N upcoming events, N taken from `args` or `default_count`.
#[instrument(skip(ctx))]
pub async fn upcoming_events(ctx: &CommandContext, args: &str, default_count: usize) -> Res<String> {
    let settings = match ctx.settings.get().await {
        Ok(settings) => settings,
        Err(err) => return settings_failure(err),
    };

    let Some(group) = settings.group_identifier() else {
        warn!("No group configured.");
        return Ok(messages::not_configured(&ctx.setgroup_trigger));
    };

    let count = parse_count(args).unwrap_or(default_count);
    let events = ctx.events.fetch_upcoming_events(group, &ctx.scroll_mode).await?;

    if events.is_empty() {
        return Ok(messages::NO_UPCOMING_EVENTS.to_string());
    }

    let fetched = events.len();
    let events: Vec<_> = events.into_iter().filter(EventRecord::is_public_upcoming).collect();

    if events.is_empty() {
        debug!(fetched, "Every fetched event is private or no longer upcoming.");
        return Ok(messages::NO_PUBLIC_EVENTS.to_string());
    }

    Ok(format_events(&events, count))
}

/// Validate the group named in `args` and store it.
#[instrument(skip(ctx))]
pub async fn set_group(ctx: &CommandContext, args: &str) -> Res<String> {
    let group = args.trim();

    if group.is_empty() {
        return Ok(messages::setgroup_usage(&ctx.setgroup_trigger));
    }

    if !ctx.events.group_exists(group).await? {
        return Ok(messages::INVALID_GROUP.to_string());
    }

    match ctx.settings.set_group_identifier(group).await {
        Ok(()) => Ok(messages::group_set(group)),
        Err(err) => settings_failure(err),
    }
}

/// Settings I/O failures are reported to the user; anything else propagates.
fn settings_failure(err: anyhow::Error) -> Res<String> {
    match BotError::classify(&err) {
        Some(BotError::ConfigIo { .. }) => {
            error!("Settings store failed: {:#}", err);
            Ok(messages::SETTINGS_UNAVAILABLE.to_string())
        }
        _ => Err(err),
    }
}
