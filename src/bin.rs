//! Binary entry point for `meetup-bot`.
//!
//! This module provides the command-line interface for meetup-bot with options
//! for configuration file paths and logging verbosity. It initializes the
//! necessary components and starts the service.

use clap::Parser;
use meetup_bot::base::{config::Config, types::Void};
use opentelemetry::trace::TracerProvider;
use opentelemetry_otlp::{Protocol, WithExportConfig};
use tracing::error;
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt};

/// Meetup-bot: upcoming Meetup events, on request, in Slack.
///
/// Configuration can come from `.hidden/config.toml`, `auth.json`, or
/// `MEETUP_BOT_*` environment variables.
#[derive(Parser, Debug)]
#[command(version, author, about, long_about = None)]
struct Args {
    /// Override the config file path (optional).
    ///
    /// By default, the bot will look for `.hidden/config.toml`, then
    /// `auth.json`, in the current directory.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
    /// Increase log verbosity (-v, -vv, etc.).
    ///
    /// Use multiple times to increase verbosity:
    /// - No flag: INFO level
    /// - -v: DEBUG level
    /// - -vv or more: TRACE level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Main entry point for the meetup-bot binary.
///
/// Sets up logging based on verbosity, loads configuration, and starts the bot.
/// Any error that stops the bot, including losing the chat connection, exits
/// with a non-zero status.
#[tokio::main]
async fn main() -> Void {
    let args = Args::parse();

    // Construct the level filter.

    let level = match args.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let level_filter = tracing_subscriber::filter::LevelFilter::from_level(level);

    // Prepare the log layer.

    let stdout = tracing_subscriber::fmt::layer()
        .without_time()
        .with_ansi(true)
        .with_level(true)
        .with_file(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE);

    // Prepare the otlp layer, only when a collector is configured.

    let otel = if std::env::var_os("OTEL_EXPORTER_OTLP_ENDPOINT").is_some() {
        let exporter = opentelemetry_otlp::SpanExporter::builder().with_http().with_protocol(Protocol::HttpBinary).build()?;
        let tracer = opentelemetry_sdk::trace::SdkTracerProvider::builder().with_simple_exporter(exporter).build().tracer("meetup-bot");
        Some(tracing_opentelemetry::layer().with_tracer(tracer))
    } else {
        None
    };

    tracing_subscriber::registry().with(otel).with(level_filter).with(stdout).init();

    let config = Config::load(args.config.as_deref())?;

    if let Err(err) = meetup_bot::start(config).await {
        error!("meetup-bot stopped: {:#}", err);
        return Err(err);
    }

    Ok(())
}
