// DSA Quest - terminal client for gamified coding practice
//
// Architecture:
// - API client (reqwest): JSON over HTTP against the quest backend
// - TUI (ratatui): login/register flows, problem dashboard, profile
// - Tracker: stopwatch-gated problem sessions, elapsed time submission
// - Event system: spawned API tasks report back over one mpsc channel

mod api;
mod auth;
mod cli;
mod config;
mod demo;
mod events;
mod forms;
mod gate;
mod logging;
mod models;
mod store;
mod tracker;
mod tui;
mod util;

use anyhow::Result;
use api::{Api, ApiClient};
use auth::{FileTokenStore, MemoryTokenStore, TokenProvider};
use clap::Parser;
use config::{Config, LogRotation};
use demo::DemoApi;
use logging::{LogBuffer, TuiLogLayer};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Subcommands (config --show etc.) run and exit without the TUI
    if cli::handle_command(&args) {
        return Ok(());
    }

    // Write the config template on first run so options are discoverable
    Config::ensure_config_exists();

    let mut config = Config::from_env();
    config.demo_mode |= args.demo;

    let log_buffer = LogBuffer::new();

    // Logs go to the in-memory buffer (stdout would garble the alternate
    // screen) and optionally to rotating JSON files.
    // Filter precedence: RUST_LOG > config file level
    let default_filter = format!("dsaquest={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // The guard must stay alive for the whole run so file logs flush
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> = if config
        .logging
        .file_enabled
    {
        match std::fs::create_dir_all(&config.logging.file_dir) {
            Ok(()) => {
                let file_appender = match config.logging.file_rotation {
                    LogRotation::Hourly => tracing_appender::rolling::hourly(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Daily => tracing_appender::rolling::daily(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Never => tracing_appender::rolling::never(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                };
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

                tracing_subscriber::registry()
                    .with(filter)
                    .with(TuiLogLayer::new(log_buffer.clone()))
                    .with(
                        tracing_subscriber::fmt::layer()
                            .json()
                            .with_writer(non_blocking)
                            .with_ansi(false),
                    )
                    .init();
                Some(guard)
            }
            Err(e) => {
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                tracing_subscriber::registry()
                    .with(filter)
                    .with(TuiLogLayer::new(log_buffer.clone()))
                    .init();
                None
            }
        }
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(TuiLogLayer::new(log_buffer.clone()))
            .init();
        None
    };

    // Demo mode swaps in the seeded in-memory backend and never touches
    // the real token file
    let (api, tokens): (Api, Arc<dyn TokenProvider>) = if config.demo_mode {
        tracing::info!("Running in DEMO MODE - in-memory backend, no network");
        (Api::Demo(DemoApi::new()), Arc::new(MemoryTokenStore::new()))
    } else {
        let Some(token_path) = FileTokenStore::default_path() else {
            anyhow::bail!("Could not determine home directory for token storage");
        };
        let tokens: Arc<dyn TokenProvider> = Arc::new(FileTokenStore::new(token_path));
        (
            Api::Remote(ApiClient::new(&config.api_url, tokens.clone())),
            tokens,
        )
    };

    tracing::info!("Starting dsaquest v{} against {}", config::VERSION, config.api_url);

    tui::run_tui(&config, log_buffer, api, tokens).await
}
