// McRellyWorld - AI content platform landing page for the terminal
//
// Architecture:
// - TUI (ratatui): The landing page and the AI assistant dialog
// - Generation: Simulated assistant with canned responses per content type
// - CLI (clap): `generate` runs the assistant once, `config` manages settings
// - Logging (tracing): Captured into the TUI, stderr for the CLI, optional JSON files

mod cli;
mod config;
mod content;
mod generation;
mod logging;
mod theme;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::{Config, LogRotation, LoggingConfig};
use logging::{LogBuffer, TuiLogLayer};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Open the rolling log file writer, if file logging is enabled
///
/// The guard must be kept alive for the duration of the program so buffered
/// lines get flushed.
fn file_writer(logging: &LoggingConfig) -> Option<(NonBlocking, WorkerGuard)> {
    if !logging.file_enabled {
        return None;
    }

    if let Err(e) = std::fs::create_dir_all(&logging.file_dir) {
        eprintln!(
            "Warning: Could not create log directory {:?}: {}",
            logging.file_dir, e
        );
        return None;
    }

    let appender = match logging.file_rotation {
        LogRotation::Hourly => {
            tracing_appender::rolling::hourly(&logging.file_dir, &logging.file_prefix)
        }
        LogRotation::Daily => {
            tracing_appender::rolling::daily(&logging.file_dir, &logging.file_prefix)
        }
        LogRotation::Never => {
            tracing_appender::rolling::never(&logging.file_dir, &logging.file_prefix)
        }
    };

    Some(tracing_appender::non_blocking(appender))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config management never touches logging or the terminal
    if let Some(Commands::Config {
        show,
        reset,
        edit,
        update,
        path,
    }) = cli.command
    {
        cli::handle_config(show, reset, edit, update, path);
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    // Extract bundled themes on first run
    theme::ensure_themes_extracted();

    let config = Config::from_env();
    let log_buffer = LogBuffer::new();
    let tui_mode = cli.command.is_none();

    // In TUI mode logs go to the buffer (stdout belongs to the display).
    // `generate` prints its result to stdout, so logs go to stderr.
    //
    // Precedence: RUST_LOG env var > config file > default "info"
    let default_filter = format!("mcrellyworld={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let (file_layer, _file_guard) = match file_writer(&config.logging) {
        Some((writer, guard)) => (
            // JSON for structured log parsing
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_ansi(false),
            ),
            Some(guard),
        ),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tui_mode.then(|| TuiLogLayer::new(log_buffer.clone())))
        .with((!tui_mode).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .with(file_layer)
        .init();

    match cli.command {
        Some(Commands::Generate {
            mode,
            copy,
            json,
            request,
        }) => cli::handle_generate(&config, mode, copy, json, &request).await,
        Some(Commands::Config { .. }) => Ok(()),
        None => {
            tracing::info!("Starting TUI");
            let result = tui::run_tui(config, log_buffer).await;
            if let Err(e) = &result {
                tracing::error!("TUI error: {:?}", e);
            }
            tracing::info!("Shutdown complete");
            result
        }
    }
}
