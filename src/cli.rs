// CLI module - command-line argument parsing and handlers
//
// No subcommand runs the TUI. Subcommands:
// - generate: run the assistant once without the TUI
// - config --show: Display effective configuration
// - config --reset: Regenerate config file with defaults
// - config --edit: Open config file in $EDITOR
// - config --update: Rewrite config with the latest structure, keeping values

use crate::config::{Config, VERSION};
use crate::content;
use crate::generation::{DemoSession, Mode};
use crate::tui::clipboard::{copy_to_clipboard, SystemClipboard};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::process::Command;

/// McRellyWorld - AI content platform landing page in your terminal
#[derive(Parser)]
#[command(name = "mcrellyworld")]
#[command(version = VERSION)]
#[command(about = "McRellyWorld landing page and AI assistant demo", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the AI assistant once and print the result
    Generate {
        /// Content type (defaults to [demo] default_mode)
        #[arg(long, short, value_enum)]
        mode: Option<Mode>,

        /// Also copy the result to the clipboard
        #[arg(long)]
        copy: bool,

        /// Print the full response as JSON
        #[arg(long)]
        json: bool,

        /// What to generate
        #[arg(trailing_var_arg = true)]
        request: Vec<String>,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(long)]
        edit: bool,

        /// Update config with new defaults (preserves user values)
        #[arg(long)]
        update: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// Handle the config subcommand
pub fn handle_config(show: bool, reset: bool, edit: bool, update: bool, path: bool) {
    if path {
        handle_config_path();
    } else if show {
        handle_config_show();
    } else if reset {
        handle_config_reset();
    } else if edit {
        handle_config_edit();
    } else if update {
        handle_config_update();
    } else {
        // No flag provided, show help
        println!("Usage: mcrellyworld config [--show|--reset|--edit|--update|--path]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --reset   Reset config file to defaults");
        println!("  --edit    Open config file in $EDITOR");
        println!("  --update  Update config with new defaults (preserves user values)");
        println!("  --path    Show config file path");
    }
}

/// Run one generation without the TUI.
///
/// A blank request is an error (non-zero exit). A clipboard failure is only
/// reported: the result has already been printed.
pub async fn handle_generate(
    config: &Config,
    mode: Option<Mode>,
    copy: bool,
    json: bool,
    request: &[String],
) -> Result<()> {
    let request = request.join(" ");
    let mut session = DemoSession::new(mode.unwrap_or(config.demo.default_mode));

    let response = session
        .generate(&request, config.demo.latency())
        .await
        .context(content::TOAST_ERROR_TITLE)?;

    if json {
        let out = serde_json::to_string_pretty(response).context("Failed to serialize response")?;
        println!("{}", out);
    } else {
        println!("{}", response.body);
    }

    if copy {
        match copy_to_clipboard(&mut SystemClipboard, response.body) {
            Ok(()) => eprintln!(
                "{}: {}",
                content::TOAST_COPIED_TITLE,
                content::TOAST_COPIED_BODY
            ),
            Err(e) => eprintln!(
                "{}: {} ({})",
                content::TOAST_ERROR_TITLE,
                content::TOAST_COPY_FAILED_BODY,
                e
            ),
        }
    }

    Ok(())
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    println!("theme = {:?}", config.theme);
    println!("use_theme_background = {}", config.use_theme_background);
    println!();
    println!("[demo]");
    println!("latency_ms = {}", config.demo.latency_ms);
    println!("default_mode = {:?}", config.demo.default_mode.as_str());
    println!();
    println!("[ui]");
    println!("toast_duration_ms = {}", config.ui.toast_duration_ms);
    println!("show_logs = {}", config.ui.show_logs);
    println!();
    println!("[logging]");
    println!("level = {:?}", config.logging.level);
    println!("file_enabled = {}", config.logging.file_enabled);
    println!("file_dir = {:?}", config.logging.file_dir.display().to_string());
    println!("file_rotation = {:?}", config.logging.file_rotation.as_str());
    println!("file_prefix = {:?}", config.logging.file_prefix);

    // Show source info
    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        let _ = std::io::stderr().flush();

        let mut input = String::new();
        if std::io::stdin().read_line(&mut input).is_err()
            || !input.trim().eq_ignore_ascii_case("y")
        {
            println!("Aborted.");
            return;
        }
    }

    // Write the default config (using Config's single source of truth)
    if let Err(e) = Config::default().save() {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config reset to defaults: {}", path.display());
}

fn handle_config_edit() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
    }

    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            // Platform-specific fallback
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    println!("Opening {} with {}", path.display(), editor);

    match Command::new(&editor).arg(&path).status() {
        Ok(s) if s.success() => {}
        Ok(s) => {
            eprintln!("Editor exited with status: {}", s);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to launch editor '{}': {}", editor, e);
            eprintln!("Set $EDITOR environment variable to your preferred editor");
            std::process::exit(1);
        }
    }
}

fn handle_config_update() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
        return;
    }

    // Read existing config and generate updated TOML preserving user values
    let updated = Config::from_env().to_toml();

    let backup_path = path.with_extension("toml.bak");
    if let Err(e) = std::fs::copy(&path, &backup_path) {
        eprintln!("Warning: Could not create backup: {}", e);
    } else {
        println!("Backup created: {}", backup_path.display());
    }

    if let Err(e) = std::fs::write(&path, updated) {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config updated with latest structure: {}", path.display());
    println!("Your values have been preserved.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_generate_with_mode_and_words() {
        let cli = Cli::try_parse_from([
            "mcrellyworld",
            "generate",
            "--mode",
            "code",
            "--json",
            "sort",
            "array",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Generate {
                mode,
                copy,
                json,
                request,
            }) => {
                assert_eq!(mode, Some(Mode::Code));
                assert!(!copy);
                assert!(json);
                assert_eq!(request, vec!["sort", "array"]);
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn no_subcommand_runs_tui() {
        let cli = Cli::try_parse_from(["mcrellyworld"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["mcrellyworld", "generate", "--mode", "video", "x"]).is_err());
    }

    #[tokio::test]
    async fn blank_generate_fails_with_empty_input() {
        let mut config = Config::default();
        config.demo.latency_ms = 1;
        let err = handle_generate(&config, None, false, false, &["  ".to_string()])
            .await
            .unwrap_err();
        assert!(err
            .chain()
            .any(|cause| cause.to_string() == "Введите запрос для генерации"));
    }
}
