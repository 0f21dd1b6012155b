//! Assistant and UI settings: simulated latency, default mode, toasts

use crate::generation::{Mode, DEFAULT_LATENCY};
use serde::Deserialize;
use std::time::Duration;

// ─────────────────────────────────────────────────────────────────────────────
// Demo (assistant) settings
// ─────────────────────────────────────────────────────────────────────────────

/// Assistant behavior
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Simulated generation latency in milliseconds
    pub latency_ms: u64,
    /// Mode selected when the program starts
    pub default_mode: Mode,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            latency_ms: DEFAULT_LATENCY.as_millis() as u64,
            default_mode: Mode::default(),
        }
    }
}

/// [demo] section as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileDemo {
    pub latency_ms: Option<u64>,
    pub default_mode: Option<String>,
}

impl DemoConfig {
    /// Create from file config with defaults. Unknown modes fall back to text.
    pub fn from_file(file: Option<FileDemo>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        let default_mode = match file.default_mode {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                eprintln!("Warning: [demo] default_mode: {}, using \"text\"", e);
                defaults.default_mode
            }),
            None => defaults.default_mode,
        };

        Self {
            latency_ms: file.latency_ms.unwrap_or(defaults.latency_ms),
            default_mode,
        }
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// UI settings
// ─────────────────────────────────────────────────────────────────────────────

/// TUI behavior
#[derive(Debug, Clone, PartialEq)]
pub struct UiConfig {
    /// How long a toast stays visible
    pub toast_duration_ms: u64,
    /// Show the logs panel on startup
    pub show_logs: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: 2000,
            show_logs: false,
        }
    }
}

/// [ui] section as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileUi {
    pub toast_duration_ms: Option<u64>,
    pub show_logs: Option<bool>,
}

impl UiConfig {
    pub fn from_file(file: Option<FileUi>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            toast_duration_ms: file.toast_duration_ms.unwrap_or(defaults.toast_duration_ms),
            show_logs: file.show_logs.unwrap_or(defaults.show_logs),
        }
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}
