//! `[logging]` section: filter level and the optional JSON log files

use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// How often tracing-appender starts a new log file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    /// One file for every run
    Never,
}

impl LogRotation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        }
    }
}

impl FromStr for LogRotation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hourly" => Ok(Self::Hourly),
            "daily" => Ok(Self::Daily),
            "never" => Ok(Self::Never),
            other => Err(format!(
                "unknown rotation '{}' (expected hourly, daily or never)",
                other
            )),
        }
    }
}

impl fmt::Display for LogRotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// EnvFilter level for this crate; RUST_LOG overrides it
    pub level: String,
    /// Write JSON lines next to the TUI buffer / stderr output
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_rotation: LogRotation,
    /// File name stem; the appender adds the date suffix
    pub file_prefix: String,
}

impl LoggingConfig {
    /// `~/.local/share/mcrellyworld/logs` (or the platform equivalent)
    fn default_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|d| d.join("mcrellyworld").join("logs"))
            .unwrap_or_else(|| PathBuf::from("logs"))
    }

    pub fn from_file(file: Option<FileLogging>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        let file_rotation = match file.file_rotation.as_deref().map(str::parse) {
            Some(Ok(rotation)) => rotation,
            Some(Err(e)) => {
                eprintln!("Warning: [logging] file_rotation: {}", e);
                defaults.file_rotation
            }
            None => defaults.file_rotation,
        };

        Self {
            level: file.level.unwrap_or(defaults.level),
            file_enabled: file.file_enabled.unwrap_or(defaults.file_enabled),
            file_dir: file.file_dir.map(PathBuf::from).unwrap_or(defaults.file_dir),
            file_rotation,
            file_prefix: file.file_prefix.unwrap_or(defaults.file_prefix),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: Self::default_dir(),
            file_rotation: LogRotation::Daily,
            file_prefix: "mcrellyworld".to_string(),
        }
    }
}

/// `[logging]` as written in config.toml
#[derive(Debug, Deserialize, Default)]
pub struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_rotation: Option<String>,
    pub file_prefix: Option<String>,
}
