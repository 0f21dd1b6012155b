//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Serialize config to TOML string (single source of truth for format)
    pub fn to_toml(&self) -> String {
        format!(
            r#"# mcrellyworld configuration

# Theme: McRelly Dark, McRelly Light, Nord, or any file in ~/.config/mcrellyworld/themes
# Press F2 in the TUI to cycle through available themes
theme = "{theme}"

# Use theme's background color (true) or terminal's default (false)
use_theme_background = {use_bg}

# AI assistant
[demo]
# Simulated generation latency in milliseconds
latency_ms = {latency_ms}
# Mode selected on startup: text, image, code
default_mode = "{default_mode}"

# Terminal UI
[ui]
# How long notices stay on screen
toast_duration_ms = {toast_ms}
# Show the logs panel on startup (toggle with L)
show_logs = {show_logs}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# File logging (in addition to TUI buffer or stderr)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            theme = self.theme,
            use_bg = self.use_theme_background,
            latency_ms = self.demo.latency_ms,
            default_mode = self.demo.default_mode.as_str(),
            toast_ms = self.ui.toast_duration_ms,
            show_logs = self.ui.show_logs,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display().to_string().replace('\\', "/"),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }

    /// Save current configuration to file
    pub fn save(&self) -> Result<(), std::io::Error> {
        let Some(path) = Self::config_path() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config path",
            ));
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&path, self.to_toml())
    }
}
