// Theme system for the TUI
//
// - TomlTheme: Native format with explicit semantic color definitions
// - Theme: Final resolved theme with all colors ready for use
//
// Theme loading priority:
// 1. External TOML themes from ~/.config/mcrellyworld/themes/*.toml
// 2. Bundled themes (compiled in, extracted on first run)
// 3. Fallback to hardcoded default

mod bundled;
mod toml_format;

pub use toml_format::TomlTheme;

use ratatui::style::Color;
use ratatui::widgets::BorderType;
use std::path::PathBuf;

/// Theme configuration options
#[derive(Debug, Clone)]
pub struct ThemeConfig {
    /// Use theme's background color (true) or terminal's default (false)
    pub use_theme_background: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            use_theme_background: true,
        }
    }
}

/// Complete resolved theme ready for use in the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // ─── Brand Colors ────────────────────────────────────────
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,

    // ─── Toast Colors ────────────────────────────────────────
    pub success: Color,
    pub error: Color,

    // ─── UI Element Colors ───────────────────────────────────
    pub status_bar: Color,
    pub title: Color,
    pub border: Color,
    pub highlight: Color, // Maps to border_focused

    // ─── Terminal Colors ─────────────────────────────────────
    pub background: Color,
    pub foreground: Color,

    // ─── Selection Colors ────────────────────────────────────
    pub selection: Color,
    pub selection_fg: Color,

    // ─── Secondary/Muted Text ────────────────────────────────
    pub muted: Color,

    // ─── Border Style ────────────────────────────────────────
    pub border_type: BorderType,

    // ─── Code Highlighting Colors ────────────────────────────
    pub code_inline: Color,
    pub code_block: Color,
}

impl Theme {
    /// Load theme by name with default configuration
    pub fn by_name(name: &str) -> Self {
        Self::by_name_with_config(name, &ThemeConfig::default())
    }

    /// Load theme by name with custom configuration
    pub fn by_name_with_config(name: &str, config: &ThemeConfig) -> Self {
        if let Some(theme) = Self::load_toml(name, config) {
            return theme;
        }

        tracing::warn!(theme = name, "Theme not found, using fallback");
        Self::hardcoded_default(config)
    }

    /// Load from TOML theme file or bundled theme
    fn load_toml(name: &str, config: &ThemeConfig) -> Option<Self> {
        let normalized = name.replace(' ', "_");

        // External files win so users can edit the extracted copies
        if let Some(themes_dir) = Self::themes_dir() {
            for candidate in [name, normalized.as_str()] {
                let path = themes_dir.join(format!("{}.toml", candidate));
                if !path.exists() {
                    continue;
                }
                match std::fs::read_to_string(&path) {
                    Ok(contents) => match TomlTheme::from_str(&contents) {
                        Ok(toml_theme) => return Some(Self::from_toml(toml_theme, config)),
                        Err(e) => {
                            tracing::warn!(path = %path.display(), "Invalid theme file: {}", e)
                        }
                    },
                    Err(e) => tracing::warn!(path = %path.display(), "Cannot read theme: {}", e),
                }
            }
        }

        let filename = format!("{}.toml", normalized);
        bundled::BUNDLED_THEMES
            .iter()
            .find(|theme| theme.filename.eq_ignore_ascii_case(&filename))
            .and_then(|theme| TomlTheme::from_str(theme.content).ok())
            .map(|toml_theme| Self::from_toml(toml_theme, config))
    }

    /// Get themes directory path
    fn themes_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".config").join("mcrellyworld").join("themes"))
    }

    /// Parse border type string to BorderType enum
    fn parse_border_type(value: Option<&String>) -> BorderType {
        match value.map(|s| s.as_str()) {
            Some("rounded") => BorderType::Rounded,
            Some("double") => BorderType::Double,
            Some("thick") => BorderType::Thick,
            _ => BorderType::Plain,
        }
    }

    /// Create theme from native TOML format
    fn from_toml(toml: TomlTheme, config: &ThemeConfig) -> Self {
        let parse = TomlTheme::parse_color;

        let background = if config.use_theme_background {
            parse(&toml.ui.background)
        } else {
            Color::Reset
        };

        let border = parse(&toml.ui.border);
        let accent = parse(&toml.brand.accent);

        Self {
            name: toml.meta.name.clone(),

            primary: parse(&toml.brand.primary),
            secondary: parse(&toml.brand.secondary),
            accent,

            success: parse(&toml.notice.success),
            error: parse(&toml.notice.error),

            status_bar: parse(&toml.ui.status_bar),
            title: parse(&toml.ui.title),
            border,
            highlight: parse(&toml.ui.border_focused),

            background,
            foreground: parse(&toml.ui.foreground),
            selection: parse(&toml.ui.selection_bg),
            selection_fg: parse(&toml.ui.selection_fg),

            // Muted text (explicit or fallback to border)
            muted: toml.ui.muted.as_deref().map(parse).unwrap_or(border),

            border_type: Self::parse_border_type(toml.ui.border_type.as_ref()),

            // Code highlighting (explicit or fallback to accent)
            code_inline: toml
                .code
                .as_ref()
                .map(|c| parse(&c.inline))
                .unwrap_or(accent),
            code_block: toml
                .code
                .as_ref()
                .map(|c| parse(&c.block))
                .unwrap_or(accent),
        }
    }

    /// Hardcoded fallback when no themes can be loaded
    fn hardcoded_default(config: &ThemeConfig) -> Self {
        let background = if config.use_theme_background {
            Color::Rgb(15, 16, 32)
        } else {
            Color::Reset
        };

        Self {
            name: "McRelly Dark (Fallback)".to_string(),

            primary: Color::Rgb(139, 92, 246),
            secondary: Color::Rgb(236, 72, 153),
            accent: Color::Rgb(34, 211, 238),

            success: Color::Rgb(52, 211, 153),
            error: Color::Rgb(248, 113, 113),

            status_bar: Color::Rgb(161, 161, 194),
            title: Color::Rgb(196, 181, 253),
            border: Color::Rgb(59, 61, 92),
            highlight: Color::Rgb(167, 139, 250),

            background,
            foreground: Color::Rgb(228, 228, 240),
            selection: Color::Rgb(46, 42, 90),
            selection_fg: Color::White,

            muted: Color::Rgb(139, 139, 167),
            border_type: BorderType::Plain,
            code_inline: Color::Rgb(240, 171, 252),
            code_block: Color::Rgb(165, 243, 252),
        }
    }

    /// Border color for a block depending on focus
    pub fn block_border(&self, focused: bool) -> Color {
        if focused {
            self.highlight
        } else {
            self.border
        }
    }

    /// List all available themes (bundled + external)
    pub fn list_available() -> Vec<String> {
        let mut themes: Vec<String> = bundled::list_bundled_themes()
            .into_iter()
            .map(str::to_string)
            .collect();

        if let Some(themes_dir) = Self::themes_dir() {
            if let Ok(entries) = std::fs::read_dir(themes_dir) {
                for entry in entries.flatten() {
                    let path = entry.path();
                    if path.extension().is_some_and(|ext| ext == "toml") {
                        if let Some(stem) = path.file_stem() {
                            // Convert filename format (underscore) to display format (space)
                            let display_name = stem.to_string_lossy().replace('_', " ");
                            if !themes.iter().any(|t| t.eq_ignore_ascii_case(&display_name)) {
                                themes.push(display_name);
                            }
                        }
                    }
                }
            }
        }

        themes
    }

    /// Name of the theme after `current` in `available`, wrapping around
    pub fn next_name(current: &str, available: &[String]) -> Option<String> {
        if available.is_empty() {
            return None;
        }
        let idx = available
            .iter()
            .position(|t| t.eq_ignore_ascii_case(current.trim_end_matches(" (Fallback)")))
            .map(|i| (i + 1) % available.len())
            .unwrap_or(0);
        Some(available[idx].clone())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::by_name("McRelly Dark")
    }
}

/// Ensure themes directory exists and extract bundled themes on first run
pub fn ensure_themes_extracted() {
    let Some(themes_dir) = Theme::themes_dir() else {
        return;
    };

    if std::fs::create_dir_all(&themes_dir).is_err() {
        return;
    }

    // Check if we've already extracted (marker file)
    let marker = themes_dir.join(".extracted_v1");
    if marker.exists() {
        return;
    }

    for theme in bundled::BUNDLED_THEMES {
        let path = themes_dir.join(theme.filename);
        // Only write if file doesn't exist (don't overwrite user modifications)
        if !path.exists() {
            let _ = std::fs::write(&path, theme.content);
        }
    }

    let _ = std::fs::write(&marker, "1");
}
