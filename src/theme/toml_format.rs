// TOML theme format parser
//
// Native theme format for mcrellyworld. Each theme explicitly defines all
// semantic colors - no automatic mapping from palette slots.
//
// Format version: 1

use ratatui::style::Color;
use serde::Deserialize;

/// Root structure for TOML theme files
#[derive(Debug, Clone, Deserialize)]
pub struct TomlTheme {
    pub meta: ThemeMeta,
    pub ui: UiColors,
    pub brand: BrandColors,
    pub notice: NoticeColors,
    /// Optional code/syntax highlighting colors
    pub code: Option<CodeColors>,
}

/// Theme metadata
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeMeta {
    pub name: String,
    #[allow(dead_code)] // For future schema evolution
    pub version: u32,
    #[serde(default)]
    #[allow(dead_code)] // Metadata for theme attribution
    pub author: Option<String>,
}

/// Base UI chrome colors
#[derive(Debug, Clone, Deserialize)]
pub struct UiColors {
    pub background: String,
    pub foreground: String,
    pub border: String,
    pub border_focused: String,
    pub title: String,
    pub status_bar: String,
    pub selection_bg: String,
    pub selection_fg: String,
    /// Optional muted/secondary text color (falls back to border)
    pub muted: Option<String>,
    /// Optional border style: "plain", "rounded", "double", "thick" (default: plain)
    pub border_type: Option<String>,
}

/// The three gradient stops of the brand (hero, badges, tab accents)
#[derive(Debug, Clone, Deserialize)]
pub struct BrandColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

/// Toast colors
#[derive(Debug, Clone, Deserialize)]
pub struct NoticeColors {
    pub success: String,
    pub error: String,
}

/// Code/syntax highlighting colors (optional)
#[derive(Debug, Clone, Deserialize)]
pub struct CodeColors {
    /// Color for `inline code` spans
    pub inline: String,
    /// Color for fenced code blocks
    pub block: String,
}

impl TomlTheme {
    /// Parse a TOML theme from string
    pub fn from_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Parse a color string to ratatui Color
    ///
    /// `#RRGGBB`, or `ansi:0`..`ansi:15` / `ansi:fg` / `ansi:bg` to follow the
    /// terminal palette. Anything else is white.
    pub fn parse_color(value: &str) -> Color {
        match value.strip_prefix("ansi:") {
            Some("fg" | "bg") => Color::Reset,
            Some(slot) => slot
                .parse::<usize>()
                .ok()
                .and_then(|i| ANSI_SLOTS.get(i).copied())
                .unwrap_or(Color::White),
            None => parse_hex(value).unwrap_or(Color::White),
        }
    }
}

/// The 16 terminal palette slots in `ansi:N` order
const ANSI_SLOTS: [Color; 16] = [
    Color::Black,
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::White,
    Color::DarkGray,
    Color::LightRed,
    Color::LightGreen,
    Color::LightYellow,
    Color::LightBlue,
    Color::LightMagenta,
    Color::LightCyan,
    Color::Gray,
];

fn parse_hex(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#').unwrap_or(value);
    if hex.len() != 6 {
        return None;
    }
    let rgb = u32::from_str_radix(hex, 16).ok()?;
    Some(Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(TomlTheme::parse_color("#ff0000"), Color::Rgb(255, 0, 0));
        assert_eq!(TomlTheme::parse_color("#00ff00"), Color::Rgb(0, 255, 0));
        assert_eq!(TomlTheme::parse_color("0000ff"), Color::Rgb(0, 0, 255));
        assert_eq!(TomlTheme::parse_color("ansi:5"), Color::Magenta);
        assert_eq!(TomlTheme::parse_color("ansi:bg"), Color::Reset);
        assert_eq!(TomlTheme::parse_color("#abc"), Color::White);
    }

    #[test]
    fn test_parse_theme() {
        let toml = r##"
[meta]
name = "Test Theme"
version = 1

[ui]
background = "#1e1e2e"
foreground = "#cdd6f4"
border = "#45475a"
border_focused = "#f5c2e7"
title = "#cdd6f4"
status_bar = "#cdd6f4"
selection_bg = "#45475a"
selection_fg = "#cdd6f4"

[brand]
primary = "#89b4fa"
secondary = "#cba6f7"
accent = "#94e2d5"

[notice]
success = "#a6e3a1"
error = "#f38ba8"
"##;

        let theme = TomlTheme::from_str(toml).unwrap();
        assert_eq!(theme.meta.name, "Test Theme");
        assert_eq!(theme.meta.version, 1);
        assert_eq!(theme.ui.background, "#1e1e2e");
        assert_eq!(theme.brand.secondary, "#cba6f7");
        assert!(theme.code.is_none());
    }
}
