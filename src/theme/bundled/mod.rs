//! Bundled TOML themes (compiled into binary, extracted on first run)
//!
//! These themes are written to ~/.config/mcrellyworld/themes/ on first run.
//! Users can then modify them freely.

mod mcrelly_dark;
mod mcrelly_light;
mod nord;

/// A bundled theme file
pub struct BundledTheme {
    pub filename: &'static str,
    pub content: &'static str,
}

/// All bundled themes, in display order
pub const BUNDLED_THEMES: &[BundledTheme] = &[
    BundledTheme {
        filename: "McRelly_Dark.toml",
        content: mcrelly_dark::THEME,
    },
    BundledTheme {
        filename: "McRelly_Light.toml",
        content: mcrelly_light::THEME,
    },
    BundledTheme {
        filename: "Nord.toml",
        content: nord::THEME,
    },
];

/// Display names of the bundled themes
pub fn list_bundled_themes() -> Vec<&'static str> {
    vec!["McRelly Dark", "McRelly Light", "Nord"]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::TomlTheme;

    #[test]
    fn all_bundled_themes_parse() {
        for theme in BUNDLED_THEMES {
            let parsed = TomlTheme::from_str(theme.content)
                .unwrap_or_else(|e| panic!("{} failed to parse: {}", theme.filename, e));
            assert_eq!(
                format!("{}.toml", parsed.meta.name.replace(' ', "_")),
                theme.filename
            );
        }
    }

    #[test]
    fn names_match_files() {
        assert_eq!(list_bundled_themes().len(), BUNDLED_THEMES.len());
    }
}
