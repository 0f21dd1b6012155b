//! Content category selected for a generation request

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The content category a generation request targets.
///
/// Shared between the showcase tabs on the landing page and the assistant
/// dialog: switching one switches the other.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Text,
    Image,
    Code,
}

impl Mode {
    /// All modes in tab order
    pub const ALL: [Mode; 3] = [Mode::Text, Mode::Image, Mode::Code];

    /// Next mode in tab order (wraps around)
    pub fn next(self) -> Self {
        match self {
            Mode::Text => Mode::Image,
            Mode::Image => Mode::Code,
            Mode::Code => Mode::Text,
        }
    }

    /// Previous mode in tab order (wraps around)
    pub fn prev(self) -> Self {
        match self {
            Mode::Text => Mode::Code,
            Mode::Image => Mode::Text,
            Mode::Code => Mode::Image,
        }
    }

    /// Tab label shown in the UI
    pub fn label(self) -> &'static str {
        match self {
            Mode::Text => "Текст",
            Mode::Image => "Изображение",
            Mode::Code => "Код",
        }
    }

    /// Hint shown in the empty request editor
    pub fn placeholder(self) -> &'static str {
        match self {
            Mode::Text => "Например: Напиши статью о будущем искусственного интеллекта",
            Mode::Image => "Например: Футуристический город с неоновыми огнями на закате",
            Mode::Code => "Например: Создай функцию для сортировки массива на TypeScript",
        }
    }

    /// Config/CLI identifier
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Text => "text",
            Mode::Image => "image",
            Mode::Code => "code",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Mode::Text),
            "image" => Ok(Mode::Image),
            "code" => Ok(Mode::Code),
            other => Err(format!(
                "unknown mode '{}' (expected text, image or code)",
                other
            )),
        }
    }
}
