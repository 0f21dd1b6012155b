//! Clipboard helper for copying text to the system clipboard
//!
//! Uses `arboard` crate for cross-platform support (Windows, macOS, Linux).
//! The clipboard is created fresh each time to avoid holding resources.
//! Callers go through [`ClipboardWriter`] so tests can swap in memory.

/// Clipboard failures. Always recoverable: shown as a notice, never fatal.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// No clipboard could be opened (headless Linux, no display server)
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    /// The platform rejected the write
    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// Something that can receive copied text
pub trait ClipboardWriter {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The system clipboard via arboard
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

/// Copy `text`, logging the outcome. State is never touched either way.
pub fn copy_to_clipboard(
    clipboard: &mut dyn ClipboardWriter,
    text: &str,
) -> Result<(), ClipboardError> {
    match clipboard.set_text(text) {
        Ok(()) => {
            tracing::debug!(chars = text.chars().count(), "Copied to clipboard");
            Ok(())
        }
        Err(e) => {
            tracing::warn!("Copy failed: {}", e);
            Err(e)
        }
    }
}

/// In-memory clipboard for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
    pub writes: usize,
    /// When set, every write is rejected
    pub fail: bool,
}

#[cfg(test)]
impl ClipboardWriter for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Write("rejected".to_string()));
        }
        self.contents = Some(text.to_string());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_copy_is_idempotent() {
        let mut clipboard = MemoryClipboard::default();
        copy_to_clipboard(&mut clipboard, "same").unwrap();
        copy_to_clipboard(&mut clipboard, "same").unwrap();
        assert_eq!(clipboard.contents.as_deref(), Some("same"));
        assert_eq!(clipboard.writes, 2);
    }

    #[test]
    fn rejection_is_an_error_not_a_panic() {
        let mut clipboard = MemoryClipboard {
            fail: true,
            ..Default::default()
        };
        let err = copy_to_clipboard(&mut clipboard, "text").unwrap_err();
        assert!(matches!(err, ClipboardError::Write(_)));
        assert!(clipboard.contents.is_none());
    }
}
