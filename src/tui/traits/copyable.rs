//! Copyable trait for components that provide clipboard content

/// Trait for components that can provide content for the clipboard
///
/// When the user presses a copy keybind, the active component's
/// implementation determines what gets copied.
pub trait Copyable {
    /// Text for the clipboard, exactly as the component holds it.
    ///
    /// Returns `None` if there's nothing to copy (e.g., no result yet).
    fn copy_text(&self) -> Option<String>;
}
