// Modal system for TUI overlays
//
// Self-contained modal dialogs that map keys to actions.
// App just holds Option<Modal>, input routing acts on returned ModalAction.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions returned by modal input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    /// Input consumed, no state change needed
    None,
    /// Close the modal (assistant keeps prompt and result)
    Close,
    /// Next content type tab
    NextMode,
    /// Previous content type tab
    PrevMode,
    /// Submit the prompt
    Generate,
    /// Insert a line break in the prompt
    Newline,
    /// Copy the result
    Copy,
    /// Scroll the result
    PageUp,
    PageDown,
    /// Forward the key to the prompt editor
    Edit(KeyEvent),
}

/// Available modal types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// Help overlay - shows keyboard shortcuts
    Help,
    /// AI assistant dialog
    Assistant,
}

impl Modal {
    /// Handle keyboard input, return action for caller to execute
    pub fn handle_input(&self, key: KeyEvent) -> ModalAction {
        match self {
            Modal::Help => match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => ModalAction::Close,
                _ => ModalAction::None,
            },
            Modal::Assistant => {
                let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
                let alt = key.modifiers.contains(KeyModifiers::ALT);
                match key.code {
                    KeyCode::Esc => ModalAction::Close,
                    KeyCode::Tab => ModalAction::NextMode,
                    KeyCode::BackTab => ModalAction::PrevMode,
                    // Ctrl+J arrives as a plain line feed on most terminals
                    KeyCode::Char('j') if ctrl => ModalAction::Newline,
                    KeyCode::Enter if alt || ctrl => ModalAction::Newline,
                    KeyCode::Enter => ModalAction::Generate,
                    KeyCode::Char('y') if ctrl => ModalAction::Copy,
                    KeyCode::PageUp => ModalAction::PageUp,
                    KeyCode::PageDown => ModalAction::PageDown,
                    _ => ModalAction::Edit(key),
                }
            }
        }
    }
}
