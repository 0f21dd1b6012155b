//! Key handling for components that own a piece of the screen
//!
//! The dialog layer and the global keys in `tui::mod` get first pick; what
//! is left goes to the landing page, or to the prompt and then the result
//! panel inside the assistant.

use super::Scrollable;
use crossterm::event::{KeyCode, KeyEvent};

/// Whether a component consumed a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    Yes,
    /// Pass the key on to the next layer
    No,
}

impl Handled {
    pub fn was_handled(self) -> bool {
        self == Self::Yes
    }
}

pub trait Interactive {
    fn handle_key(&mut self, key: KeyEvent) -> Handled;
}

/// Arrow/vim line scrolling, paging and jumps for scrollable components
pub trait ScrollableInteractive: Interactive + Scrollable {
    fn handle_scroll_keys(&mut self, key: KeyEvent) -> Handled
    where
        Self: Sized,
    {
        let action: fn(&mut Self) = match key.code {
            KeyCode::Up | KeyCode::Char('k') => Self::scroll_up,
            KeyCode::Down | KeyCode::Char('j') => Self::scroll_down,
            KeyCode::PageUp => Self::page_up,
            KeyCode::PageDown => Self::page_down,
            KeyCode::Home => Self::scroll_to_top,
            KeyCode::End => Self::scroll_to_bottom,
            _ => return Handled::No,
        };
        action(self);
        Handled::Yes
    }
}

impl<T: Interactive + Scrollable> ScrollableInteractive for T {}
