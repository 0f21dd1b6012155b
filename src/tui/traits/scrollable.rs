//! Scroll capability shared by the landing page and the result panel

use crate::tui::scroll::ScrollState;

/// A component that owns a `ScrollState`
///
/// Implementors only hand out their state; movement comes with the trait.
pub trait Scrollable {
    fn scroll_state(&self) -> &ScrollState;
    fn scroll_state_mut(&mut self) -> &mut ScrollState;

    fn scroll_up(&mut self) {
        self.scroll_state_mut().scroll_up();
    }

    fn scroll_down(&mut self) {
        self.scroll_state_mut().scroll_down();
    }

    fn page_up(&mut self) {
        self.scroll_state_mut().page_up();
    }

    fn page_down(&mut self) {
        self.scroll_state_mut().page_down();
    }

    fn scroll_to_top(&mut self) {
        self.scroll_state_mut().scroll_to_top();
    }

    fn scroll_to_bottom(&mut self) {
        self.scroll_state_mut().scroll_to_bottom();
    }

    /// First visible line
    fn scroll_offset(&self) -> usize {
        self.scroll_state().offset()
    }

    /// Record content and viewport height; called while rendering
    fn update_dimensions(&mut self, total: usize, viewport: usize) {
        self.scroll_state_mut().update_dimensions(total, viewport);
    }
}
