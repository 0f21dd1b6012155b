// Components module - reusable UI building blocks
//
// Shell components are rendered around the landing page:
// - Title bar: brand, section links, generation spinner
// - Status bar: key hints, mode and generation state
// - Logs panel: System log entries (toggled)
//
// Stateful components own their scroll/edit state:
// - Landing page, prompt input, result panel

pub mod landing_page;
pub mod logs_panel;
pub mod prompt_input;
pub mod result_panel;
pub mod scrollbar;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

pub use toast::Toast;

use crate::tui::app::App;
use ratatui::{layout::Rect, Frame};

/// Render the title bar (convenience wrapper)
pub fn render_title(f: &mut Frame, area: Rect, app: &App) {
    title_bar::render(f, area, app);
}

/// Render the status bar (convenience wrapper)
pub fn render_status(f: &mut Frame, area: Rect, app: &App) {
    status_bar::render(f, area, app);
}

/// Render the logs panel (convenience wrapper)
pub fn render_logs_panel(f: &mut Frame, area: Rect, app: &App) {
    logs_panel::render(f, area, app);
}
