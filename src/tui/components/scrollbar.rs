//! Shared vertical scrollbar for the landing page and the result panel

use crate::theme::Theme;
use crate::tui::scroll::ScrollState;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

#[derive(Debug, Clone, Copy, Default)]
pub enum ScrollbarStyle {
    /// ↑ ↓ caps, for the full-height landing page
    Arrows,
    /// Thumb only, for boxed panels
    #[default]
    Minimal,
}

/// Draw a scrollbar on the right edge of `area` when the content overflows
pub fn render_scrollbar(
    f: &mut Frame,
    area: Rect,
    scroll: &ScrollState,
    style: ScrollbarStyle,
    theme: &Theme,
) {
    if !scroll.needs_scrollbar() {
        return;
    }

    let (begin, end) = match style {
        ScrollbarStyle::Arrows => (Some("↑"), Some("↓")),
        ScrollbarStyle::Minimal => (None, None),
    };
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(begin)
        .end_symbol(end)
        .thumb_style(Style::default().fg(theme.primary))
        .track_style(Style::default().fg(theme.border));

    // Positions run over the scrollable range, not the whole content
    let range = scroll.total().saturating_sub(scroll.viewport());
    let mut state = ScrollbarState::new(range).position(scroll.offset());

    f.render_stateful_widget(scrollbar, area, &mut state);
}
