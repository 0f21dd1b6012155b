// Result panel component
//
// Shows the last generated response inside the assistant dialog:
// - text:  rendered as markdown
// - code:  in the code colour, long lines wrapped under their indentation
// - image: wrapped plain text
// Owns its scroll state; copy hands back the body exactly as generated.

use super::scrollbar::{render_scrollbar, ScrollbarStyle};
use crate::content;
use crate::generation::{Mode, Response};
use crate::theme::Theme;
use crate::tui::markdown;
use crate::tui::scroll::ScrollState;
use crate::tui::traits::{Copyable, Handled, Interactive, Scrollable, ScrollableInteractive};
use crossterm::event::KeyEvent;
use unicode_width::UnicodeWidthStr;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug)]
pub struct ResultPanel {
    scroll: ScrollState,
    shown: Option<(Mode, &'static str)>,
}

impl Default for ResultPanel {
    fn default() -> Self {
        Self {
            scroll: ScrollState::manual(),
            shown: None,
        }
    }
}

impl ResultPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display a fresh response from the top
    pub fn show(&mut self, response: &Response) {
        self.shown = Some((response.mode, response.body));
        self.scroll.scroll_to_top();
    }

    pub fn clear(&mut self) {
        self.shown = None;
        self.scroll.scroll_to_top();
    }

    pub fn is_empty(&self) -> bool {
        self.shown.is_none()
    }

    /// Lines for the body at `width`
    pub fn lines(&self, width: usize, theme: &Theme) -> Vec<Line<'static>> {
        let Some((mode, body)) = self.shown else {
            return Vec::new();
        };

        match mode {
            Mode::Text => markdown::render_markdown(body, width, theme),
            Mode::Code => body
                .lines()
                .flat_map(|l| wrap_code_line(l, width))
                .map(|l| Line::from(Span::styled(l, Style::default().fg(theme.code_block))))
                .collect(),
            Mode::Image => body
                .lines()
                .flat_map(|l| {
                    if l.is_empty() {
                        vec![String::new()]
                    } else {
                        markdown::wrap_text(l, width)
                    }
                })
                .map(|l| Line::from(Span::styled(l, Style::default().fg(theme.foreground))))
                .collect(),
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .title(Span::styled(
                format!(" {} ", content::ASSISTANT_RESULT),
                Style::default()
                    .fg(theme.title)
                    .add_modifier(Modifier::BOLD),
            ))
            .title_bottom(
                Line::from(format!(" Ctrl+Y: {} ", content::ASSISTANT_COPY)).right_aligned(),
            );

        let inner = block.inner(area);
        // Leave a column for the scrollbar
        let width = inner.width.saturating_sub(1) as usize;
        let lines = self.lines(width, theme);
        self.update_dimensions(lines.len(), inner.height as usize);

        let paragraph = Paragraph::new(lines)
            .block(block)
            .scroll((self.scroll_offset() as u16, 0));
        f.render_widget(paragraph, area);

        render_scrollbar(f, inner, &self.scroll, ScrollbarStyle::Minimal, theme);
    }
}

/// Wrap one source line, continuing under its own indentation
fn wrap_code_line(line: &str, width: usize) -> Vec<String> {
    if line.width() <= width {
        return vec![line.to_string()];
    }

    let body = line.trim_start();
    let indent = &line[..line.len() - body.len()];
    // Deep indentation would leave no room; fall back to the left edge
    let indent = if indent.width() * 2 > width { "" } else { indent };

    markdown::wrap_text(body, width - indent.width())
        .into_iter()
        .map(|part| format!("{}{}", indent, part))
        .collect()
}

impl Scrollable for ResultPanel {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Interactive for ResultPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        self.handle_scroll_keys(key)
    }
}

impl Copyable for ResultPanel {
    fn copy_text(&self) -> Option<String> {
        self.shown.map(|(_, body)| body.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::canned_response;
    use chrono::Utc;

    fn response(mode: Mode) -> Response {
        Response {
            mode,
            body: canned_response(mode),
            generated_at: Utc::now(),
        }
    }

    #[test]
    fn copy_returns_the_exact_body() {
        let mut panel = ResultPanel::new();
        assert!(panel.copy_text().is_none());

        panel.show(&response(Mode::Code));
        assert_eq!(panel.copy_text().as_deref(), Some(canned_response(Mode::Code)));

        panel.clear();
        assert!(panel.is_empty());
        assert!(panel.copy_text().is_none());
    }

    #[test]
    fn code_keeps_source_lines_when_wide() {
        let theme = Theme::default();
        let mut panel = ResultPanel::new();
        panel.show(&response(Mode::Code));

        let lines = panel.lines(200, &theme);
        assert_eq!(lines.len(), canned_response(Mode::Code).lines().count());
    }

    #[test]
    fn code_wraps_under_indentation() {
        let theme = Theme::default();
        let mut panel = ResultPanel::new();
        panel.show(&response(Mode::Code));

        let lines = panel.lines(30, &theme);
        assert!(lines.len() > canned_response(Mode::Code).lines().count());
        assert!(lines.iter().all(|l| l.width() <= 30));

        let wrapped = wrap_code_line("    return compareFn ? items.sort(compareFn) : items;", 30);
        assert!(wrapped.len() > 1);
        assert!(wrapped.iter().all(|l| l.starts_with("    ")));
    }

    #[test]
    fn image_wraps_to_width() {
        let theme = Theme::default();
        let mut panel = ResultPanel::new();
        panel.show(&response(Mode::Image));

        let narrow = panel.lines(20, &theme);
        let wide = panel.lines(200, &theme);
        assert!(narrow.len() > wide.len());
        assert!(narrow.iter().all(|l| l.width() <= 20));
    }
}
