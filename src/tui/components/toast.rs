//! Toast notification component
//!
//! A non-blocking overlay that auto-dismisses after a configurable duration.
//! Renders in the bottom-right corner on top of all other content.

use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

/// Default on-screen time
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(2);

/// Visual variant of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    /// Errors the user can recover from (blank request, clipboard refused)
    Error,
}

/// A toast notification that auto-dismisses
#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub body: String,
    /// When the toast was created
    created_at: Instant,
    /// How long to show the toast
    duration: Duration,
}

impl Toast {
    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, title, body)
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, title, body)
    }

    fn new(kind: ToastKind, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            body: body.into(),
            created_at: Instant::now(),
            duration: DEFAULT_TOAST_DURATION,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// "Title: body", as shown on one line
    pub fn message(&self) -> String {
        format!("{}: {}", self.title, self.body)
    }

    /// Check if the toast has expired and should be removed
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Render the toast in the bottom-right corner
    ///
    /// Uses `Clear` widget to ensure toast is visible on top of other content.
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let message_width = self.message().width() as u16;
        // 2 chars padding each side plus borders
        let width = (message_width + 4).min(area.width.saturating_sub(4));
        let height = 3;

        // Position: bottom-right corner, offset by 2 cells from edge
        let x = area.right().saturating_sub(width + 2);
        let y = area.bottom().saturating_sub(height + 2);
        let toast_area = Rect::new(x, y, width, height).intersection(area);

        let accent = match self.kind {
            ToastKind::Success => theme.success,
            ToastKind::Error => theme.error,
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(accent))
            .style(Style::default().bg(theme.background));

        let line = Line::from(vec![
            Span::styled(
                format!("{}: ", self.title),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(self.body.as_str(), Style::default().fg(theme.foreground)),
        ]);

        let text = Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(block);

        // Clear the area first so toast appears on top
        f.render_widget(Clear, toast_area);
        f.render_widget(text, toast_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_duration_expires_immediately() {
        let toast = Toast::success("Готово!", "ok").with_duration(Duration::ZERO);
        assert!(toast.is_expired());

        let toast = Toast::error("Ошибка", "no").with_duration(Duration::from_secs(60));
        assert!(!toast.is_expired());
        assert_eq!(toast.kind, ToastKind::Error);
    }

    #[test]
    fn message_joins_title_and_body() {
        let toast = Toast::error("Ошибка", "Введите запрос для генерации");
        assert_eq!(toast.message(), "Ошибка: Введите запрос для генерации");
    }
}
