// Status bar component
//
// Key hints for whatever has input, plus the selected mode, generation
// state and the number of completed generations.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use crate::tui::modal::Modal;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Key hints for the current context
pub fn hints(app: &App, bp: Breakpoint) -> &'static str {
    let wide = bp.at_least(Breakpoint::Wide);
    match app.modal {
        Some(Modal::Assistant) if wide => {
            "Tab: тип │ Enter: сгенерировать │ Ctrl+J: новая строка │ Ctrl+Y: копировать │ Esc: закрыть"
        }
        Some(Modal::Assistant) => "Tab │ Enter │ Ctrl+Y │ Esc",
        Some(Modal::Help) => "Esc: закрыть",
        None if wide => {
            "↑↓ PgUp/PgDn: прокрутка │ 1-4: разделы │ t: демо │ a: API │ o: шаги │ Enter: ассистент │ ?: помощь │ q: выход"
        }
        None => "↑↓ │ 1-4 │ Enter │ ? │ q",
    }
}

/// Render the status bar
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let bp = Breakpoint::from_width(area.width);

    let state = if app.session.is_busy() {
        format!("{} генерация", app.spinner_char())
    } else {
        "готов".to_string()
    };

    let right = Line::from(vec![
        Span::styled(app.session.mode().label(), Style::default().fg(theme.accent)),
        Span::styled(
            format!(" │ {} │ ✓ {} ", state, app.session.completed()),
            Style::default().fg(theme.status_bar),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [left_area, right_area] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(right.width() as u16),
    ])
    .areas(inner);

    let hint_line = Paragraph::new(Span::styled(
        format!(" {}", hints(app, bp)),
        Style::default().fg(theme.status_bar),
    ));
    f.render_widget(hint_line, left_area);
    f.render_widget(Paragraph::new(right), right_area);
}
