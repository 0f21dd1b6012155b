// Title bar component
//
// Brand on the left, section links when there is room, the header call to
// action on the right. A spinner follows the brand while generating.

use crate::content::{self, Section};
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar at the top of the screen
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let bp = Breakpoint::from_width(area.width);

    let mut spans = vec![Span::styled(
        format!(" ✦ {}", content::BRAND),
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD),
    )];

    if app.session.is_busy() {
        spans.push(Span::styled(
            format!("  {} {}", app.spinner_char(), content::ASSISTANT_TRIGGER_BUSY),
            Style::default().fg(theme.accent),
        ));
    }

    if bp.shows_nav() {
        spans.push(Span::raw("   "));
        for (i, section) in Section::ALL.iter().enumerate() {
            spans.push(Span::styled(
                format!(" {} ", i + 1),
                Style::default().fg(theme.muted),
            ));
            spans.push(Span::styled(
                section.nav_label(),
                Style::default().fg(theme.foreground),
            ));
            spans.push(Span::raw("  "));
        }
    }

    let cta = Line::from(vec![
        Span::styled("Enter ", Style::default().fg(theme.muted)),
        Span::styled(
            format!("[ {} ] ", content::HERO.nav_cta),
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::BOLD),
        ),
    ])
    .right_aligned();

    let title = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.title))
            .title_top(Line::from(" ? ").right_aligned())
            .title_bottom(cta),
    );

    f.render_widget(title, area);
}
