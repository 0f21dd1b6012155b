// Modal overlay rendering
//
// Modals are rendered on top of the landing page:
// - Assistant: mode tabs, prompt editor, trigger, result
// - Help: keyboard shortcuts and the active theme

use crate::content;
use crate::generation::Mode;
use crate::tui::app::App;
use crate::tui::modal::Modal;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render a modal dialog as a centered overlay
pub fn render(f: &mut Frame, modal: &Modal, app: &mut App) {
    match modal {
        Modal::Help => render_help(f, app),
        Modal::Assistant => render_assistant(f, app),
    }
}

/// Calculate centered rect for modal dialog
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn render_assistant(f: &mut Frame, app: &mut App) {
    let screen = f.area();
    let width = screen.width.saturating_sub(4).min(90);
    let height = screen.height.saturating_sub(2).min(36);
    let area = centered_rect(width, height, screen);

    f.render_widget(Clear, area);

    let theme = app.theme.clone();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.highlight))
        .style(Style::default().bg(theme.background))
        .title(Span::styled(
            format!(" ✦ {} ", content::ASSISTANT_TITLE),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::from(" Esc: закрыть ").centered());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let result_height = if app.result.is_empty() {
        Constraint::Length(1)
    } else {
        Constraint::Min(6)
    };
    let [description, tabs_area, prompt_area, trigger_area, result_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Length(6),
        Constraint::Length(2),
        result_height,
    ])
    .areas(inner);

    f.render_widget(
        Paragraph::new(content::ASSISTANT_DESCRIPTION)
            .style(Style::default().fg(theme.muted))
            .wrap(Wrap { trim: true }),
        description,
    );

    // Mode tabs, locked while busy
    let busy = app.session.is_busy();
    let selected = app.session.mode();
    let mut tab_spans = Vec::new();
    for mode in Mode::ALL {
        let style = if mode == selected {
            Style::default()
                .fg(theme.selection_fg)
                .bg(theme.selection)
                .add_modifier(Modifier::BOLD)
        } else if busy {
            Style::default()
                .fg(theme.muted)
                .add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(theme.foreground)
        };
        tab_spans.push(Span::styled(format!(" {} ", mode.label()), style));
        tab_spans.push(Span::raw(" "));
    }
    tab_spans.push(Span::styled("Tab/Shift+Tab", Style::default().fg(theme.muted)));
    f.render_widget(Paragraph::new(Line::from(tab_spans)), tabs_area);

    app.prompt
        .render(f, prompt_area, selected, &theme, !busy);

    // Trigger: disabled when busy or the prompt is blank
    let trigger = if busy {
        Span::styled(
            format!("[ {} {} ]", app.spinner_char(), content::ASSISTANT_TRIGGER_BUSY),
            Style::default().fg(theme.accent),
        )
    } else if app.can_generate() {
        Span::styled(
            format!("[ Enter: {} ]", content::ASSISTANT_TRIGGER),
            Style::default()
                .fg(theme.background)
                .bg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            format!("[ {} ]", content::ASSISTANT_TRIGGER),
            Style::default()
                .fg(theme.muted)
                .add_modifier(Modifier::DIM),
        )
    };
    let trigger_line = Line::from(vec![
        trigger,
        Span::styled("   Ctrl+J: новая строка", Style::default().fg(theme.muted)),
    ]);
    f.render_widget(Paragraph::new(trigger_line), trigger_area);

    if !app.result.is_empty() {
        app.result.render(f, result_area, &theme);
    }
}

/// Render the help modal overlay
fn render_help(f: &mut Frame, app: &App) {
    let key_style = Style::default().fg(app.theme.accent);
    let desc_style = Style::default().fg(app.theme.foreground);
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .add_modifier(Modifier::BOLD);
    let divider_style = Style::default().fg(app.theme.border);

    // Helper to create a keybind line: "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<14}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Страница", header_style)),
        kb("↑/↓, j/k", "Прокрутка"),
        kb("PgUp/PgDn", "Страница вверх/вниз"),
        kb("Home/End", "В начало/конец"),
        kb("1-4", "Разделы"),
        kb("t/T, ←/→", "Вкладки демонстрации"),
        kb("a/A", "Вкладки примеров API"),
        kb("y", "Копировать пример API"),
        kb("o", "Шаги быстрого старта"),
        Line::raw(""),
        Line::from(Span::styled("  Ассистент", header_style)),
        kb("Enter, g", "Открыть"),
        kb("Tab/Shift+Tab", "Тип контента"),
        kb("Enter", "Сгенерировать"),
        kb("Ctrl+J", "Новая строка"),
        kb("Ctrl+Y", "Копировать результат"),
        kb("PgUp/PgDn", "Прокрутка результата"),
        kb("Esc", "Закрыть"),
        Line::raw(""),
        Line::from(Span::styled("  Общее", header_style)),
        kb("F2", "Следующая тема"),
        kb("L", "Системные логи"),
        kb("?", "Эта справка"),
        kb("q", "Выход"),
        Line::raw(""),
        Line::from(Span::styled(
            "  ──────────────────────────────────────",
            divider_style,
        )),
        Line::from(vec![
            Span::styled("  Тема: ", desc_style),
            Span::styled(app.theme.name.as_str(), key_style),
        ]),
    ]);

    let width = 48;
    let height = 32;
    let area = centered_rect(width, height, f.area());

    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(app.theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.highlight))
                .border_type(app.theme.border_type)
                .title(" Помощь ")
                .title_bottom(Line::from(" ? или Esc: закрыть ").centered()),
        );

    f.render_widget(paragraph, area);
}
