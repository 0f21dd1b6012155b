// Views module - screen-level rendering logic
//
// One screen: the landing page between the title and status bars, with the
// logs panel underneath when toggled. Modals and toasts draw on top.

mod landing;
mod modal;

use super::app::App;
use crate::tui::components::{self, logs_panel::LOGS_PANEL_HEIGHT};
use ratatui::layout::{Constraint, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    // Apply theme background to entire frame (respects use_theme_background toggle)
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let logs_height = if app.show_logs { LOGS_PANEL_HEIGHT } else { 0 };
    let [title, content, logs, status] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(logs_height),
        Constraint::Length(2),
    ])
    .areas(f.area());

    components::render_title(f, title, app);
    landing::render(f, content, app);
    if app.show_logs {
        components::render_logs_panel(f, logs, app);
    }
    components::render_status(f, status, app);

    // Render modal overlay (on top of everything)
    if let Some(modal_state) = app.modal.take() {
        modal::render(f, &modal_state, app);
        app.modal = Some(modal_state);
    }

    // Render toast notification (on top of modal too)
    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }

    // Clear expired toast after render
    app.clear_expired_toast();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;
    use crate::generation::{canned_response, Mode, Response};
    use crate::tui::clipboard::MemoryClipboard;
    use crate::tui::traits::Scrollable;
    use chrono::Utc;
    use crate::tui::components::Toast;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::time::Duration;

    fn screen(app: &mut App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn app() -> App {
        App::for_test(Box::new(MemoryClipboard::default()))
    }

    #[test]
    fn landing_shows_brand_and_hero() {
        let mut app = app();
        let out = screen(&mut app, 120, 40);
        assert!(out.contains("McRellyWorld"));
        assert!(out.contains(content::HERO.headline));
        assert!(out.contains(content::HERO.primary_cta));
    }

    #[test]
    fn assistant_modal_shows_placeholder_and_disabled_trigger() {
        let mut app = app();
        app.open_assistant();
        let out = screen(&mut app, 120, 40);
        assert!(out.contains(content::ASSISTANT_TITLE));
        assert!(out.contains("Например: Напиши статью"));
        assert!(out.contains(&format!("[ {} ]", content::ASSISTANT_TRIGGER)));
        assert!(!out.contains("Enter: Сгенерировать"));
    }

    #[test]
    fn help_lists_theme() {
        let mut app = app();
        app.open_help();
        let out = screen(&mut app, 100, 40);
        assert!(out.contains("Помощь"));
        assert!(out.contains(&app.theme.name));
    }

    #[test]
    fn expired_toast_is_cleared_after_draw() {
        let mut app = app();
        app.toast = Some(Toast::success("Готово!", "ok").with_duration(Duration::ZERO));
        screen(&mut app, 80, 24);
        assert!(app.toast.is_none());
    }

    #[test]
    fn logs_panel_toggles() {
        let mut app = app();
        tracing::subscriber::with_default(
            tracing_subscriber::layer::SubscriberExt::with(
                tracing_subscriber::registry(),
                crate::logging::TuiLogLayer::new(app.log_buffer.clone()),
            ),
            || tracing::info!("hello from the log"),
        );

        assert!(!screen(&mut app, 100, 30).contains("System Logs"));
        app.toggle_logs();
        let out = screen(&mut app, 100, 30);
        assert!(out.contains("System Logs (1)"));
        assert!(out.contains("hello from the log"));
    }

    #[test]
    fn code_result_wraps_in_narrow_dialog() {
        let mut app = app();
        app.open_assistant();
        app.result.show(&Response {
            mode: Mode::Code,
            body: canned_response(Mode::Code),
            generated_at: Utc::now(),
        });

        let out = screen(&mut app, 60, 50);
        assert!(out.contains("function sortArray<T>"));
        assert!(out.contains("number): T[] {"));

        app.result.scroll_to_bottom();
        let out = screen(&mut app, 60, 50);
        assert!(out.contains("a.age - b.age);"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut app = app();
        app.open_assistant();
        screen(&mut app, 20, 8);
    }
}
