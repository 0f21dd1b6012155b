// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks, finished generations)
// - Rendering the UI
// - Running each generation on its own task so the UI keeps animating

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod layout;
pub mod markdown;
pub mod modal;
pub mod scroll;
pub mod traits;
pub mod views;

use crate::config::Config;
use crate::generation::Response;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::{Modal, ModalAction};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use traits::{Interactive, Scrollable};

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done, even if the loop failed.
pub async fn run_tui(config: Config, log_buffer: LogBuffer) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(config, log_buffer);
    tracing::info!(theme = %app.theme.name, mode = %app.session.mode(), "TUI started");

    let result = run_event_loop(&mut terminal, &mut app).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on three sources with tokio::select!:
/// 1. Keyboard and mouse input
/// 2. Timer ticks (spinner animation, toast expiry)
/// 3. Outcomes of generations running on their own tasks
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));
    let (done_tx, mut done_rx) = mpsc::channel::<Option<Response>>(4);

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.tick_animation();
            }

            Some(outcome) = done_rx.recv() => {
                app.finish_generation(outcome);
            }
        }

        // A key handler may have begun a generation
        if let Some(pending) = app.take_pending() {
            let tx = done_tx.clone();
            let latency = app.latency();
            tokio::spawn(async move {
                let outcome = pending.resolve(latency).await;
                // Receiver is gone only after quit
                let _ = tx.send(outcome).await;
            });
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Modal → Global → Landing page
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    // Raw mode swallows SIGINT; Ctrl+C quits from anywhere
    if key_event.kind == KeyEventKind::Press
        && key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        app.quit();
        return;
    }

    // Layer 1: Modal captures all input when active
    if handle_modal_input(app, &key_event) {
        return;
    }

    // Layer 2: Global keys
    if handle_global_keys(app, &key_event) {
        return;
    }

    let key = key_event.code;

    // Layer 3: Landing page (InputHandler for debounce and repeat)
    match key_event.kind {
        KeyEventKind::Press => {
            if !app.handle_key_press(key) {
                return;
            }
            match key {
                KeyCode::Enter | KeyCode::Char('g') => app.open_assistant(),
                KeyCode::Char('t') | KeyCode::Right => app.next_mode(),
                KeyCode::Char('T') | KeyCode::Left => app.prev_mode(),
                KeyCode::Char('y') => app.copy_api_example(),
                KeyCode::Char('L') => app.toggle_logs(),
                _ => {
                    app.landing.handle_key(key_event);
                }
            }
        }
        KeyEventKind::Release => app.handle_key_release(key),
        _ => {}
    }
}

/// Handle mouse input
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    let in_assistant = app.modal == Some(Modal::Assistant);
    match mouse_event.kind {
        MouseEventKind::ScrollUp if in_assistant => app.result.scroll_up(),
        MouseEventKind::ScrollDown if in_assistant => app.result.scroll_down(),
        MouseEventKind::ScrollUp if app.modal.is_none() => app.landing.scroll_up(),
        MouseEventKind::ScrollDown if app.modal.is_none() => app.landing.scroll_down(),
        _ => {}
    }
}

/// Handle modal input - returns true if modal absorbed the input
fn handle_modal_input(app: &mut App, key_event: &KeyEvent) -> bool {
    let Some(modal) = app.modal else {
        return false;
    };

    // Always process Release events to keep InputHandler in sync,
    // otherwise keys stay "pressed" after the modal closes
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return true;
    }

    if key_event.kind != KeyEventKind::Press {
        return true;
    }

    match modal.handle_input(*key_event) {
        ModalAction::None => {}
        ModalAction::Close => app.close_modal(),
        ModalAction::NextMode => app.next_mode(),
        ModalAction::PrevMode => app.prev_mode(),
        ModalAction::Generate => app.generate(),
        ModalAction::Newline => app.prompt.insert_newline(),
        ModalAction::Copy => app.copy_result(),
        ModalAction::PageUp => app.result.page_up(),
        ModalAction::PageDown => app.result.page_down(),
        ModalAction::Edit(key) => {
            if !app.prompt.handle_key(key).was_handled() {
                // Unbound chords fall through to result scrolling
                app.result.handle_key(key);
            }
        }
    }

    true
}

/// Handle global keys - returns true if handled
/// Goes through InputHandler so a held key fires once
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    if key_event.kind != KeyEventKind::Press {
        return false;
    }

    let key = key_event.code;

    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            if app.handle_key_press(key) {
                app.quit();
            }
            true
        }
        KeyCode::F(2) => {
            if app.handle_key_press(key) {
                app.cycle_theme();
            }
            true
        }
        KeyCode::Char('?') => {
            if app.handle_key_press(key) {
                app.open_help();
            }
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::Mode;
    use crate::tui::clipboard::MemoryClipboard;

    fn app() -> App {
        App::for_test(Box::new(MemoryClipboard::default()))
    }

    fn press(app: &mut App, code: KeyCode) {
        press_with(app, code, KeyModifiers::NONE);
    }

    fn press_with(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
        handle_key_event(app, KeyEvent::new(code, modifiers));
        // Terminals with release events; keeps the debounce out of the way
        let mut release = KeyEvent::new(code, modifiers);
        release.kind = KeyEventKind::Release;
        handle_key_event(app, release);
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn enter_opens_assistant_and_letters_are_typed() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.modal, Some(Modal::Assistant));

        // Global letters are plain text inside the dialog
        type_str(&mut app, "qq?");
        assert_eq!(app.prompt.text(), "qq?");
        assert!(!app.should_quit);
        assert_eq!(app.modal, Some(Modal::Assistant));
    }

    #[test]
    fn esc_keeps_prompt_for_next_open() {
        let mut app = app();
        press(&mut app, KeyCode::Char('g'));
        type_str(&mut app, "hi");
        press(&mut app, KeyCode::Esc);
        assert!(app.modal.is_none());

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.prompt.text(), "hi");
    }

    #[test]
    fn tabs_share_mode_between_landing_and_dialog() {
        let mut app = app();
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.session.mode(), Mode::Image);

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.session.mode(), Mode::Code);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.session.mode(), Mode::Text);
    }

    #[test]
    fn enter_in_dialog_begins_generation() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "Write about AI");
        press_with(&mut app, KeyCode::Char('j'), KeyModifiers::CONTROL);
        type_str(&mut app, "more");
        assert_eq!(app.prompt.text(), "Write about AI\nmore");

        press(&mut app, KeyCode::Enter);
        assert!(app.session.is_busy());
        assert!(app.take_pending().is_some());
    }

    #[test]
    fn blank_submit_raises_notice() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert!(!app.session.is_busy());
        assert!(app.toast.is_some());
    }

    #[test]
    fn q_quits_from_landing_and_ctrl_c_from_dialog() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = self::app();
        press(&mut app, KeyCode::Enter);
        press_with(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }

    #[test]
    fn help_opens_and_closes() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.modal, Some(Modal::Help));
        press(&mut app, KeyCode::Char('?'));
        assert!(app.modal.is_none());
    }

    #[test]
    fn landing_keys_reach_the_page() {
        let mut app = app();
        press(&mut app, KeyCode::Char('o'));
        assert_eq!(app.landing.open_step, Some(1));
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.landing.api_tab, Mode::Image);

        press(&mut app, KeyCode::Char('L'));
        assert!(app.show_logs);
    }
}
