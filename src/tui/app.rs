// TUI application state
//
// App owns the demo session and every component; views read it to render
// and the event loop calls into it. Generation runs in two halves: the key
// handler begins it and parks the PendingGeneration here, the event loop
// takes it, resolves it on a task and hands the outcome back.

use super::clipboard::{copy_to_clipboard, ClipboardWriter, SystemClipboard};
use super::components::landing_page::LandingPage;
use super::components::prompt_input::PromptInput;
use super::components::result_panel::ResultPanel;
use super::components::Toast;
use super::input::InputHandler;
use super::modal::Modal;
use super::traits::Copyable;
use crate::config::Config;
use crate::content;
use crate::generation::{DemoSession, GenerationError, Mode, PendingGeneration, Response};
use crate::logging::LogBuffer;
use crate::theme::{Theme, ThemeConfig};
use crossterm::event::KeyCode;
use std::time::Duration;

/// Main application state for the TUI
pub struct App {
    pub config: Config,
    pub theme: Theme,

    /// Assistant state machine and the last response
    pub session: DemoSession,

    pub landing: LandingPage,
    pub prompt: PromptInput,
    pub result: ResultPanel,

    /// Captured tracing events for the logs panel
    pub log_buffer: LogBuffer,
    pub show_logs: bool,

    pub modal: Option<Modal>,
    pub toast: Option<Toast>,

    /// Set when the user asks to quit
    pub should_quit: bool,

    input_handler: InputHandler,
    animation_frame: usize,
    /// Begun but not yet handed to the event loop
    pending: Option<PendingGeneration>,
    clipboard: Box<dyn ClipboardWriter>,
    /// Write theme changes back to the config file
    persist_settings: bool,
}

impl App {
    pub fn new(config: Config, log_buffer: LogBuffer) -> Self {
        let theme_config = ThemeConfig {
            use_theme_background: config.use_theme_background,
        };
        let theme = Theme::by_name_with_config(&config.theme, &theme_config);

        Self {
            theme,
            session: DemoSession::new(config.demo.default_mode),
            landing: LandingPage::new(),
            prompt: PromptInput::new(),
            result: ResultPanel::new(),
            log_buffer,
            show_logs: config.ui.show_logs,
            modal: None,
            toast: None,
            should_quit: false,
            input_handler: InputHandler::with_default_config(),
            animation_frame: 0,
            pending: None,
            clipboard: Box::new(SystemClipboard),
            persist_settings: true,
            config,
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Input plumbing
    // ─────────────────────────────────────────────────────────────

    /// Returns true if the key should trigger its action
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.input_handler.handle_key_release(key);
    }

    /// Advance the spinner (called on every tick)
    pub fn tick_animation(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    pub fn spinner_char(&self) -> char {
        const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];
        SPINNER[self.animation_frame % SPINNER.len()]
    }

    // ─────────────────────────────────────────────────────────────
    // Notices
    // ─────────────────────────────────────────────────────────────

    pub fn show_toast(&mut self, toast: Toast) {
        self.toast = Some(toast.with_duration(self.config.ui.toast_duration()));
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────

    /// Open the assistant. Prompt and result are kept from last time.
    pub fn open_assistant(&mut self) {
        tracing::debug!(mode = %self.session.mode(), "Assistant opened");
        self.modal = Some(Modal::Assistant);
    }

    pub fn open_help(&mut self) {
        self.modal = Some(Modal::Help);
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    // ─────────────────────────────────────────────────────────────
    // Assistant
    // ─────────────────────────────────────────────────────────────

    /// Switch the shared mode (showcase tabs and assistant tabs).
    /// Ignored while a generation is in flight.
    pub fn set_mode(&mut self, mode: Mode) {
        match self.session.set_mode(mode) {
            Ok(()) => tracing::debug!(mode = %mode, "Mode selected"),
            Err(e) => tracing::debug!("Mode change ignored: {}", e),
        }
    }

    pub fn next_mode(&mut self) {
        self.set_mode(self.session.mode().next());
    }

    pub fn prev_mode(&mut self) {
        self.set_mode(self.session.mode().prev());
    }

    /// Whether the generate trigger is enabled
    pub fn can_generate(&self) -> bool {
        self.session.can_trigger(self.prompt.text())
    }

    /// Submit the prompt. A blank prompt raises the error notice; a
    /// trigger while busy is the disabled button and does nothing.
    pub fn generate(&mut self) {
        match self.session.begin(self.prompt.text()) {
            Ok(pending) => {
                self.result.clear();
                self.pending = Some(pending);
            }
            Err(GenerationError::EmptyInput) => {
                tracing::debug!("Generation rejected: empty request");
                self.show_toast(Toast::error(
                    content::TOAST_ERROR_TITLE,
                    GenerationError::EmptyInput.to_string(),
                ));
            }
            Err(e) => tracing::debug!("Generation trigger ignored: {}", e),
        }
    }

    /// Hand the begun generation to the event loop
    pub fn take_pending(&mut self) -> Option<PendingGeneration> {
        self.pending.take()
    }

    /// Store the outcome of the in-flight generation
    pub fn finish_generation(&mut self, outcome: Option<Response>) {
        let produced = outcome.is_some();
        self.session.complete(outcome);

        if !produced {
            return;
        }
        if let Some(response) = self.session.response() {
            self.result.show(response);
        }
        self.show_toast(Toast::success(
            content::TOAST_DONE_TITLE,
            content::TOAST_DONE_BODY,
        ));
    }

    /// Copy the shown result; nothing happens before the first result
    pub fn copy_result(&mut self) {
        if let Some(text) = self.result.copy_text() {
            self.copy_with_notice(&text, content::TOAST_COPIED_BODY);
        }
    }

    /// Copy the API example of the selected tab
    pub fn copy_api_example(&mut self) {
        if let Some(text) = self.landing.copy_text() {
            self.copy_with_notice(&text, content::TOAST_EXAMPLE_COPIED_BODY);
        }
    }

    fn copy_with_notice(&mut self, text: &str, success_body: &str) {
        let toast = match copy_to_clipboard(self.clipboard.as_mut(), text) {
            Ok(()) => Toast::success(content::TOAST_COPIED_TITLE, success_body),
            Err(_) => Toast::error(content::TOAST_ERROR_TITLE, content::TOAST_COPY_FAILED_BODY),
        };
        self.show_toast(toast);
    }

    // ─────────────────────────────────────────────────────────────
    // Settings
    // ─────────────────────────────────────────────────────────────

    /// Switch to the next available theme and remember it in the config
    pub fn cycle_theme(&mut self) {
        let available = Theme::list_available();
        let Some(name) = Theme::next_name(&self.theme.name, &available) else {
            return;
        };

        let theme_config = ThemeConfig {
            use_theme_background: self.config.use_theme_background,
        };
        self.theme = Theme::by_name_with_config(&name, &theme_config);
        self.config.theme = name;
        tracing::info!(theme = %self.config.theme, "Theme changed");

        if self.persist_settings {
            if let Err(e) = self.config.save() {
                tracing::warn!("Failed to save theme to config: {}", e);
            }
        }
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
    }

    /// Quit, cancelling any in-flight generation
    pub fn quit(&mut self) {
        self.session.cancel_in_flight();
        self.pending = None;
        self.should_quit = true;
    }

    /// Latency each generation waits out
    pub fn latency(&self) -> Duration {
        self.config.demo.latency()
    }
}

#[cfg(test)]
impl App {
    /// App with an in-memory clipboard and no config writes
    pub fn for_test(clipboard: Box<dyn ClipboardWriter>) -> Self {
        let mut config = Config::default();
        config.demo.latency_ms = 1;
        let mut app = Self::new(config, LogBuffer::new());
        app.clipboard = clipboard;
        app.persist_settings = false;
        app
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::GenerationState;
    use crate::tui::clipboard::MemoryClipboard;
    use crate::tui::components::toast::ToastKind;
    use crate::tui::traits::Interactive;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn app() -> App {
        App::for_test(Box::new(MemoryClipboard::default()))
    }

    fn type_prompt(app: &mut App, text: &str) {
        for c in text.chars() {
            app.prompt
                .handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    async fn run_pending(app: &mut App) {
        let pending = app.take_pending().expect("generation begun");
        let outcome = pending.resolve(app.latency()).await;
        app.finish_generation(outcome);
    }

    #[test]
    fn blank_prompt_shows_error_notice() {
        let mut app = app();
        type_prompt(&mut app, "   ");
        app.generate();

        assert!(app.take_pending().is_none());
        assert_eq!(app.session.state(), GenerationState::Idle);
        let toast = app.toast.as_ref().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message(), "Ошибка: Введите запрос для генерации");
    }

    #[tokio::test]
    async fn generate_shows_result_and_success_notice() {
        let mut app = app();
        app.set_mode(Mode::Code);
        type_prompt(&mut app, "sort array");

        app.generate();
        assert!(app.session.is_busy());
        assert!(!app.can_generate());

        run_pending(&mut app).await;
        assert!(!app.session.is_busy());
        assert!(app.result.copy_text().unwrap().contains("function sortArray<T>"));
        assert_eq!(
            app.toast.as_ref().unwrap().message(),
            "Готово!: Контент успешно сгенерирован"
        );
        // The request is not cleared on submit
        assert_eq!(app.prompt.text(), "sort array");
    }

    #[tokio::test]
    async fn mode_is_locked_while_busy() {
        let mut app = app();
        type_prompt(&mut app, "Write about AI");
        app.generate();

        app.next_mode();
        assert_eq!(app.session.mode(), Mode::Text);

        // Second trigger is the disabled button: no notice, no new pending
        app.generate();
        assert!(app.toast.is_none());

        run_pending(&mut app).await;
        app.next_mode();
        assert_eq!(app.session.mode(), Mode::Image);
    }

    #[tokio::test]
    async fn copy_result_uses_clipboard() {
        let mut app = app();
        app.copy_result();
        assert!(app.toast.is_none());

        type_prompt(&mut app, "city");
        app.set_mode(Mode::Image);
        app.generate();
        run_pending(&mut app).await;

        app.copy_result();
        assert_eq!(
            app.toast.as_ref().unwrap().message(),
            "Скопировано!: Результат скопирован в буфер обмена"
        );
    }

    #[test]
    fn clipboard_failure_is_a_notice() {
        let mut app = App::for_test(Box::new(MemoryClipboard {
            fail: true,
            ..Default::default()
        }));
        app.copy_api_example();

        let toast = app.toast.as_ref().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message(), "Ошибка: Не удалось скопировать");
    }

    #[tokio::test]
    async fn quit_cancels_in_flight_generation() {
        let mut app = app();
        type_prompt(&mut app, "Write about AI");
        app.generate();
        let pending = app.take_pending().unwrap();

        app.quit();
        assert!(app.should_quit);
        assert!(pending.resolve(Duration::from_secs(10)).await.is_none());
    }

    #[test]
    fn theme_cycles_and_updates_config() {
        let mut app = app();
        let before = app.theme.name.clone();
        app.cycle_theme();
        assert_ne!(app.theme.name, before);
        assert_eq!(app.config.theme, app.theme.name);
    }
}
