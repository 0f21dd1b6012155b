// Generation controller - the assistant's two-state machine
//
// A session holds the selected mode, the idle/busy state and the last
// response. Triggering is split in two halves so the TUI event loop never
// blocks on the simulated latency:
// - begin():    validate, go busy, hand out a PendingGeneration
// - complete(): store the outcome, go idle
// The PendingGeneration resolves on its own task and the event loop feeds
// the result back through a channel.

use super::{canned_response, GenerationError, Mode};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Simulated network round-trip for every generation
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(300);

/// Whether a generation is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationState {
    #[default]
    Idle,
    Busy,
}

/// A completed generation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    /// Mode that was active when the generation was triggered
    pub mode: Mode,
    pub body: &'static str,
    pub generated_at: DateTime<Utc>,
}

/// A generation that passed validation and is waiting out its latency
#[derive(Debug)]
pub struct PendingGeneration {
    mode: Mode,
    body: &'static str,
    cancel: CancellationToken,
}

impl PendingGeneration {
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Wait the simulated latency, then produce the response.
    ///
    /// Returns `None` if the session cancelled this generation first.
    pub async fn resolve(self, latency: Duration) -> Option<Response> {
        tokio::select! {
            _ = self.cancel.cancelled() => {
                tracing::debug!(mode = %self.mode, "Generation cancelled");
                None
            }
            _ = tokio::time::sleep(latency) => Some(Response {
                mode: self.mode,
                body: self.body,
                generated_at: Utc::now(),
            }),
        }
    }
}

/// In-memory state of the assistant for one run of the program
#[derive(Debug, Default)]
pub struct DemoSession {
    mode: Mode,
    state: GenerationState,
    response: Option<Response>,
    in_flight: Option<CancellationToken>,
    completed: u64,
}

impl DemoSession {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn state(&self) -> GenerationState {
        self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state == GenerationState::Busy
    }

    /// Last completed response, if any
    pub fn response(&self) -> Option<&Response> {
        self.response.as_ref()
    }

    /// Number of generations that produced a response
    pub fn completed(&self) -> u64 {
        self.completed
    }

    /// Switch the selected mode. Locked while a generation is in flight so
    /// the response always matches the mode it was triggered with.
    pub fn set_mode(&mut self, mode: Mode) -> Result<(), GenerationError> {
        if self.is_busy() {
            return Err(GenerationError::Busy);
        }
        self.mode = mode;
        Ok(())
    }

    /// Whether the trigger is enabled for `request`
    pub fn can_trigger(&self, request: &str) -> bool {
        !self.is_busy() && !request.trim().is_empty()
    }

    /// Validate `request` and enter the busy state.
    ///
    /// On error nothing changes: state, mode and response stay as they were.
    pub fn begin(&mut self, request: &str) -> Result<PendingGeneration, GenerationError> {
        if self.is_busy() {
            return Err(GenerationError::Busy);
        }
        if request.trim().is_empty() {
            return Err(GenerationError::EmptyInput);
        }

        let cancel = CancellationToken::new();
        self.state = GenerationState::Busy;
        self.response = None;
        self.in_flight = Some(cancel.clone());

        tracing::info!(mode = %self.mode, request_chars = request.chars().count(), "Generation started");

        Ok(PendingGeneration {
            mode: self.mode,
            body: canned_response(self.mode),
            cancel,
        })
    }

    /// Store the outcome of the in-flight generation and go idle.
    pub fn complete(&mut self, outcome: Option<Response>) {
        self.state = GenerationState::Idle;
        self.in_flight = None;

        if let Some(response) = outcome {
            tracing::info!(mode = %response.mode, "Generation complete");
            self.completed += 1;
            self.response = Some(response);
        }
    }

    /// Cancel the in-flight generation, if any. The session stays busy
    /// until `complete` receives the (empty) outcome.
    pub fn cancel_in_flight(&mut self) {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }
    }

    /// Run a whole generation in place: begin, wait, complete.
    pub async fn generate(
        &mut self,
        request: &str,
        latency: Duration,
    ) -> Result<&Response, GenerationError> {
        let pending = self.begin(request)?;
        let outcome = pending.resolve(latency).await;
        self.complete(outcome);
        self.response.as_ref().ok_or(GenerationError::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    const FAST: Duration = Duration::from_millis(1);

    #[tokio::test]
    async fn response_ignores_request_text() {
        for mode in Mode::ALL {
            let mut session = DemoSession::new(mode);
            let first = session.generate("non-empty", FAST).await.unwrap().body;
            let second = session
                .generate("something else entirely", FAST)
                .await
                .unwrap()
                .body;
            assert_eq!(first, second);
            assert_eq!(first, canned_response(mode));
        }
    }

    #[tokio::test]
    async fn blank_request_is_rejected_without_state_change() {
        let mut session = DemoSession::new(Mode::Code);
        session.generate("sort array", FAST).await.unwrap();
        let before = session.response().cloned();

        for blank in ["", "   ", "\n\t "] {
            let err = session.generate(blank, FAST).await.unwrap_err();
            assert_eq!(err, GenerationError::EmptyInput);
            assert_eq!(session.state(), GenerationState::Idle);
            assert_eq!(session.response().cloned(), before);
        }
    }

    #[tokio::test]
    async fn second_trigger_while_busy_is_rejected() {
        let mut session = DemoSession::new(Mode::Text);
        let pending = session.begin("Write about AI").unwrap();
        assert!(session.is_busy());
        assert!(!session.can_trigger("Write about AI"));

        assert_eq!(
            session.begin("again").unwrap_err(),
            GenerationError::Busy
        );
        assert_eq!(session.set_mode(Mode::Code), Err(GenerationError::Busy));
        assert_eq!(session.mode(), Mode::Text);

        let outcome = pending.resolve(FAST).await;
        session.complete(outcome);
        assert!(!session.is_busy());
        assert!(session.can_trigger("again"));
    }

    #[tokio::test]
    async fn success_returns_to_idle_with_response() {
        let mut session = DemoSession::default();
        assert!(session.response().is_none());

        let response = session.generate("hello", FAST).await.unwrap();
        assert!(!response.body.is_empty());
        assert_eq!(session.state(), GenerationState::Idle);
        assert_eq!(session.completed(), 1);
    }

    #[tokio::test]
    async fn text_scenario() {
        let mut session = DemoSession::new(Mode::Text);
        let response = session.generate("Write about AI", FAST).await.unwrap();
        assert_eq!(response.mode, Mode::Text);
        assert!(response
            .body
            .starts_with("# Будущее искусственного интеллекта"));
    }

    #[tokio::test]
    async fn code_scenario() {
        let mut session = DemoSession::new(Mode::Code);
        let response = session.generate("sort array", FAST).await.unwrap();
        assert!(response.body.contains("function sortArray<T>"));
        assert!(response.body.contains("[...arr].sort(compareFn)"));
    }

    #[tokio::test]
    async fn image_scenario() {
        let mut session = DemoSession::new(Mode::Image);
        let response = session.generate("city", FAST).await.unwrap();
        assert!(response.body.contains("Изображение успешно сгенерировано"));
        assert!(response.body.contains("выберите план Pro или Enterprise"));
    }

    #[tokio::test]
    async fn waits_the_simulated_latency() {
        let mut session = DemoSession::new(Mode::Text);
        let latency = Duration::from_millis(30);
        let started = Instant::now();
        session.generate("timing", latency).await.unwrap();
        assert!(started.elapsed() >= latency);
    }

    #[tokio::test]
    async fn response_tracks_mode_at_trigger() {
        let mut session = DemoSession::new(Mode::Image);
        session.generate("city", FAST).await.unwrap();
        assert_eq!(session.response().map(|r| r.mode), Some(Mode::Image));

        session.set_mode(Mode::Code).unwrap();
        session.generate("sort array", FAST).await.unwrap();
        assert_eq!(session.response().map(|r| r.mode), Some(Mode::Code));
    }

    #[tokio::test]
    async fn cancelled_generation_writes_nothing() {
        let mut session = DemoSession::new(Mode::Text);
        let pending = session.begin("Write about AI").unwrap();
        session.cancel_in_flight();

        let outcome = pending.resolve(Duration::from_secs(10)).await;
        assert!(outcome.is_none());

        session.complete(outcome);
        assert_eq!(session.state(), GenerationState::Idle);
        assert!(session.response().is_none());
        assert_eq!(session.completed(), 0);
    }
}
