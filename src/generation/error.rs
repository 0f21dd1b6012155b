//! Generation error types

/// Errors from triggering a generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    /// The request was empty or whitespace only.
    #[error("Введите запрос для генерации")]
    EmptyInput,

    /// A generation is already in flight; the trigger is disabled.
    #[error("generation already in progress")]
    Busy,

    /// The in-flight generation was cancelled before it produced a response.
    #[error("generation cancelled")]
    Cancelled,
}
