use std::io;
use thiserror::Error;

/// Application-wide error type, consolidating all possible errors into a single enum.
#[derive(Debug, Error)]
pub enum AppError {
    /// The submitted input was empty or whitespace-only. No assistant turn is produced.
    #[error("Input is empty")]
    EmptyInput,

    /// A new submission arrived while the previous assistant reply was still pending.
    /// The session accepts one outstanding turn at a time.
    #[error("A reply is still pending for the previous message")]
    ReplyPending,

    /// Represents data validation errors (e.g., a malformed knowledge base).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., an unreadable knowledge base file).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("JSON error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}
