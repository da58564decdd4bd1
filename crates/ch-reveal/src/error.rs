//! Error types for the reveal controller.

use thiserror::Error;

/// Result type for reveal operations.
pub type RevealResult<T> = Result<T, RevealError>;

/// Errors that can occur while driving a reveal session.
#[derive(Debug, Error)]
pub enum RevealError {
    /// The request to the fortune endpoint failed.
    #[error("fortune request failed: {0}")]
    Transport(String),

    /// A completion arrived for a request this session no longer waits on.
    #[error("stale response for generation {got} (current {current})")]
    StaleResponse {
        /// Generation captured when the request was made.
        got: u64,
        /// Generation of the session now.
        current: u64,
    },

    /// The session task has stopped.
    #[error("session closed")]
    SessionClosed,
}
