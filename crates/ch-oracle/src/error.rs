//! Error types for the fortune service.
//!
//! None of these reach the caller of
//! [`FortuneService::generate_fortune`](crate::FortuneService::generate_fortune);
//! they select between the placeholder and the fallback path.

use thiserror::Error;

/// Result type for oracle operations.
pub type OracleResult<T> = Result<T, OracleError>;

/// Errors raised while trying to obtain a generated fortune.
#[derive(Debug, Error)]
pub enum OracleError {
    /// No provider credential is configured.
    #[error("no provider credential configured")]
    MissingCredential,

    /// The provider answered with an error status.
    #[error("provider returned {status}: {message}")]
    Provider {
        /// HTTP status code.
        status: u16,
        /// Provider's error message, if it sent one.
        message: String,
    },

    /// The request to the provider failed (connect, timeout, decode).
    #[error("provider request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider succeeded but produced no text.
    #[error("provider returned no text")]
    EmptyGeneration,
}
