//! Fortune service for Celestial Hand.
//!
//! Given a card name and a language, [`FortuneService`] asks a remote
//! text-generation provider for a short reading. When no credential is
//! configured or the provider fails for any reason, it falls back to a
//! pre-written fortune tagged `(Simulated)`. Callers never see an error.

pub mod config;
pub mod error;
pub mod fallback;
pub mod gemini;
pub mod prompts;
pub mod provider;
pub mod service;

pub use config::OracleConfig;
pub use error::{OracleError, OracleResult};
pub use gemini::GeminiProvider;
pub use provider::FortuneProvider;
pub use service::FortuneService;
