//! Core types for Celestial Hand: the tarot card catalog, reading languages,
//! fortune requests and results, and the JSON wire format of `/api/chat`.
//!
//! This crate has no I/O. The oracle, reveal controller and HTTP server all
//! build on the types defined here.

/// The static Major Arcana catalog.
pub mod catalog;
/// Error types used throughout the crate.
pub mod error;
/// Fortune requests and results.
pub mod fortune;
/// Reading languages and their localized fixed strings.
pub mod language;
/// Injectable uniform random selection.
pub mod random;
/// JSON bodies exchanged over `/api/chat`.
pub mod wire;

/// Re-export catalog types.
pub use catalog::{Card, MAJOR_ARCANA};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export fortune types.
pub use fortune::{FortuneRequest, FortuneResult, SIMULATED_MARKER};
/// Re-export the language enum.
pub use language::Language;
/// Re-export random sources.
pub use random::{RandomSource, Sequence};
/// Re-export wire types.
pub use wire::{ChatRequest, ChatResponse, ErrorResponse};
