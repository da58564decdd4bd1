//! The remote text-generation capability.

use std::future::Future;
use std::sync::Arc;

use crate::error::OracleResult;

/// A remote text generator.
///
/// Implementations make a single attempt; the service decides what to do
/// when it fails.
pub trait FortuneProvider: Send + Sync {
    /// Generate a reply to `user_turn` under `system_prompt`.
    fn generate(
        &self,
        system_prompt: &str,
        user_turn: &str,
    ) -> impl Future<Output = OracleResult<String>> + Send;
}

impl<P: FortuneProvider> FortuneProvider for Arc<P> {
    fn generate(
        &self,
        system_prompt: &str,
        user_turn: &str,
    ) -> impl Future<Output = OracleResult<String>> + Send {
        (**self).generate(system_prompt, user_turn)
    }
}
