//! The fortune service: remote generation with an infallible fallback.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, warn};

use ch_core::{FortuneRequest, FortuneResult, Language, RandomSource};

use crate::config::OracleConfig;
use crate::error::{OracleError, OracleResult};
use crate::fallback;
use crate::gemini::GeminiProvider;
use crate::prompts::{system_prompt, user_turn};
use crate::provider::FortuneProvider;

/// Produces one fortune per call and never fails.
///
/// Holds an optional provider. With no provider every call is served from the
/// fallback list; with one, provider errors are logged and also served from
/// the fallback list.
pub struct FortuneService<P = GeminiProvider> {
    provider: Option<P>,
    rng: Mutex<Box<dyn RandomSource>>,
    thinking_delay: Duration,
}

impl FortuneService<GeminiProvider> {
    /// Build a service from config, with a Gemini provider when a key is set.
    pub fn from_config(config: &OracleConfig) -> OracleResult<Self> {
        let provider = match GeminiProvider::from_config(config) {
            Ok(p) => Some(p),
            Err(OracleError::MissingCredential) => None,
            Err(e) => return Err(e),
        };
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self::new(provider)
            .with_rng(rng)
            .with_thinking_delay(config.thinking_delay))
    }
}

impl<P: FortuneProvider> FortuneService<P> {
    /// Create a service with an OS-seeded RNG and no thinking delay.
    pub fn new(provider: Option<P>) -> Self {
        Self {
            provider,
            rng: Mutex::new(Box::new(StdRng::from_os_rng())),
            thinking_delay: Duration::ZERO,
        }
    }

    /// Replace the random source used for fallback picks.
    pub fn with_rng(mut self, rng: impl RandomSource + 'static) -> Self {
        self.rng = Mutex::new(Box::new(rng));
        self
    }

    /// Pause this long before answering from the fallback list.
    pub fn with_thinking_delay(mut self, delay: Duration) -> Self {
        self.thinking_delay = delay;
        self
    }

    /// Whether a remote provider is configured.
    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Serve a [`FortuneRequest`].
    pub async fn fulfil(&self, request: &FortuneRequest) -> FortuneResult {
        self.generate_fortune(&request.card_name, request.language)
            .await
    }

    /// Produce a fortune for `card_name` in `language`.
    pub async fn generate_fortune(&self, card_name: &str, language: Language) -> FortuneResult {
        match self.try_remote(card_name, language).await {
            Ok(text) => FortuneResult::generated(text),
            Err(OracleError::EmptyGeneration) => {
                warn!(card = card_name, "provider returned no text");
                FortuneResult::generated(language.silent_stars())
            }
            Err(OracleError::MissingCredential) => {
                debug!(card = card_name, "no credential, using fallback");
                self.fallback(language).await
            }
            Err(e) => {
                warn!(card = card_name, error = %e, "provider failed, using fallback");
                self.fallback(language).await
            }
        }
    }

    async fn try_remote(&self, card_name: &str, language: Language) -> OracleResult<String> {
        let provider = self.provider.as_ref().ok_or(OracleError::MissingCredential)?;
        let system = system_prompt(card_name, language);
        let text = provider.generate(&system, user_turn(language)).await?;
        if text.trim().is_empty() {
            return Err(OracleError::EmptyGeneration);
        }
        Ok(text)
    }

    async fn fallback(&self, language: Language) -> FortuneResult {
        if !self.thinking_delay.is_zero() {
            tokio::time::sleep(self.thinking_delay).await;
        }
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        fallback::pick(language, &mut **rng)
    }
}
