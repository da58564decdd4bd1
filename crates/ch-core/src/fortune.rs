use crate::language::Language;

/// Visible suffix appended to fortunes served by the local fallback.
pub const SIMULATED_MARKER: &str = "(Simulated)";

/// A request for one fortune, built once per reveal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FortuneRequest {
    /// Localized name of the drawn card.
    pub card_name: String,
    /// Language the fortune should be written in.
    pub language: Language,
}

impl FortuneRequest {
    /// Create a request.
    pub fn new(card_name: impl Into<String>, language: Language) -> Self {
        Self {
            card_name: card_name.into(),
            language,
        }
    }
}

/// The text produced for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FortuneResult {
    /// Fortune text as shown to the user.
    pub text: String,
    /// Whether the local fallback produced this text.
    pub simulated: bool,
}

impl FortuneResult {
    /// A fortune generated by the remote provider, returned verbatim.
    pub fn generated(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            simulated: false,
        }
    }

    /// A fallback fortune; the simulation marker is appended.
    pub fn simulated(phrase: &str) -> Self {
        Self {
            text: format!("{phrase} {SIMULATED_MARKER}"),
            simulated: true,
        }
    }
}

impl std::fmt::Display for FortuneResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
