//! Gemini `generateContent` provider.

use serde::Deserialize;
use serde_json::json;

use crate::config::OracleConfig;
use crate::error::{OracleError, OracleResult};
use crate::provider::FortuneProvider;

/// Provider backed by the Generative Language API.
#[derive(Debug, Clone)]
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: String,
    url: String,
}

impl GeminiProvider {
    /// Build a provider from config.
    ///
    /// Fails with [`OracleError::MissingCredential`] when no key is set.
    pub fn from_config(config: &OracleConfig) -> OracleResult<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or(OracleError::MissingCredential)?;
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            client,
            api_key,
            url: format!("{}/models/{}:generateContent", config.endpoint, config.model),
        })
    }

    /// Full URL requests are posted to (without the key).
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text parts of the first candidate, unless blank.
    fn text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        (!text.trim().is_empty()).then_some(text)
    }
}

fn error_message(body: &serde_json::Value) -> String {
    body.get("error")
        .and_then(|e| e.get("message"))
        .and_then(|m| m.as_str())
        .unwrap_or("unknown error")
        .to_string()
}

impl FortuneProvider for GeminiProvider {
    async fn generate(&self, system_prompt: &str, user_turn: &str) -> OracleResult<String> {
        let body = json!({
            "systemInstruction": { "parts": [{ "text": system_prompt }] },
            "contents": [{ "role": "user", "parts": [{ "text": user_turn }] }],
        });

        let resp = self
            .client
            .post(&self.url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body: serde_json::Value = resp.json().await.unwrap_or_default();
            return Err(OracleError::Provider {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let parsed: GenerateResponse = resp.json().await?;
        parsed.text().ok_or(OracleError::EmptyGeneration)
    }
}
