//! Request and response bodies of `POST /api/chat`.

use serde::{Deserialize, Serialize};

use crate::fortune::FortuneRequest;
use crate::language::Language;

/// Body sent by the client: the card name and an optional language code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Card name to read for.
    pub prompt: String,
    /// `"en"` or `"zh"`; anything else (or absence) reads as English.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl ChatRequest {
    /// Build the body for a fortune request.
    pub fn new(prompt: impl Into<String>, language: Language) -> Self {
        Self {
            prompt: prompt.into(),
            language: Some(language.code().to_string()),
        }
    }

    /// Resolved language, defaulting to English.
    pub fn language(&self) -> Language {
        self.language
            .as_deref()
            .and_then(Language::from_code)
            .unwrap_or_default()
    }

    /// Convert into a fortune request.
    pub fn into_fortune_request(self) -> FortuneRequest {
        let language = self.language();
        FortuneRequest::new(self.prompt, language)
    }
}

impl From<&FortuneRequest> for ChatRequest {
    fn from(req: &FortuneRequest) -> Self {
        Self::new(req.card_name.clone(), req.language)
    }
}

/// Body returned for every generation outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The fortune text.
    pub text: String,
}

/// Body returned when the request itself could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// What was wrong with the request.
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_defaults_to_english() {
        let req: ChatRequest = serde_json::from_str(r#"{"prompt":"The Fool"}"#).unwrap();
        assert_eq!(req.language(), Language::En);

        let req: ChatRequest =
            serde_json::from_str(r#"{"prompt":"The Fool","language":"klingon"}"#).unwrap();
        assert_eq!(req.language(), Language::En);
    }

    #[test]
    fn chinese_request() {
        let req: ChatRequest =
            serde_json::from_str(r#"{"prompt":"愚者","language":"zh"}"#).unwrap();
        let fortune = req.into_fortune_request();
        assert_eq!(fortune.card_name, "愚者");
        assert_eq!(fortune.language, Language::Zh);
    }

    #[test]
    fn prompt_is_required() {
        assert!(serde_json::from_str::<ChatRequest>(r#"{"language":"en"}"#).is_err());
    }

    #[test]
    fn built_from_fortune_request() {
        let body = ChatRequest::from(&FortuneRequest::new("Death", Language::Zh));
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["prompt"], "Death");
        assert_eq!(json["language"], "zh");
    }
}
