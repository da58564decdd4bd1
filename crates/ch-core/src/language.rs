use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Language a reading is delivered in.
///
/// Chinese text throughout the workspace is Traditional Chinese.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    #[default]
    En,
    /// Traditional Chinese.
    Zh,
}

impl Language {
    /// Both supported languages.
    pub const ALL: [Language; 2] = [Language::En, Language::Zh];

    /// Wire code (`"en"` or `"zh"`).
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    /// Parse a wire code, ignoring case and surrounding whitespace.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "zh" => Some(Self::Zh),
            _ => None,
        }
    }

    /// Placeholder shown when no fortune text could be obtained.
    pub fn silent_stars(self) -> &'static str {
        match self {
            Self::En => "The stars are silent.",
            Self::Zh => "星辰沉默不語。",
        }
    }

    /// Indication shown while a fortune request is outstanding.
    pub fn consulting(self) -> &'static str {
        match self {
            Self::En => "Consulting the Aether...",
            Self::Zh => "正在諮詢以太……",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| CoreError::UnknownLanguage(s.to_string()))
    }
}
