//! Configuration for the fortune service.

use std::path::Path;
use std::time::Duration;

use tracing::debug;

/// Environment variable holding the provider credential.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
/// Environment variable overriding the model name.
pub const MODEL_VAR: &str = "GEMINI_MODEL";
/// Dotenv-style file consulted when the process environment lacks a key.
pub const ENV_FILE: &str = ".env.local";

/// Base URL of the Generative Language API.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Configuration for a [`FortuneService`](crate::FortuneService).
#[derive(Debug, Clone)]
pub struct OracleConfig {
    /// Provider credential. `None` selects the fallback path for every call.
    pub api_key: Option<String>,
    /// Model name.
    pub model: String,
    /// API base URL, without trailing slash.
    pub endpoint: String,
    /// Timeout for the single provider request.
    pub timeout: Duration,
    /// Pause before answering from the fallback list.
    pub thinking_delay: Duration,
    /// RNG seed for reproducible fallback picks. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(20),
            thinking_delay: Duration::ZERO,
            seed: None,
        }
    }
}

impl OracleConfig {
    /// Read the credential and model from the process environment, falling
    /// back to `.env.local` in the working directory.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env_or_file(std::env::var(key).ok(), Path::new(ENV_FILE), key))
    }

    /// Build a config from an arbitrary variable lookup.
    ///
    /// Empty values count as absent.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            api_key: non_empty(API_KEY_VAR).map(|v| v.trim().to_string()),
            model: non_empty(MODEL_VAR)
                .map(|v| v.trim().to_string())
                .unwrap_or(defaults.model),
            ..Self::default()
        }
    }

    /// Set the credential.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Remove the credential, forcing the fallback path.
    pub fn without_api_key(mut self) -> Self {
        self.api_key = None;
        self
    }

    /// Set the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the API base URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the provider request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the pause applied before fallback answers.
    pub fn with_thinking_delay(mut self, delay: Duration) -> Self {
        self.thinking_delay = delay;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Whether a credential is configured.
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}

/// `value` unless it is missing or blank, else `key` from the file at `path`.
fn env_or_file(value: Option<String>, path: &Path, key: &str) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .or_else(|| read_env_file_key(path, key))
}

/// Read `key` from a dotenv-style file of `KEY=value` lines.
///
/// Blank lines and `#` comments are skipped; surrounding quotes are stripped.
pub fn read_env_file_key(path: &Path, key: &str) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    let prefix = format!("{key}=");
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = line.strip_prefix("export ").unwrap_or(line);
        if let Some(value) = line.strip_prefix(&prefix) {
            debug!(key, path = %path.display(), "found key in env file");
            let value = value.trim().trim_matches('"').trim_matches('\'');
            return Some(value.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn default_config() {
        let cfg = OracleConfig::default();
        assert!(!cfg.has_credential());
        assert_eq!(cfg.model, DEFAULT_MODEL);
        assert_eq!(cfg.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(cfg.thinking_delay, Duration::ZERO);
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn builder_methods() {
        let cfg = OracleConfig::default()
            .with_api_key("k")
            .with_model("m")
            .with_endpoint("http://localhost:9/")
            .with_seed(3)
            .with_thinking_delay(Duration::from_millis(1500));
        assert_eq!(cfg.api_key.as_deref(), Some("k"));
        assert_eq!(cfg.model, "m");
        assert_eq!(cfg.endpoint, "http://localhost:9");
        assert_eq!(cfg.seed, Some(3));
        assert_eq!(cfg.thinking_delay, Duration::from_millis(1500));
        assert!(!cfg.without_api_key().has_credential());
    }

    #[test]
    fn lookup_reads_key_and_model() {
        let vars: HashMap<&str, &str> =
            HashMap::from([(API_KEY_VAR, " secret "), (MODEL_VAR, "gemini-pro")]);
        let cfg = OracleConfig::from_lookup(|k| vars.get(k).map(|v| (*v).to_string()));
        assert_eq!(cfg.api_key.as_deref(), Some("secret"));
        assert_eq!(cfg.model, "gemini-pro");
    }

    #[test]
    fn empty_key_counts_as_absent() {
        let cfg = OracleConfig::from_lookup(|k| (k == API_KEY_VAR).then(|| "  ".to_string()));
        assert!(!cfg.has_credential());
        assert_eq!(cfg.model, DEFAULT_MODEL);
    }

    #[test]
    fn env_file_parsing() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(".env.local");
        std::fs::write(
            &path,
            "# comment\n\nOTHER=1\nexport GEMINI_API_KEY=\"abc123\"\n",
        )
        .unwrap();
        assert_eq!(
            read_env_file_key(&path, API_KEY_VAR).as_deref(),
            Some("abc123")
        );
        assert_eq!(read_env_file_key(&path, "OTHER").as_deref(), Some("1"));
        assert_eq!(read_env_file_key(&path, "MISSING"), None);
    }

    #[test]
    fn blank_environment_value_defers_to_env_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(".env.local");
        std::fs::write(&path, "GEMINI_API_KEY=from-file\n").unwrap();

        let key = |value: Option<&str>| env_or_file(value.map(String::from), &path, API_KEY_VAR);
        assert_eq!(key(Some("")).as_deref(), Some("from-file"));
        assert_eq!(key(Some("   ")).as_deref(), Some("from-file"));
        assert_eq!(key(None).as_deref(), Some("from-file"));
        assert_eq!(key(Some("from-env")).as_deref(), Some("from-env"));
    }

    #[test]
    fn missing_env_file() {
        let dir = tempfile::TempDir::new().unwrap();
        assert_eq!(
            read_env_file_key(&dir.path().join("nope"), API_KEY_VAR),
            None
        );
    }
}
