//! Provider connection settings (`[provider]` section)

use crate::providers::gemini::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Provider connection settings from TOML
///
/// # Example
///
/// ```toml
/// [provider]
/// api_key_env = "GEMINI_API_KEY"
/// timeout_secs = 60
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// API key written directly into the file. Prefer `api_key_env`.
    pub api_key: Option<String>,
    /// Environment variable to read the API key from.
    pub api_key_env: String,
    /// Base URL of the Generative Language API.
    pub base_url: String,
    /// Per-request timeout in seconds. 0 disables the timeout.
    pub timeout_secs: u64,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: "GEMINI_API_KEY".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 60,
        }
    }
}

impl FileProviderConfig {
    /// Resolve the API key: explicit value first, then the environment.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| {
                std::env::var(&self.api_key_env)
                    .ok()
                    .filter(|k| !k.trim().is_empty())
            })
    }

    /// Request timeout as a [`Duration`], `None` when disabled.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileProviderConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.timeout(), Some(Duration::from_secs(60)));
    }

    #[test]
    fn test_explicit_api_key_wins() {
        let config = FileProviderConfig {
            api_key: Some("file-key".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key(), Some("file-key".to_string()));
    }

    #[test]
    fn test_blank_api_key_is_ignored() {
        let config = FileProviderConfig {
            api_key: Some("   ".to_string()),
            // Env var that will not exist
            api_key_env: "AIDPAL_TEST_MISSING_KEY_VAR".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key(), None);
    }

    #[test]
    fn test_zero_timeout_disables() {
        let config = FileProviderConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.timeout(), None);
    }
}
