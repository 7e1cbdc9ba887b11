//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod history;
mod models;
mod output;
mod provider;

pub use history::FileHistoryConfig;
pub use models::FileModelsConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use provider::FileProviderConfig;

use serde::{Deserialize, Serialize};

/// Severity of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    Warning,
    Error,
}

/// A problem detected while validating the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: IssueSeverity,
    pub message: String,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Candidate model selection
    pub models: FileModelsConfig,
    /// Provider connection settings
    pub provider: FileProviderConfig,
    /// History persistence settings
    pub history: FileHistoryConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        self.models.parse_candidates().1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_no_issues() {
        assert!(FileConfig::default().validate().is_empty());
    }

    #[test]
    fn test_config_deserializes_from_toml() {
        let config: FileConfig = toml::from_str(
            r#"
            [models]
            candidates = ["gemini-2.5-flash", "gemini-2.0-flash"]

            [provider]
            base_url = "http://localhost:9000"
            timeout_secs = 30

            [history]
            enabled = false

            [output]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.models.candidates.len(), 2);
        assert_eq!(config.provider.base_url, "http://localhost:9000");
        assert_eq!(config.provider.timeout_secs, 30);
        assert!(!config.history.enabled);
        assert_eq!(config.output.format, FileOutputFormat::Json);
    }
}
