//! Candidate model configuration from TOML (`[models]` section)

use super::{ConfigIssue, IssueSeverity};
use aidpal_domain::Model;
use serde::{Deserialize, Serialize};

/// Candidate model configuration from TOML
///
/// # Example
///
/// ```toml
/// [models]
/// candidates = ["gemini-2.5-flash", "gemini-2.5-flash-lite"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    /// Priority-ordered fallback chain, highest priority first.
    /// An empty list means the built-in defaults.
    pub candidates: Vec<String>,
}

impl FileModelsConfig {
    /// Parse the candidate strings into domain models, collecting issues
    /// for blank entries. An empty (or entirely blank) list falls back to
    /// [`Model::default_candidates`].
    pub fn parse_candidates(&self) -> (Vec<Model>, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let mut models = Vec::new();

        for s in &self.candidates {
            if s.trim().is_empty() {
                issues.push(ConfigIssue {
                    severity: IssueSeverity::Error,
                    message: "models.candidates: model name cannot be empty".to_string(),
                });
            } else {
                // Model::from_str is infallible; unknown names become Custom(...)
                let model: Model = s.parse().unwrap();
                models.push(model);
            }
        }

        if models.is_empty() {
            models = Model::default_candidates();
        }

        (models, issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_uses_defaults() {
        let config = FileModelsConfig::default();
        let (models, issues) = config.parse_candidates();
        assert_eq!(models, Model::default_candidates());
        assert!(issues.is_empty());
    }

    #[test]
    fn test_explicit_candidates_preserve_order() {
        let config = FileModelsConfig {
            candidates: vec![
                "gemini-2.0-flash".to_string(),
                "gemini-2.5-flash".to_string(),
            ],
        };
        let (models, issues) = config.parse_candidates();
        assert_eq!(
            models,
            vec![Model::Gemini20Flash, Model::Gemini25Flash]
        );
        assert!(issues.is_empty());
    }

    #[test]
    fn test_blank_entry_reported_and_skipped() {
        let config = FileModelsConfig {
            candidates: vec!["".to_string(), "gemini-2.5-flash".to_string()],
        };
        let (models, issues) = config.parse_candidates();
        assert_eq!(models, vec![Model::Gemini25Flash]);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, IssueSeverity::Error);
    }

    #[test]
    fn test_unknown_name_becomes_custom() {
        let config = FileModelsConfig {
            candidates: vec!["my-private-model".to_string()],
        };
        let (models, _) = config.parse_candidates();
        assert_eq!(models, vec![Model::Custom("my-private-model".to_string())]);
    }
}
