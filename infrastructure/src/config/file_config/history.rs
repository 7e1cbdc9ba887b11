//! History persistence settings (`[history]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// History persistence settings from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHistoryConfig {
    pub enabled: bool,
    /// Override the store path. Defaults to the platform data directory.
    pub path: Option<PathBuf>,
}

impl Default for FileHistoryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: None,
        }
    }
}

impl FileHistoryConfig {
    /// Effective store path: the explicit override, or
    /// `<data_dir>/aidpal/history.jsonl`.
    pub fn resolve_path(&self) -> Option<PathBuf> {
        self.path
            .clone()
            .or_else(|| dirs::data_dir().map(|d| d.join("aidpal").join("history.jsonl")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_by_default() {
        assert!(FileHistoryConfig::default().enabled);
    }

    #[test]
    fn test_explicit_path_wins() {
        let config = FileHistoryConfig {
            enabled: true,
            path: Some(PathBuf::from("/tmp/custom.jsonl")),
        };
        assert_eq!(
            config.resolve_path(),
            Some(PathBuf::from("/tmp/custom.jsonl"))
        );
    }
}
