//! Output settings (`[output]` section)

use serde::{Deserialize, Serialize};

/// Output format selection from TOML
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOutputFormat {
    #[default]
    Text,
    Json,
}

/// Output settings from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    pub format: FileOutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format_is_text() {
        assert_eq!(FileOutputConfig::default().format, FileOutputFormat::Text);
    }

    #[test]
    fn test_format_parses_lowercase() {
        let config: FileOutputConfig = toml::from_str("format = \"json\"").unwrap();
        assert_eq!(config.format, FileOutputFormat::Json);
    }
}
