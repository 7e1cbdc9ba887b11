//! Configuration loading and raw TOML data types.

pub mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileConfig, FileHistoryConfig, FileModelsConfig, FileOutputConfig,
    FileOutputFormat, FileProviderConfig, IssueSeverity,
};
pub use loader::ConfigLoader;
