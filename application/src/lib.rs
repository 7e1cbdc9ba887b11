//! Application layer for aidpal
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    history_store::{HistoryItem, HistoryStore, NoHistoryStore},
    model_gateway::{GatewayError, ModelGateway, VisionRequest},
    progress::{AnalysisProgress, NoProgress},
};
pub use use_cases::analyze_wound::{
    AnalysisError, AnalyzeWoundInput, AnalyzeWoundUseCase, MSG_ALL_BUSY, MSG_MAINTENANCE,
    MSG_RATE_LIMITED,
};
