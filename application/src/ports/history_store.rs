//! Port for persisting analysis history.
//!
//! The history store is an opaque append-only record of past analyses. The
//! analysis orchestrator neither reads nor writes it; the caller appends
//! after a successful analysis.

use aidpal_domain::AnalysisResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One persisted analysis: the submitted image and the validated result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryItem {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    /// The analyzed image as submitted (data URI).
    pub image: String,
    pub result: AnalysisResult,
}

impl HistoryItem {
    /// Create a new record stamped with the current UTC time.
    pub fn new(image: impl Into<String>, result: AnalysisResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            image: image.into(),
            result,
        }
    }
}

/// Port for the append-only history store.
///
/// `append` is intentionally non-fallible: persistence failures must never
/// disrupt delivery of an analysis result. Implementations log and move on.
pub trait HistoryStore: Send + Sync {
    /// Record one analysis.
    fn append(&self, item: &HistoryItem);

    /// All stored records, oldest first.
    fn list(&self) -> Vec<HistoryItem>;
}

/// No-op implementation for tests and when history is disabled.
pub struct NoHistoryStore;

impl HistoryStore for NoHistoryStore {
    fn append(&self, _item: &HistoryItem) {}

    fn list(&self) -> Vec<HistoryItem> {
        Vec::new()
    }
}
