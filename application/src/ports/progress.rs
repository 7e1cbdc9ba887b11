//! Analysis progress port.
//!
//! [`AnalysisProgress`] is an output port that the presentation layer
//! implements to show which candidate model is currently being tried.
//!
//! All methods have default no-op implementations, so implementers only
//! need to override the callbacks they care about.

use aidpal_domain::Model;

/// Progress notifier for the candidate fallback loop.
pub trait AnalysisProgress: Send + Sync {
    /// Called before a candidate model is tried.
    fn on_candidate_start(&self, _model: &Model, _attempt: usize, _total: usize) {}

    /// Called when a candidate fails and the loop advances.
    fn on_candidate_failed(&self, _model: &Model, _reason: &str) {}

    /// Called when a candidate returns a valid result.
    fn on_analysis_complete(&self, _model: &Model) {}
}

/// No-op implementation for tests and quiet mode.
pub struct NoProgress;

impl AnalysisProgress for NoProgress {}
