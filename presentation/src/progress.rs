//! Progress reporting for the candidate fallback loop

use aidpal_application::AnalysisProgress;
use aidpal_domain::Model;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Spinner naming the candidate model currently being tried
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
    }

    /// Clear the spinner. Safe to call after success or exhaustion.
    pub fn finish(&self) {
        if let Some(pb) = self.spinner.lock().unwrap().take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisProgress for ProgressReporter {
    fn on_candidate_start(&self, model: &Model, attempt: usize, total: usize) {
        let mut guard = self.spinner.lock().unwrap();
        let pb = guard.get_or_insert_with(|| {
            let pb = ProgressBar::new_spinner();
            pb.set_style(Self::style());
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        });
        pb.set_message(format!("Asking {} ({}/{})...", model, attempt, total));
    }

    fn on_candidate_failed(&self, model: &Model, _reason: &str) {
        if let Some(pb) = self.spinner.lock().unwrap().as_ref() {
            pb.println(format!("{} did not answer, trying the next helper...", model));
        }
    }

    fn on_analysis_complete(&self, _model: &Model) {
        self.finish();
    }
}
