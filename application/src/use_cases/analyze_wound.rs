//! Analyze Wound use case.
//!
//! The analysis orchestrator: submits one multimodal request per candidate
//! model, in priority order, until one returns a schema-valid result.
//!
//! Every per-candidate failure is handled the same way, whether it is a
//! transport error, a status-coded remote error, malformed JSON, or a
//! rejected schema: the loop advances to the next candidate. Nothing
//! short-circuits before the list is exhausted. On exhaustion, the
//! user-facing message is chosen from the last failure only.

use crate::ports::model_gateway::{GatewayError, ModelGateway, VisionRequest};
use crate::ports::progress::{AnalysisProgress, NoProgress};
use aidpal_domain::analysis::parsing::{ResponseError, parse_analysis_response};
use aidpal_domain::util::truncate_str;
use aidpal_domain::{AnalysisPromptTemplate, AnalysisResult, ImageError, ImagePayload, Model};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// User-facing message when the last failure was a rate limit (429).
pub const MSG_RATE_LIMITED: &str =
    "AidPal is very popular right now! Please try again in a minute.";
/// User-facing message when the last failure was an unknown model (404).
pub const MSG_MAINTENANCE: &str =
    "AidPal is down for a little maintenance. Please check back soon.";
/// User-facing message for every other exhaustion cause.
pub const MSG_ALL_BUSY: &str =
    "All of AidPal's helper buddies are busy right now. Please try again shortly.";

/// Errors surfaced to the caller of [`AnalyzeWoundUseCase`].
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("{0}")]
    Image(#[from] ImageError),

    #[error("No candidate models configured")]
    NoCandidates,

    /// Every candidate failed. The message is ready for display.
    #[error("{message}")]
    Exhausted { message: String },
}

/// Input for the [`AnalyzeWoundUseCase`].
#[derive(Debug, Clone)]
pub struct AnalyzeWoundInput {
    /// Encoded image, either a `data:` URI or a bare base64 payload.
    pub image: String,
    /// Free-text notes from the user, may be empty. Substituted into the
    /// prompt verbatim.
    pub context: String,
}

impl AnalyzeWoundInput {
    pub fn new(image: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            context: context.into(),
        }
    }
}

/// One failed candidate trial.
#[derive(Debug)]
enum TrialFailure {
    Gateway(GatewayError),
    Response(ResponseError),
}

impl TrialFailure {
    /// Status code of the failure, when the remote supplied one.
    /// Response-shape failures never carry a status.
    fn status(&self) -> Option<u16> {
        match self {
            TrialFailure::Gateway(e) => e.status_code(),
            TrialFailure::Response(_) => None,
        }
    }
}

impl fmt::Display for TrialFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrialFailure::Gateway(e) => write!(f, "{}", e),
            TrialFailure::Response(e) => write!(f, "{}", e),
        }
    }
}

/// Pick the exhaustion message from the terminal failure's status code.
///
/// Only the last failure is consulted; the classification of earlier
/// failures is discarded.
fn exhaustion_message(last: Option<&TrialFailure>) -> &'static str {
    match last.and_then(TrialFailure::status) {
        Some(429) => MSG_RATE_LIMITED,
        Some(404) => MSG_MAINTENANCE,
        _ => MSG_ALL_BUSY,
    }
}

/// Use case for analyzing a wound photo.
///
/// Executes the fallback flow:
/// 1. Parse the image string's data-URI framing
/// 2. Build the prompt (knowledge base + user context) and output schema
/// 3. Try candidates strictly sequentially; first valid result wins
/// 4. On exhaustion, classify the last failure into one user-facing message
pub struct AnalyzeWoundUseCase {
    gateway: Arc<dyn ModelGateway>,
    /// Fixed trial order, highest priority first. Never mutated.
    candidates: Vec<Model>,
}

impl AnalyzeWoundUseCase {
    pub fn new(gateway: Arc<dyn ModelGateway>, candidates: Vec<Model>) -> Self {
        Self {
            gateway,
            candidates,
        }
    }

    /// The structured-output contract sent with every request.
    ///
    /// Mirrors [`AnalysisResult`]'s serialized shape. Type casing follows
    /// the generative-language API convention.
    pub fn response_schema() -> serde_json::Value {
        serde_json::json!({
            "type": "OBJECT",
            "properties": {
                "woundType": { "type": "STRING" },
                "severity": { "type": "STRING", "enum": ["Low", "Medium", "High"] },
                "description": { "type": "STRING" },
                "firstAidSteps": { "type": "ARRAY", "items": { "type": "STRING" } },
                "recommendation": { "type": "STRING" }
            },
            "required": ["woundType", "severity", "description", "firstAidSteps", "recommendation"]
        })
    }

    /// Execute the analysis without progress reporting.
    pub async fn execute(&self, input: AnalyzeWoundInput) -> Result<AnalysisResult, AnalysisError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the analysis with progress callbacks.
    pub async fn execute_with_progress(
        &self,
        input: AnalyzeWoundInput,
        progress: &dyn AnalysisProgress,
    ) -> Result<AnalysisResult, AnalysisError> {
        if self.candidates.is_empty() {
            return Err(AnalysisError::NoCandidates);
        }

        let image = ImagePayload::from_data_uri(&input.image)?;
        let request = VisionRequest {
            image,
            prompt: AnalysisPromptTemplate::analysis_prompt(&input.context),
            response_schema: Self::response_schema(),
        };

        info!(
            "Starting wound analysis with {} candidate model(s)",
            self.candidates.len()
        );

        // One in-flight call at a time; candidates are never raced.
        let total = self.candidates.len();
        let mut last_failure: Option<TrialFailure> = None;

        for (idx, model) in self.candidates.iter().enumerate() {
            progress.on_candidate_start(model, idx + 1, total);
            debug!(%model, attempt = idx + 1, total, "Trying candidate model");

            let failure = match self.gateway.generate(model, &request).await {
                Ok(text) => match parse_analysis_response(&text) {
                    Ok(result) => {
                        info!(%model, "Candidate returned a valid analysis");
                        progress.on_analysis_complete(model);
                        return Ok(result);
                    }
                    Err(e) => {
                        warn!(
                            %model,
                            response = truncate_str(&text, 120),
                            "Candidate response rejected: {}",
                            e
                        );
                        TrialFailure::Response(e)
                    }
                },
                Err(e) => {
                    warn!(%model, "Candidate call failed: {}", e);
                    TrialFailure::Gateway(e)
                }
            };

            progress.on_candidate_failed(model, &failure.to_string());
            last_failure = Some(failure);
        }

        let message = exhaustion_message(last_failure.as_ref());
        warn!("All {} candidate(s) failed: {}", total, message);
        Err(AnalysisError::Exhausted {
            message: message.to_string(),
        })
    }
}
