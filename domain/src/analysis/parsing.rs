//! Model response parsing.
//!
//! Extracts the JSON object from free-form model output. Models often wrap
//! the object in prose or markdown fencing even when asked for bare JSON,
//! so extraction takes the span from the first `{` to the last `}`. This is
//! pure domain logic, no I/O.

use thiserror::Error;

use super::entities::AnalysisResult;
use super::validation::{ValidationError, validate_analysis};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResponseError {
    #[error("Response contains no JSON object")]
    NoJsonObject,

    #[error("Response is not valid JSON: {0}")]
    MalformedJson(String),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Extract the first-`{`-to-last-`}` span from a response.
pub fn extract_json_object(response: &str) -> Option<&str> {
    let start = response.find('{')?;
    let end = response[start..].rfind('}')?;
    Some(&response[start..start + end + 1])
}

/// Parse a raw model response into a validated [`AnalysisResult`].
///
/// Any failure here counts as a candidate failure and advances the fallback
/// loop; it is never surfaced to the caller directly.
pub fn parse_analysis_response(response: &str) -> Result<AnalysisResult, ResponseError> {
    let json_str = extract_json_object(response).ok_or(ResponseError::NoJsonObject)?;
    let value: serde_json::Value =
        serde_json::from_str(json_str).map_err(|e| ResponseError::MalformedJson(e.to_string()))?;
    Ok(validate_analysis(value)?)
}
