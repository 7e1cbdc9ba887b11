//! Strict structural validation for decoded model responses.
//!
//! [`validate_analysis`] is the single gate between raw model output and the
//! caller: a JSON value either decodes into a typed [`AnalysisResult`] that
//! satisfies every field invariant, or it is rejected. Rejection counts as a
//! candidate failure, never a fatal error.

use thiserror::Error;

use super::entities::AnalysisResult;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The value does not decode into the five-field shape at all
    /// (missing field, wrong type, unknown severity).
    #[error("Response does not match the expected shape: {0}")]
    Shape(String),

    #[error("Field '{0}' must not be empty")]
    EmptyField(&'static str),

    #[error("firstAidSteps must contain at least one step")]
    NoSteps,

    #[error("firstAidSteps[{0}] must not be empty")]
    EmptyStep(usize),
}

/// Decode and strictly validate a JSON value into an [`AnalysisResult`].
pub fn validate_analysis(value: serde_json::Value) -> Result<AnalysisResult, ValidationError> {
    let result: AnalysisResult =
        serde_json::from_value(value).map_err(|e| ValidationError::Shape(e.to_string()))?;
    result.validate()?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::entities::Severity;

    #[test]
    fn test_valid_value_decodes() {
        let value = serde_json::json!({
            "woundType": "Scrape (Abrasion)",
            "severity": "Low",
            "description": "A shallow scrape on the knee.",
            "firstAidSteps": ["Wash with soap/water", "Apply ointment"],
            "recommendation": "Monitor at home"
        });
        let result = validate_analysis(value).unwrap();
        assert_eq!(result.wound_type, "Scrape (Abrasion)");
        assert_eq!(result.severity, Severity::Low);
        assert_eq!(result.first_aid_steps.len(), 2);
    }

    #[test]
    fn test_missing_first_aid_steps_is_shape_error() {
        let value = serde_json::json!({
            "woundType": "Cut",
            "severity": "Low",
            "description": "x",
            "recommendation": "y"
        });
        assert!(matches!(
            validate_analysis(value),
            Err(ValidationError::Shape(_))
        ));
    }

    #[test]
    fn test_unknown_severity_is_shape_error() {
        let value = serde_json::json!({
            "woundType": "Cut",
            "severity": "Catastrophic",
            "description": "x",
            "firstAidSteps": ["y"],
            "recommendation": "z"
        });
        assert!(matches!(
            validate_analysis(value),
            Err(ValidationError::Shape(_))
        ));
    }

    #[test]
    fn test_empty_steps_rejected_after_decode() {
        let value = serde_json::json!({
            "woundType": "Cut",
            "severity": "Low",
            "description": "x",
            "firstAidSteps": [],
            "recommendation": "z"
        });
        assert_eq!(validate_analysis(value), Err(ValidationError::NoSteps));
    }
}
