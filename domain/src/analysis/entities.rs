//! Analysis result entities

use serde::{Deserialize, Serialize};

use super::validation::ValidationError;

/// Severity of an analyzed wound (Value Object)
///
/// Closed, ordered enumeration: `Low < Medium < High`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A first-aid recommendation produced by one candidate model.
///
/// The camelCase serialized form (`woundType`, `severity`, `description`,
/// `firstAidSteps`, `recommendation`) is the one externally visible contract
/// and is reproduced exactly on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Short name of the wound, e.g. "Scrape (Abrasion)".
    pub wound_type: String,
    pub severity: Severity,
    /// One or two sentences describing what the model saw.
    pub description: String,
    /// Ordered, at least one step, each non-empty.
    pub first_aid_steps: Vec<String>,
    /// What to do next, ending with the mandated disclaimer.
    pub recommendation: String,
}

impl AnalysisResult {
    /// Check the required-field invariants.
    ///
    /// Every string field must be non-empty after trimming and the step list
    /// must contain at least one non-empty entry. A violation rejects the
    /// whole result.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.wound_type.trim().is_empty() {
            return Err(ValidationError::EmptyField("woundType"));
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::EmptyField("description"));
        }
        if self.recommendation.trim().is_empty() {
            return Err(ValidationError::EmptyField("recommendation"));
        }
        if self.first_aid_steps.is_empty() {
            return Err(ValidationError::NoSteps);
        }
        if let Some(idx) = self.first_aid_steps.iter().position(|s| s.trim().is_empty()) {
            return Err(ValidationError::EmptyStep(idx));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_result() -> AnalysisResult {
        AnalysisResult {
            wound_type: "Cut (Laceration)".to_string(),
            severity: Severity::Low,
            description: "A shallow cut with minimal bleeding.".to_string(),
            first_aid_steps: vec![
                "Wash with soap and water".to_string(),
                "Apply gentle pressure until bleeding stops".to_string(),
            ],
            recommendation: "Monitor at home.".to_string(),
        }
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
    }

    #[test]
    fn test_severity_serializes_as_plain_string() {
        assert_eq!(serde_json::to_string(&Severity::Medium).unwrap(), "\"Medium\"");
    }

    #[test]
    fn test_wire_shape_is_camel_case() {
        let json = serde_json::to_value(valid_result()).unwrap();
        assert!(json.get("woundType").is_some());
        assert!(json.get("firstAidSteps").is_some());
        assert!(json.get("wound_type").is_none());
    }

    #[test]
    fn test_valid_result_passes() {
        assert!(valid_result().validate().is_ok());
    }

    #[test]
    fn test_blank_wound_type_rejected() {
        let mut result = valid_result();
        result.wound_type = "   ".to_string();
        assert_eq!(
            result.validate(),
            Err(ValidationError::EmptyField("woundType"))
        );
    }

    #[test]
    fn test_no_steps_rejected() {
        let mut result = valid_result();
        result.first_aid_steps.clear();
        assert_eq!(result.validate(), Err(ValidationError::NoSteps));
    }

    #[test]
    fn test_blank_step_rejected() {
        let mut result = valid_result();
        result.first_aid_steps.push(String::new());
        assert_eq!(result.validate(), Err(ValidationError::EmptyStep(2)));
    }
}
