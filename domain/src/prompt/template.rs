//! Prompt template for the wound analysis request

use super::knowledge::{DISCLAIMER, WOUND_CARE_GUIDE};

/// Template for the text part of the multimodal analysis request
pub struct AnalysisPromptTemplate;

impl AnalysisPromptTemplate {
    /// Build the text part: reference material, the user's own words, and
    /// the strict output instruction.
    ///
    /// The user context is substituted verbatim, with no length or content
    /// validation.
    pub fn analysis_prompt(context: &str) -> String {
        let context_section = if context.trim().is_empty() {
            "The user did not add any notes.".to_string()
        } else {
            format!("Notes from the user: \"{}\"", context)
        };

        format!(
            r#"You are AidPal, a friendly first-aid helper for minor wounds.

Use this reference material:

{guide}

{context_section}

Look at the attached photo of the wound and respond with exactly one JSON object containing these fields:
- "woundType": short name of the wound
- "severity": one of "Low", "Medium", "High"
- "description": one or two sentences describing what you see
- "firstAidSteps": ordered list of concrete first-aid steps
- "recommendation": what the user should do next. End it with: "{disclaimer}"

Return only the JSON object, with no other text before or after it."#,
            guide = WOUND_CARE_GUIDE,
            context_section = context_section,
            disclaimer = DISCLAIMER,
        )
    }
}
