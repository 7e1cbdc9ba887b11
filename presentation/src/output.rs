//! Console output formatting for analysis results

use aidpal_application::HistoryItem;
use aidpal_domain::{AnalysisResult, Severity};
use colored::{ColoredString, Colorize};

/// Formats analysis results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format one analysis result for the terminal
    pub fn format(result: &AnalysisResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("AidPal Analysis"));
        output.push_str(&format!(
            "{} {}\n",
            "Wound:".cyan().bold(),
            result.wound_type
        ));
        output.push_str(&format!(
            "{} {}\n\n",
            "Severity:".cyan().bold(),
            Self::severity_label(result.severity)
        ));
        output.push_str(&format!("{}\n\n", result.description));

        output.push_str(&format!("{}\n", "First-aid steps:".cyan().bold()));
        for (i, step) in result.first_aid_steps.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, step));
        }
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Next:".cyan().bold(),
            result.recommendation
        ));

        output
    }

    /// The result's wire shape, pretty-printed
    pub fn format_json(result: &AnalysisResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the stored history, oldest first
    pub fn format_history(items: &[HistoryItem]) -> String {
        if items.is_empty() {
            return "No history recorded yet.".to_string();
        }

        let mut output = String::new();
        output.push_str(&Self::header("AidPal History"));
        for item in items {
            output.push_str(&format!(
                "{}  {}  [{}]\n",
                item.timestamp
                    .format("%Y-%m-%d %H:%M")
                    .to_string()
                    .dimmed(),
                item.result.wound_type.bold(),
                Self::severity_label(item.result.severity)
            ));
            output.push_str(&format!("    {}\n", item.result.recommendation));
        }
        output
    }

    fn severity_label(severity: Severity) -> ColoredString {
        match severity {
            Severity::Low => "Low".green().bold(),
            Severity::Medium => "Medium".yellow().bold(),
            Severity::High => "High".red().bold(),
        }
    }

    fn header(title: &str) -> String {
        format!("{}\n{}\n", title.bold(), "=".repeat(title.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            wound_type: "Scrape (Abrasion)".to_string(),
            severity: Severity::Low,
            description: "A shallow scrape on the knee.".to_string(),
            first_aid_steps: vec![
                "Wash with soap/water".to_string(),
                "Apply ointment".to_string(),
            ],
            recommendation: "Monitor at home".to_string(),
        }
    }

    #[test]
    fn test_format_contains_every_field() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format(&sample_result());
        assert!(output.contains("Scrape (Abrasion)"));
        assert!(output.contains("Low"));
        assert!(output.contains("A shallow scrape on the knee."));
        assert!(output.contains("1. Wash with soap/water"));
        assert!(output.contains("2. Apply ointment"));
        assert!(output.contains("Monitor at home"));
    }

    #[test]
    fn test_format_json_is_wire_shape() {
        let output = ConsoleFormatter::format_json(&sample_result());
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["woundType"], "Scrape (Abrasion)");
        assert_eq!(value["severity"], "Low");
        assert_eq!(value["firstAidSteps"][0], "Wash with soap/water");
    }

    #[test]
    fn test_empty_history_message() {
        assert_eq!(
            ConsoleFormatter::format_history(&[]),
            "No history recorded yet."
        );
    }

    #[test]
    fn test_history_lists_each_item() {
        colored::control::set_override(false);
        let items = vec![
            HistoryItem::new("img-a", sample_result()),
            HistoryItem::new("img-b", sample_result()),
        ];
        let output = ConsoleFormatter::format_history(&items);
        assert_eq!(output.matches("Scrape (Abrasion)").count(), 2);
    }
}
