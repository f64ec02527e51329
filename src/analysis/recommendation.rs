//! Recommendation analyzer: one fixed advisory string per matched trigger.

use super::types::{AnalyzerFault, ParsedReport, RecommendationReport};

/// Trigger table. Entries are evaluated in order and the order fixes the
/// output sequence.
const RULES: &[(&[&str], &str)] = &[
    (
        &["blood pressure", "bp"],
        "Reduce salt intake and check BP regularly.",
    ),
    (
        &["glucose", "sugar"],
        "Monitor sugar levels and reduce sweets.",
    ),
    (
        &["fever", "temperature"],
        "Rest, stay hydrated, and consult a doctor if fever persists.",
    ),
    (
        &["cholesterol"],
        "Reduce oily and fried foods. Increase fiber intake.",
    ),
    (
        &["hemoglobin"],
        "Increase iron-rich foods like spinach and broccoli.",
    ),
];

const NO_ISSUES: &str = "No specific issues detected. Maintain a healthy lifestyle.";

pub fn analyze(report: &ParsedReport) -> RecommendationReport {
    let text = report.raw_text.to_lowercase();

    let mut recommendations: Vec<String> = RULES
        .iter()
        .filter(|(triggers, _)| triggers.iter().any(|needle| text.contains(needle)))
        .map(|(_, advice)| advice.to_string())
        .collect();

    if recommendations.is_empty() {
        recommendations.push(NO_ISSUES.to_string());
    }

    RecommendationReport { recommendations }
}

/// Registry entry point: typed result serialized into the generic tree.
pub fn section(report: &ParsedReport) -> Result<serde_json::Value, AnalyzerFault> {
    Ok(serde_json::to_value(analyze(report))?)
}
