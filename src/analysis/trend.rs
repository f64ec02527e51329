//! Trend analyzer: directional wording detected in the report.

use super::types::{AnalyzerFault, ParsedReport, TrendReport};

/// Evaluated in order; the order fixes the output sequence.
const RULES: &[(&str, &str)] = &[
    (
        "increase",
        "There are indicators of increasing values in your report.",
    ),
    ("decrease", "Some values show decreasing trends."),
    ("stable", "Your report suggests stable readings."),
];

const NO_TRENDS: &str = "No clear trends detected from the report.";

pub fn analyze(report: &ParsedReport) -> TrendReport {
    let text = report.raw_text.to_lowercase();

    let mut trends: Vec<String> = RULES
        .iter()
        .filter(|(trigger, _)| text.contains(trigger))
        .map(|(_, sentence)| sentence.to_string())
        .collect();

    if trends.is_empty() {
        trends.push(NO_TRENDS.to_string());
    }

    TrendReport { trends }
}

/// Registry entry point: typed result serialized into the generic tree.
pub fn section(report: &ParsedReport) -> Result<serde_json::Value, AnalyzerFault> {
    Ok(serde_json::to_value(analyze(report))?)
}
