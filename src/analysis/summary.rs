//! Summary analyzer: one-line digest built from the first sentence.

use super::types::{AnalyzerFault, ParsedReport, SummaryReport};

const NO_INFORMATION: &str = "No information found in the report.";

pub fn analyze(report: &ParsedReport) -> SummaryReport {
    let text = report.raw_text.trim();
    if text.is_empty() {
        return SummaryReport {
            summary: NO_INFORMATION.to_string(),
        };
    }

    let first_sentence = text.split('.').next().unwrap_or(text).trim();
    SummaryReport {
        summary: format!("Summary: {first_sentence}."),
    }
}

/// Registry entry point: typed result serialized into the generic tree.
pub fn section(report: &ParsedReport) -> Result<serde_json::Value, AnalyzerFault> {
    Ok(serde_json::to_value(analyze(report))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sentence_becomes_summary() {
        let report = ParsedReport::new("Patient is stable. Cholesterol is elevated.");
        assert_eq!(analyze(&report).summary, "Summary: Patient is stable.");
    }

    #[test]
    fn leading_whitespace_trimmed() {
        let report = ParsedReport::new("  \n Hemoglobin normal. More text.");
        assert_eq!(analyze(&report).summary, "Summary: Hemoglobin normal.");
    }

    #[test]
    fn blank_text_reports_no_information() {
        for text in ["", "   ", "\n\t"] {
            let result = analyze(&ParsedReport::new(text));
            assert_eq!(result.summary, "No information found in the report.");
        }
    }

    #[test]
    fn text_without_period_kept_whole() {
        let report = ParsedReport::new("single fragment without punctuation");
        assert_eq!(
            analyze(&report).summary,
            "Summary: single fragment without punctuation."
        );
    }

    #[test]
    fn deterministic() {
        let report = ParsedReport::new("Sugar high. BP normal.");
        assert_eq!(analyze(&report), analyze(&report));
    }
}
