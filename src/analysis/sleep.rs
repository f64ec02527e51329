//! Sleep analyzer: fatigue and insomnia indicators with a penalty score.

use super::signals::{apply_score_penalties, detect_flags, KeywordRule, SCORE_MAX};
use super::types::{AnalyzerFault, ParsedReport, SleepReport};

const FLAG_FATIGUE: &str = "fatigue";
const FLAG_INSOMNIA: &str = "possible insomnia";

const FLAG_RULES: &[KeywordRule] = &[
    KeywordRule {
        clauses: &[&["tired"], &["fatigue"], &["exhaustion"]],
        flag: FLAG_FATIGUE,
    },
    KeywordRule {
        clauses: &[&["insomnia"], &["sleep", "poor"]],
        flag: FLAG_INSOMNIA,
    },
];

/// Penalty weights add up to 50, so the shared floor clamp never engages.
const PENALTIES: &[(&str, i64)] = &[(FLAG_FATIGUE, 20), (FLAG_INSOMNIA, 30)];

pub fn analyze(report: &ParsedReport) -> SleepReport {
    let text = report.raw_text.to_lowercase();

    let flags = detect_flags(&text, FLAG_RULES);

    let mut recommendations: Vec<String> = Vec::new();
    for flag in &flags {
        match flag.as_str() {
            FLAG_FATIGUE => recommendations.push(
                "Ensure 7–9 hours of consistent sleep; avoid screens 1 hour before bed."
                    .to_string(),
            ),
            FLAG_INSOMNIA => recommendations
                .push("Maintain fixed sleep schedule and avoid caffeine after 5 PM.".to_string()),
            _ => {}
        }
    }

    // Advisory-only triggers: they add guidance but carry no score penalty.
    if text.contains("iron") || text.contains("hemoglobin") {
        recommendations.push(
            "Low iron can affect sleep; consider iron-rich foods if suggested by doctor."
                .to_string(),
        );
    }
    if text.contains("thyroid") {
        recommendations
            .push("Thyroid imbalance may disrupt sleep; follow prescribed treatment.".to_string());
    }

    if recommendations.is_empty() {
        recommendations
            .push("Maintain consistent sleep schedule and good sleep hygiene practices.".to_string());
    }

    let sleep_score = apply_score_penalties(SCORE_MAX, &flags, PENALTIES);

    SleepReport {
        sleep_flags: flags,
        sleep_score,
        sleep_recommendations: recommendations,
    }
}

/// Registry entry point: typed result serialized into the generic tree.
pub fn section(report: &ParsedReport) -> Result<serde_json::Value, AnalyzerFault> {
    Ok(serde_json::to_value(analyze(report))?)
}
