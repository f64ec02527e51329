//! Stress and mental-health analyzer with a penalty score clamped at zero.

use super::signals::{apply_score_penalties, detect_flags, KeywordRule, SCORE_MAX};
use super::types::{AnalyzerFault, ParsedReport, StressReport};

const FLAG_STRESS: &str = "stress/anxiety detected";
const FLAG_LOW_MOOD: &str = "low mood indicators";
const FLAG_FATIGUE: &str = "fatigue";
const FLAG_PANIC: &str = "panic indicators";
const FLAG_SLEEP: &str = "sleep-related stress";

const FLAG_RULES: &[KeywordRule] = &[
    KeywordRule {
        clauses: &[&["stress"], &["anxiety"], &["anxious"]],
        flag: FLAG_STRESS,
    },
    KeywordRule {
        clauses: &[&["depression"], &["low mood"], &["sad"]],
        flag: FLAG_LOW_MOOD,
    },
    KeywordRule {
        clauses: &[&["fatigue"], &["tired"]],
        flag: FLAG_FATIGUE,
    },
    KeywordRule {
        clauses: &[&["panic"]],
        flag: FLAG_PANIC,
    },
    KeywordRule {
        clauses: &[&["sleep", "poor"], &["sleep", "lack"]],
        flag: FLAG_SLEEP,
    },
];

const PENALTIES: &[(&str, i64)] = &[
    (FLAG_STRESS, 25),
    (FLAG_LOW_MOOD, 25),
    (FLAG_PANIC, 30),
    (FLAG_SLEEP, 10),
    (FLAG_FATIGUE, 5),
];

pub fn analyze(report: &ParsedReport) -> StressReport {
    let text = report.raw_text.to_lowercase();

    let flags = detect_flags(&text, FLAG_RULES);

    let mut recommendations: Vec<String> = Vec::new();
    for flag in &flags {
        match flag.as_str() {
            FLAG_STRESS => recommendations
                .push("Practice deep breathing or meditation for 10–15 minutes daily.".to_string()),
            FLAG_LOW_MOOD => recommendations.push(
                "Maintain routine, stay socially connected, and consider counseling if symptoms persist."
                    .to_string(),
            ),
            FLAG_FATIGUE => {
                recommendations.push("Balance work and rest; avoid overexertion.".to_string())
            }
            FLAG_PANIC => recommendations.push(
                "Practice grounding techniques; consult healthcare if episodes repeat.".to_string(),
            ),
            FLAG_SLEEP => recommendations.push(
                "Maintain sleep hygiene: fixed sleep times, no caffeine late evening.".to_string(),
            ),
            _ => {}
        }
    }

    if recommendations.is_empty() {
        recommendations.push(
            "Maintain a balanced schedule, practice mindfulness, and stay physically active."
                .to_string(),
        );
    }

    let stress_score = apply_score_penalties(SCORE_MAX, &flags, PENALTIES);

    StressReport {
        stress_flags: flags,
        stress_score,
        stress_recommendations: recommendations,
    }
}

/// Registry entry point: typed result serialized into the generic tree.
pub fn section(report: &ParsedReport) -> Result<serde_json::Value, AnalyzerFault> {
    Ok(serde_json::to_value(analyze(report))?)
}
