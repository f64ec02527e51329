//! Shared text-signal primitives.
//!
//! Every analyzer is built from the same three operations: numeric value
//! extraction, keyword-flag detection, and bounded score accumulation.
//! All of them are deterministic: identical input and identical rule
//! tables always yield byte-identical output.

use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Score range shared by every quantifying analyzer.
pub const SCORE_MAX: i64 = 100;
pub const SCORE_MIN: i64 = 0;

// ---------------------------------------------------------------------------
// Numeric extraction
// ---------------------------------------------------------------------------

/// Find the first decimal number (1-3 integer digits, optional fraction)
/// immediately followed by one of the unit literals, case-insensitively.
///
/// Units are tried in the given order, so the order encodes priority: a
/// caller that prefers centimeters over meters lists "cm" first and only
/// falls back to "m" when no centimeter reading exists. Call sites must
/// document the ordering they rely on.
pub fn extract_number_with_unit(text: &str, units: &[&str]) -> Option<f64> {
    for unit in units {
        let pattern = format!(r"(?i)(\d{{1,3}}(?:\.\d+)?)\s*{}", regex::escape(unit));
        let Ok(re) = Regex::new(&pattern) else {
            continue;
        };
        if let Some(value) = re
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<f64>().ok())
        {
            return Some(value);
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Keyword flags
// ---------------------------------------------------------------------------

/// One detection rule. A rule fires when any clause matches; a clause
/// matches when every one of its substrings is present. This covers both
/// plain "any of these words" triggers (single-substring clauses) and
/// conjunctions like sleep AND poor.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub clauses: &'static [&'static [&'static str]],
    pub flag: &'static str,
}

impl KeywordRule {
    fn fires(&self, text_lower: &str) -> bool {
        self.clauses
            .iter()
            .any(|clause| clause.iter().all(|needle| text_lower.contains(needle)))
    }
}

/// Evaluate rules in table order against pre-lowercased text.
///
/// Each rule contributes its flag at most once; the same flag name in two
/// rules would be emitted twice. Output order is the table order.
pub fn detect_flags(text_lower: &str, rules: &[KeywordRule]) -> Vec<String> {
    rules
        .iter()
        .filter(|rule| rule.fires(text_lower))
        .map(|rule| rule.flag.to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Score accumulation
// ---------------------------------------------------------------------------

/// Subtract the mapped penalty for each flag present; flags without an
/// entry contribute nothing. The result is clamped to [0, 100].
pub fn apply_score_penalties(base: i64, flags: &[String], penalties: &[(&str, i64)]) -> i64 {
    let deducted: i64 = flags
        .iter()
        .filter_map(|flag| {
            penalties
                .iter()
                .find(|(name, _)| *name == flag.as_str())
                .map(|(_, penalty)| *penalty)
        })
        .sum();
    (base - deducted).clamp(SCORE_MIN, SCORE_MAX)
}

// ---------------------------------------------------------------------------
// BMI
// ---------------------------------------------------------------------------

/// BMI derivation needs strictly positive measurements.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("measurements must be positive: weight {weight_kg} kg, height {height_m} m")]
pub struct InvalidMeasurement {
    pub weight_kg: f64,
    pub height_m: f64,
}

/// Body mass index, rounded to one decimal place.
pub fn compute_bmi(weight_kg: f64, height_m: f64) -> Result<f64, InvalidMeasurement> {
    if weight_kg <= 0.0 || height_m <= 0.0 {
        return Err(InvalidMeasurement {
            weight_kg,
            height_m,
        });
    }
    Ok((weight_kg / (height_m * height_m) * 10.0).round() / 10.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Numeric extraction ---

    #[test]
    fn number_with_unit_basic() {
        assert_eq!(extract_number_with_unit("weight 70 kg", &["kg"]), Some(70.0));
        assert_eq!(extract_number_with_unit("170cm tall", &["cm"]), Some(170.0));
        assert_eq!(extract_number_with_unit("1.75 m", &["m"]), Some(1.75));
    }

    #[test]
    fn number_with_unit_case_insensitive() {
        assert_eq!(extract_number_with_unit("Weight: 82 KG", &["kg"]), Some(82.0));
    }

    #[test]
    fn number_with_unit_order_is_priority() {
        // whichever unit is listed first wins, regardless of text position
        let text = "height 170 cm or 1.7 m";
        assert_eq!(extract_number_with_unit(text, &["cm", "m"]), Some(170.0));
        assert_eq!(extract_number_with_unit(text, &["m", "cm"]), Some(1.7));
    }

    #[test]
    fn number_with_unit_absent() {
        assert_eq!(extract_number_with_unit("no measurements here", &["kg"]), None);
        assert_eq!(extract_number_with_unit("", &["kg", "cm"]), None);
    }

    #[test]
    fn number_with_unit_caps_integer_digits() {
        // four integer digits never match as a whole; the scan picks up the
        // trailing three digits instead, mirroring the extraction rule
        assert_eq!(extract_number_with_unit("1234 kg", &["kg"]), Some(234.0));
    }

    // --- Keyword flags ---

    const RULES: &[KeywordRule] = &[
        KeywordRule {
            clauses: &[&["alpha"], &["beta"]],
            flag: "first",
        },
        KeywordRule {
            clauses: &[&["gamma", "delta"]],
            flag: "second",
        },
    ];

    #[test]
    fn flags_any_clause_fires() {
        assert_eq!(detect_flags("some beta text", RULES), vec!["first"]);
    }

    #[test]
    fn flags_conjunction_needs_all_substrings() {
        assert!(detect_flags("gamma only", RULES).is_empty());
        assert_eq!(detect_flags("gamma and delta", RULES), vec!["second"]);
    }

    #[test]
    fn flags_fire_at_most_once_per_rule() {
        assert_eq!(detect_flags("alpha beta alpha", RULES), vec!["first"]);
    }

    #[test]
    fn flags_keep_table_order() {
        let flags = detect_flags("delta gamma beta", RULES);
        assert_eq!(flags, vec!["first", "second"]);
    }

    #[test]
    fn flags_deterministic() {
        let text = "alpha gamma delta";
        assert_eq!(detect_flags(text, RULES), detect_flags(text, RULES));
    }

    // --- Score accumulation ---

    #[test]
    fn penalties_subtract_and_ignore_unmapped() {
        let flags = vec!["a".to_string(), "unmapped".to_string()];
        assert_eq!(apply_score_penalties(100, &flags, &[("a", 25)]), 75);
    }

    #[test]
    fn penalties_clamp_to_floor() {
        let flags = vec!["a".to_string(), "b".to_string()];
        assert_eq!(
            apply_score_penalties(100, &flags, &[("a", 80), ("b", 80)]),
            0
        );
    }

    #[test]
    fn penalties_clamp_to_ceiling() {
        let flags = vec!["bonus".to_string()];
        assert_eq!(apply_score_penalties(120, &flags, &[("bonus", 5)]), 100);
    }

    // --- BMI ---

    #[test]
    fn bmi_reference_values() {
        assert_eq!(compute_bmi(70.0, 1.70).unwrap(), 24.2);
        assert_eq!(compute_bmi(50.0, 1.60).unwrap(), 19.5);
        assert_eq!(compute_bmi(100.0, 1.70).unwrap(), 34.6);
    }

    #[test]
    fn bmi_rejects_non_positive_measurements() {
        assert!(compute_bmi(0.0, 1.70).is_err());
        assert!(compute_bmi(70.0, 0.0).is_err());
        assert!(compute_bmi(-70.0, 1.70).is_err());
    }

    #[test]
    fn bmi_category_thresholds() {
        assert_eq!(BmiCategory::from_bmi(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(24.9), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(29.9), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn bmi_category_serializes_capitalized() {
        let json = serde_json::to_string(&BmiCategory::Normal).unwrap();
        assert_eq!(json, "\"Normal\"");
    }
}
