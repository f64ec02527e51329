//! Hydration analyzer: dehydration indicators plus a weight-based daily
//! fluid estimate.

use super::signals::{detect_flags, extract_number_with_unit, KeywordRule};
use super::types::{AnalyzerFault, HydrationReport, ParsedReport};

const FLAG_DEHYDRATION: &str = "possible_dehydration";
const FLAG_FLUID_LOSS: &str = "fluid_loss_risk";

const FLAG_RULES: &[KeywordRule] = &[
    KeywordRule {
        // "dehydrat" covers dehydrated/dehydration
        clauses: &[
            &["dehydrat"],
            &["thirst"],
            &["dry mouth"],
            &["reduced urine"],
            &["dark urine"],
        ],
        flag: FLAG_DEHYDRATION,
    },
    KeywordRule {
        clauses: &[&["sweat"], &["diarrhoea"], &["vomit"]],
        flag: FLAG_FLUID_LOSS,
    },
];

const WEIGHT_UNITS: &[&str] = &["kg", "kgs", "kilograms"];

/// 35 ml per kg body weight, the upper end of the common 30-35 ml rule.
const ML_PER_KG: f64 = 35.0;
const CUP_ML: i64 = 250;

pub fn analyze(report: &ParsedReport) -> HydrationReport {
    let text = &report.raw_text;
    let text_lower = text.to_lowercase();

    let flags = detect_flags(&text_lower, FLAG_RULES);

    let mut recommendations: Vec<String> = Vec::new();
    for flag in &flags {
        match flag.as_str() {
            FLAG_DEHYDRATION => recommendations.push(
                "Increase fluid intake immediately and consult a doctor if symptoms persist."
                    .to_string(),
            ),
            FLAG_FLUID_LOSS => recommendations.push(
                "Replace fluids and electrolytes; consider oral rehydration solutions if needed."
                    .to_string(),
            ),
            _ => {}
        }
    }

    let weight = extract_number_with_unit(text, WEIGHT_UNITS);
    let recommended_daily_ml = weight.map(|kg| (kg * ML_PER_KG).round() as i64);

    if let (Some(kg), Some(ml)) = (weight, recommended_daily_ml) {
        let cups = ml / CUP_ML;
        recommendations.push(format!(
            "Estimated daily water need (based on weight {kg} kg): about {ml} ml (~{cups} cups of 250ml)."
        ));
    }

    if recommendations.is_empty() {
        recommendations.push(
            "Aim for 1.5–3 liters of fluids daily depending on activity, climate and health status."
                .to_string(),
        );
        recommendations.push(
            "Prefer water, herbal teas, and electrolyte drinks when needed; limit sugary drinks."
                .to_string(),
        );
    }

    HydrationReport {
        flags,
        recommended_daily_ml,
        recommendations,
    }
}

/// Registry entry point: typed result serialized into the generic tree.
pub fn section(report: &ParsedReport) -> Result<serde_json::Value, AnalyzerFault> {
    Ok(serde_json::to_value(analyze(report))?)
}
