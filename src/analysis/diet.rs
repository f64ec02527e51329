//! Diet analyzer: BMI from extracted measurements plus keyword-driven
//! suggestions and a sample meal plan.

use super::signals::{compute_bmi, detect_flags, extract_number_with_unit, BmiCategory, KeywordRule};
use super::types::{AnalyzerFault, DietReport, ParsedReport};

const WEIGHT_UNITS: &[&str] = &["kg", "kgs", "kilograms"];
const HEIGHT_CM_UNITS: &[&str] = &["cm", "centimeters"];
const HEIGHT_M_UNITS: &[&str] = &["m", "meters"];

/// A meter reading above this is almost certainly a mis-detected match on
/// some other "m"-suffixed quantity and is discarded.
const MAX_PLAUSIBLE_HEIGHT_M: f64 = 3.0;

const FLAG_CHOLESTEROL: &str = "cholesterol";
const FLAG_GLUCOSE: &str = "glucose";
const FLAG_HYPERTENSION: &str = "hypertension";
const FLAG_TRIGLYCERIDE: &str = "triglyceride";

const FLAG_RULES: &[KeywordRule] = &[
    KeywordRule {
        clauses: &[&["cholesterol"], &["ldl"], &["hdl"]],
        flag: FLAG_CHOLESTEROL,
    },
    KeywordRule {
        clauses: &[&["glucose"], &["sugar"], &["hba1c"]],
        flag: FLAG_GLUCOSE,
    },
    KeywordRule {
        // "bp " with the trailing space, so "bp 140/90" matches but not "bpm"
        clauses: &[&["blood pressure"], &["bp "]],
        flag: FLAG_HYPERTENSION,
    },
    KeywordRule {
        clauses: &[&["triglyceride"]],
        flag: FLAG_TRIGLYCERIDE,
    },
];

pub fn analyze(report: &ParsedReport) -> DietReport {
    let text = &report.raw_text;
    let text_lower = text.to_lowercase();

    let weight = extract_number_with_unit(text, WEIGHT_UNITS);
    let height_m = resolve_height_m(text);

    let (bmi, bmi_category) = match (weight, height_m) {
        (Some(weight_kg), Some(height_m)) => match compute_bmi(weight_kg, height_m) {
            Ok(bmi) => (Some(bmi), Some(BmiCategory::from_bmi(bmi))),
            Err(error) => {
                tracing::debug!(%error, "measurement unusable, skipping BMI");
                (None, None)
            }
        },
        _ => (None, None),
    };

    let flags = detect_flags(&text_lower, FLAG_RULES);

    let mut suggestions = vec![
        "Prioritize whole foods, vegetables, fruits, lean proteins, whole grains, and legumes."
            .to_string(),
        "Limit processed foods, sugary drinks, and excessive salt.".to_string(),
    ];
    let mut meal_plan: Vec<String> = Vec::new();

    for flag in &flags {
        match flag.as_str() {
            FLAG_CHOLESTEROL => {
                suggestions.push(
                    "Reduce saturated fats (butter, fatty cuts), avoid trans-fats; include oats, nuts, and fatty fish (omega-3s)."
                        .to_string(),
                );
                meal_plan.push("Breakfast: Oatmeal with berries and a handful of nuts.".to_string());
                meal_plan.push("Dinner: Grilled salmon, quinoa, and steamed broccoli.".to_string());
            }
            FLAG_GLUCOSE => {
                suggestions.push(
                    "Prefer low-glycemic index carbs, control portion sizes, and avoid simple sugars."
                        .to_string(),
                );
                meal_plan.push("Breakfast: Greek yogurt with chia seeds and seeds.".to_string());
                meal_plan.push("Snack: Apple with peanut butter (small portion).".to_string());
            }
            FLAG_HYPERTENSION => {
                suggestions.push(
                    "Lower sodium intake, increase potassium-rich foods (bananas, spinach), and stay hydrated."
                        .to_string(),
                );
                meal_plan.push("Lunch: Lentil soup (low salt) with mixed salad.".to_string());
            }
            FLAG_TRIGLYCERIDE => {
                suggestions.push(
                    "Cut simple carbs and alcohol; increase physical activity and omega-3 rich foods."
                        .to_string(),
                );
                meal_plan.push("Snack: Handful of raw almonds or walnuts.".to_string());
            }
            _ => {}
        }
    }

    if let (Some(bmi), Some(category)) = (bmi, bmi_category) {
        suggestions.push(format!(
            "Calculated BMI: {bmi} ({category}). Follow weight-targeted diet and exercise plan."
        ));
        suggestions.push(tier_advice(category).to_string());
    }

    if meal_plan.is_empty() {
        meal_plan = vec![
            "Breakfast: Oatmeal with banana or eggs & wholegrain toast.".to_string(),
            "Lunch: Grilled chicken/fish or chickpea salad with mixed greens.".to_string(),
            "Dinner: Vegetable stir-fry with tofu/lean protein and brown rice.".to_string(),
            "Snacks: Fruit, yoghurt, nuts (small portions).".to_string(),
        ];
    }

    DietReport {
        bmi,
        bmi_category,
        flags,
        suggestions,
        sample_meal_plan: meal_plan,
    }
}

/// Height resolution prefers centimeters; the meter fallback only accepts
/// plausible values (see MAX_PLAUSIBLE_HEIGHT_M).
fn resolve_height_m(text: &str) -> Option<f64> {
    if let Some(cm) = extract_number_with_unit(text, HEIGHT_CM_UNITS) {
        if cm > 0.0 {
            return Some(cm / 100.0);
        }
    }
    extract_number_with_unit(text, HEIGHT_M_UNITS).filter(|m| *m <= MAX_PLAUSIBLE_HEIGHT_M)
}

fn tier_advice(category: BmiCategory) -> &'static str {
    match category {
        BmiCategory::Underweight => {
            "Increase calorie-dense healthy foods: nuts, dairy, legumes; frequent small meals."
        }
        BmiCategory::Normal => "Maintain balanced diet and regular physical activity.",
        BmiCategory::Overweight => {
            "Create moderate calorie deficit, increase protein, reduce processed carbs, and increase activity."
        }
        BmiCategory::Obese => {
            "Consult healthcare provider for personalized weight-reduction plan and consider supervised programs."
        }
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
    fn bmi_from_kg_and_cm() {
        let report = ParsedReport::new("weight 70 kg, height 170 cm");
        let result = analyze(&report);
        assert_eq!(result.bmi, Some(24.2));
        assert_eq!(result.bmi_category, Some(BmiCategory::Normal));
    }

    #[test]
    fn bmi_from_meter_fallback() {
        let report = ParsedReport::new("height 1.70 m, weight 70 kg");
        let result = analyze(&report);
        assert_eq!(result.bmi, Some(24.2));
    }

    #[test]
    fn implausible_meter_reading_discarded() {
        // 4.5 m is not a human height; with no other height the BMI is absent
        let report = ParsedReport::new("cable run 4.5 m, weight 70 kg");
        let result = analyze(&report);
        assert_eq!(result.bmi, None);
        assert_eq!(result.bmi_category, None);
    }

    #[test]
    fn centimeters_win_over_meters() {
        let report = ParsedReport::new("height 160 cm, pool depth 2 m, weight 48 kg");
        let result = analyze(&report);
        // 48 / 1.6^2 lands just under 18.75 in float arithmetic
        assert_eq!(result.bmi, Some(18.7));
    }

    #[test]
    fn missing_weight_means_no_bmi() {
        let result = analyze(&ParsedReport::new("height 170 cm, cholesterol high"));
        assert_eq!(result.bmi, None);
        assert_eq!(result.bmi_category, None);
        assert_eq!(result.flags, vec!["cholesterol"]);
    }

    #[test]
    fn flags_in_fixed_order() {
        let report = ParsedReport::new("triglycerides high, bp 140/90, sugar elevated, ldl high");
        let result = analyze(&report);
        assert_eq!(
            result.flags,
            vec!["cholesterol", "glucose", "hypertension", "triglyceride"]
        );
    }

    #[test]
    fn suggestions_start_generic_then_per_flag() {
        let report = ParsedReport::new("glucose elevated");
        let result = analyze(&report);
        assert!(result.suggestions[0].contains("whole foods"));
        assert!(result.suggestions[1].contains("processed foods"));
        assert!(result.suggestions[2].contains("low-glycemic"));
        assert_eq!(result.suggestions.len(), 3);
    }

    #[test]
    fn bmi_suggestion_appended_when_resolved() {
        let report = ParsedReport::new("weight 100 kg, height 170 cm");
        let result = analyze(&report);
        assert_eq!(result.bmi_category, Some(BmiCategory::Obese));
        let bmi_line = result
            .suggestions
            .iter()
            .find(|s| s.contains("Calculated BMI"))
            .expect("BMI line present");
        assert!(bmi_line.contains("34.6"));
        assert!(bmi_line.contains("Obese"));
        assert!(result
            .suggestions
            .last()
            .unwrap()
            .contains("weight-reduction"));
    }

    #[test]
    fn triglyceride_always_contributes_almond_snack() {
        let report = ParsedReport::new("cholesterol and triglycerides elevated");
        let result = analyze(&report);
        assert!(result
            .sample_meal_plan
            .iter()
            .any(|m| m.contains("raw almonds")));
    }

    #[test]
    fn default_meal_plan_when_no_flag_contributed() {
        let report = ParsedReport::new("weight 70 kg, height 170 cm, all readings fine");
        let result = analyze(&report);
        assert_eq!(result.sample_meal_plan.len(), 4);
        assert!(result.sample_meal_plan[0].contains("Oatmeal with banana"));
    }

    #[test]
    fn empty_text_still_yields_advice() {
        let result = analyze(&ParsedReport::empty());
        assert_eq!(result.bmi, None);
        assert!(result.flags.is_empty());
        assert_eq!(result.suggestions.len(), 2);
        assert_eq!(result.sample_meal_plan.len(), 4);
    }

    #[test]
    fn deterministic() {
        let report = ParsedReport::new("weight 80 kg, height 180 cm, sugar and bp noted");
        assert_eq!(analyze(&report), analyze(&report));
    }
}
