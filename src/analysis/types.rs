use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::registry::Capability;
use super::signals::BmiCategory;

// ---------------------------------------------------------------------------
// ParsedReport
// ---------------------------------------------------------------------------

/// The text payload extracted from a source report.
///
/// The sole analyzer input. Built once per run and read-only afterwards;
/// empty text is valid and means "no signal", never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedReport {
    pub raw_text: String,
}

impl ParsedReport {
    pub fn new(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

// ---------------------------------------------------------------------------
// Per-analyzer results
// ---------------------------------------------------------------------------

/// One-line digest of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub summary: String,
}

/// Rule-based lifestyle advice, one entry per matched trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationReport {
    pub recommendations: Vec<String>,
}

/// Directional wording detected in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendReport {
    pub trends: Vec<String>,
}

/// Diet advisory: BMI when both measurements resolve, keyword flags,
/// suggestions and a sample meal plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietReport {
    pub bmi: Option<f64>,
    pub bmi_category: Option<BmiCategory>,
    pub flags: Vec<String>,
    pub suggestions: Vec<String>,
    pub sample_meal_plan: Vec<String>,
}

/// Sleep advisory with a penalty-based score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepReport {
    pub sleep_flags: Vec<String>,
    pub sleep_score: i64,
    pub sleep_recommendations: Vec<String>,
}

/// Stress and mental-health advisory with a penalty-based score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StressReport {
    pub stress_flags: Vec<String>,
    pub stress_score: i64,
    pub stress_recommendations: Vec<String>,
}

/// Hydration advisory; the daily estimate resolves only when the report
/// carries a weight reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HydrationReport {
    pub flags: Vec<String>,
    pub recommended_daily_ml: Option<i64>,
    pub recommendations: Vec<String>,
}

// ---------------------------------------------------------------------------
// AnalyzerFault
// ---------------------------------------------------------------------------

/// Failure inside one analyzer invocation. The engine substitutes the
/// section's documented fallback; the detail only reaches the log.
#[derive(Error, Debug)]
pub enum AnalyzerFault {
    #[error("result serialization failed: {0}")]
    Serialization(String),

    #[error("no analyzer bound for `{0}`")]
    Unresolved(&'static str),
}

impl From<serde_json::Error> for AnalyzerFault {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

// ---------------------------------------------------------------------------
// ConsolidatedReport
// ---------------------------------------------------------------------------

/// The assembled, always-complete set of section results for one run.
///
/// Every section is a serializable tree: the analyzer's native result
/// shape, the documented fallback mapping when the analyzer faulted, or
/// `null` when the capability was unbound. Never mutated after assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsolidatedReport {
    pub extracted: Value,
    pub summary: Value,
    pub recommendations: Value,
    pub trends: Value,
    pub diet: Value,
    pub sleep: Value,
    pub stress: Value,
    pub hydration: Value,
}

impl ConsolidatedReport {
    pub(crate) fn assemble(parsed: &ParsedReport, sections: Vec<(Capability, Value)>) -> Self {
        let mut report = Self {
            extracted: serde_json::to_value(parsed).unwrap_or(Value::Null),
            summary: Value::Null,
            recommendations: Value::Null,
            trends: Value::Null,
            diet: Value::Null,
            sleep: Value::Null,
            stress: Value::Null,
            hydration: Value::Null,
        };
        for (capability, value) in sections {
            *report.section_mut(capability) = value;
        }
        report
    }

    pub fn section(&self, capability: Capability) -> &Value {
        match capability {
            Capability::ParseReport => &self.extracted,
            Capability::Summary => &self.summary,
            Capability::Recommendations => &self.recommendations,
            Capability::Trends => &self.trends,
            Capability::Diet => &self.diet,
            Capability::Sleep => &self.sleep,
            Capability::Stress => &self.stress,
            Capability::Hydration => &self.hydration,
        }
    }

    fn section_mut(&mut self, capability: Capability) -> &mut Value {
        match capability {
            Capability::ParseReport => &mut self.extracted,
            Capability::Summary => &mut self.summary,
            Capability::Recommendations => &mut self.recommendations,
            Capability::Trends => &mut self.trends,
            Capability::Diet => &mut self.diet,
            Capability::Sleep => &mut self.sleep,
            Capability::Stress => &mut self.stress,
            Capability::Hydration => &mut self.hydration,
        }
    }
}
