//! Build-time analyzer registry.
//!
//! Each logical capability maps to one canonical implementation, selected
//! here rather than discovered at runtime. Historical names a capability
//! has been exposed under live in an ordered alias table, so callers that
//! still use an old name resolve to the same implementation. Capabilities
//! can be unbound; an unbound capability degrades its section to an absent
//! value and never aborts a run.

use std::path::Path;

use serde_json::Value;

use crate::extraction::{self, ExtractionError};

use super::types::{AnalyzerFault, ParsedReport};
use super::{diet, hydration, recommendation, sleep, stress, summary, trend};

pub type AnalyzerFn = fn(&ParsedReport) -> Result<Value, AnalyzerFault>;
pub type ParserFn = fn(&Path) -> Result<ParsedReport, ExtractionError>;

// ---------------------------------------------------------------------------
// Capability
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    ParseReport,
    Summary,
    Recommendations,
    Trends,
    Diet,
    Sleep,
    Stress,
    Hydration,
}

impl Capability {
    /// Analyzer capabilities in consolidated-report section order.
    pub const SECTIONS: [Capability; 7] = [
        Capability::Summary,
        Capability::Recommendations,
        Capability::Trends,
        Capability::Diet,
        Capability::Sleep,
        Capability::Stress,
        Capability::Hydration,
    ];

    const ALL: [Capability; 8] = [
        Capability::ParseReport,
        Capability::Summary,
        Capability::Recommendations,
        Capability::Trends,
        Capability::Diet,
        Capability::Sleep,
        Capability::Stress,
        Capability::Hydration,
    ];

    pub fn canonical_name(self) -> &'static str {
        match self {
            Self::ParseReport => "parse_report",
            Self::Summary => "generate_summary",
            Self::Recommendations => "generate_recommendations",
            Self::Trends => "analyze_trends",
            Self::Diet => "analyze_diet",
            Self::Sleep => "analyze_sleep",
            Self::Stress => "analyze_stress",
            Self::Hydration => "analyze_hydration",
        }
    }

    /// Key of this capability's section in the consolidated report.
    pub fn section_key(self) -> &'static str {
        match self {
            Self::ParseReport => "extracted",
            Self::Summary => "summary",
            Self::Recommendations => "recommendations",
            Self::Trends => "trends",
            Self::Diet => "diet",
            Self::Sleep => "sleep",
            Self::Stress => "stress",
            Self::Hydration => "hydration",
        }
    }

    /// Every name the capability answers to: the canonical name, the
    /// historical agent-style names, and the bare section key.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::ParseReport => &["parse_report", "report_agent", "extracted"],
            Self::Summary => &["generate_summary", "summary_agent", "summary"],
            Self::Recommendations => &[
                "generate_recommendations",
                "recommendation_agent",
                "recommendations",
            ],
            Self::Trends => &["analyze_trends", "trend_analysis", "trend_agent", "trends"],
            Self::Diet => &["analyze_diet", "diet_analysis", "diet_agent", "diet"],
            Self::Sleep => &["analyze_sleep", "sleep_analysis", "sleep_agent", "sleep"],
            Self::Stress => &["analyze_stress", "stress_analysis", "stress_agent", "stress"],
            Self::Hydration => &[
                "analyze_hydration",
                "hydration_analysis",
                "hydration_agent",
                "hydration",
            ],
        }
    }

    /// Resolve a logical or historical name to its capability.
    pub fn resolve(name: &str) -> Option<Capability> {
        Self::ALL
            .into_iter()
            .find(|capability| capability.aliases().iter().any(|alias| *alias == name))
    }

    /// Documented substitute for a section whose analyzer faulted.
    pub fn fallback_value(self) -> Value {
        let key = self.section_key();
        serde_json::json!({ key: format!("No {key} analysis available.") })
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// One resolved binding per capability, built once per run.
pub struct Registry {
    parser: Option<ParserFn>,
    analyzers: [Option<AnalyzerFn>; Capability::SECTIONS.len()],
}

impl Registry {
    /// Bind every capability to its canonical implementation.
    pub fn new() -> Self {
        let mut registry = Self::unbound();
        registry.bind_parser(parse_report);
        registry.bind(Capability::Summary, summary::section);
        registry.bind(Capability::Recommendations, recommendation::section);
        registry.bind(Capability::Trends, trend::section);
        registry.bind(Capability::Diet, diet::section);
        registry.bind(Capability::Sleep, sleep::section);
        registry.bind(Capability::Stress, stress::section);
        registry.bind(Capability::Hydration, hydration::section);
        registry
    }

    /// A registry with nothing bound; every section analyzed against it
    /// degrades to an absent value.
    pub fn unbound() -> Self {
        Self {
            parser: None,
            analyzers: [None; Capability::SECTIONS.len()],
        }
    }

    pub fn bind(&mut self, capability: Capability, analyzer: AnalyzerFn) {
        if let Some(slot) = Self::slot(capability) {
            self.analyzers[slot] = Some(analyzer);
        }
    }

    pub fn bind_parser(&mut self, parser: ParserFn) {
        self.parser = Some(parser);
    }

    pub fn unbind(&mut self, capability: Capability) {
        match Self::slot(capability) {
            Some(slot) => self.analyzers[slot] = None,
            None => self.parser = None,
        }
    }

    pub fn analyzer(&self, capability: Capability) -> Option<AnalyzerFn> {
        Self::slot(capability).and_then(|slot| self.analyzers[slot])
    }

    pub fn parser(&self) -> Option<ParserFn> {
        self.parser
    }

    fn slot(capability: Capability) -> Option<usize> {
        Capability::SECTIONS
            .iter()
            .position(|section| *section == capability)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// Canonical parse binding: read the document and wrap its text.
fn parse_report(path: &Path) -> Result<ParsedReport, ExtractionError> {
    Ok(ParsedReport::new(extraction::extract_text(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names_resolve() {
        assert_eq!(
            Capability::resolve("analyze_diet"),
            Some(Capability::Diet)
        );
        assert_eq!(
            Capability::resolve("generate_summary"),
            Some(Capability::Summary)
        );
        assert_eq!(
            Capability::resolve("parse_report"),
            Some(Capability::ParseReport)
        );
    }

    #[test]
    fn historical_names_resolve_to_same_capability() {
        for name in ["analyze_diet", "diet_analysis", "diet_agent", "diet"] {
            assert_eq!(Capability::resolve(name), Some(Capability::Diet), "{name}");
        }
    }

    #[test]
    fn unknown_name_resolves_to_none() {
        assert_eq!(Capability::resolve("analyze_everything"), None);
        assert_eq!(Capability::resolve(""), None);
    }

    #[test]
    fn default_registry_binds_all_capabilities() {
        let registry = Registry::new();
        assert!(registry.parser().is_some());
        for capability in Capability::SECTIONS {
            assert!(
                registry.analyzer(capability).is_some(),
                "unbound: {capability:?}"
            );
        }
    }

    #[test]
    fn unbind_removes_only_that_capability() {
        let mut registry = Registry::new();
        registry.unbind(Capability::Sleep);
        assert!(registry.analyzer(Capability::Sleep).is_none());
        assert!(registry.analyzer(Capability::Stress).is_some());
    }

    #[test]
    fn unbound_registry_has_nothing() {
        let registry = Registry::unbound();
        assert!(registry.parser().is_none());
        for capability in Capability::SECTIONS {
            assert!(registry.analyzer(capability).is_none());
        }
    }

    #[test]
    fn fallback_value_names_the_section() {
        let value = Capability::Diet.fallback_value();
        assert_eq!(
            value,
            serde_json::json!({"diet": "No diet analysis available."})
        );
    }

    #[test]
    fn section_order_is_fixed() {
        let keys: Vec<&str> = Capability::SECTIONS
            .iter()
            .map(|c| c.section_key())
            .collect();
        assert_eq!(
            keys,
            vec![
                "summary",
                "recommendations",
                "trends",
                "diet",
                "sleep",
                "stress",
                "hydration"
            ]
        );
    }
}
