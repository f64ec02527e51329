//! Fault-isolated orchestration of the analyzer pipeline.
//!
//! One run: resolve the registry, parse the document at most once, run
//! every bound analyzer against the same parsed report behind its own
//! failure boundary, assemble the consolidated report. A failure anywhere
//! downgrades a single section and never aborts the run, so [`run`] is
//! total: it returns a well-formed eight-section report for any input,
//! including a nonexistent path or an empty document.

use std::path::Path;
use std::time::Instant;

use serde_json::Value;

use crate::config;

use super::registry::{Capability, Registry};
use super::types::{AnalyzerFault, ConsolidatedReport, ParsedReport};

/// Analyze a report with the default registry. `None` falls back to the
/// conventional sample location.
pub fn run(report_path: Option<&Path>) -> ConsolidatedReport {
    run_with_registry(&Registry::new(), report_path)
}

pub fn run_with_registry(registry: &Registry, report_path: Option<&Path>) -> ConsolidatedReport {
    let start = Instant::now();

    let parsed = parse_report(registry, report_path);
    let sections = analyze_sections(registry, &parsed, &Capability::SECTIONS);
    let report = ConsolidatedReport::assemble(&parsed, sections);

    tracing::info!(
        chars = parsed.raw_text.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "consolidated report assembled"
    );

    report
}

/// Parse the source document, degrading every failure to empty text.
pub fn parse_report(registry: &Registry, report_path: Option<&Path>) -> ParsedReport {
    let Some(parser) = registry.parser() else {
        tracing::warn!("no parser bound; analyzing empty text");
        return ParsedReport::empty();
    };

    let path = report_path
        .map(Path::to_path_buf)
        .unwrap_or_else(config::default_report_path);

    match parser(&path) {
        Ok(parsed) => parsed,
        Err(error) => {
            tracing::warn!(
                path = %path.display(),
                %error,
                "report extraction failed; analyzing empty text"
            );
            ParsedReport::empty()
        }
    }
}

/// Run the chosen analyzers against one parsed report. Used both for the
/// full pipeline and for the driver's subset mode; either way every
/// invocation sits behind its own failure boundary.
pub fn analyze_sections(
    registry: &Registry,
    parsed: &ParsedReport,
    sections: &[Capability],
) -> Vec<(Capability, Value)> {
    sections
        .iter()
        .map(|&capability| (capability, analyze_section(registry, parsed, capability)))
        .collect()
}

fn analyze_section(registry: &Registry, parsed: &ParsedReport, capability: Capability) -> Value {
    let Some(analyzer) = registry.analyzer(capability) else {
        let fault = AnalyzerFault::Unresolved(capability.canonical_name());
        tracing::warn!(section = capability.section_key(), %fault, "section absent");
        return Value::Null;
    };

    match analyzer(parsed) {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(
                section = capability.section_key(),
                %error,
                "analyzer failed; substituting fallback"
            );
            capability.fallback_value()
        }
    }
}
