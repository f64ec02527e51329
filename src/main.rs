//! CLI driver: choose a report and a run mode, hand off to the engine,
//! render the result. No analysis logic lives here.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use guardia::analysis::{engine, Capability, ConsolidatedReport, Registry};
use guardia::config;

#[derive(Parser)]
#[command(
    name = "guardia",
    version,
    about = "Analyze a medical report into structured lifestyle guidance"
)]
struct Cli {
    /// Report to analyze (PDF or plain text); defaults to the bundled
    /// sample location when omitted.
    report: Option<PathBuf>,

    /// Run only the named sections, e.g. "diet,sleep". Historical
    /// analyzer names like "diet_agent" are accepted.
    #[arg(long, value_delimiter = ',')]
    sections: Vec<String>,

    /// Print raw JSON instead of formatted sections.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    if cli.sections.is_empty() {
        let report = engine::run(cli.report.as_deref());
        render_full(&report, cli.json);
        return ExitCode::SUCCESS;
    }

    // Subset mode. Resolve names up front so a typo fails before any work.
    let mut chosen = Vec::new();
    for name in &cli.sections {
        match Capability::resolve(name) {
            Some(capability) if capability != Capability::ParseReport => chosen.push(capability),
            _ => {
                eprintln!("unknown section: {name}");
                return ExitCode::from(2);
            }
        }
    }

    let registry = Registry::new();
    let parsed = engine::parse_report(&registry, cli.report.as_deref());
    let sections = engine::analyze_sections(&registry, &parsed, &chosen);
    render_subset(&sections, cli.json);
    ExitCode::SUCCESS
}

fn render_full(report: &ConsolidatedReport, json: bool) {
    if json {
        print_value(&serde_json::to_value(report).unwrap_or(Value::Null));
        return;
    }

    println!("=== Consolidated Report ===");
    for capability in Capability::SECTIONS {
        print_section(capability.section_key(), report.section(capability));
    }
    print_section("extracted", &report.extracted);
}

fn render_subset(sections: &[(Capability, Value)], json: bool) {
    if json {
        let map: serde_json::Map<String, Value> = sections
            .iter()
            .map(|(capability, value)| (capability.section_key().to_string(), value.clone()))
            .collect();
        print_value(&Value::Object(map));
        return;
    }

    for (capability, value) in sections {
        print_section(capability.section_key(), value);
    }
}

fn print_section(key: &str, value: &Value) {
    println!("\n-- {key} --");
    print_value(value);
}

fn print_value(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(pretty) => println!("{pretty}"),
        Err(_) => println!("{value}"),
    }
}
