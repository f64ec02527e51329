use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Guardia";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Conventional location of the bundled sample report, used when the
/// caller does not supply a document path. The sample is optional: a run
/// proceeds with an empty report when nothing exists there.
pub fn default_report_path() -> PathBuf {
    PathBuf::from("sample_reports/sample1.pdf")
}

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> &'static str {
    "guardia=info"
}
