//! Keyword and numeric signal analysis over parsed report text.
//!
//! Each health domain is an independent analyzer: a pure function from
//! [`types::ParsedReport`] to a typed advisory result, built from the
//! shared primitives in [`signals`]. The [`engine`] runs every bound
//! analyzer behind its own failure boundary and assembles the
//! consolidated report; no analyzer ever sees another's output.

pub mod diet;
pub mod engine;
pub mod hydration;
pub mod recommendation;
pub mod registry;
pub mod signals;
pub mod sleep;
pub mod stress;
pub mod summary;
pub mod trend;
pub mod types;

pub use engine::run;
pub use registry::{Capability, Registry};
pub use types::{ConsolidatedReport, ParsedReport};
