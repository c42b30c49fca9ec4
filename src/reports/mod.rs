//! Report generation for diff results.
//!
//! Two output formats are provided:
//! - JSON: the diff report wire format (`missing` / `add` / `change` buckets)
//!   consumed by downstream tooling
//! - Summary: compact human-readable terminal output

mod json;
mod summary;
mod types;

pub use json::JsonReporter;
pub use summary::SummaryReporter;
pub use types::{ReportConfig, ReportFormat, ReportMetadata};

use crate::diff::DiffResult;
use crate::error::{ReportErrorKind, TopoError};
use crate::model::Snapshot;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<ReportError> for TopoError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::SerializationError(msg) => TopoError::report(
                "serializing diff report",
                ReportErrorKind::JsonSerializationError(msg),
            ),
        }
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report from diff results
    fn generate_diff_report(
        &self,
        result: &DiffResult,
        before: &Snapshot,
        after: &Snapshot,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
    }
}
