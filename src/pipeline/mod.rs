//! Pipeline orchestration for snapshot operations.
//!
//! This module provides shared orchestration logic for load → diff → report
//! workflows, reducing duplication across CLI command handlers.

mod diff_stage;
mod output;
mod parse;
mod report_stage;

pub use diff_stage::compute_diff;
pub use output::{should_use_color, write_output, OutputTarget};
pub use parse::{parse_snapshot_with_context, SnapshotRole};
pub use report_stage::output_report;

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to read or parse a snapshot file
    #[error("Failed to load {role} snapshot {path}: {source}")]
    ParseFailed {
        role: SnapshotRole,
        path: String,
        source: anyhow::Error,
    },

    /// Diff computation failed
    #[error("Diff failed: {source}")]
    DiffFailed {
        #[source]
        source: anyhow::Error,
    },

    /// Report generation or output failed
    #[error("Report failed: {source}")]
    ReportFailed {
        #[source]
        source: anyhow::Error,
    },
}

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - no changes detected (or no --fail-on-change)
    pub const SUCCESS: i32 = 0;
    /// Changes were detected
    pub const CHANGES_DETECTED: i32 = 1;
    /// Structural warnings found by `validate --strict`
    pub const WARNINGS_FOUND: i32 = 2;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
