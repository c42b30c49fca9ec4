//! Validate command handler.
//!
//! Implements the `validate` subcommand: load a snapshot and report
//! structural problems that do not prevent diffing.

use super::ensure_valid;
use crate::config::ValidateConfig;
use crate::model::{Snapshot, SnapshotWarning};
use crate::pipeline::{
    exit_codes, parse_snapshot_with_context, write_output, OutputTarget, SnapshotRole,
};
use anyhow::Result;
use std::fmt::Write as _;

/// Run the validate command, returning the desired exit code.
///
/// A snapshot that fails to load is an error. Warnings only affect the exit
/// code when `strict` is set.
#[allow(clippy::needless_pass_by_value)]
pub fn run_validate(config: ValidateConfig) -> Result<i32> {
    ensure_valid(&config)?;

    let snapshot = parse_snapshot_with_context(&config.path, SnapshotRole::Single, config.quiet)?;
    let warnings = snapshot.check_structure();

    for warning in &warnings {
        tracing::warn!("{warning}");
    }

    let report = render_validation(&config, &snapshot, &warnings);
    write_output(&report, &OutputTarget::Stdout, config.quiet)?;

    Ok(validation_exit_code(config.strict, &warnings))
}

fn validation_exit_code(strict: bool, warnings: &[SnapshotWarning]) -> i32 {
    if strict && !warnings.is_empty() {
        exit_codes::WARNINGS_FOUND
    } else {
        exit_codes::SUCCESS
    }
}

fn render_validation(config: &ValidateConfig, snapshot: &Snapshot, warnings: &[SnapshotWarning]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Snapshot: {}", config.path.display());
    let _ = writeln!(
        out,
        "  {} nodes, {} topics, {} services, {} connections, {} parameters",
        snapshot.node_count(),
        snapshot.topic_count(),
        snapshot.service_count(),
        snapshot.connection_count(),
        snapshot.parameter_count()
    );

    if warnings.is_empty() {
        let _ = write!(out, "\nNo structural problems found");
        return out;
    }

    let _ = writeln!(out, "\n{} finding(s):", warnings.len());
    for warning in warnings {
        let _ = writeln!(out, "  {warning}");
    }
    out.truncate(out.trim_end().len());
    out
}
