//! Diff command handler.
//!
//! Implements the `diff` subcommand for comparing two topology snapshots.

use super::ensure_valid;
use crate::config::DiffConfig;
use crate::diff::DiffResult;
use crate::pipeline::{
    compute_diff, exit_codes, output_report, parse_snapshot_with_context, SnapshotRole,
};
use anyhow::Result;

/// Run the diff command, returning the desired exit code.
///
/// Both snapshots are loaded and diffed before any output is produced, so a
/// malformed input never leaves a partial report behind.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
#[allow(clippy::needless_pass_by_value)]
pub fn run_diff(config: DiffConfig) -> Result<i32> {
    ensure_valid(&config)?;
    let quiet = config.behavior.quiet;

    let before = parse_snapshot_with_context(&config.paths.before, SnapshotRole::Before, quiet)?;
    let after = parse_snapshot_with_context(&config.paths.after, SnapshotRole::After, quiet)?;

    let result = compute_diff(&config, &before, &after)?;
    let exit_code = determine_exit_code(&config, &result);

    output_report(&config, &result, &before, &after)?;

    Ok(exit_code)
}

/// Determine the appropriate exit code based on diff results and config flags.
const fn determine_exit_code(config: &DiffConfig, result: &DiffResult) -> i32 {
    if config.behavior.fail_on_change && result.summary.total_changes > 0 {
        return exit_codes::CHANGES_DETECTED;
    }
    exit_codes::SUCCESS
}
