//! Diff computation stage.

use super::PipelineError;
use crate::config::DiffConfig;
use crate::diff::{DiffEngine, DiffResult};
use crate::model::Snapshot;
use anyhow::Result;

/// Run the core diff computation between two snapshots.
pub fn compute_diff(config: &DiffConfig, before: &Snapshot, after: &Snapshot) -> Result<DiffResult> {
    let quiet = config.behavior.quiet;

    if !quiet {
        tracing::info!("Computing topology diff...");
    }

    let engine = DiffEngine::new().parallel(config.engine.parallel);
    let result = engine
        .diff(before, after)
        .map_err(|e| PipelineError::DiffFailed { source: e.into() })?;

    if !quiet {
        let s = &result.summary;
        tracing::info!(
            "Diff complete: {} changes ({} nodes +{}/-{}, {} params +{}/-{}/~{})",
            s.total_changes,
            s.nodes_added + s.nodes_missing,
            s.nodes_added,
            s.nodes_missing,
            s.params_added + s.params_missing + s.params_changed,
            s.params_added,
            s.params_missing,
            s.params_changed
        );
    }

    Ok(result)
}
