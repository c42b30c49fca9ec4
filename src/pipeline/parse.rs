//! Snapshot loading stage.

use super::PipelineError;
use crate::error::ErrorContext;
use crate::model::Snapshot;
use anyhow::Result;
use std::fmt;
use std::path::Path;

/// Which side of a comparison a snapshot is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotRole {
    Before,
    After,
    /// A snapshot loaded on its own (e.g. for validation)
    Single,
}

impl fmt::Display for SnapshotRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Before => write!(f, "before"),
            Self::After => write!(f, "after"),
            Self::Single => write!(f, "input"),
        }
    }
}

/// Load a snapshot, naming the input and its path in any error.
pub fn parse_snapshot_with_context(path: &Path, role: SnapshotRole, quiet: bool) -> Result<Snapshot> {
    if !quiet {
        tracing::info!("Loading {} snapshot: {}", role, path.display());
    }

    let snapshot = crate::parsers::parse_snapshot(path)
        .with_context(|| format!("{role} snapshot"))
        .map_err(|e| PipelineError::ParseFailed {
            role,
            path: path.display().to_string(),
            source: e.into(),
        })?;

    if !quiet {
        tracing::info!(
            "Loaded {} nodes, {} topics, {} services, {} connections",
            snapshot.node_count(),
            snapshot.topic_count(),
            snapshot.service_count(),
            snapshot.connection_count()
        );
    }
    if let Some(captured) = snapshot.captured_at() {
        tracing::debug!("{} snapshot captured at {}", role, captured.to_rfc3339());
    }

    Ok(snapshot)
}
