//! **Structural diffing for node-graph topology snapshots.**
//!
//! `topo-tools` compares two captures of a running system's node graph (nodes
//! with their parameters, topics, services, and the connections between them)
//! and reports what went missing, what was added, and which parameter values
//! changed. The result is a small, stable JSON document that downstream
//! renderers can highlight without knowing anything about how it was computed.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: The [`Snapshot`] data model. Entity mappings keep the order
//!   the producer wrote them in, and diff output follows that order.
//! - **[`parsers`]**: Loads snapshot documents, rejecting malformed input with
//!   an error that names the offending field.
//! - **[`diff`]**: Home of the [`DiffEngine`], which compares two snapshots by
//!   entity name and produces a [`DiffResult`].
//! - **[`reports`]**: The wire-format JSON report and a human-readable summary.
//! - **[`pipeline`]**: load → diff → report stages shared by the CLI.
//! - **[`config`]**: Config file discovery and CLI/file merging.
//!
//! ## Diffing Two Snapshots
//!
//! ```no_run
//! use std::path::Path;
//! use topo_tools::{parse_snapshot, DiffEngine};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let before = parse_snapshot(Path::new("before.json"))?;
//!     let after = parse_snapshot(Path::new("after.json"))?;
//!
//!     let result = DiffEngine::new().diff(&before, &after)?;
//!
//!     for node in &result.missing.nodes {
//!         println!("node went missing: {node}");
//!     }
//!     for change in &result.change {
//!         println!("parameter changed: {change}");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Writing the Diff Report
//!
//! ```no_run
//! use topo_tools::reports::{JsonReporter, ReportConfig, ReportGenerator};
//! use topo_tools::{parse_snapshot_str, DiffEngine};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let empty = r#"{"nodes": {}, "topics": {}, "services": {}, "connections": []}"#;
//!     let before = parse_snapshot_str(empty)?;
//!     let after = parse_snapshot_str(empty)?;
//!     let result = DiffEngine::new().diff(&before, &after)?;
//!
//!     let json = JsonReporter::new().generate_diff_report(
//!         &result,
//!         &before,
//!         &after,
//!         &ReportConfig::default(),
//!     )?;
//!     std::fs::write("diff_result.json", json)?;
//!
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::struct_excessive_bools,
    clippy::module_name_repetitions,
    // `before`/`after` and `added`/`missing` read fine side by side
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use config::{AppConfig, BehaviorConfig, EngineConfig, OutputConfig};
pub use config::{ConfigError, Validatable};
pub use config::{CliOverrides, DiffConfig, ValidateConfig};
pub use diff::{DiffEngine, DiffResult, DiffSummary, ParamChange, ParamRef};
pub use error::{ErrorContext, Result, TopoError};
pub use model::{Channel, Connection, ConnectionKey, ConnectionKind, Node, Parameter, Snapshot};
pub use parsers::{parse_snapshot, parse_snapshot_str};
pub use reports::{ReportFormat, ReportGenerator};
