//! Structural diff engine for topology snapshots.
//!
//! Two snapshots are compared kind by kind. Nodes, topics and services are
//! identified by their mapping key, connections by their composite
//! [`ConnectionKey`](crate::model::ConnectionKey). Nodes present on both sides
//! are compared one level deeper, parameter by parameter.
//!
//! # Architecture
//!
//! - [`ChangeComputer`](traits::ChangeComputer): trait for computing one kind of change
//! - Individual change computers in the [`changes`] module
//! - [`DiffEngine`]: runs the computers and assembles a [`DiffResult`]
//!
//! # Example
//!
//! ```ignore
//! use topo_tools::diff::DiffEngine;
//!
//! let engine = DiffEngine::new().parallel(true);
//! let result = engine.diff(&before, &after)?;
//! for change in &result.change {
//!     println!("{change}");
//! }
//! ```

pub mod changes;
mod engine;
mod result;
pub mod traits;

pub use engine::DiffEngine;
pub use result::{DiffResult, DiffSummary, EntityChanges, ParamChange, ParamRef};
pub use traits::{ChangeComputer, EntityChangeSet, NodeChangeSet};
