//! Trait definitions for diff computation strategies.
//!
//! Each entity kind is compared by its own [`ChangeComputer`], so the kinds
//! can be computed independently (and in parallel).

use super::{ParamChange, ParamRef};
use crate::model::Snapshot;

/// Trait for computing a specific type of change between snapshots.
///
/// Implementors only read the snapshots; they never fail. Inputs that would
/// make a comparison ambiguous are rejected before any computer runs.
pub trait ChangeComputer: Send + Sync {
    /// The type of changes this computer produces.
    type ChangeSet;

    /// Compute changes between the `before` and `after` snapshots.
    fn compute(&self, before: &Snapshot, after: &Snapshot) -> Self::ChangeSet;

    /// Get the name of this change computer for logging/debugging.
    fn name(&self) -> &str;
}

/// Container for keyed entity changes (added, missing).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityChangeSet<K> {
    pub added: Vec<K>,
    pub missing: Vec<K>,
}

impl<K> EntityChangeSet<K> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            added: Vec::new(),
            missing: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.missing.is_empty()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.added.len() + self.missing.len()
    }
}

impl<K> Default for EntityChangeSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Container for node changes, including the nested parameter changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeChangeSet {
    pub added: Vec<String>,
    pub missing: Vec<String>,
    pub params_added: Vec<ParamRef>,
    pub params_missing: Vec<ParamRef>,
    pub params_changed: Vec<ParamChange>,
}

impl NodeChangeSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty()
            && self.missing.is_empty()
            && self.params_added.is_empty()
            && self.params_missing.is_empty()
            && self.params_changed.is_empty()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.added.len()
            + self.missing.len()
            + self.params_added.len()
            + self.params_missing.len()
            + self.params_changed.len()
    }
}
