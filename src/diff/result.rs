//! Diff result structures.
//!
//! Entries are kept structured until a reporter renders them. The `Display`
//! impls here define the wire strings.

use crate::model::{ConnectionKey, EntityKind};
use std::fmt;

/// Complete result of a snapshot diff.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct DiffResult {
    /// Summary statistics
    pub summary: DiffSummary,
    /// Entities and parameters present only in `before`
    pub missing: EntityChanges,
    /// Entities and parameters present only in `after`
    pub add: EntityChanges,
    /// Parameters present in both whose value differs
    pub change: Vec<ParamChange>,
}

impl DiffResult {
    /// Create a new empty diff result
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate and update summary statistics
    pub fn calculate_summary(&mut self) {
        self.summary.nodes_added = self.add.nodes.len();
        self.summary.nodes_missing = self.missing.nodes.len();
        self.summary.topics_added = self.add.topics.len();
        self.summary.topics_missing = self.missing.topics.len();
        self.summary.services_added = self.add.services.len();
        self.summary.services_missing = self.missing.services.len();
        self.summary.connections_added = self.add.connections.len();
        self.summary.connections_missing = self.missing.connections.len();
        self.summary.params_added = self.add.params.len();
        self.summary.params_missing = self.missing.params.len();
        self.summary.params_changed = self.change.len();
        self.summary.total_changes =
            self.add.total() + self.missing.total() + self.summary.params_changed;
    }

    /// Check if there are any changes
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.add.is_empty() || !self.missing.is_empty() || !self.change.is_empty()
    }

    /// Number of entries across all buckets
    #[must_use]
    pub fn total_changes(&self) -> usize {
        self.add.total() + self.missing.total() + self.change.len()
    }
}

/// Summary statistics for the diff
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffSummary {
    pub total_changes: usize,
    pub nodes_added: usize,
    pub nodes_missing: usize,
    pub topics_added: usize,
    pub topics_missing: usize,
    pub services_added: usize,
    pub services_missing: usize,
    pub connections_added: usize,
    pub connections_missing: usize,
    pub params_added: usize,
    pub params_missing: usize,
    pub params_changed: usize,
}

impl DiffSummary {
    /// `(added, missing)` counts for one entity kind
    #[must_use]
    pub const fn counts(&self, kind: EntityKind) -> (usize, usize) {
        match kind {
            EntityKind::Nodes => (self.nodes_added, self.nodes_missing),
            EntityKind::Topics => (self.topics_added, self.topics_missing),
            EntityKind::Services => (self.services_added, self.services_missing),
            EntityKind::Connections => (self.connections_added, self.connections_missing),
        }
    }
}

/// One side of the diff: entities and parameters found on that side only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityChanges {
    pub nodes: Vec<String>,
    pub topics: Vec<String>,
    pub services: Vec<String>,
    pub connections: Vec<ConnectionKey>,
    pub params: Vec<ParamRef>,
}

impl EntityChanges {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
            && self.topics.is_empty()
            && self.services.is_empty()
            && self.connections.is_empty()
            && self.params.is_empty()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.nodes.len()
            + self.topics.len()
            + self.services.len()
            + self.connections.len()
            + self.params.len()
    }

    /// Names of the nodes, topics or services in this bucket.
    ///
    /// Returns `None` for connections, which are keyed structurally.
    #[must_use]
    pub fn names(&self, kind: EntityKind) -> Option<&[String]> {
        match kind {
            EntityKind::Nodes => Some(&self.nodes),
            EntityKind::Topics => Some(&self.topics),
            EntityKind::Services => Some(&self.services),
            EntityKind::Connections => None,
        }
    }
}

/// A parameter identified by its owning node.
///
/// Renders as `[<node>]: <param>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParamRef {
    pub node: String,
    pub param: String,
}

impl ParamRef {
    #[must_use]
    pub fn new(node: impl Into<String>, param: impl Into<String>) -> Self {
        Self {
            node: node.into(),
            param: param.into(),
        }
    }
}

impl fmt::Display for ParamRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]: {}", self.node, self.param)
    }
}

/// A parameter value that differs between the two snapshots.
///
/// Renders as `[<node>: <param>] <before> -> <after>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParamChange {
    pub node: String,
    pub param: String,
    pub before: String,
    pub after: String,
}

impl ParamChange {
    #[must_use]
    pub fn new(
        node: impl Into<String>,
        param: impl Into<String>,
        before: impl Into<String>,
        after: impl Into<String>,
    ) -> Self {
        Self {
            node: node.into(),
            param: param.into(),
            before: before.into(),
            after: after.into(),
        }
    }

    /// The same change seen from the other direction
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            node: self.node.clone(),
            param: self.param.clone(),
            before: self.after.clone(),
            after: self.before.clone(),
        }
    }
}

impl fmt::Display for ParamChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}: {}] {} -> {}",
            self.node, self.param, self.before, self.after
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ConnectionKind;

    #[test]
    fn test_param_entry_rendering() {
        assert_eq!(ParamRef::new("/cam", "fps").to_string(), "[/cam]: fps");
        assert_eq!(
            ParamChange::new("/cam", "fps", "30", "60").to_string(),
            "[/cam: fps] 30 -> 60"
        );
        assert_eq!(
            ParamChange::new("/cam", "fps", "30", "60").reversed().to_string(),
            "[/cam: fps] 60 -> 30"
        );
    }

    #[test]
    fn test_empty_result_has_no_changes() {
        let mut result = DiffResult::new();
        result.calculate_summary();
        assert!(!result.has_changes());
        assert_eq!(result.total_changes(), 0);
        assert_eq!(result.summary, DiffSummary::default());
    }

    #[test]
    fn test_summary_counts() {
        let mut result = DiffResult::new();
        result.add.nodes.push("/lidar".to_string());
        result.add.params.push(ParamRef::new("/lidar", "rate"));
        result.missing.connections.push(ConnectionKey {
            source_id: "/cam".to_string(),
            target_id: "/image".to_string(),
            kind: ConnectionKind::Topic,
            direction: "publish".to_string(),
        });
        result
            .change
            .push(ParamChange::new("/cam", "fps", "30", "60"));
        result.calculate_summary();

        assert!(result.has_changes());
        assert_eq!(result.summary.total_changes, 4);
        assert_eq!(result.total_changes(), 4);
        assert_eq!(result.summary.counts(EntityKind::Nodes), (1, 0));
        assert_eq!(result.summary.counts(EntityKind::Connections), (0, 1));
        assert_eq!(result.summary.params_changed, 1);
    }

    #[test]
    fn test_names_by_kind() {
        let mut changes = EntityChanges::new();
        changes.topics.push("/image".to_string());
        assert_eq!(
            changes.names(EntityKind::Topics),
            Some(&["/image".to_string()][..])
        );
        assert!(changes.names(EntityKind::Connections).is_none());
    }
}
