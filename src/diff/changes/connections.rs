//! Connection change computer implementation.

use super::split_keys;
use crate::diff::traits::{ChangeComputer, EntityChangeSet};
use crate::model::{connection_keys, ConnectionKey, Snapshot};

/// Computes connection-level changes between snapshots.
///
/// Connections are identified by all four of their fields. Repeated
/// connections within one snapshot count once, at their first position.
pub struct ConnectionChangeComputer;

impl ConnectionChangeComputer {
    /// Create a new connection change computer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for ConnectionChangeComputer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeComputer for ConnectionChangeComputer {
    type ChangeSet = EntityChangeSet<ConnectionKey>;

    fn compute(&self, before: &Snapshot, after: &Snapshot) -> EntityChangeSet<ConnectionKey> {
        let before_keys = connection_keys(&before.connections);
        let after_keys = connection_keys(&after.connections);
        split_keys(&before_keys, &after_keys)
    }

    fn name(&self) -> &str {
        "connections"
    }
}
