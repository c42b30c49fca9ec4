//! Topic and service change computer implementation.

use super::split_keys;
use crate::diff::traits::{ChangeComputer, EntityChangeSet};
use crate::model::{entity_names, Channel, EntityKind, Snapshot};
use indexmap::IndexMap;

/// Computes name-level changes for one channel collection.
///
/// Channels are compared by name only. A topic whose interface type or schema
/// changed but whose name did not is not reported.
pub struct ChannelChangeComputer {
    kind: EntityKind,
}

impl ChannelChangeComputer {
    /// Computer for the `topics` collection
    #[must_use]
    pub const fn topics() -> Self {
        Self {
            kind: EntityKind::Topics,
        }
    }

    /// Computer for the `services` collection
    #[must_use]
    pub const fn services() -> Self {
        Self {
            kind: EntityKind::Services,
        }
    }

    fn collection<'a>(&self, snapshot: &'a Snapshot) -> &'a IndexMap<String, Channel> {
        match self.kind {
            EntityKind::Services => &snapshot.services,
            _ => &snapshot.topics,
        }
    }
}

impl ChangeComputer for ChannelChangeComputer {
    type ChangeSet = EntityChangeSet<String>;

    fn compute(&self, before: &Snapshot, after: &Snapshot) -> EntityChangeSet<String> {
        let before_names = entity_names(self.collection(before));
        let after_names = entity_names(self.collection(after));
        let split = split_keys(&before_names, &after_names);

        EntityChangeSet {
            added: split.added.into_iter().map(str::to_string).collect(),
            missing: split.missing.into_iter().map(str::to_string).collect(),
        }
    }

    fn name(&self) -> &str {
        self.kind.key()
    }
}
