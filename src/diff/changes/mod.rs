//! Change computer implementations.
//!
//! One `ChangeComputer` per entity kind: nodes (with their parameters),
//! topics and services (by name), and connections (by composite key).

mod connections;
mod entities;
mod nodes;

pub use connections::ConnectionChangeComputer;
pub use entities::ChannelChangeComputer;
pub use nodes::NodeChangeComputer;

use super::traits::EntityChangeSet;
use indexmap::IndexSet;
use std::hash::Hash;

/// Added/missing split of two key sets.
///
/// `missing` follows `before`'s order and `added` follows `after`'s.
fn split_keys<K: Clone + Hash + Eq>(
    before: &IndexSet<K>,
    after: &IndexSet<K>,
) -> EntityChangeSet<K> {
    EntityChangeSet {
        added: after.difference(before).cloned().collect(),
        missing: before.difference(after).cloned().collect(),
    }
}
