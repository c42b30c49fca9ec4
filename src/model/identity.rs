//! Identity rules for snapshot entities.
//!
//! Nodes, topics and services are identified by their mapping key alone, so a
//! rename is indistinguishable from a removal plus an addition. Connections
//! carry no identifier of their own and are identified by a composite key of
//! all four fields.

use super::{Connection, ConnectionKind};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four top-level collections that are diffed independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Nodes,
    Topics,
    Services,
    Connections,
}

impl EntityKind {
    /// All kinds, in diff order
    pub const ALL: [Self; 4] = [Self::Nodes, Self::Topics, Self::Services, Self::Connections];

    /// Top-level document key for this kind
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Nodes => "nodes",
            Self::Topics => "topics",
            Self::Services => "services",
            Self::Connections => "connections",
        }
    }

    /// Singular label for human-readable output
    #[must_use]
    pub const fn singular(self) -> &'static str {
        match self {
            Self::Nodes => "node",
            Self::Topics => "topic",
            Self::Services => "service",
            Self::Connections => "connection",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Composite identity of a connection.
///
/// Equality and hashing cover exactly the four connection fields, so two
/// connections with the same key are the same connection. `Display` renders
/// the wire form `source -> target(kind:direction)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionKey {
    pub source_id: String,
    pub target_id: String,
    pub kind: ConnectionKind,
    pub direction: String,
}

impl fmt::Display for ConnectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}({}:{})",
            self.source_id, self.target_id, self.kind, self.direction
        )
    }
}

/// Derive the composite identity key of a connection.
#[must_use]
pub fn connection_key(connection: &Connection) -> ConnectionKey {
    ConnectionKey {
        source_id: connection.source_id.clone(),
        target_id: connection.target_id.clone(),
        kind: connection.kind,
        direction: connection.direction.clone(),
    }
}

/// Distinct connection keys of a sequence, in first-occurrence order.
#[must_use]
pub fn connection_keys(connections: &[Connection]) -> IndexSet<ConnectionKey> {
    connections.iter().map(connection_key).collect()
}

/// Key set of a nodes/topics/services mapping, in insertion order.
#[must_use]
pub fn entity_names<V>(map: &IndexMap<String, V>) -> IndexSet<&str> {
    map.keys().map(String::as_str).collect()
}
