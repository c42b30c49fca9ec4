//! Core snapshot data structures.

use super::{ConnectionKey, GraphMetadata};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

/// Kind tag carried by every node in the current schema.
pub const COMPONENT_KIND: &str = "component";

fn default_node_kind() -> String {
    COMPONENT_KIND.to_string()
}

/// Point-in-time capture of a running system's topology.
///
/// Entity mappings preserve insertion order, which is the order the producer
/// discovered them in. Diff output follows that order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct Snapshot {
    /// Capture metadata written by the producer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph_metadata: Option<GraphMetadata>,
    /// Nodes indexed by fully qualified node name
    pub nodes: IndexMap<String, Node>,
    /// Topics indexed by topic name
    pub topics: IndexMap<String, Channel>,
    /// Services indexed by service name
    pub services: IndexMap<String, Channel>,
    /// Actions indexed by action name (carried through, never diffed)
    #[serde(default)]
    pub actions: IndexMap<String, Channel>,
    /// Directed node/channel relationships
    pub connections: Vec<Connection>,
    /// Content hash for quick equality checks
    #[serde(skip)]
    pub content_hash: u64,
}

impl Snapshot {
    /// Create an empty snapshot
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, keyed by its name.
    ///
    /// Returns `true` if a node with the same name was already present and
    /// has been replaced.
    pub fn add_node(&mut self, node: Node) -> bool {
        self.nodes.insert(node.name.clone(), node).is_some()
    }

    /// Add a topic, keyed by its name
    pub fn add_topic(&mut self, topic: Channel) -> bool {
        self.topics.insert(topic.name.clone(), topic).is_some()
    }

    /// Add a service, keyed by its name
    pub fn add_service(&mut self, service: Channel) -> bool {
        self.services.insert(service.name.clone(), service).is_some()
    }

    /// Append a connection
    pub fn add_connection(&mut self, connection: Connection) {
        self.connections.push(connection);
    }

    /// Get a node by name
    #[must_use]
    pub fn get_node(&self, name: &str) -> Option<&Node> {
        self.nodes.get(name)
    }

    /// Calculate and update the content hash.
    ///
    /// Two snapshots with the same hash serialized to identical documents.
    pub fn calculate_content_hash(&mut self) {
        match serde_json::to_vec(self) {
            Ok(bytes) => self.content_hash = xxh3_64(&bytes),
            Err(e) => {
                tracing::debug!("Could not hash snapshot content: {}", e);
                self.content_hash = 0;
            }
        }
    }

    /// When the producer captured this snapshot, if recorded
    #[must_use]
    pub fn captured_at(&self) -> Option<DateTime<Utc>> {
        self.graph_metadata.as_ref().and_then(GraphMetadata::captured_at)
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }

    #[must_use]
    pub fn service_count(&self) -> usize {
        self.services.len()
    }

    #[must_use]
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Total number of parameters across all nodes
    #[must_use]
    pub fn parameter_count(&self) -> usize {
        self.nodes.values().map(|n| n.parameters.len()).sum()
    }
}

/// A running node (process-level component) in the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Node {
    /// Producer-assigned identifier
    pub id: String,
    /// Fully qualified name, e.g. `/sensors/cam`
    pub name: String,
    /// Name split on `/` with empty segments dropped
    #[serde(default)]
    pub path: Vec<String>,
    /// Entity kind tag
    #[serde(rename = "type", alias = "kind", default = "default_node_kind")]
    pub kind: String,
    /// Declared parameters, unique by name
    pub parameters: Vec<Parameter>,
}

impl Node {
    /// Create a component node with no parameters
    #[must_use]
    pub fn component(id: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: id.into(),
            path: Self::path_from_name(&name),
            name,
            kind: default_node_kind(),
            parameters: Vec::new(),
        }
    }

    /// Builder-style parameter append
    #[must_use]
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Split a node name into its namespace path segments
    #[must_use]
    pub fn path_from_name(name: &str) -> Vec<String> {
        name.split('/')
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Look up a parameter by name
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Parameters indexed by name, in declaration order
    #[must_use]
    pub fn parameters_by_name(&self) -> IndexMap<&str, &Parameter> {
        self.parameters.iter().map(|p| (p.name.as_str(), p)).collect()
    }

    /// First parameter name that occurs more than once, if any
    #[must_use]
    pub fn duplicate_parameter(&self) -> Option<&str> {
        let mut seen = std::collections::HashSet::with_capacity(self.parameters.len());
        self.parameters
            .iter()
            .map(|p| p.name.as_str())
            .find(|name| !seen.insert(*name))
    }
}

/// A named node parameter.
///
/// The value is always the producer's string rendering. Only `value` takes
/// part in diffing; `param_type` is informational.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Parameter {
    pub name: String,
    pub value: String,
    #[serde(rename = "type", default)]
    pub param_type: ParameterType,
}

impl Parameter {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        param_type: ParameterType,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            param_type,
        }
    }
}

/// Best-effort type tag reported by the producer.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    String,
    Integer,
    Double,
    Boolean,
    Array,
    #[default]
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for ParameterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Integer => write!(f, "integer"),
            Self::Double => write!(f, "double"),
            Self::Boolean => write!(f, "boolean"),
            Self::Array => write!(f, "array"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// A topic, service or action with its interface type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Channel {
    pub id: String,
    pub name: String,
    /// Message/service interface type, e.g. `sensor_msgs/msg/Image`
    #[serde(rename = "type")]
    pub interface_type: String,
    /// Interface definition lines with comments and blank lines stripped
    #[serde(rename = "message_schema", alias = "schema", default)]
    pub schema: Vec<String>,
}

impl Channel {
    /// Create a channel whose id is its name, as the producer does
    #[must_use]
    pub fn new(name: impl Into<String>, interface_type: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
            interface_type: interface_type.into(),
            schema: Vec::new(),
        }
    }

    /// Builder-style schema assignment
    #[must_use]
    pub fn with_schema(mut self, schema: Vec<String>) -> Self {
        self.schema = schema;
        self
    }
}

/// Which kind of channel a connection goes through.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionKind {
    Topic,
    Service,
}

impl ConnectionKind {
    /// Directions a producer emits for this kind
    #[must_use]
    pub const fn known_directions(self) -> &'static [&'static str] {
        match self {
            Self::Topic => &["publish", "subscribe"],
            Self::Service => &["provide", "call"],
        }
    }
}

impl std::fmt::Display for ConnectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Topic => write!(f, "topic"),
            Self::Service => write!(f, "service"),
        }
    }
}

/// Directed relationship between a node and a topic or service.
///
/// Connections are value objects: the four fields are the whole identity.
///
/// `type` must be `topic` or `service`. Any other value, such as `action`,
/// makes the whole snapshot fail to load rather than producing a key with an
/// arbitrary kind string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Connection {
    pub source_id: String,
    pub target_id: String,
    #[serde(rename = "type", alias = "kind")]
    pub kind: ConnectionKind,
    /// e.g. `publish`, `subscribe`, `provide`, `call`
    pub direction: String,
}

impl Connection {
    #[must_use]
    pub fn new(
        source_id: impl Into<String>,
        target_id: impl Into<String>,
        kind: ConnectionKind,
        direction: impl Into<String>,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            target_id: target_id.into(),
            kind,
            direction: direction.into(),
        }
    }

    /// Composite identity key of this connection
    #[must_use]
    pub fn key(&self) -> ConnectionKey {
        super::connection_key(self)
    }
}
