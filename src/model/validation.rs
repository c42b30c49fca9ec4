//! Non-fatal structural checks on a snapshot.
//!
//! These look for producer mistakes that the diff engine does not care about
//! but that usually indicate a broken capture. They never change diff output.

use super::{ConnectionKind, Snapshot};
use serde::{Deserialize, Serialize};

/// How serious a snapshot warning is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningSeverity {
    Info,
    Warning,
}

impl std::fmt::Display for WarningSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// A single schema-quality finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotWarning {
    pub severity: WarningSeverity,
    /// Where in the document, e.g. `nodes./cam`
    pub location: String,
    pub message: String,
}

impl SnapshotWarning {
    fn warning(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: WarningSeverity::Warning,
            location: location.into(),
            message: message.into(),
        }
    }

    fn info(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: WarningSeverity::Info,
            location: location.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for SnapshotWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.location, self.message)
    }
}

impl Snapshot {
    /// Run all structural checks and collect findings in document order.
    #[must_use]
    pub fn check_structure(&self) -> Vec<SnapshotWarning> {
        let mut warnings = Vec::new();
        self.check_nodes(&mut warnings);
        self.check_channels(&mut warnings);
        self.check_connections(&mut warnings);
        warnings
    }

    fn check_nodes(&self, warnings: &mut Vec<SnapshotWarning>) {
        for (key, node) in &self.nodes {
            let location = format!("nodes.{key}");
            if node.name != *key {
                warnings.push(SnapshotWarning::warning(
                    &location,
                    format!("record name '{}' does not match its key", node.name),
                ));
            }
            let expected_path = super::Node::path_from_name(key);
            if !node.path.is_empty() && node.path != expected_path {
                warnings.push(SnapshotWarning::info(
                    &location,
                    format!(
                        "path {:?} does not match name segments {:?}",
                        node.path, expected_path
                    ),
                ));
            }
        }
    }

    fn check_channels(&self, warnings: &mut Vec<SnapshotWarning>) {
        let collections = [("topics", &self.topics), ("services", &self.services)];
        for (label, map) in collections {
            for (key, channel) in map {
                if channel.name != *key {
                    warnings.push(SnapshotWarning::warning(
                        format!("{label}.{key}"),
                        format!("record name '{}' does not match its key", channel.name),
                    ));
                }
            }
        }
    }

    fn check_connections(&self, warnings: &mut Vec<SnapshotWarning>) {
        for (idx, conn) in self.connections.iter().enumerate() {
            let location = format!("connections[{idx}]");
            let channel_known = |id: &str| match conn.kind {
                ConnectionKind::Topic => self.topics.contains_key(id),
                ConnectionKind::Service => self.services.contains_key(id),
            };
            for endpoint in [&conn.source_id, &conn.target_id] {
                let endpoint = endpoint.as_str();
                if !self.nodes.contains_key(endpoint) && !channel_known(endpoint) {
                    warnings.push(SnapshotWarning::warning(
                        &location,
                        format!(
                            "endpoint '{endpoint}' is neither a node nor a known {}",
                            conn.kind
                        ),
                    ));
                }
            }
            if !conn.kind.known_directions().contains(&conn.direction.as_str()) {
                warnings.push(SnapshotWarning::info(
                    &location,
                    format!(
                        "unusual direction '{}' for a {} connection",
                        conn.direction, conn.kind
                    ),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Channel, Connection, Node};

    fn wired_snapshot() -> Snapshot {
        let mut snapshot = Snapshot::new();
        snapshot.add_node(Node::component("node_0", "/cam"));
        snapshot.add_topic(Channel::new("/image", "sensor_msgs/msg/Image"));
        snapshot.add_connection(Connection::new(
            "/cam",
            "/image",
            ConnectionKind::Topic,
            "publish",
        ));
        snapshot
    }

    #[test]
    fn test_clean_snapshot_has_no_warnings() {
        assert!(wired_snapshot().check_structure().is_empty());
    }

    #[test]
    fn test_dangling_endpoint_is_reported() {
        let mut snapshot = wired_snapshot();
        snapshot.add_connection(Connection::new(
            "/image",
            "/ghost",
            ConnectionKind::Topic,
            "subscribe",
        ));
        let warnings = snapshot.check_structure();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].location, "connections[1]");
        assert!(warnings[0].message.contains("/ghost"));
    }

    #[test]
    fn test_service_endpoint_not_satisfied_by_topic() {
        let mut snapshot = wired_snapshot();
        snapshot.add_connection(Connection::new(
            "/cam",
            "/image",
            ConnectionKind::Service,
            "call",
        ));
        let warnings = snapshot.check_structure();
        assert!(warnings.iter().any(|w| w.message.contains("known service")));
    }

    #[test]
    fn test_name_key_mismatch_and_odd_direction() {
        let mut snapshot = wired_snapshot();
        let mut renamed = Node::component("node_1", "/lidar");
        renamed.name = "/lidar_front".to_string();
        snapshot.nodes.insert("/lidar".to_string(), renamed);
        snapshot.add_connection(Connection::new(
            "/lidar",
            "/image",
            ConnectionKind::Topic,
            "provide",
        ));

        let warnings = snapshot.check_structure();
        assert!(warnings
            .iter()
            .any(|w| w.location == "nodes./lidar" && w.severity == WarningSeverity::Warning));
        assert!(warnings
            .iter()
            .any(|w| w.severity == WarningSeverity::Info && w.message.contains("provide")));
    }
}
