//! Structural diff engine implementation.

use super::changes::{ChannelChangeComputer, ConnectionChangeComputer, NodeChangeComputer};
use super::traits::{ChangeComputer, EntityChangeSet, NodeChangeSet};
use super::DiffResult;
use crate::error::{DiffErrorKind, Result, TopoError};
use crate::model::{ConnectionKey, Snapshot};

/// Per-kind outputs of the change computers.
type KindChanges = (
    NodeChangeSet,
    EntityChangeSet<String>,
    EntityChangeSet<String>,
    EntityChangeSet<ConnectionKey>,
);

/// Structural diff engine for comparing snapshots.
#[derive(Debug, Clone, Default)]
pub struct DiffEngine {
    parallel: bool,
}

impl DiffEngine {
    /// Create a new diff engine with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the entity kinds on the rayon thread pool.
    ///
    /// The result is identical to a sequential run.
    #[must_use]
    pub const fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Check if parallel computation is enabled
    #[must_use]
    pub const fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Compare two snapshots and return the diff result
    pub fn diff(&self, before: &Snapshot, after: &Snapshot) -> Result<DiffResult> {
        let mut result = DiffResult::new();

        // Quick check: if content hashes match, snapshots are identical
        if before.content_hash == after.content_hash && before.content_hash != 0 {
            tracing::debug!("Snapshot content hashes match, skipping comparison");
            return Ok(result);
        }

        ensure_unique_parameters(before, "before")?;
        ensure_unique_parameters(after, "after")?;

        let (nodes, topics, services, connections) = if self.parallel {
            compute_parallel(before, after)
        } else {
            compute_sequential(before, after)
        };

        result.missing.nodes = nodes.missing;
        result.add.nodes = nodes.added;
        result.missing.params = nodes.params_missing;
        result.add.params = nodes.params_added;
        result.change = nodes.params_changed;
        result.missing.topics = topics.missing;
        result.add.topics = topics.added;
        result.missing.services = services.missing;
        result.add.services = services.added;
        result.missing.connections = connections.missing;
        result.add.connections = connections.added;

        result.calculate_summary();
        tracing::debug!(
            nodes_added = result.summary.nodes_added,
            nodes_missing = result.summary.nodes_missing,
            params_changed = result.summary.params_changed,
            total = result.summary.total_changes,
            "Diff computed"
        );
        Ok(result)
    }
}

fn compute_sequential(before: &Snapshot, after: &Snapshot) -> KindChanges {
    (
        run(&NodeChangeComputer::new(), before, after),
        run(&ChannelChangeComputer::topics(), before, after),
        run(&ChannelChangeComputer::services(), before, after),
        run(&ConnectionChangeComputer::new(), before, after),
    )
}

fn compute_parallel(before: &Snapshot, after: &Snapshot) -> KindChanges {
    let ((nodes, topics), (services, connections)) = rayon::join(
        || {
            rayon::join(
                || run(&NodeChangeComputer::new(), before, after),
                || run(&ChannelChangeComputer::topics(), before, after),
            )
        },
        || {
            rayon::join(
                || run(&ChannelChangeComputer::services(), before, after),
                || run(&ConnectionChangeComputer::new(), before, after),
            )
        },
    );
    (nodes, topics, services, connections)
}

fn run<C: ChangeComputer>(computer: &C, before: &Snapshot, after: &Snapshot) -> C::ChangeSet {
    tracing::trace!("Computing {} changes", computer.name());
    computer.compute(before, after)
}

/// Parameter names must be unique per node for name-keyed comparison.
fn ensure_unique_parameters(snapshot: &Snapshot, role: &str) -> Result<()> {
    for (name, node) in &snapshot.nodes {
        if let Some(param) = node.duplicate_parameter() {
            return Err(TopoError::diff(
                format!("checking {role} snapshot"),
                DiffErrorKind::DuplicateParameter {
                    node: name.clone(),
                    parameter: param.to_string(),
                },
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Channel, Connection, ConnectionKind, Node, Parameter, ParameterType};

    fn sample() -> Snapshot {
        let mut snapshot = Snapshot::new();
        snapshot.add_node(
            Node::component("node_0", "/cam")
                .with_parameter(Parameter::new("fps", "30", ParameterType::Integer)),
        );
        snapshot.add_topic(Channel::new("/image", "sensor_msgs/msg/Image"));
        snapshot.add_service(Channel::new("/cam/reset", "std_srvs/srv/Trigger"));
        snapshot.add_connection(Connection::new(
            "/cam",
            "/image",
            ConnectionKind::Topic,
            "publish",
        ));
        snapshot
    }

    #[test]
    fn test_self_diff_is_empty() {
        let snapshot = sample();
        let result = DiffEngine::new().diff(&snapshot, &snapshot).unwrap();
        assert!(!result.has_changes());
        assert_eq!(result.summary.total_changes, 0);
    }

    #[test]
    fn test_hash_fast_path() {
        let mut before = sample();
        before.calculate_content_hash();
        let after = before.clone();

        let result = DiffEngine::new().diff(&before, &after).unwrap();
        assert!(!result.has_changes());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let before = sample();
        let mut after = Snapshot::new();
        after.add_node(
            Node::component("node_0", "/cam")
                .with_parameter(Parameter::new("fps", "60", ParameterType::Integer)),
        );
        after.add_topic(Channel::new("/scan", "sensor_msgs/msg/LaserScan"));

        let sequential = DiffEngine::new().diff(&before, &after).unwrap();
        let parallel = DiffEngine::new().parallel(true).diff(&before, &after).unwrap();
        assert_eq!(sequential, parallel);
        assert_eq!(sequential.summary.topics_added, 1);
        assert_eq!(sequential.summary.topics_missing, 1);
        assert_eq!(sequential.summary.services_missing, 1);
        assert_eq!(sequential.summary.connections_missing, 1);
        assert_eq!(sequential.summary.params_changed, 1);
    }

    #[test]
    fn test_duplicate_parameter_is_rejected() {
        let before = sample();
        let mut after = Snapshot::new();
        after.add_node(
            Node::component("node_0", "/cam")
                .with_parameter(Parameter::new("fps", "30", ParameterType::Integer))
                .with_parameter(Parameter::new("fps", "60", ParameterType::Integer)),
        );

        let err = DiffEngine::new().diff(&before, &after).unwrap_err();
        match err {
            TopoError::Diff {
                context,
                source: DiffErrorKind::DuplicateParameter { node, parameter },
            } => {
                assert_eq!(context, "checking after snapshot");
                assert_eq!(node, "/cam");
                assert_eq!(parameter, "fps");
            }
            other => panic!("Expected DuplicateParameter, got {other:?}"),
        }
    }

    #[test]
    fn test_builder_flags() {
        assert!(!DiffEngine::new().is_parallel());
        assert!(DiffEngine::new().parallel(true).is_parallel());
    }
}
