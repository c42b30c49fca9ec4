//! Node change computer implementation.

use crate::diff::traits::{ChangeComputer, NodeChangeSet};
use crate::diff::{ParamChange, ParamRef};
use crate::model::{Node, Snapshot};

/// Computes node-level changes and descends into parameters.
///
/// A node found on one side only takes all of its parameters with it. Nodes
/// present on both sides are compared parameter by parameter on `value`;
/// the parameter type tag is ignored.
pub struct NodeChangeComputer;

impl NodeChangeComputer {
    /// Create a new node change computer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for NodeChangeComputer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeComputer for NodeChangeComputer {
    type ChangeSet = NodeChangeSet;

    fn compute(&self, before: &Snapshot, after: &Snapshot) -> NodeChangeSet {
        let mut result = NodeChangeSet::new();

        // Scan before: removed nodes, then per-parameter comparison of survivors
        for (name, before_node) in &before.nodes {
            match after.nodes.get(name) {
                Some(after_node) => compare_parameters(name, before_node, after_node, &mut result),
                None => {
                    result.missing.push(name.clone());
                    result.params_missing.extend(all_parameters(name, before_node));
                }
            }
        }

        // Scan after: nodes that did not exist before
        for (name, after_node) in &after.nodes {
            if !before.nodes.contains_key(name) {
                result.added.push(name.clone());
                result.params_added.extend(all_parameters(name, after_node));
            }
        }

        result
    }

    fn name(&self) -> &str {
        "nodes"
    }
}

fn all_parameters<'a>(name: &'a str, node: &'a Node) -> impl Iterator<Item = ParamRef> + 'a {
    node.parameters.iter().map(move |p| ParamRef::new(name, &p.name))
}

fn compare_parameters(name: &str, before: &Node, after: &Node, result: &mut NodeChangeSet) {
    let before_params = before.parameters_by_name();
    let after_params = after.parameters_by_name();

    for param in &before.parameters {
        match after_params.get(param.name.as_str()) {
            None => result.params_missing.push(ParamRef::new(name, &param.name)),
            Some(other) if other.value != param.value => {
                result.params_changed.push(ParamChange::new(
                    name,
                    &param.name,
                    &param.value,
                    &other.value,
                ));
            }
            Some(_) => {}
        }
    }

    for param in &after.parameters {
        if !before_params.contains_key(param.name.as_str()) {
            result.params_added.push(ParamRef::new(name, &param.name));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Parameter, ParameterType};

    fn node(name: &str, params: &[(&str, &str)]) -> Node {
        params.iter().fold(Node::component(name, name), |node, (p, v)| {
            node.with_parameter(Parameter::new(*p, *v, ParameterType::String))
        })
    }

    fn snapshot(nodes: Vec<Node>) -> Snapshot {
        let mut snapshot = Snapshot::new();
        for node in nodes {
            snapshot.add_node(node);
        }
        snapshot
    }

    fn rendered<T: ToString>(entries: &[T]) -> Vec<String> {
        entries.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_parameter_value_change() {
        let before = snapshot(vec![node("/cam", &[("fps", "30")])]);
        let after = snapshot(vec![node("/cam", &[("fps", "60")])]);

        let changes = NodeChangeComputer::new().compute(&before, &after);
        assert!(changes.added.is_empty());
        assert!(changes.missing.is_empty());
        assert_eq!(rendered(&changes.params_changed), vec!["[/cam: fps] 30 -> 60"]);
    }

    #[test]
    fn test_type_only_change_is_ignored() {
        let before = snapshot(vec![Node::component("/cam", "/cam").with_parameter(
            Parameter::new("fps", "30", ParameterType::Integer),
        )]);
        let after = snapshot(vec![Node::component("/cam", "/cam").with_parameter(
            Parameter::new("fps", "30", ParameterType::String),
        )]);

        assert!(NodeChangeComputer::new().compute(&before, &after).is_empty());
    }

    #[test]
    fn test_removed_node_cascades_to_parameters() {
        let before = snapshot(vec![
            node("/cam", &[("fps", "30")]),
            node("/lidar", &[("rate", "10"), ("frame", "laser")]),
        ]);
        let after = snapshot(vec![node("/cam", &[("fps", "30")])]);

        let changes = NodeChangeComputer::new().compute(&before, &after);
        assert_eq!(changes.missing, vec!["/lidar"]);
        assert_eq!(
            rendered(&changes.params_missing),
            vec!["[/lidar]: rate", "[/lidar]: frame"]
        );
        assert!(changes.params_added.is_empty());
    }

    #[test]
    fn test_added_node_brings_its_parameters() {
        let before = snapshot(vec![]);
        let after = snapshot(vec![node("/lidar", &[("rate", "10")])]);

        let changes = NodeChangeComputer::new().compute(&before, &after);
        assert_eq!(changes.added, vec!["/lidar"]);
        assert_eq!(rendered(&changes.params_added), vec!["[/lidar]: rate"]);
    }

    #[test]
    fn test_parameter_entry_ordering() {
        // Surviving node's added params come before params of brand-new nodes
        let before = snapshot(vec![
            node("/a", &[("x", "1"), ("y", "1")]),
            node("/b", &[("z", "1")]),
        ]);
        let after = snapshot(vec![
            node("/new", &[("n", "1")]),
            node("/b", &[("z", "2"), ("w", "1")]),
            node("/a", &[("v", "1"), ("y", "2")]),
        ]);

        let changes = NodeChangeComputer::new().compute(&before, &after);
        assert_eq!(rendered(&changes.params_missing), vec!["[/a]: x"]);
        assert_eq!(
            rendered(&changes.params_changed),
            vec!["[/a: y] 1 -> 2", "[/b: z] 1 -> 2"]
        );
        assert_eq!(
            rendered(&changes.params_added),
            vec!["[/a]: v", "[/b]: w", "[/new]: n"]
        );
    }
}
