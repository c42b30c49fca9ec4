//! Integration tests for topo-tools
//!
//! These tests verify end-to-end functionality of snapshot loading,
//! the diff engine, and report generation against fixture files.

use topo_tools::{
    diff::{DiffEngine, DiffResult},
    parsers::{parse_snapshot, parse_snapshot_str},
    reports::{JsonReporter, ReportConfig, ReportGenerator},
    Snapshot, TopoError,
};
use std::path::{Path, PathBuf};

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn load(name: &str) -> Snapshot {
    parse_snapshot(&fixture_path(name)).expect("fixture should parse")
}

fn diff_fixtures(before: &str, after: &str) -> DiffResult {
    DiffEngine::new()
        .diff(&load(before), &load(after))
        .expect("diff should succeed")
}

fn strings<T: ToString>(entries: &[T]) -> Vec<String> {
    entries.iter().map(ToString::to_string).collect()
}

fn json_report(result: &DiffResult) -> String {
    let empty = Snapshot::new();
    JsonReporter::new()
        .generate_diff_report(result, &empty, &empty, &ReportConfig::default())
        .expect("report should render")
}

// ============================================================================
// Loader Tests
// ============================================================================

mod loader_tests {
    use super::*;

    #[test]
    fn test_parse_rich_fixture() {
        let snapshot = load("robot_before.json");

        assert_eq!(snapshot.node_count(), 3);
        assert_eq!(snapshot.topic_count(), 3);
        assert_eq!(snapshot.service_count(), 2);
        assert_eq!(snapshot.connection_count(), 6);
        assert_eq!(snapshot.parameter_count(), 6);
        assert_eq!(snapshot.actions.len(), 1);
        assert!(snapshot.captured_at().is_some());

        let names: Vec<&str> = snapshot.nodes.keys().map(String::as_str).collect();
        assert_eq!(names, ["/camera/driver", "/planner", "/legacy_bridge"]);
    }

    #[test]
    fn test_connection_kind_alias_accepted() {
        // The scenario fixture spells the connection kind as "kind", not "type"
        let snapshot = load("scenario_connection_before.json");
        assert_eq!(snapshot.connection_count(), 1);
        assert_eq!(
            snapshot.connections[0].key().to_string(),
            "/a -> /b(topic:publish)"
        );
    }

    #[test]
    fn test_missing_connections_key() {
        let err = parse_snapshot(&fixture_path("malformed/missing_connections.json")).unwrap_err();
        assert!(err.is_malformed_input());
        assert_eq!(err.to_string(), "Failed to load snapshot: missing required field");
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(
            source.as_deref(),
            Some("Missing required field: connections in snapshot document")
        );
    }

    #[test]
    fn test_truncated_document() {
        let err = parse_snapshot(&fixture_path("malformed/truncated.json")).unwrap_err();
        assert!(err.is_malformed_input());
    }

    #[test]
    fn test_duplicate_parameter_rejected() {
        let err =
            parse_snapshot(&fixture_path("malformed/duplicate_parameter.json")).unwrap_err();
        assert!(err.is_malformed_input());
        let source = std::error::Error::source(&err)
            .map(ToString::to_string)
            .unwrap_or_default();
        assert!(source.contains("nodes./cam.parameters"), "{source}");
        assert!(source.contains("fps"), "{source}");
    }

    #[test]
    fn test_unknown_connection_kind_rejected() {
        let err =
            parse_snapshot(&fixture_path("malformed/unknown_connection_kind.json")).unwrap_err();
        assert!(err.is_malformed_input());
        let source = std::error::Error::source(&err)
            .map(ToString::to_string)
            .unwrap_or_default();
        assert!(source.contains("connections[0]"), "{source}");
    }

    #[test]
    fn test_unreadable_metadata_does_not_fail_load() {
        let content = r#"{
            "graph_metadata": {"created_at": "2024-05-01T10:00:00Z"},
            "nodes": {"/cam": {"id": "node_0", "name": "/cam", "parameters": [
                {"name": "fps", "value": "30", "type": "integer"}]}},
            "topics": {}, "services": {},
            "actions": {"/dock": {"name": "/dock"}},
            "connections": []
        }"#;
        let snapshot = parse_snapshot_str(content).expect("optional blocks are lenient");
        assert!(snapshot.captured_at().is_none());
        assert!(snapshot.actions.is_empty());

        let result = DiffEngine::new().diff(&snapshot, &snapshot).unwrap();
        assert!(!result.has_changes());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = parse_snapshot(&fixture_path("does_not_exist.json")).unwrap_err();
        assert!(matches!(err, TopoError::Io { .. }));
    }
}

// ============================================================================
// Diff Scenario Tests
// ============================================================================

mod scenario_tests {
    use super::*;

    #[test]
    fn test_parameter_change_and_new_node() {
        let result = diff_fixtures("scenario_param_before.json", "scenario_param_after.json");

        assert_eq!(strings(&result.change), ["[/cam: fps] 30 -> 60"]);
        assert_eq!(result.add.nodes, ["/lidar"]);
        assert!(result.add.params.is_empty(), "/lidar has no parameters");
        assert!(result.missing.is_empty());
        assert_eq!(result.summary.total_changes, 2);
    }

    #[test]
    fn test_removed_connection() {
        let result = diff_fixtures(
            "scenario_connection_before.json",
            "scenario_connection_after.json",
        );

        assert_eq!(
            strings(&result.missing.connections),
            ["/a -> /b(topic:publish)"]
        );
        assert!(result.add.is_empty());
        assert!(result.change.is_empty());
    }

    #[test]
    fn test_rich_fixture_entities() {
        let result = diff_fixtures("robot_before.json", "robot_after.json");

        assert_eq!(result.missing.nodes, ["/legacy_bridge"]);
        assert_eq!(result.missing.topics, ["/legacy/status"]);
        assert_eq!(result.missing.services, ["/legacy_bridge/reset"]);
        assert_eq!(result.add.nodes, ["/lidar/driver"]);
        assert_eq!(result.add.topics, ["/scan"]);
        assert_eq!(result.add.services, ["/lidar/driver/set_range"]);
    }

    #[test]
    fn test_rich_fixture_parameter_order() {
        let result = diff_fixtures("robot_before.json", "robot_after.json");

        // Surviving nodes first (before's order), then the parameters of new nodes
        assert_eq!(
            strings(&result.missing.params),
            ["[/camera/driver]: frame_id", "[/legacy_bridge]: mode"]
        );
        assert_eq!(
            strings(&result.add.params),
            [
                "[/camera/driver]: gain",
                "[/lidar/driver]: range_max",
                "[/lidar/driver]: frame_id"
            ]
        );
        assert_eq!(strings(&result.change), ["[/camera/driver: fps] 30 -> 60"]);
    }

    #[test]
    fn test_type_only_parameter_change_ignored() {
        // /planner use_sim_time changes type boolean -> string with the same value
        let result = diff_fixtures("robot_before.json", "robot_after.json");
        assert!(result.change.iter().all(|c| c.node != "/planner"));
        assert!(result.add.params.iter().all(|p| p.node != "/planner"));
        assert!(result.missing.params.iter().all(|p| p.node != "/planner"));
    }

    #[test]
    fn test_duplicate_connections_collapse() {
        // after lists /planner -> /cmd_vel twice; it exists once in before
        let result = diff_fixtures("robot_before.json", "robot_after.json");
        assert!(!strings(&result.add.connections)
            .iter()
            .any(|c| c.starts_with("/planner -> /cmd_vel")));
        assert_eq!(
            strings(&result.add.connections),
            [
                "/lidar/driver -> /scan(topic:publish)",
                "/lidar/driver -> /lidar/driver/set_range(service:provide)"
            ]
        );
    }

    #[test]
    fn test_actions_are_not_diffed() {
        // robot_before carries an action that robot_after lacks
        let result = diff_fixtures("robot_before.json", "robot_after.json");
        let all_names: Vec<&String> = result
            .missing
            .topics
            .iter()
            .chain(&result.missing.services)
            .chain(&result.missing.nodes)
            .collect();
        assert!(!all_names.iter().any(|n| n.as_str() == "/navigate"));
    }

    #[test]
    fn test_summary_counts() {
        let result = diff_fixtures("robot_before.json", "robot_after.json");
        let s = &result.summary;

        assert_eq!((s.nodes_added, s.nodes_missing), (1, 1));
        assert_eq!((s.topics_added, s.topics_missing), (1, 1));
        assert_eq!((s.services_added, s.services_missing), (1, 1));
        assert_eq!((s.connections_added, s.connections_missing), (2, 2));
        assert_eq!(
            (s.params_added, s.params_missing, s.params_changed),
            (3, 2, 1)
        );
        assert_eq!(s.total_changes, 16);
        assert_eq!(result.total_changes(), 16);
    }
}

// ============================================================================
// Diff Law Tests
// ============================================================================

mod law_tests {
    use super::*;

    #[test]
    fn test_identity_law() {
        for name in ["robot_before.json", "robot_after.json", "scenario_param_after.json"] {
            let result = diff_fixtures(name, name);
            assert!(!result.has_changes(), "{name} diffed against itself");
            assert_eq!(result.summary.total_changes, 0);
        }
    }

    #[test]
    fn test_identity_law_without_hash_shortcut() {
        // Two independently built snapshots with no content hash
        let content = std::fs::read_to_string(fixture_path("robot_before.json")).unwrap();
        let mut a = parse_snapshot_str(&content).unwrap();
        let mut b = parse_snapshot_str(&content).unwrap();
        a.content_hash = 0;
        b.content_hash = 0;

        let result = DiffEngine::new().diff(&a, &b).unwrap();
        assert!(!result.has_changes());
    }

    #[test]
    fn test_symmetry() {
        let forward = diff_fixtures("robot_before.json", "robot_after.json");
        let backward = diff_fixtures("robot_after.json", "robot_before.json");

        let sorted = |mut v: Vec<String>| {
            v.sort();
            v
        };

        assert_eq!(sorted(forward.add.nodes.clone()), sorted(backward.missing.nodes.clone()));
        assert_eq!(sorted(forward.missing.nodes.clone()), sorted(backward.add.nodes.clone()));
        assert_eq!(sorted(forward.add.topics.clone()), sorted(backward.missing.topics.clone()));
        assert_eq!(
            sorted(forward.add.services.clone()),
            sorted(backward.missing.services.clone())
        );
        assert_eq!(
            sorted(strings(&forward.add.connections)),
            sorted(strings(&backward.missing.connections))
        );
        assert_eq!(
            sorted(strings(&forward.add.params)),
            sorted(strings(&backward.missing.params))
        );
        assert_eq!(
            sorted(strings(&forward.missing.params)),
            sorted(strings(&backward.add.params))
        );

        let reversed: Vec<String> = forward
            .change
            .iter()
            .map(|c| c.reversed().to_string())
            .collect();
        assert_eq!(sorted(reversed), sorted(strings(&backward.change)));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let before = load("robot_before.json");
        let after = load("robot_after.json");

        let sequential = DiffEngine::new().diff(&before, &after).unwrap();
        let parallel = DiffEngine::new().parallel(true).diff(&before, &after).unwrap();
        assert_eq!(sequential, parallel);
    }
}

// ============================================================================
// Report Golden Tests
// ============================================================================

mod report_tests {
    use super::*;

    fn expected(name: &str) -> String {
        std::fs::read_to_string(fixture_path(&format!("expected/{name}.diff.json")))
            .expect("golden file should exist")
    }

    #[test]
    fn test_scenario_report_matches_golden() {
        let result = diff_fixtures("scenario_param_before.json", "scenario_param_after.json");
        assert_eq!(json_report(&result).trim_end(), expected("scenario_param").trim_end());
    }

    #[test]
    fn test_rich_report_matches_golden() {
        let result = diff_fixtures("robot_before.json", "robot_after.json");
        assert_eq!(json_report(&result).trim_end(), expected("robot").trim_end());
    }

    #[test]
    fn test_empty_report_has_every_key() {
        let result = diff_fixtures("robot_before.json", "robot_before.json");
        let value: serde_json::Value = serde_json::from_str(&json_report(&result)).unwrap();

        let top: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(top, ["missing", "add", "change"]);
        for bucket in ["missing", "add", "change"] {
            let keys: Vec<&String> = value[bucket].as_object().unwrap().keys().collect();
            assert_eq!(keys, ["topics", "nodes", "services", "param", "connections"]);
            for key in keys {
                assert_eq!(value[bucket][key], serde_json::json!([]));
            }
        }
    }
}
