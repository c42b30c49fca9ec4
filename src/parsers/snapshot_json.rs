//! JSON snapshot decoding.
//!
//! Decoding is done collection by collection so that a failure can name the
//! exact entry that broke (`nodes./cam`, `connections[3]`, ...). Nothing is
//! defaulted at the top level: a document without one of the four required
//! collections is rejected. The optional `actions` and `graph_metadata`
//! blocks never take part in a diff, so a bad value there is logged and
//! dropped instead.

use crate::error::{ParseErrorKind, Result, TopoError};
use crate::model::{Connection, GraphMetadata, Node, Snapshot};
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Top-level collections every snapshot must carry.
pub const REQUIRED_KEYS: [&str; 4] = ["nodes", "topics", "services", "connections"];

/// Decode a snapshot document from JSON text.
pub fn decode_snapshot(content: &str) -> Result<Snapshot> {
    let value: Value = serde_json::from_str(content)?;
    let mut document = match value {
        Value::Object(document) => document,
        other => {
            return Err(TopoError::invalid_value(
                "<document>",
                format!("expected a JSON object, found {}", type_name(&other)),
            ));
        }
    };

    if let Some(missing) = REQUIRED_KEYS.iter().find(|k| !document.contains_key(**k)) {
        return Err(TopoError::missing_field(*missing, "snapshot document"));
    }

    let nodes: IndexMap<String, Node> = decode_mapping(&mut document, "nodes")?;
    let topics = decode_mapping(&mut document, "topics")?;
    let services = decode_mapping(&mut document, "services")?;
    let actions = if document.contains_key("actions") {
        decode_mapping(&mut document, "actions").unwrap_or_else(|e| {
            tracing::warn!("ignoring unreadable actions block: {}", detail(&e));
            IndexMap::new()
        })
    } else {
        IndexMap::new()
    };
    let connections = decode_connections(&mut document)?;
    let graph_metadata = match document.remove("graph_metadata") {
        None | Some(Value::Null) => None,
        Some(raw) => match decode_entry::<GraphMetadata>(raw, "graph_metadata") {
            Ok(meta) => Some(meta),
            Err(e) => {
                tracing::warn!("ignoring unreadable graph_metadata: {}", detail(&e));
                None
            }
        },
    };

    for (name, node) in &nodes {
        if let Some(param) = node.duplicate_parameter() {
            return Err(TopoError::invalid_value(
                format!("nodes.{name}.parameters"),
                format!("duplicate parameter '{param}'"),
            ));
        }
    }

    let mut snapshot = Snapshot {
        graph_metadata,
        nodes,
        topics,
        services,
        actions,
        connections,
        content_hash: 0,
    };
    snapshot.calculate_content_hash();

    tracing::debug!(
        nodes = snapshot.node_count(),
        topics = snapshot.topic_count(),
        services = snapshot.service_count(),
        connections = snapshot.connection_count(),
        "decoded snapshot"
    );

    Ok(snapshot)
}

fn decode_mapping<T: DeserializeOwned>(
    document: &mut Map<String, Value>,
    key: &str,
) -> Result<IndexMap<String, T>> {
    let entries = match document.remove(key).unwrap_or(Value::Null) {
        Value::Object(entries) => entries,
        other => {
            return Err(TopoError::invalid_value(
                key,
                format!("expected an object, found {}", type_name(&other)),
            ));
        }
    };

    let mut decoded = IndexMap::with_capacity(entries.len());
    for (name, entry) in entries {
        let value = decode_entry(entry, &format!("{key}.{name}"))?;
        decoded.insert(name, value);
    }
    Ok(decoded)
}

fn decode_connections(document: &mut Map<String, Value>) -> Result<Vec<Connection>> {
    let entries = match document.remove("connections").unwrap_or(Value::Null) {
        Value::Array(entries) => entries,
        other => {
            return Err(TopoError::invalid_value(
                "connections",
                format!("expected an array, found {}", type_name(&other)),
            ));
        }
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| decode_entry(entry, &format!("connections[{idx}]")))
        .collect()
}

fn decode_entry<T: DeserializeOwned>(entry: Value, location: &str) -> Result<T> {
    serde_json::from_value(entry).map_err(|e| {
        TopoError::parse(
            format!("decoding {location}"),
            ParseErrorKind::InvalidValue {
                field: location.to_string(),
                message: e.to_string(),
            },
        )
    })
}

/// The innermost message of a decode error, without the load-failure prefix.
fn detail(err: &TopoError) -> String {
    std::error::Error::source(err).map_or_else(|| err.to_string(), ToString::to_string)
}

const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
