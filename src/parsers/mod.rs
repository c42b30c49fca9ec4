//! Snapshot document loading.
//!
//! Snapshots are JSON documents written by an external producer. Loading is
//! strict: a document that is not JSON, or that lacks one of the `nodes`,
//! `topics`, `services` or `connections` collections, is rejected instead of
//! being treated as empty.
//!
//! ## Usage
//!
//! ```no_run
//! use topo_tools::parsers::parse_snapshot;
//! use std::path::Path;
//!
//! let snapshot = parse_snapshot(Path::new("ros2_graph_dump.json")).unwrap();
//! println!("{} nodes", snapshot.node_count());
//! ```

mod snapshot_json;

pub use snapshot_json::REQUIRED_KEYS;

use crate::error::{Result, TopoError};
use crate::model::Snapshot;
use std::path::Path;

/// Maximum snapshot file size (256 MB).
const MAX_SNAPSHOT_FILE_SIZE: u64 = 256 * 1024 * 1024;

/// Read and parse a snapshot file.
///
/// Returns an error if the file exceeds [`MAX_SNAPSHOT_FILE_SIZE`].
pub fn parse_snapshot(path: &Path) -> Result<Snapshot> {
    let metadata = std::fs::metadata(path).map_err(|e| TopoError::io(path, e))?;
    if metadata.len() > MAX_SNAPSHOT_FILE_SIZE {
        return Err(TopoError::validation(format!(
            "snapshot file {} is {} MB, exceeding the {} MB limit",
            path.display(),
            metadata.len() / (1024 * 1024),
            MAX_SNAPSHOT_FILE_SIZE / (1024 * 1024),
        )));
    }
    let content = std::fs::read_to_string(path).map_err(|e| TopoError::io(path, e))?;
    parse_snapshot_str(&content)
}

/// Parse a snapshot from JSON text.
pub fn parse_snapshot_str(content: &str) -> Result<Snapshot> {
    snapshot_json::decode_snapshot(content)
}
