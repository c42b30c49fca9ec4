//! Capture metadata attached to a snapshot document.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Producer-written metadata block (`graph_metadata`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GraphMetadata {
    /// Capture time in Unix epoch milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    /// Free-text description of how the snapshot was taken
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl GraphMetadata {
    /// Capture time as a UTC timestamp.
    ///
    /// Returns `None` when absent or out of chrono's representable range.
    #[must_use]
    pub fn captured_at(&self) -> Option<DateTime<Utc>> {
        self.created_at.and_then(DateTime::from_timestamp_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captured_at_from_millis() {
        let meta = GraphMetadata {
            created_at: Some(1_700_000_000_123),
            description: None,
        };
        let ts = meta.captured_at().unwrap();
        assert_eq!(ts.timestamp(), 1_700_000_000);
        assert_eq!(ts.timestamp_subsec_millis(), 123);
    }

    #[test]
    fn test_captured_at_missing() {
        assert!(GraphMetadata::default().captured_at().is_none());
    }
}
