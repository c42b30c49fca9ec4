//! Report type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Diff report JSON only
    #[default]
    Json,
    /// Diff report JSON plus a terminal summary
    Summary,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Summary => write!(f, "summary"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Maximum entries listed per section in human-readable output
    pub max_items: Option<usize>,
    /// Additional metadata to include
    pub metadata: ReportMetadata,
}

impl ReportConfig {
    /// Create a config carrying the input paths
    #[must_use]
    pub fn for_inputs(before: impl Into<String>, after: impl Into<String>) -> Self {
        Self {
            metadata: ReportMetadata {
                before_path: Some(before.into()),
                after_path: Some(after.into()),
            },
            ..Default::default()
        }
    }

    /// Limit the entries listed per summary section
    #[must_use]
    pub const fn with_max_items(mut self, max_items: Option<usize>) -> Self {
        self.max_items = max_items;
        self
    }
}

/// Metadata included in reports
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Path of the `before` snapshot
    pub before_path: Option<String>,
    /// Path of the `after` snapshot
    pub after_path: Option<String>,
}
