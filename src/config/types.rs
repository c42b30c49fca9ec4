//! Configuration types for topo-tools operations.
//!
//! Provides structured configuration for the diff and validate operations.

use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default location of the diff report.
pub const DEFAULT_OUTPUT_FILE: &str = "diff_result.json";

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are layered over file settings with
/// [`AppConfig::apply_overrides`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
    /// Diff engine options
    pub engine: EngineConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

// ============================================================================
// Command-specific Configuration Types
// ============================================================================

/// Configuration for diff operations
#[derive(Debug, Clone)]
pub struct DiffConfig {
    /// Paths to compare
    pub paths: DiffPaths,
    /// Output configuration
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
    /// Diff engine options
    pub engine: EngineConfig,
}

/// Paths for diff operation
#[derive(Debug, Clone)]
pub struct DiffPaths {
    /// Path to the earlier snapshot
    pub before: PathBuf,
    /// Path to the later snapshot
    pub after: PathBuf,
}

/// Configuration for validate operations
#[derive(Debug, Clone)]
pub struct ValidateConfig {
    /// Snapshot to check
    pub path: PathBuf,
    /// Treat structural warnings as failures
    pub strict: bool,
    /// Suppress non-essential output
    pub quiet: bool,
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Additional terminal output besides the JSON report
    pub format: ReportFormat,
    /// Where the JSON diff report is written
    pub file: PathBuf,
    /// Disable colored output
    pub no_color: bool,
    /// Entries listed per section of the terminal summary (all when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<usize>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Json,
            file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            no_color: false,
            max_items: None,
        }
    }
}

/// Values given explicitly on the command line.
///
/// Every `Some` (and every flag that is set) wins over the config file, even
/// when it equals the built-in default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub format: Option<ReportFormat>,
    pub file: Option<PathBuf>,
    pub max_items: Option<usize>,
    pub no_color: bool,
    pub fail_on_change: bool,
    pub quiet: bool,
    pub parallel: bool,
}

/// Behavior flags for diff operations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Exit with code 1 if any changes detected
    pub fail_on_change: bool,
    /// Suppress non-essential output
    pub quiet: bool,
}

/// Diff engine options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct EngineConfig {
    /// Compare the entity kinds in parallel
    pub parallel: bool,
}

// ============================================================================
// Builder for DiffConfig
// ============================================================================

/// Builder for `DiffConfig`
#[derive(Debug, Default)]
pub struct DiffConfigBuilder {
    before: Option<PathBuf>,
    after: Option<PathBuf>,
    output: OutputConfig,
    behavior: BehaviorConfig,
    engine: EngineConfig,
}

impl DiffConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an application config (file settings merged with CLI flags)
    #[must_use]
    pub fn from_app(config: AppConfig) -> Self {
        Self {
            output: config.output,
            behavior: config.behavior,
            engine: config.engine,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn before_path(mut self, path: PathBuf) -> Self {
        self.before = Some(path);
        self
    }

    #[must_use]
    pub fn after_path(mut self, path: PathBuf) -> Self {
        self.after = Some(path);
        self
    }

    #[must_use]
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.output.format = format;
        self
    }

    #[must_use]
    pub fn output_file(mut self, file: PathBuf) -> Self {
        self.output.file = file;
        self
    }

    #[must_use]
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.output.no_color = no_color;
        self
    }

    #[must_use]
    pub const fn max_items(mut self, max_items: Option<usize>) -> Self {
        self.output.max_items = max_items;
        self
    }

    #[must_use]
    pub const fn fail_on_change(mut self, fail: bool) -> Self {
        self.behavior.fail_on_change = fail;
        self
    }

    #[must_use]
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.behavior.quiet = quiet;
        self
    }

    #[must_use]
    pub const fn parallel(mut self, parallel: bool) -> Self {
        self.engine.parallel = parallel;
        self
    }

    pub fn build(self) -> anyhow::Result<DiffConfig> {
        let before = self
            .before
            .ok_or_else(|| anyhow::anyhow!("before path is required"))?;
        let after = self
            .after
            .ok_or_else(|| anyhow::anyhow!("after path is required"))?;

        Ok(DiffConfig {
            paths: DiffPaths { before, after },
            output: self.output,
            behavior: self.behavior,
            engine: self.engine,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_file() {
        let config = AppConfig::default();
        assert_eq!(config.output.file, PathBuf::from("diff_result.json"));
        assert_eq!(config.output.format, ReportFormat::Json);
        assert!(!config.engine.parallel);
    }

    #[test]
    fn test_builder_requires_both_paths() {
        let err = DiffConfigBuilder::new()
            .before_path(PathBuf::from("a.json"))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("after path"));
    }

    #[test]
    fn test_builder_from_app_keeps_settings() {
        let mut app = AppConfig::default();
        app.engine.parallel = true;
        app.output.format = ReportFormat::Summary;

        let config = DiffConfigBuilder::from_app(app)
            .before_path(PathBuf::from("a.json"))
            .after_path(PathBuf::from("b.json"))
            .fail_on_change(true)
            .build()
            .unwrap();
        assert!(config.engine.parallel);
        assert!(config.behavior.fail_on_change);
        assert_eq!(config.output.format, ReportFormat::Summary);
        assert_eq!(config.paths.after, PathBuf::from("b.json"));
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: AppConfig = serde_yaml::from_str("engine:\n  parallel: true\n").unwrap();
        assert!(config.engine.parallel);
        assert_eq!(config.output, OutputConfig::default());
    }
}
