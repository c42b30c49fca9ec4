//! Configuration module for topo-tools.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use topo_tools::config::{AppConfig, DiffConfigBuilder};
//!
//! // Load from file
//! use topo_tools::config::file::load_or_default;
//! let (config, loaded_from) = load_or_default(None);
//!
//! let diff = DiffConfigBuilder::from_app(config)
//!     .before_path("before.json".into())
//!     .after_path("after.json".into())
//!     .build()?;
//! ```
//!
//! # Configuration File
//!
//! Place a `.topo-tools.yaml` file in your project root or `~/.config/topo-tools/`:
//!
//! ```yaml
//! output:
//!   file: reports/diff_result.json
//! behavior:
//!   fail_on_change: true
//! ```

pub mod file;
mod types;
mod validation;

// Re-export main types
pub use types::{
    AppConfig, BehaviorConfig, CliOverrides, DiffConfig, DiffConfigBuilder, DiffPaths,
    EngineConfig, OutputConfig, ValidateConfig, DEFAULT_OUTPUT_FILE,
};
pub use validation::{ConfigError, Validatable};

// Re-export file utilities
pub use file::{
    discover_config_file, generate_full_example_config, load_config_file, load_or_default,
    search_dirs, ConfigFileError, CONFIG_FILE_NAMES,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `.topo-tools.yaml` config files. It can be used by editors for
/// validation and autocompletion.
pub fn generate_json_schema() -> serde_json::Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}
