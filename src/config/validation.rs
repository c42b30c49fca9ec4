//! Configuration validation for topo-tools.
//!
//! Provides validation traits and implementations for all configuration types.

use super::types::{AppConfig, DiffConfig, OutputConfig, ValidateConfig};
use std::path::Path;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        self.output.validate()
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.file.as_os_str().is_empty() {
            errors.push(ConfigError::new("output.file", "Output file path is empty"));
        } else if self.file.is_dir() {
            errors.push(ConfigError::new(
                "output.file",
                format!("Output path is a directory: {}", self.file.display()),
            ));
        } else if let Some(parent) = self.file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                errors.push(ConfigError::new(
                    "output.file",
                    format!("Parent directory does not exist: {}", parent.display()),
                ));
            }
        }
        if self.max_items == Some(0) {
            errors.push(ConfigError::new(
                "output.max_items",
                "Must list at least one entry per section",
            ));
        }

        errors
    }
}

impl Validatable for DiffConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        check_input(&self.paths.before, "paths.before", &mut errors);
        check_input(&self.paths.after, "paths.after", &mut errors);
        errors.extend(self.output.validate());
        errors
    }
}

impl Validatable for ValidateConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        check_input(&self.path, "path", &mut errors);
        errors
    }
}

fn check_input(path: &Path, field: &str, errors: &mut Vec<ConfigError>) {
    if !path.exists() {
        errors.push(ConfigError::new(
            field,
            format!("Snapshot file not found: {}", path.display()),
        ));
    } else if !path.is_file() {
        errors.push(ConfigError::new(
            field,
            format!("Snapshot path is not a file: {}", path.display()),
        ));
    }
}
