//! Unified error types for topo-tools.
//!
//! This module provides the error hierarchy for the library, with context
//! chaining so a failure can be traced back to the input that caused it.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for topo-tools operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TopoError {
    /// Errors while loading a snapshot document
    #[error("Failed to load snapshot: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// Errors during diff computation
    #[error("Diff computation failed: {context}")]
    Diff {
        context: String,
        #[source]
        source: DiffErrorKind,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Missing required field: {field} in {context}")]
    MissingField { field: String, context: String },

    #[error("Invalid field value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Specific diff error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DiffErrorKind {
    #[error("Node '{node}' declares parameter '{parameter}' more than once")]
    DuplicateParameter { node: String, parameter: String },
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for topo-tools operations
pub type Result<T> = std::result::Result<T, TopoError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl TopoError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create a parse error for a missing field
    pub fn missing_field(field: impl Into<String>, context: impl Into<String>) -> Self {
        Self::parse(
            "missing required field",
            ParseErrorKind::MissingField {
                field: field.into(),
                context: context.into(),
            },
        )
    }

    /// Create a parse error for a field with an unusable value
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::parse(
            "invalid field value",
            ParseErrorKind::InvalidValue {
                field: field.into(),
                message: message.into(),
            },
        )
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a diff error
    pub fn diff(context: impl Into<String>, source: DiffErrorKind) -> Self {
        Self::Diff {
            context: context.into(),
            source,
        }
    }

    /// Create a report error
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Whether this error means an input document was unusable
    #[must_use]
    pub const fn is_malformed_input(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for TopoError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for TopoError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(
            "JSON deserialization",
            ParseErrorKind::InvalidJson(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings are chained, so the final message shows the path through
/// the code:
///
/// ```ignore
/// use topo_tools::error::ErrorContext;
///
/// fn load(path: &Path) -> Result<Snapshot> {
///     let content = std::fs::read_to_string(path).context("reading snapshot file")?;
///     parse_snapshot_str(&content).with_context(|| format!("loading {}", path.display()))
/// }
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, only evaluated on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<TopoError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: TopoError, new_ctx: &str) -> TopoError {
    match err {
        TopoError::Parse {
            context: existing,
            source,
        } => TopoError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        TopoError::Diff {
            context: existing,
            source,
        } => TopoError::Diff {
            context: chain_context(new_ctx, &existing),
            source,
        },
        TopoError::Report {
            context: existing,
            source,
        } => TopoError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        TopoError::Io {
            path,
            message,
            source,
        } => TopoError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        TopoError::Validation(msg) => TopoError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings together as `new: existing`.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
