//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod diff;
mod schema;
mod validate;

pub use diff::run_diff;
pub use schema::{render_schema, run_schema, SchemaTarget};
pub use validate::run_validate;

// Re-export config types used by handlers
pub use crate::config::{DiffConfig, ValidateConfig};

use crate::config::Validatable;
use anyhow::{bail, Result};

/// Reject a configuration that fails validation, listing every problem.
fn ensure_valid(config: &impl Validatable) -> Result<()> {
    let errors = config.validate();
    if errors.is_empty() {
        return Ok(());
    }
    let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
    bail!("Invalid configuration:\n  {}", details.join("\n  "))
}
