//! Schema command handler.
//!
//! Prints the JSON Schema of either the snapshot document or the config file.

use crate::config::generate_json_schema;
use crate::model::Snapshot;
use crate::pipeline::{write_output, OutputTarget};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Which document the schema describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SchemaTarget {
    Snapshot,
    Config,
}

/// Render the requested schema as pretty JSON.
pub fn render_schema(target: SchemaTarget) -> Result<String> {
    let json = match target {
        SchemaTarget::Snapshot => {
            serde_json::to_string_pretty(&schemars::schema_for!(Snapshot))
        }
        SchemaTarget::Config => generate_json_schema(),
    };
    json.context("Failed to serialize JSON schema")
}

/// Run the schema command, writing to `output` or stdout.
#[allow(clippy::needless_pass_by_value)]
pub fn run_schema(target: SchemaTarget, output: Option<PathBuf>) -> Result<()> {
    let schema = render_schema(target)?;
    let destination = output.map_or(OutputTarget::Stdout, OutputTarget::File);
    write_output(&schema, &destination, false)
}
