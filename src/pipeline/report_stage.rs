//! Report output stage.
//!
//! The JSON diff report always goes to the configured output file. The
//! `summary` format additionally prints a human-readable summary to stdout.

use super::{should_use_color, write_output, OutputTarget, PipelineError};
use crate::config::DiffConfig;
use crate::diff::DiffResult;
use crate::model::Snapshot;
use crate::reports::{
    create_reporter_with_options, JsonReporter, ReportConfig, ReportFormat, ReportGenerator,
};
use anyhow::Result;

/// Output a diff report to the configured destination.
///
/// Both reports are rendered before anything is written.
pub fn output_report(
    config: &DiffConfig,
    result: &DiffResult,
    before: &Snapshot,
    after: &Snapshot,
) -> Result<()> {
    let report_config = ReportConfig::for_inputs(
        config.paths.before.to_string_lossy(),
        config.paths.after.to_string_lossy(),
    )
    .with_max_items(config.output.max_items);

    let json = JsonReporter::new()
        .generate_diff_report(result, before, after, &report_config)
        .map_err(|e| PipelineError::ReportFailed { source: e.into() })?;

    let summary = if config.output.format == ReportFormat::Summary {
        let reporter = create_reporter_with_options(
            ReportFormat::Summary,
            should_use_color(config.output.no_color),
        );
        let text = reporter
            .generate_diff_report(result, before, after, &report_config)
            .map_err(|e| PipelineError::ReportFailed { source: e.into() })?;
        Some(text)
    } else {
        None
    };

    write_output(
        &json,
        &OutputTarget::File(config.output.file.clone()),
        config.behavior.quiet,
    )?;
    if let Some(text) = summary {
        write_output(&text, &OutputTarget::Stdout, config.behavior.quiet)?;
    }

    Ok(())
}
