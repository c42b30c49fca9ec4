//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::{DiffResult, EntityChanges};
use crate::model::{EntityKind, Snapshot};

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

fn plural(count: usize, singular: &str) -> String {
    if count == 1 {
        singular.to_string()
    } else {
        format!("{singular}s")
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn push_entries(
        &self,
        lines: &mut Vec<String>,
        label: &str,
        entries: Vec<String>,
        color: &str,
        max_items: Option<usize>,
    ) {
        if entries.is_empty() {
            return;
        }
        let shown = max_items.unwrap_or(entries.len()).min(entries.len());
        for entry in &entries[..shown] {
            lines.push(format!("  {} {entry}", self.color(label, color)));
        }
        if shown < entries.len() {
            lines.push(format!(
                "  {}",
                self.color(&format!("... and {} more", entries.len() - shown), "dim")
            ));
        }
    }

    fn push_side(
        &self,
        lines: &mut Vec<String>,
        changes: &EntityChanges,
        sign: &str,
        color: &str,
        max_items: Option<usize>,
    ) {
        for kind in EntityKind::ALL {
            let entries = match changes.names(kind) {
                Some(names) => names.to_vec(),
                None => changes.connections.iter().map(ToString::to_string).collect(),
            };
            self.push_entries(
                lines,
                &format!("{sign}{}", kind.singular()),
                entries,
                color,
                max_items,
            );
        }
        let params = changes.params.iter().map(ToString::to_string).collect();
        self.push_entries(lines, &format!("{sign}param"), params, color, max_items);
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_diff_report(
        &self,
        result: &DiffResult,
        before: &Snapshot,
        after: &Snapshot,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        // Header
        lines.push(self.color("Topology Diff Summary", "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        // File info
        let before_name = config.metadata.before_path.as_deref().unwrap_or("before");
        let after_name = config.metadata.after_path.as_deref().unwrap_or("after");
        lines.push(format!(
            "{}  {} → {}",
            self.color("Files:", "cyan"),
            before_name,
            after_name
        ));

        if before.captured_at().is_some() || after.captured_at().is_some() {
            let stamp = |s: &Snapshot| {
                s.captured_at()
                    .map_or_else(|| "unknown".to_string(), |t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            };
            lines.push(format!(
                "{}  {} → {}",
                self.color("Captured:", "cyan"),
                stamp(before),
                stamp(after)
            ));
        }

        lines.push(format!(
            "{}  {} → {} nodes, {} → {} topics, {} → {} services, {} → {} connections",
            self.color("Size:", "cyan"),
            before.node_count(),
            after.node_count(),
            before.topic_count(),
            after.topic_count(),
            before.service_count(),
            after.service_count(),
            before.connection_count(),
            after.connection_count()
        ));

        lines.push(String::new());

        // Counts
        lines.push(self.color("Changes:", "bold"));
        let summary = &result.summary;
        for kind in EntityKind::ALL {
            let (added, missing) = summary.counts(kind);
            if added > 0 {
                lines.push(format!(
                    "  {} {} added",
                    self.color(&format!("+{added}"), "green"),
                    plural(added, kind.singular())
                ));
            }
            if missing > 0 {
                lines.push(format!(
                    "  {} {} missing",
                    self.color(&format!("-{missing}"), "red"),
                    plural(missing, kind.singular())
                ));
            }
        }
        if summary.params_added > 0 {
            lines.push(format!(
                "  {} {} added",
                self.color(&format!("+{}", summary.params_added), "green"),
                plural(summary.params_added, "parameter")
            ));
        }
        if summary.params_missing > 0 {
            lines.push(format!(
                "  {} {} missing",
                self.color(&format!("-{}", summary.params_missing), "red"),
                plural(summary.params_missing, "parameter")
            ));
        }
        if summary.params_changed > 0 {
            lines.push(format!(
                "  {} {} changed",
                self.color(&format!("~{}", summary.params_changed), "yellow"),
                plural(summary.params_changed, "parameter")
            ));
        }
        if !result.has_changes() {
            lines.push(format!("  {}", self.color("No changes", "dim")));
            return Ok(lines.join("\n"));
        }

        // Entries
        lines.push(String::new());
        lines.push(self.color("Details:", "bold"));
        self.push_side(&mut lines, &result.add, "+", "green", config.max_items);
        self.push_side(&mut lines, &result.missing, "-", "red", config.max_items);
        let changed = result.change.iter().map(ToString::to_string).collect();
        self.push_entries(&mut lines, "~param", changed, "yellow", config.max_items);

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::{ParamChange, ParamRef};
    use crate::model::GraphMetadata;

    fn render(result: &DiffResult, config: &ReportConfig) -> String {
        let mut before = Snapshot::new();
        before.graph_metadata = Some(GraphMetadata {
            created_at: Some(1_700_000_000_000),
            description: None,
        });
        let after = Snapshot::new();
        SummaryReporter::new()
            .no_color()
            .generate_diff_report(result, &before, &after, config)
            .unwrap()
    }

    #[test]
    fn test_no_changes() {
        let out = render(&DiffResult::new(), &ReportConfig::default());
        assert!(out.contains("No changes"));
        assert!(out.contains("Files:  before → after"));
        assert!(out.contains("Captured:  2023-11-14 22:13:20 UTC → unknown"));
        assert!(!out.contains("\x1b["));
    }

    #[test]
    fn test_counts_and_entries() {
        let mut result = DiffResult::new();
        result.add.nodes.push("/lidar".to_string());
        result.add.params.push(ParamRef::new("/lidar", "rate"));
        result.missing.topics.push("/image".to_string());
        result.missing.topics.push("/depth".to_string());
        result
            .change
            .push(ParamChange::new("/cam", "fps", "30", "60"));
        result.calculate_summary();

        let out = render(&result, &ReportConfig::for_inputs("a.json", "b.json"));
        assert!(out.contains("Files:  a.json → b.json"));
        assert!(out.contains("+1 node added"));
        assert!(out.contains("-2 topics missing"));
        assert!(out.contains("+1 parameter added"));
        assert!(out.contains("~1 parameter changed"));
        assert!(out.contains("+node /lidar"));
        assert!(out.contains("+param [/lidar]: rate"));
        assert!(out.contains("-topic /depth"));
        assert!(out.contains("~param [/cam: fps] 30 -> 60"));
    }

    #[test]
    fn test_max_items_truncates_sections() {
        let mut result = DiffResult::new();
        for i in 0..5 {
            result.add.topics.push(format!("/t{i}"));
        }
        result.calculate_summary();

        let config = ReportConfig {
            max_items: Some(2),
            ..ReportConfig::default()
        };
        let out = render(&result, &config);
        assert!(out.contains("+topic /t1"));
        assert!(!out.contains("+topic /t2"));
        assert!(out.contains("... and 3 more"));
    }

    #[test]
    fn test_colored_output() {
        let snapshot = Snapshot::new();
        let mut result = DiffResult::new();
        result.add.nodes.push("/lidar".to_string());
        result.calculate_summary();
        let out = SummaryReporter::new()
            .generate_diff_report(&result, &snapshot, &snapshot, &ReportConfig::default())
            .unwrap();
        assert!(out.contains("\x1b[32m+1\x1b[0m"));
    }
}
