//! JSON report generator.
//!
//! Emits the diff report wire format:
//!
//! ```json
//! {
//!   "missing": { "topics": [], "nodes": [], "services": [], "param": [], "connections": [] },
//!   "add":     { ... },
//!   "change":  { ... }
//! }
//! ```
//!
//! Key order is fixed. In `change` only `param` is ever populated. Output is
//! indented by two spaces and pure ASCII: anything outside printable ASCII is
//! written as a `\uXXXX` escape (UTF-16 surrogate pairs above the BMP).

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::{DiffResult, EntityChanges};
use crate::model::Snapshot;
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};
use std::io;

/// JSON report generator
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonReporter;

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_diff_report(
        &self,
        result: &DiffResult,
        _before: &Snapshot,
        _after: &Snapshot,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let report = JsonDiffReport {
            missing: JsonBucket::from_changes(&result.missing),
            add: JsonBucket::from_changes(&result.add),
            change: JsonBucket {
                param: result.change.iter().map(ToString::to_string).collect(),
                ..JsonBucket::default()
            },
        };

        let mut buf = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut buf, AsciiFormatter::new());
        report
            .serialize(&mut serializer)
            .map_err(|e| ReportError::SerializationError(e.to_string()))?;

        String::from_utf8(buf).map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

/// Two-space pretty printer that escapes every character outside `' '..='~'`.
struct AsciiFormatter<'a> {
    inner: PrettyFormatter<'a>,
}

impl AsciiFormatter<'_> {
    fn new() -> Self {
        Self {
            inner: PrettyFormatter::with_indent(b"  "),
        }
    }
}

impl Formatter for AsciiFormatter<'_> {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut plain_start = 0;
        for (idx, ch) in fragment.char_indices() {
            if (' '..='~').contains(&ch) {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[plain_start..idx])?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            plain_start = idx + ch.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[plain_start..])
    }

    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }
}

// JSON report structures

#[derive(Serialize)]
struct JsonDiffReport {
    missing: JsonBucket,
    add: JsonBucket,
    change: JsonBucket,
}

#[derive(Serialize, Default)]
struct JsonBucket {
    topics: Vec<String>,
    nodes: Vec<String>,
    services: Vec<String>,
    param: Vec<String>,
    connections: Vec<String>,
}

impl JsonBucket {
    fn from_changes(changes: &EntityChanges) -> Self {
        Self {
            topics: changes.topics.clone(),
            nodes: changes.nodes.clone(),
            services: changes.services.clone(),
            param: changes.params.iter().map(ToString::to_string).collect(),
            connections: changes.connections.iter().map(ToString::to_string).collect(),
        }
    }
}
