//! Paste diagnostics
//!
//! A paste never fails, but it can do less than the user expects: values past
//! the widest allowed column are dropped, the HTML flavour may be ignored in
//! favour of plain text, a replacement column may appear. [`PasteReport`]
//! records what a merge actually did so front ends can tell the user.
//!
//! ## Example
//!
//! ```rust
//! use pastegrid::{CellPosition, Grid, GridOptions, PastePayload};
//! use pastegrid::diagnostics::format_report;
//!
//! let mut grid = Grid::new(GridOptions::default().with_base_columns(2).with_identifier_column(1));
//! let report = grid.paste(&PastePayload::text("a\tb\tc\td", CellPosition::new(0, 0)));
//! assert!(report.column_added);
//! assert_eq!(report.dropped.len(), 1);
//! assert!(format_report(&report, false).contains("1 value dropped"));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::clipboard::PasteSource;
use crate::core::grid::CellPosition;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticLevel {
    /// Informational note
    Info,
    /// Warning - pasted data did not fully land in the grid
    Warning,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Info => write!(f, "info"),
            DiagnosticLevel::Warning => write!(f, "warning"),
        }
    }
}

/// A single diagnostic message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity level
    pub level: DiagnosticLevel,
    /// Human-readable message
    pub message: String,
    /// Cell the message is about
    pub position: Option<CellPosition>,
    /// Suggested fix
    pub suggestion: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: DiagnosticLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            position: None,
            suggestion: None,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Warning, message)
    }

    /// Add location information
    pub fn with_position(mut self, position: CellPosition) -> Self {
        self.position = Some(position);
        self
    }

    /// Add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: level: message
        //         --> cell B3
        //         = help: suggestion
        write!(f, "{}: {}", self.level, self.message)?;

        if let Some(position) = self.position {
            write!(f, "\n  --> cell {}", position)?;
        }

        if let Some(ref suggestion) = self.suggestion {
            write!(f, "\n  = help: {}", suggestion)?;
        }

        Ok(())
    }
}

/// A pasted value that had no cell to land in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroppedValue {
    pub position: CellPosition,
    pub value: String,
}

/// What a paste did to the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasteReport {
    /// Cell the paste was anchored at
    pub anchor: CellPosition,
    /// Clipboard flavour the rows came from (`None` for a direct merge)
    pub source: Option<PasteSource>,
    /// Number of rows handed to the merge
    pub rows_parsed: usize,
    /// Rows appended to the grid to fit the paste
    pub rows_created: usize,
    /// Whether the paste materialized the replacement column
    pub column_added: bool,
    /// Values written into existing cells
    pub values_written: usize,
    /// Values beyond the column limit
    pub dropped: Vec<DroppedValue>,
    /// Messages for the user
    pub diagnostics: Vec<Diagnostic>,
}

impl PasteReport {
    pub fn new(anchor: CellPosition) -> Self {
        Self {
            anchor,
            source: None,
            rows_parsed: 0,
            rows_created: 0,
            column_added: false,
            values_written: 0,
            dropped: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Add a diagnostic
    pub fn add(&mut self, diag: Diagnostic) {
        self.diagnostics.push(diag);
    }

    /// The paste changed nothing
    pub fn is_noop(&self) -> bool {
        self.values_written == 0 && self.rows_created == 0 && !self.column_added
    }

    pub fn has_warnings(&self) -> bool {
        self.warnings() > 0
    }

    /// Number of warnings
    pub fn warnings(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.level == DiagnosticLevel::Warning)
            .count()
    }

    /// Get summary string
    pub fn summary(&self) -> String {
        if self.rows_parsed == 0 {
            return "nothing to paste".to_string();
        }

        let mut parts = vec![format!(
            "{} value{} pasted at {}",
            self.values_written,
            plural(self.values_written),
            self.anchor
        )];
        if self.rows_created > 0 {
            parts.push(format!(
                "{} row{} added",
                self.rows_created,
                plural(self.rows_created)
            ));
        }
        if self.column_added {
            parts.push("replacement column added".to_string());
        }
        if !self.dropped.is_empty() {
            parts.push(format!(
                "{} value{} dropped",
                self.dropped.len(),
                plural(self.dropped.len())
            ));
        }
        parts.join(", ")
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

/// Format a paste report for terminal output
pub fn format_report(report: &PasteReport, use_color: bool) -> String {
    let mut output = String::new();

    for diag in &report.diagnostics {
        if use_color {
            let color = match diag.level {
                DiagnosticLevel::Warning => "\x1b[33m", // Yellow
                DiagnosticLevel::Info => "\x1b[34m",    // Blue
            };
            output.push_str(color);
            output.push_str(&format!("{}", diag));
            output.push_str("\x1b[0m\n\n");
        } else {
            output.push_str(&format!("{}\n\n", diag));
        }
    }

    // Summary
    if use_color {
        if report.has_warnings() {
            output.push_str("\x1b[33m");
        } else {
            output.push_str("\x1b[32m");
        }
    }

    output.push_str(&format!("Summary: {}", report.summary()));
    if let Some(source) = report.source {
        output.push_str(&format!(" (from {})", source));
    }

    if use_color {
        output.push_str("\x1b[0m");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clipboard::Delimiter;

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::warning("value dropped")
            .with_position(CellPosition::new(2, 1))
            .with_suggestion("paste further left");
        let text = diag.to_string();
        assert!(text.starts_with("warning: value dropped"));
        assert!(text.contains("--> cell B3"));
        assert!(text.contains("= help: paste further left"));
    }

    #[test]
    fn test_empty_report_summary() {
        let report = PasteReport::new(CellPosition::new(0, 0));
        assert!(report.is_noop());
        assert_eq!(report.summary(), "nothing to paste");
    }

    #[test]
    fn test_summary_format() {
        let mut report = PasteReport::new(CellPosition::new(0, 6));
        report.rows_parsed = 3;
        report.values_written = 5;
        report.rows_created = 1;
        report.column_added = true;
        report.dropped.push(DroppedValue {
            position: CellPosition::new(0, 8),
            value: "x".to_string(),
        });

        let summary = report.summary();
        assert!(summary.contains("5 values pasted at G1"));
        assert!(summary.contains("1 row added"));
        assert!(summary.contains("replacement column added"));
        assert!(summary.contains("1 value dropped"));
    }

    #[test]
    fn test_format_report_plain() {
        let mut report = PasteReport::new(CellPosition::new(0, 0));
        report.rows_parsed = 1;
        report.values_written = 1;
        report.source = Some(PasteSource::PlainText(Delimiter::Tab));
        report.add(Diagnostic::info("note"));

        let output = format_report(&report, false);
        assert!(output.contains("info: note"));
        assert!(output.contains("Summary: 1 value pasted at A1"));
        assert!(output.contains("(from plain text (tab-separated))"));
        assert!(!output.contains("\x1b["));
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_format_report_colored_warning() {
        let mut report = PasteReport::new(CellPosition::new(0, 0));
        report.add(Diagnostic::warning("careful"));
        let output = format_report(&report, true);
        assert!(output.contains("\x1b[33m"));
        assert_eq!(report.warnings(), 1);
    }
}
