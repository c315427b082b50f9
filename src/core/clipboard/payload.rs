//! Clipboard payload orchestration

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::delimiter::Delimiter;
use super::markup::parse_markup_table;
use super::plain::parse_plain_text_with_delimiter;
use super::ParsedRow;
use crate::core::grid::CellPosition;

/// A paste event, detached from any UI toolkit.
///
/// Front ends translate their native paste event into this value: both
/// clipboard flavours (either may be missing) and the cell that received it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PastePayload {
    /// `text/html` flavour
    #[serde(default)]
    pub markup: Option<String>,
    /// `text/plain` flavour
    #[serde(default)]
    pub text: Option<String>,
    /// Cell that received the paste
    #[serde(default)]
    pub anchor: CellPosition,
}

impl PastePayload {
    pub fn new(anchor: CellPosition) -> Self {
        Self {
            anchor,
            ..Default::default()
        }
    }

    /// Plain-text-only paste
    pub fn text(text: impl Into<String>, anchor: CellPosition) -> Self {
        Self {
            markup: None,
            text: Some(text.into()),
            anchor,
        }
    }

    /// HTML-only paste
    pub fn markup(markup: impl Into<String>, anchor: CellPosition) -> Self {
        Self {
            markup: Some(markup.into()),
            text: None,
            anchor,
        }
    }

    pub fn with_markup(mut self, markup: impl Into<String>) -> Self {
        self.markup = Some(markup.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

/// Which clipboard flavour produced the rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "delimiter")]
pub enum PasteSource {
    /// Cells read from an HTML table
    Markup,
    /// Delimited text split on the detected delimiter
    PlainText(Delimiter),
    /// Nothing usable on the clipboard
    Empty,
}

impl fmt::Display for PasteSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasteSource::Markup => write!(f, "html table"),
            PasteSource::PlainText(d) => write!(f, "plain text ({}-separated)", d),
            PasteSource::Empty => write!(f, "empty clipboard"),
        }
    }
}

/// Rows extracted from a paste event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedClipboard {
    pub rows: Vec<ParsedRow>,
    pub source: PasteSource,
}

impl ParsedClipboard {
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            source: PasteSource::Empty,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Widest parsed row
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// Turn a paste event into rows: the HTML table when it yields at least one
/// row, the plain text otherwise.
pub fn parse_clipboard(payload: &PastePayload) -> ParsedClipboard {
    if let Some(rows) = parse_markup_table(payload.markup.as_deref()) {
        debug!(rows = rows.len(), "clipboard parsed from html table");
        return ParsedClipboard {
            rows,
            source: PasteSource::Markup,
        };
    }

    match parse_plain_text_with_delimiter(payload.text.as_deref()) {
        (rows, Some(delimiter)) => {
            debug!(rows = rows.len(), %delimiter, "clipboard parsed from plain text");
            ParsedClipboard {
                rows,
                source: PasteSource::PlainText(delimiter),
            }
        }
        (_, None) => {
            debug!("clipboard holds no usable data");
            ParsedClipboard::empty()
        }
    }
}
