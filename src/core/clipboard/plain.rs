//! Delimited plain-text clipboard parsing

use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

use super::delimiter::{detect_delimiter, Delimiter};
use super::ParsedRow;

lazy_static! {
    /// Any run of Unicode whitespace, newlines and byte order marks included
    static ref WHITESPACE_RUN: Regex = Regex::new(r"[\s\x{FEFF}]+").unwrap();

    /// Windows and classic Mac line terminators
    static ref LINE_BREAK: Regex = Regex::new(r"\r\n?").unwrap();
}

/// Collapse whitespace runs to a single space and trim both ends.
///
/// `clean_value(clean_value(x)) == clean_value(x)` for every input.
pub fn clean_value(value: &str) -> String {
    WHITESPACE_RUN.replace_all(value, " ").trim().to_string()
}

/// Normalize line terminators to `\n`
pub fn normalize_line_breaks(text: &str) -> Cow<'_, str> {
    LINE_BREAK.replace_all(text, "\n")
}

/// Parse a plain-text clipboard blob into rows of cleaned values.
///
/// Blank lines are dropped. The delimiter is detected on the first remaining
/// line and applied to every line; rows may have different lengths.
pub fn parse_plain_text(text: Option<&str>) -> Vec<ParsedRow> {
    parse_plain_text_with_delimiter(text).0
}

/// Like [`parse_plain_text`], also returning the delimiter that was applied
/// (`None` when no line survived).
pub fn parse_plain_text_with_delimiter(text: Option<&str>) -> (Vec<ParsedRow>, Option<Delimiter>) {
    let text = match text {
        Some(t) if !t.is_empty() => t,
        _ => return (Vec::new(), None),
    };

    let normalized = normalize_line_breaks(text);
    let lines: Vec<&str> = normalized
        .split('\n')
        .filter(|line| !clean_value(line).is_empty())
        .collect();

    let Some(first) = lines.first() else {
        return (Vec::new(), None);
    };

    let delimiter = detect_delimiter(first);
    let rows = lines
        .iter()
        .map(|line| split_line(line, delimiter))
        .collect();

    (rows, Some(delimiter))
}

/// Split one line on a known delimiter and clean every field
pub fn split_line(line: &str, delimiter: Delimiter) -> ParsedRow {
    line.split(delimiter.as_char()).map(clean_value).collect()
}
