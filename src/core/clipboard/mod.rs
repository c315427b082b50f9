//! Clipboard Ingestion
//!
//! Turns the two flavours of a clipboard paste into ordered rows of cleaned
//! string values, ready to be merged into a grid.
//!
//! # Architecture
//!
//! ```text
//! text/html  -> MarkupTableParser --(rows?)--+
//!                                            +--> Vec<ParsedRow>
//! text/plain -> DelimiterDetector -> PlainTextParser
//! ```
//!
//! The HTML table wins whenever it yields at least one non-empty row, since it
//! carries exact cell boundaries. Every value is cleaned the same way on both
//! paths: whitespace runs collapse to one space, ends are trimmed.
//!
//! # Example
//!
//! ```
//! use pastegrid::clipboard::{parse_clipboard, PastePayload, PasteSource};
//! use pastegrid::CellPosition;
//!
//! let payload = PastePayload::text("a;b\nc;d", CellPosition::new(0, 0));
//! let parsed = parse_clipboard(&payload);
//! assert_eq!(parsed.rows, vec![vec!["a", "b"], vec!["c", "d"]]);
//! assert!(matches!(parsed.source, PasteSource::PlainText(_)));
//! ```

mod delimiter;
mod markup;
mod payload;
mod plain;


/// One logical pasted row; lengths may differ between rows
pub type ParsedRow = Vec<String>;

// Re-export public API
pub use delimiter::{detect_delimiter, Delimiter};
pub use markup::{has_table_tag, parse_markup_table};
pub use payload::{parse_clipboard, ParsedClipboard, PastePayload, PasteSource};
pub use plain::{
    clean_value, normalize_line_breaks, parse_plain_text, parse_plain_text_with_delimiter,
    split_line,
};
