//! Core grid modules
//!
//! This module contains the paste pipeline:
//! - `clipboard`: clipboard flavours to rows of cleaned values
//! - `grid`: the editable grid and the merge of pasted rows
//! - `extract`: identifier classification for submission

pub mod clipboard;
pub mod extract;
pub mod grid;

// Re-export main types and functions from clipboard
pub use clipboard::{
    clean_value, detect_delimiter, parse_clipboard, parse_markup_table, parse_plain_text,
    Delimiter, ParsedClipboard, ParsedRow, PastePayload, PasteSource,
};

// Re-export main types and functions from grid
pub use grid::{Cell, CellKind, CellPosition, Grid, GridOptions, ReplacementColumn};

pub use extract::{extract_identifiers, prepare_submission, Extraction, IdentifierRecord};
