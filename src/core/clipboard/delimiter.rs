//! Field delimiter detection for pasted text

use std::fmt;

use serde::{Deserialize, Serialize};

/// Single-character delimiter of a pasted text block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Delimiter {
    /// Spreadsheet copy (the default)
    #[default]
    Tab,
    Semicolon,
    Comma,
}

impl Delimiter {
    /// Detection order; the first delimiter found in the line wins
    pub const PRIORITY: [Delimiter; 3] = [Delimiter::Tab, Delimiter::Semicolon, Delimiter::Comma];

    pub fn as_char(&self) -> char {
        match self {
            Delimiter::Tab => '\t',
            Delimiter::Semicolon => ';',
            Delimiter::Comma => ',',
        }
    }

    pub fn as_byte(&self) -> u8 {
        self.as_char() as u8
    }

    pub fn name(&self) -> &'static str {
        match self {
            Delimiter::Tab => "tab",
            Delimiter::Semicolon => "semicolon",
            Delimiter::Comma => "comma",
        }
    }

    /// Parse a delimiter from its name or literal character
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "tab" | "\\t" | "tsv" => Some(Delimiter::Tab),
            "semicolon" | ";" => Some(Delimiter::Semicolon),
            "comma" | "," | "csv" => Some(Delimiter::Comma),
            _ if name == "\t" => Some(Delimiter::Tab),
            _ => None,
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Detect the delimiter of one line: tab, then semicolon, then comma.
///
/// Lines without any of them (single-field lines) fall back to tab so that
/// splitting still yields the whole line as one field.
pub fn detect_delimiter(line: &str) -> Delimiter {
    Delimiter::PRIORITY
        .into_iter()
        .find(|d| line.contains(d.as_char()))
        .unwrap_or_default()
}
