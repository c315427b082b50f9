//! Cell types and positions for the paste grid

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::utils::error::{PasteGridError, PasteGridResult};

/// What a cell stores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellKind {
    /// Regular data cell in one of the base columns
    #[default]
    Data,
    /// Cell of the replacement column, always the last cell of its row
    Replacement,
}

/// A single editable grid cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Editable text
    pub value: String,
    kind: CellKind,
    /// Physical position in the row, restamped by the grid
    col_index: usize,
}

impl Cell {
    /// Create an empty data cell
    pub fn data(col_index: usize) -> Self {
        Cell {
            value: String::new(),
            kind: CellKind::Data,
            col_index,
        }
    }

    /// Create an empty replacement cell
    pub fn replacement(col_index: usize) -> Self {
        Cell {
            value: String::new(),
            kind: CellKind::Replacement,
            col_index,
        }
    }

    pub fn kind(&self) -> CellKind {
        self.kind
    }

    pub fn is_replacement(&self) -> bool {
        self.kind == CellKind::Replacement
    }

    /// Column index as last stamped by the owning grid
    pub fn col_index(&self) -> usize {
        self.col_index
    }

    pub(crate) fn stamp(&mut self, col_index: usize) {
        self.col_index = col_index;
    }

    /// Cell text without surrounding whitespace
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    pub fn is_empty(&self) -> bool {
        self.value.trim().is_empty()
    }
}

/// Zero-based grid coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellPosition {
    pub row: usize,
    pub col: usize,
}

impl CellPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Position shifted by a row/column offset, `None` on overflow
    pub fn offset(&self, rows: usize, cols: usize) -> Option<Self> {
        Some(Self::new(
            self.row.checked_add(rows)?,
            self.col.checked_add(cols)?,
        ))
    }

    /// Convert to spreadsheet-style cell reference (A1, B5, etc.)
    pub fn to_reference(&self) -> String {
        // row + 1 without overflow
        format!("{}{}", Self::col_to_letter(self.col), self.row as u128 + 1)
    }

    /// Column letters for a zero-based column index (0 → A, 26 → AA)
    pub fn col_to_letter(col: usize) -> String {
        let mut result = String::new();
        let mut n = col;
        loop {
            result.insert(0, (b'A' + (n % 26) as u8) as char);
            if n < 26 {
                break;
            }
            n = n / 26 - 1;
        }
        result
    }

    /// Parse a spreadsheet-style reference such as `G12`
    pub fn from_reference(reference: &str) -> PasteGridResult<Self> {
        let trimmed = reference.trim();
        let split = trimmed
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(trimmed.len());
        let (letters, digits) = trimmed.split_at(split);

        if letters.is_empty() {
            return Err(PasteGridError::reference(
                reference,
                "expected column letters first",
            ));
        }
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(PasteGridError::reference(
                reference,
                "expected a row number after the column letters",
            ));
        }

        let row: usize = digits
            .parse()
            .map_err(|_| PasteGridError::reference(reference, "row number out of range"))?;
        if row == 0 {
            return Err(PasteGridError::reference(reference, "rows are numbered from 1"));
        }

        let mut col: usize = 0;
        for c in letters.chars() {
            let digit = (c.to_ascii_uppercase() as u8 - b'A') as usize + 1;
            col = col
                .checked_mul(26)
                .and_then(|v| v.checked_add(digit))
                .ok_or_else(|| PasteGridError::reference(reference, "column out of range"))?;
        }

        Ok(Self::new(row - 1, col - 1))
    }
}

impl fmt::Display for CellPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_reference())
    }
}

impl FromStr for CellPosition {
    type Err = PasteGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_reference(s)
    }
}
