//! Identifier extraction
//!
//! Reads a completed grid and classifies the EAN codes of its identifier
//! column: codes starting with the exclusion prefix are set aside, the others
//! are kept together with the replacement code found on the same row.
//!
//! ```
//! use pastegrid::{CellPosition, Grid, GridOptions};
//!
//! let mut grid = Grid::new(GridOptions::default());
//! grid.set_value(CellPosition::new(0, 6), "3400930000001");
//! grid.set_value(CellPosition::new(1, 6), " 5012345678900 ");
//!
//! let extraction = grid.extract_identifiers();
//! assert_eq!(extraction.ignored, vec!["3400930000001"]);
//! assert_eq!(extraction.identifiers[0].primary, "5012345678900");
//! assert_eq!(extraction.identifiers[0].replacement, None);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::grid::Grid;
use crate::utils::error::{PasteGridError, PasteGridResult};

/// One identifier to process, with its optional substitute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierRecord {
    pub primary: String,
    /// Always serialized, as `null` when the row has no replacement
    pub replacement: Option<String>,
}

impl IdentifierRecord {
    pub fn new(primary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            replacement: None,
        }
    }

    pub fn with_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.replacement = Some(replacement.into());
        self
    }
}

/// Result of scanning a grid, in row order
///
/// Serializes to the submission body expected by the scraping service:
/// `{"eans": [{"primary": ..., "replacement": ...}], "ignored3400": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    #[serde(rename = "eans")]
    pub identifiers: Vec<IdentifierRecord>,
    #[serde(rename = "ignored3400")]
    pub ignored: Vec<String>,
    /// Identifier column the scan read (zero-based)
    #[serde(skip)]
    column: usize,
    #[serde(skip)]
    header: String,
    #[serde(skip)]
    prefix: String,
}

impl Extraction {
    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty() && self.ignored.is_empty()
    }

    /// Hand the extraction over for submission.
    ///
    /// Fails with [`PasteGridError::NothingToProcess`] only when both lists
    /// are empty; a grid holding nothing but excluded codes is still submitted.
    pub fn into_submission(self) -> PasteGridResult<Self> {
        if self.is_empty() {
            return Err(PasteGridError::nothing_to_process(
                self.column + 1,
                self.header,
            ));
        }
        Ok(self)
    }

    /// Compact JSON submission body
    pub fn to_json(&self) -> PasteGridResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> PasteGridResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// One-line status, e.g. `2 products to process, 1 ignored (prefix 3400)`
    pub fn summary(&self) -> String {
        let count = self.identifiers.len();
        let mut line = format!(
            "{} product{} to process",
            count,
            if count == 1 { "" } else { "s" }
        );
        if !self.ignored.is_empty() {
            line.push_str(&format!(", {} ignored", self.ignored.len()));
            if !self.prefix.is_empty() {
                line.push_str(&format!(" (prefix {})", self.prefix));
            }
        }
        line
    }
}

/// Scan the grid top to bottom and classify its identifiers.
///
/// Rows with an empty identifier cell are skipped. No deduplication happens:
/// the same code on two rows is listed twice.
pub fn extract_identifiers(grid: &Grid) -> Extraction {
    let options = grid.options();
    let column = options.identifier_column;
    let prefix = options.exclusion_prefix.as_str();

    let mut extraction = Extraction {
        column,
        header: options.header(column),
        prefix: prefix.to_string(),
        ..Default::default()
    };

    for row in grid.rows() {
        let primary = match row.get(column).map(|c| c.trimmed()) {
            Some(value) if !value.is_empty() => value,
            _ => continue,
        };

        if primary.starts_with(prefix) {
            extraction.ignored.push(primary.to_string());
            continue;
        }

        let replacement = row
            .last()
            .filter(|cell| cell.is_replacement() && !cell.is_empty())
            .map(|cell| cell.trimmed().to_string());

        extraction.identifiers.push(IdentifierRecord {
            primary: primary.to_string(),
            replacement,
        });
    }

    debug!(
        identifiers = extraction.identifiers.len(),
        ignored = extraction.ignored.len(),
        "identifiers extracted"
    );
    extraction
}

/// Extract and validate in one step
pub fn prepare_submission(grid: &Grid) -> PasteGridResult<Extraction> {
    extract_identifiers(grid).into_submission()
}

impl Grid {
    /// See [`extract_identifiers`]
    pub fn extract_identifiers(&self) -> Extraction {
        extract_identifiers(self)
    }

    /// See [`prepare_submission`]
    pub fn submission(&self) -> PasteGridResult<Extraction> {
        prepare_submission(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::{CellPosition, GridOptions};
    use crate::data::constants::{PAYLOAD_IDENTIFIERS_FIELD, PAYLOAD_IGNORED_FIELD};

    fn grid_with(codes: &[(&str, Option<&str>)]) -> Grid {
        let mut grid = Grid::new(GridOptions::default());
        if codes.iter().any(|(_, r)| r.is_some()) {
            grid.add_replacement_column();
        }
        for (row, (code, replacement)) in codes.iter().enumerate() {
            grid.ensure_row_exists(row);
            grid.set_value(CellPosition::new(row, 6), *code);
            if let Some(r) = replacement {
                grid.set_value(CellPosition::new(row, 7), *r);
            }
        }
        grid
    }

    #[test]
    fn test_exclusion_and_pairing() {
        let grid = grid_with(&[("3400930000001", None), ("5012345678900", Some("5099999999999"))]);
        let extraction = extract_identifiers(&grid);

        assert_eq!(extraction.ignored, vec!["3400930000001"]);
        assert_eq!(
            extraction.identifiers,
            vec![IdentifierRecord::new("5012345678900").with_replacement("5099999999999")]
        );
    }

    #[test]
    fn test_blank_rows_and_whitespace() {
        let grid = grid_with(&[("   ", Some("orphan")), (" 123 ", Some("  ")), ("", None)]);
        let extraction = extract_identifiers(&grid);

        assert!(extraction.ignored.is_empty());
        assert_eq!(extraction.identifiers, vec![IdentifierRecord::new("123")]);
    }

    #[test]
    fn test_excluded_rows_ignore_replacement() {
        let grid = grid_with(&[("34001", Some("999"))]);
        let extraction = extract_identifiers(&grid);
        assert_eq!(extraction.ignored, vec!["34001"]);
        assert!(extraction.identifiers.is_empty());
    }

    #[test]
    fn test_no_dedup() {
        let grid = grid_with(&[("42", None), ("42", None)]);
        assert_eq!(extract_identifiers(&grid).identifiers.len(), 2);
    }

    #[test]
    fn test_prefix_must_lead() {
        let grid = grid_with(&[("1234007", None), ("340", None)]);
        let extraction = extract_identifiers(&grid);
        assert_eq!(extraction.identifiers.len(), 2);
        assert!(extraction.ignored.is_empty());
    }

    #[test]
    fn test_nothing_to_process() {
        let grid = Grid::new(GridOptions::default());
        let err = prepare_submission(&grid).unwrap_err();
        assert!(err.is_nothing_to_process());
        assert!(err.to_string().contains("column 7"));
        assert!(err.to_string().contains("Code barre"));
    }

    #[test]
    fn test_only_ignored_is_still_submitted() {
        let grid = grid_with(&[("3400123", None)]);
        let extraction = grid.submission().unwrap();
        assert_eq!(extraction.ignored.len(), 1);
        assert!(extraction.identifiers.is_empty());
    }

    #[test]
    fn test_json_field_names() {
        let grid = grid_with(&[("111", None), ("222", Some("333")), ("34009", None)]);
        let json = grid.extract_identifiers().to_json().unwrap();
        assert_eq!(
            json,
            format!(
                r#"{{"{}":[{{"primary":"111","replacement":null}},{{"primary":"222","replacement":"333"}}],"{}":["34009"]}}"#,
                PAYLOAD_IDENTIFIERS_FIELD, PAYLOAD_IGNORED_FIELD
            )
        );
    }

    #[test]
    fn test_summary() {
        let grid = grid_with(&[("111", None), ("34009", None)]);
        assert_eq!(
            grid.extract_identifiers().summary(),
            "1 product to process, 1 ignored (prefix 3400)"
        );
        assert_eq!(Extraction::default().summary(), "0 products to process");
    }

    #[test]
    fn test_custom_identifier_column() {
        let options = GridOptions::default()
            .with_base_columns(3)
            .with_identifier_column(0)
            .with_exclusion_prefix("99");
        let mut grid = Grid::new(options);
        grid.set_value(CellPosition::new(0, 0), "991");
        grid.set_value(CellPosition::new(1, 0), "123");
        let extraction = grid.extract_identifiers();
        assert_eq!(extraction.ignored, vec!["991"]);
        assert_eq!(extraction.identifiers, vec![IdentifierRecord::new("123")]);
        assert_eq!(extraction.summary(), "1 product to process, 1 ignored (prefix 99)");
    }
}
