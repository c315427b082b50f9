//! Grid configuration

use serde::{Deserialize, Serialize};

use super::cell::CellPosition;
use crate::data::constants::{
    BASE_COLUMNS, EXCLUSION_PREFIX, IDENTIFIER_COLUMN, IDENTIFIER_HEADER, INITIAL_ROWS,
    MAX_EXTRA_COLUMNS, REPLACEMENT_HEADER,
};
use crate::utils::error::{PasteGridError, PasteGridResult};

/// Options describing one grid instance
///
/// Every field has a default, so a configuration file only needs to name the
/// values it changes:
///
/// ```toml
/// base_columns = 9
/// identifier_column = 8
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridOptions {
    /// Number of base columns
    /// Default: 7
    pub base_columns: usize,

    /// Rows created on initialization and on reset
    /// Default: 12
    pub initial_rows: usize,

    /// Zero-based column read by the identifier extractor
    /// Default: 6
    pub identifier_column: usize,

    /// Identifiers starting with this prefix are ignored
    /// Default: "3400"
    pub exclusion_prefix: String,

    /// Labels of the base columns; missing labels fall back to column letters
    /// Default: empty, with the identifier column labelled "Code barre"
    pub headers: Vec<String>,

    /// Label of the replacement column
    /// Default: "Code EAN remplacement"
    pub replacement_header: String,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            base_columns: BASE_COLUMNS,
            initial_rows: INITIAL_ROWS,
            identifier_column: IDENTIFIER_COLUMN,
            exclusion_prefix: EXCLUSION_PREFIX.to_string(),
            headers: Vec::new(),
            replacement_header: REPLACEMENT_HEADER.to_string(),
        }
    }
}

impl GridOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_columns(mut self, base_columns: usize) -> Self {
        self.base_columns = base_columns;
        self
    }

    pub fn with_initial_rows(mut self, initial_rows: usize) -> Self {
        self.initial_rows = initial_rows;
        self
    }

    pub fn with_identifier_column(mut self, identifier_column: usize) -> Self {
        self.identifier_column = identifier_column;
        self
    }

    pub fn with_exclusion_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.exclusion_prefix = prefix.into();
        self
    }

    pub fn with_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = headers.into_iter().map(Into::into).collect();
        self
    }

    /// Widest the grid can become
    pub fn max_columns(&self) -> usize {
        self.base_columns + MAX_EXTRA_COLUMNS
    }

    /// Label of a base column
    pub fn header(&self, col: usize) -> String {
        match self.headers.get(col) {
            Some(label) if !label.trim().is_empty() => label.clone(),
            _ if col == self.identifier_column => IDENTIFIER_HEADER.to_string(),
            _ => CellPosition::col_to_letter(col),
        }
    }

    /// Whether a record is the header line of a saved grid: it reaches the
    /// identifier column and every field matches the label of its column.
    pub fn is_header_row(&self, record: &[String]) -> bool {
        if record.len() <= self.identifier_column || record.len() > self.max_columns() {
            return false;
        }
        record.iter().enumerate().all(|(col, field)| {
            let label = if col < self.base_columns {
                self.header(col)
            } else {
                self.replacement_header.clone()
            };
            field.trim() == label
        })
    }

    /// Check that the options describe a usable grid
    pub fn validate(&self) -> PasteGridResult<()> {
        if self.base_columns == 0 {
            return Err(PasteGridError::config("base_columns must be at least 1"));
        }
        if self.initial_rows == 0 {
            return Err(PasteGridError::config("initial_rows must be at least 1"));
        }
        if self.identifier_column >= self.base_columns {
            return Err(PasteGridError::config(format!(
                "identifier_column {} is outside the {} base columns",
                self.identifier_column, self.base_columns
            )));
        }
        if self.exclusion_prefix.is_empty() {
            return Err(PasteGridError::config(
                "exclusion_prefix must not be empty (it would ignore every EAN)",
            ));
        }
        if self.headers.len() > self.base_columns {
            return Err(PasteGridError::config(format!(
                "{} headers given for {} base columns",
                self.headers.len(),
                self.base_columns
            )));
        }
        Ok(())
    }

    /// Parse and validate options from TOML
    #[cfg(feature = "config")]
    pub fn from_toml_str(input: &str) -> PasteGridResult<Self> {
        let options: GridOptions = toml::from_str(input)?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<std::path::Path>) -> PasteGridResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_data_entry_page() {
        let opts = GridOptions::default();
        assert_eq!(opts.base_columns, 7);
        assert_eq!(opts.initial_rows, 12);
        assert_eq!(opts.identifier_column, 6);
        assert_eq!(opts.exclusion_prefix, "3400");
        assert_eq!(opts.max_columns(), 8);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_header_fallbacks() {
        let opts = GridOptions::default().with_headers(["Nom", "", "Prix"]);
        assert_eq!(opts.header(0), "Nom");
        assert_eq!(opts.header(1), "B");
        assert_eq!(opts.header(2), "Prix");
        assert_eq!(opts.header(6), "Code barre");
    }

    #[test]
    fn test_header_row_detection() {
        let opts = GridOptions::default();
        let labels = |raw: &[&str]| raw.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        let base = labels(&["A", "B", "C", "D", "E", "F", "Code barre"]);
        let mut full = base.clone();
        full.push("Code EAN remplacement".to_string());
        assert!(opts.is_header_row(&base));
        assert!(opts.is_header_row(&full));

        assert!(!opts.is_header_row(&labels(&["A", "B"])));
        assert!(!opts.is_header_row(&labels(&["", "", "", "", "", "", "5012345678900"])));
        let mut too_wide = full.clone();
        too_wide.push("extra".to_string());
        assert!(!opts.is_header_row(&too_wide));
    }

    #[test]
    fn test_validate_rejects_identifier_outside_grid() {
        let opts = GridOptions::default().with_identifier_column(7);
        assert!(opts.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_grid() {
        assert!(GridOptions::default()
            .with_base_columns(0)
            .validate()
            .is_err());
        assert!(GridOptions::default()
            .with_initial_rows(0)
            .validate()
            .is_err());
        assert!(GridOptions::default()
            .with_exclusion_prefix("")
            .validate()
            .is_err());
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_toml_partial() {
        let opts = GridOptions::from_toml_str("base_columns = 3\nidentifier_column = 2\n").unwrap();
        assert_eq!(opts.base_columns, 3);
        assert_eq!(opts.identifier_column, 2);
        assert_eq!(opts.initial_rows, 12);
        assert_eq!(opts.exclusion_prefix, "3400");
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_toml_invalid() {
        assert!(GridOptions::from_toml_str("base_columns = \"seven\"").is_err());
        assert!(GridOptions::from_toml_str("base_columns = 2").is_err());
    }
}
