//! WASM bindings for pastegrid
//!
//! This module exposes a stateful `PasteGrid` class to JavaScript. The page
//! forwards its paste events (both clipboard flavours plus the receiving
//! cell) and renders whatever `values()` and `headers()` return.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use crate::{CellPosition, Grid, GridOptions, PastePayload, PasteReport};

/// Result of an extraction request
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct ExtractResult {
    /// Submission body, `None` when there is nothing to process
    pub payload: Option<crate::Extraction>,
    /// Whether the grid can be submitted
    pub success: bool,
    /// Message to show when it cannot
    pub error: Option<String>,
    /// Status line for the page
    pub summary: String,
}

/// Paste summary handed back to the page
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct PasteResult {
    pub summary: String,
    pub column_added: bool,
    pub rows_created: usize,
    /// One message per diagnostic
    pub warnings: Vec<String>,
}

#[cfg(feature = "wasm")]
impl From<&PasteReport> for PasteResult {
    fn from(report: &PasteReport) -> Self {
        PasteResult {
            summary: report.summary(),
            column_added: report.column_added,
            rows_created: report.rows_created,
            warnings: report.diagnostics.iter().map(|d| d.to_string()).collect(),
        }
    }
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// A grid owned by one page
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub struct PasteGrid {
    grid: Grid,
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
impl PasteGrid {
    /// Create a grid. `options` is a partial `GridOptions` object, or
    /// `undefined`/`null` for the defaults. Throws the error message when the
    /// options cannot be read or describe an unusable grid.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<PasteGrid, JsValue> {
        let options: GridOptions = if options.is_undefined() || options.is_null() {
            GridOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options)
                .map_err(|e| JsValue::from_str(&format!("invalid grid options: {}", e)))?
        };
        let grid = Grid::try_new(options).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(PasteGrid { grid })
    }

    /// Handle a paste event received by cell (`row`, `col`)
    pub fn paste(
        &mut self,
        html: Option<String>,
        text: Option<String>,
        row: usize,
        col: usize,
    ) -> JsValue {
        let payload = PastePayload {
            markup: html,
            text,
            anchor: CellPosition::new(row, col),
        };

        // Keep the grid usable if anything goes wrong while parsing
        let grid = &mut self.grid;
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            PasteResult::from(&grid.paste(&payload))
        }))
        .unwrap_or_else(|_| PasteResult {
            summary: "nothing to paste".to_string(),
            column_added: false,
            rows_created: 0,
            warnings: vec!["paste could not be processed".to_string()],
        });

        serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
    }

    /// Append one empty row, returns its index
    #[wasm_bindgen(js_name = "addRow")]
    pub fn add_row(&mut self) -> usize {
        self.grid.add_row()
    }

    /// Add the replacement column, returns `false` if it already exists
    #[wasm_bindgen(js_name = "addReplacementColumn")]
    pub fn add_replacement_column(&mut self) -> bool {
        self.grid.add_replacement_column()
    }

    pub fn clear(&mut self) {
        self.grid.reset();
    }

    #[wasm_bindgen(js_name = "setValue")]
    pub fn set_value(&mut self, row: usize, col: usize, value: String) -> bool {
        self.grid.write_value(row, col, value)
    }

    /// Grid values as an array of string arrays
    pub fn values(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.grid.to_values()).unwrap_or(JsValue::NULL)
    }

    pub fn headers(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.grid.headers()).unwrap_or(JsValue::NULL)
    }

    /// Classify the identifiers for submission
    pub fn extract(&self) -> JsValue {
        let extraction = self.grid.extract_identifiers();
        let summary = extraction.summary();
        let result = match extraction.into_submission() {
            Ok(payload) => ExtractResult {
                payload: Some(payload),
                success: true,
                error: None,
                summary,
            },
            Err(e) => ExtractResult {
                payload: None,
                success: false,
                error: Some(e.to_string()),
                summary,
            },
        };
        serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
    }

    #[wasm_bindgen(getter, js_name = "rowCount")]
    pub fn row_count(&self) -> usize {
        self.grid.row_count()
    }

    #[wasm_bindgen(getter, js_name = "columnCount")]
    pub fn column_count(&self) -> usize {
        self.grid.column_count()
    }
}

/// Detect the delimiter of one line of text
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "detectDelimiter")]
pub fn detect_delimiter_wasm(line: &str) -> String {
    crate::detect_delimiter(line).as_char().to_string()
}

/// Get library version
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    crate::version().to_string()
}
