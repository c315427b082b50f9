//! # pastegrid
//!
//! Clipboard-to-grid synchronization for EAN data entry, written in Rust.
//!
//! ## Features
//!
//! - **Both clipboard flavours**: HTML tables (exact cell boundaries) win over
//!   delimited plain text (tab, semicolon or comma, detected per paste)
//! - **Anchored merge**: pasted rows land at the receiving cell, grow the grid
//!   downwards, and leave every other cell alone
//! - **Bounded width**: at most one extra "replacement" column, created on
//!   demand; anything wider is dropped and reported
//! - **Identifier extraction**: EAN codes are split into codes to process and
//!   codes to ignore (prefix `3400`), ready to serialize for submission
//! - **WASM Support**: Compiles to WebAssembly for browser usage
//!
//! ## Usage Examples
//!
//! ### Paste then extract
//!
//! ```rust
//! use pastegrid::{CellPosition, Grid, GridOptions, PastePayload};
//!
//! let mut grid = Grid::new(GridOptions::default());
//! let clipboard = "3400930000001\n5012345678900\t5099999999999";
//! grid.paste(&PastePayload::text(clipboard, CellPosition::new(0, 6)));
//!
//! let json = grid.submission().unwrap().to_json().unwrap();
//! assert_eq!(
//!     json,
//!     r#"{"eans":[{"primary":"5012345678900","replacement":"5099999999999"}],"ignored3400":["3400930000001"]}"#
//! );
//! ```
//!
//! ### One-shot helper
//!
//! ```rust
//! use pastegrid::{extract_from_clipboard, GridOptions, PastePayload};
//!
//! let payload = PastePayload::markup(
//!     "<table><tr><td>5012345678900</td></tr></table>",
//!     "G1".parse().unwrap(),
//! );
//! let extraction = extract_from_clipboard(&payload, GridOptions::default()).unwrap();
//! assert_eq!(extraction.identifiers.len(), 1);
//! ```

/// Core grid modules
pub mod core;

/// Data layer - grid constants
pub mod data;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core modules
pub use core::clipboard;
pub use core::extract;
pub use core::grid;

pub use core::clipboard::{
    detect_delimiter, parse_clipboard, Delimiter, ParsedClipboard, ParsedRow, PastePayload,
    PasteSource,
};
pub use core::extract::{extract_identifiers, prepare_submission, Extraction, IdentifierRecord};
pub use core::grid::{Cell, CellKind, CellPosition, Grid, GridOptions, ReplacementColumn};

// Re-export data modules
pub use data::constants;

// Re-export utilities
pub use utils::diagnostics;
pub use utils::diagnostics::{format_report, PasteReport};
pub use utils::error::{PasteGridError, PasteGridResult};

/// Paste into a fresh grid and return the grid with its report
pub fn paste_into_new_grid(payload: &PastePayload, options: GridOptions) -> (Grid, PasteReport) {
    let mut grid = Grid::new(options);
    let report = grid.paste(payload);
    (grid, report)
}

/// Paste into a fresh grid and prepare the submission in one step
///
/// Fails with [`PasteGridError::NothingToProcess`] when the pasted data puts
/// no code in the identifier column.
pub fn extract_from_clipboard(
    payload: &PastePayload,
    options: GridOptions,
) -> PasteGridResult<Extraction> {
    let (grid, _) = paste_into_new_grid(payload, options);
    grid.submission()
}

/// Crate version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
