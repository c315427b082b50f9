//! Editable Grid
//!
//! The in-memory model behind the data entry page: a rectangular table of
//! string cells with a fixed number of base columns, any number of rows, and
//! at most one extra "replacement" column.
//!
//! # Growth rules
//!
//! - Rows are appended on demand when a paste reaches past the last row and
//!   are never removed except by [`Grid::reset`].
//! - The replacement column appears at most once per reset cycle, either
//!   explicitly or when a paste needs one more column than the base width.
//!   Pasted values that need more than that are dropped.
//!
//! # Example
//!
//! ```
//! use pastegrid::{CellPosition, Grid, GridOptions, PastePayload};
//!
//! let mut grid = Grid::new(GridOptions::default());
//! let report = grid.paste(&PastePayload::text("5012345678900\t5099999999999", CellPosition::new(0, 6)));
//!
//! assert!(grid.has_replacement_column());
//! assert_eq!(grid.value(0, 7), Some("5099999999999"));
//! assert_eq!(report.values_written, 2);
//! ```

mod cell;
mod options;
mod synchronizer;


pub use cell::{Cell, CellKind, CellPosition};
pub use options::GridOptions;
pub use synchronizer::{Grid, ReplacementColumn};
