//! Data layer - Static constants
//!
//! This module contains the fixed values of the data-entry grid:
//! - Grid layout defaults
//! - Identifier exclusion rule
//! - Header labels and submission field names

pub mod constants;

// Re-export commonly used items
pub use constants::{
    BASE_COLUMNS, EXCLUSION_PREFIX, IDENTIFIER_COLUMN, IDENTIFIER_HEADER, INITIAL_ROWS,
    MAX_EXTRA_COLUMNS, REPLACEMENT_HEADER,
};
