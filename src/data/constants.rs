//! Constants shared by the grid, the extractor and the front ends
//!
//! The defaults reproduce the data-entry page the grid was built for: seven
//! base columns, the barcode in the seventh one, twelve empty rows on load.

// ============================================================================
// Grid Layout
// ============================================================================

/// Rows created on initialization and on every reset
pub const INITIAL_ROWS: usize = 12;

/// Number of base columns before any replacement column
pub const BASE_COLUMNS: usize = 7;

/// Zero-based column holding the primary EAN ("Code barre", 7th column)
pub const IDENTIFIER_COLUMN: usize = 6;

/// The grid may grow by this many columns beyond its base columns
pub const MAX_EXTRA_COLUMNS: usize = 1;

// ============================================================================
// Identifier Rules
// ============================================================================

/// EANs starting with this prefix are routed to the ignored set
pub const EXCLUSION_PREFIX: &str = "3400";

// ============================================================================
// Header Labels
// ============================================================================

/// Label of the identifier column
pub const IDENTIFIER_HEADER: &str = "Code barre";

/// Label of the replacement column once it exists
pub const REPLACEMENT_HEADER: &str = "Code EAN remplacement";

// ============================================================================
// Submission Payload Field Names
// ============================================================================

/// Field carrying the identifiers to process
pub const PAYLOAD_IDENTIFIERS_FIELD: &str = "eans";

/// Field carrying the excluded identifiers
pub const PAYLOAD_IGNORED_FIELD: &str = "ignored3400";
