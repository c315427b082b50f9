//! Error handling for pastegrid
//!
//! Pasting and grid maintenance never fail; they degrade into partial writes
//! that are described by a [`PasteReport`](crate::diagnostics::PasteReport).
//! The error type below covers the remaining fallible edges: configuration,
//! cell references typed by a user, serialization, and the extraction step
//! reporting that there is nothing to submit.

use thiserror::Error;

/// pastegrid error type
#[derive(Debug, Error)]
pub enum PasteGridError {
    /// The grid holds no identifier in its identifier column.
    #[error("no EAN code found in the grid; fill in column {column} ('{header}')")]
    NothingToProcess { column: usize, header: String },

    /// Grid options that cannot describe a usable grid
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// A cell reference such as `B3` that could not be parsed
    #[error("invalid cell reference '{reference}': {message}")]
    InvalidReference { reference: String, message: String },

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Submission payload (de)serialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file syntax
    #[cfg(feature = "config")]
    #[error("config file error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for pastegrid operations
pub type PasteGridResult<T> = Result<T, PasteGridError>;

// Convenience constructors for errors
impl PasteGridError {
    pub fn nothing_to_process(column: usize, header: impl Into<String>) -> Self {
        PasteGridError::NothingToProcess {
            column,
            header: header.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        PasteGridError::InvalidConfig {
            message: message.into(),
        }
    }

    pub fn reference(reference: impl Into<String>, message: impl Into<String>) -> Self {
        PasteGridError::InvalidReference {
            reference: reference.into(),
            message: message.into(),
        }
    }

    /// Whether this is the user-facing "nothing to process" condition
    pub fn is_nothing_to_process(&self) -> bool {
        matches!(self, PasteGridError::NothingToProcess { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_to_process_display() {
        let err = PasteGridError::nothing_to_process(7, "Code barre");
        let msg = err.to_string();
        assert!(msg.contains("no EAN code found"));
        assert!(msg.contains("Code barre"));
        assert!(err.is_nothing_to_process());
    }

    #[test]
    fn test_config_error_display() {
        let err = PasteGridError::config("base_columns must be at least 1");
        assert!(err.to_string().starts_with("invalid configuration"));
        assert!(!err.is_nothing_to_process());
    }

    #[test]
    fn test_reference_error_display() {
        let err = PasteGridError::reference("3B", "column letters must come first");
        let msg = err.to_string();
        assert!(msg.contains("'3B'"));
        assert!(msg.contains("column letters"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.tsv");
        let err: PasteGridError = io.into();
        assert!(err.to_string().contains("missing.tsv"));
    }
}
