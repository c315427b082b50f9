//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Paste diagnostics and terminal formatting
//! - Error types and result types

pub mod diagnostics;
pub mod error;

// Re-export commonly used items
pub use diagnostics::{format_report, Diagnostic, DiagnosticLevel, DroppedValue, PasteReport};
pub use error::{PasteGridError, PasteGridResult};
