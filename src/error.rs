//! Error types for the resistor finder.
//!
//! This module provides a unified error type [`ResistorError`] that covers
//! every way an input can be rejected before the search starts, plus the
//! I/O failures of the command-line report writer.
//!
//! An empty search result is never an error: callers receive an empty list.

use thiserror::Error;

/// Result type alias using [`ResistorError`].
pub type Result<T> = std::result::Result<T, ResistorError>;

/// Unified error type for all resistor finder operations.
#[derive(Error, Debug)]
pub enum ResistorError {
    // ============ Input Validation Errors ============
    /// Resistor value is zero, negative, or not a finite number
    #[error("Invalid resistor value {value}: resistor values must be finite and greater than zero")]
    InvalidResistorValue { value: f64 },

    /// Target resistance is zero, negative, or not a finite number
    #[error("Invalid target resistance {value}: target must be finite and greater than zero")]
    InvalidTarget { value: f64 },

    /// Tolerance is not a number
    #[error("Invalid tolerance {value}: tolerance must be a number")]
    InvalidTolerance { value: f64 },

    /// Result limit of zero
    #[error("Invalid max_results: at least one result must be requested")]
    InvalidMaxResults,

    /// Component budget is zero or above the hard cap
    #[error("Invalid max_components {value}: must be between 1 and {limit}")]
    InvalidMaxComponents { value: usize, limit: usize },

    // ============ Combination Errors ============
    /// A combination needs at least one resistor
    #[error("A combination must contain at least one resistor")]
    EmptyCombination,

    /// Combination larger than the composer will enumerate
    #[error("Combination of {count} resistors exceeds the limit of {limit}")]
    TooManyComponents { count: usize, limit: usize },

    // ============ Text Input Errors ============
    /// Malformed `value:count` stock entry
    #[error("Invalid stock entry '{entry}': {message}")]
    InvalidStockEntry { entry: String, message: String },

    /// Resistance text that could not be parsed
    #[error("Invalid resistance value '{text}' (expected a number with optional p/n/u/m/k/M/G/T suffix)")]
    InvalidValue { text: String },

    // ============ I/O Errors ============
    /// Error writing a circuit report
    #[error("Failed to write report '{path}': {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ResistorError {
    /// Create an invalid stock entry error
    pub fn invalid_stock_entry(entry: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidStockEntry {
            entry: entry.into(),
            message: message.into(),
        }
    }

    /// Create an invalid max components error against the crate's hard cap
    pub fn invalid_max_components(value: usize) -> Self {
        Self::InvalidMaxComponents {
            value,
            limit: crate::MAX_COMPONENTS_LIMIT,
        }
    }

    /// Create a file write error
    pub fn file_write(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::FileWriteError {
            path: path.display().to_string(),
            source,
        }
    }
}
