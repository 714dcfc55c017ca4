//! Error types for the conversion pipeline.
//!
//! One enum per layer:
//!
//! - [`CsvError`] - decoding and tabular parsing of a single document
//! - [`ConvertError`] - one file conversion (read, parse, write)
//! - [`BatchError`] - whole-directory failures
//! - [`UnknownAction`] - command-line action selection
//!
//! Row-level pattern mismatches are not errors; those rows are skipped.

use std::path::{Path, PathBuf};
use thiserror::Error;

// =============================================================================
// CSV Parsing Errors
// =============================================================================

/// Errors while parsing one document's tabular content.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Malformed record (bad quoting, unequal field counts, ...).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The header line lacks a column the transform reads.
    #[error("Missing column: {0}")]
    MissingColumn(String),
}

// =============================================================================
// File Conversion Errors
// =============================================================================

/// Errors that abort the conversion of a single file.
///
/// Sibling conversions in the same batch are unaffected.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Source file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source content is not valid tabular data.
    #[error("Failed to parse {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: CsvError,
    },

    /// Destination file could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    /// Path of the file the failing step was operating on.
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Csv { path, .. } | Self::Write { path, .. } => path,
        }
    }
}

// =============================================================================
// Batch Errors (top-level)
// =============================================================================

/// Batch-fatal errors. A batch that hits one of these converts nothing.
#[derive(Debug, Error)]
pub enum BatchError {
    /// Target directory could not be listed.
    #[error("Cannot read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Batch report could not be written.
    #[error("Cannot write report {}: {message}", path.display())]
    Report { path: PathBuf, message: String },
}

// =============================================================================
// Command Errors
// =============================================================================

/// Action name that matches no known action.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown action: {0}")]
pub struct UnknownAction(pub String);

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for single-file conversions.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Result type for batch operations.
pub type BatchResult<T> = Result<T, BatchError>;
