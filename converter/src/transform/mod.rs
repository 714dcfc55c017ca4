//! Row transformation.
//!
//! - `definition`: the definition field grammar
//! - `document`: output rows and serialization
//!
//! Rows whose definition does not match the grammar are dropped from the
//! output. They are reported as [`SkippedRow`]s, never as errors.

pub mod definition;
pub mod document;

pub use definition::{Definition, DEFINITION_PATTERN};
pub use document::{OutputDocument, OutputRow, OUTPUT_HEADER};

use crate::parser::InputRow;

/// A row that was left out of the output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based data row number (the header is not counted)
    pub row: usize,
    /// The definition value that failed to match
    pub definition: String,
}

/// Result of transforming one file's rows
#[derive(Debug, Clone, Default)]
pub struct TransformResult {
    pub document: OutputDocument,
    pub skipped: Vec<SkippedRow>,
}

impl TransformResult {
    /// Get summary statistics
    pub fn summary(&self) -> String {
        format!(
            "Transformed: {} rows, {} skipped",
            self.document.rows.len(),
            self.skipped.len()
        )
    }
}

/// Transform input rows into an output document.
pub fn transform_rows(rows: &[InputRow]) -> TransformResult {
    let mut result = TransformResult::default();

    for (idx, row) in rows.iter().enumerate() {
        match OutputRow::from_input(row) {
            Some(out) => result.document.rows.push(out),
            None => result.skipped.push(SkippedRow {
                row: idx + 1,
                definition: row.definition_name.clone(),
            }),
        }
    }

    result
}
