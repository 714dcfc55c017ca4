//! Single-file conversion.
//!
//! ```text
//! panels.csv ──read──▶ bytes ──decode/parse──▶ InputRow* ──transform──▶ OutputDocument ──write──▶ panels_extended.csv
//! ```
//!
//! [`convert_content`] is the pure part (no I/O); [`convert_file`] adds the
//! async read and write around it.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::{OUTPUT_SUFFIX, SOURCE_MARKER};
use crate::error::{ConvertError, ConvertResult, CsvResult};
use crate::logs::{log_info_indent, log_success};
use crate::parser::parse_bytes;
use crate::transform::{transform_rows, OutputDocument, SkippedRow};

/// Outcome of converting one document in memory.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub document: OutputDocument,
    pub skipped: Vec<SkippedRow>,
    /// Encoding the source bytes were decoded with
    pub encoding: String,
    /// Serialized output
    pub text: String,
}

/// A file that was converted and written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertedFile {
    pub source: PathBuf,
    pub destination: PathBuf,
    /// Data rows written (header excluded)
    pub rows: usize,
    /// Rows dropped because their definition did not match
    pub skipped: usize,
}

/// Path of the extended file for `source`.
///
/// The first `.csv` in the file name is removed and `_extended.csv` appended;
/// the directory stays the same.
pub fn destination_path(source: &Path) -> PathBuf {
    let name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = name.replacen(SOURCE_MARKER, "", 1);

    source.with_file_name(format!("{}{}", stem, OUTPUT_SUFFIX))
}

/// Convert raw CSV bytes into the extended layout.
pub fn convert_content(bytes: &[u8]) -> CsvResult<Conversion> {
    let parsed = parse_bytes(bytes)?;
    let result = transform_rows(&parsed.rows);
    let text = result.document.to_csv()?;

    Ok(Conversion {
        document: result.document,
        skipped: result.skipped,
        encoding: parsed.encoding,
        text,
    })
}

/// Convert one file and write its extended counterpart.
///
/// An existing destination file is replaced.
pub async fn convert_file(source: &Path) -> ConvertResult<ConvertedFile> {
    let bytes = tokio::fs::read(source).await.map_err(|e| ConvertError::Read {
        path: source.to_path_buf(),
        source: e,
    })?;

    let conversion = convert_content(&bytes).map_err(|e| ConvertError::Csv {
        path: source.to_path_buf(),
        source: e,
    })?;

    let destination = destination_path(source);
    tokio::fs::write(&destination, conversion.text.as_bytes())
        .await
        .map_err(|e| ConvertError::Write {
            path: destination.clone(),
            source: e,
        })?;

    let converted = ConvertedFile {
        source: source.to_path_buf(),
        destination,
        rows: conversion.document.rows.len(),
        skipped: conversion.skipped.len(),
    };

    log_success(format!(
        "{} → {} ({} rows)",
        display_name(&converted.source),
        display_name(&converted.destination),
        converted.rows
    ));
    for skip in &conversion.skipped {
        log_info_indent(
            format!("row {} skipped: {:?}", skip.row, skip.definition),
            1,
        );
    }

    Ok(converted)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
