//! Directory-level batch conversion.
//!
//! Lists the candidate files of a directory and converts them all
//! concurrently. A failing file is logged and recorded in the report; it
//! never stops its siblings. Only an unlistable directory fails the batch.

use futures::future::join_all;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::{OUTPUT_SUFFIX, SOURCE_MARKER};
use crate::convert::{convert_file, ConvertedFile};
use crate::error::{BatchError, BatchResult};
use crate::logs::{log_error, log_info, log_success, log_warning};

/// A file whose conversion failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedFile {
    pub source: PathBuf,
    pub error: String,
}

/// Aggregated outcome of one batch
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub directory: PathBuf,
    /// Successful conversions, in candidate order
    pub converted: Vec<ConvertedFile>,
    /// Failed conversions, in candidate order
    pub failed: Vec<FailedFile>,
}

impl BatchReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn summary(&self) -> String {
        format!(
            "{} converted, {} failed",
            self.converted.len(),
            self.failed.len()
        )
    }

    /// Write the report as pretty JSON.
    pub fn save(&self, path: &Path) -> BatchResult<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| BatchError::Report {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, json).map_err(|e| BatchError::Report {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Whether a file name is eligible for conversion.
///
/// Names must contain `.csv` and must not contain `_extended.csv`, so
/// converted output is never picked up again.
pub fn is_candidate(name: &str) -> bool {
    name.contains(SOURCE_MARKER) && !name.contains(OUTPUT_SUFFIX)
}

/// List candidate files of `dir`, sorted by name.
///
/// Only regular files (symlinks followed) are returned.
pub async fn list_candidates(dir: &Path) -> BatchResult<Vec<PathBuf>> {
    let read_dir_err = |e| BatchError::ReadDir {
        path: dir.to_path_buf(),
        source: e,
    };

    let mut entries = tokio::fs::read_dir(dir).await.map_err(read_dir_err)?;
    let mut candidates = Vec::new();

    while let Some(entry) = entries.next_entry().await.map_err(read_dir_err)? {
        if !is_candidate(&entry.file_name().to_string_lossy()) {
            continue;
        }

        let path = entry.path();
        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => candidates.push(path),
            _ => {}
        }
    }

    candidates.sort();
    Ok(candidates)
}

/// Convert every candidate file in `dir`.
///
/// All conversions are issued at once and awaited together. Per-file errors
/// end up in [`BatchReport::failed`]; the returned error is reserved for a
/// directory that cannot be listed.
pub async fn convert_directory(dir: &Path) -> BatchResult<BatchReport> {
    log_info(format!("Converting CSV files in {}", dir.display()));

    let candidates = list_candidates(dir).await?;
    if candidates.is_empty() {
        log_warning("No CSV files to convert");
    }

    let outcomes = join_all(candidates.iter().map(|path| convert_file(path))).await;

    let mut report = BatchReport {
        directory: dir.to_path_buf(),
        ..Default::default()
    };

    for (source, outcome) in candidates.into_iter().zip(outcomes) {
        match outcome {
            Ok(converted) => report.converted.push(converted),
            Err(e) => {
                log_error(e.to_string());
                report.failed.push(FailedFile {
                    source,
                    error: e.to_string(),
                });
            }
        }
    }

    if report.is_complete() {
        log_success(report.summary());
    } else {
        log_warning(report.summary());
    }

    Ok(report)
}
