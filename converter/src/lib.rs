//! # csv-extend - panel definition CSV converter
//!
//! Converts every CSV export in a directory into the "extended" layout. The
//! composite `Definition Name` column of each row is split into name,
//! dimensions and edge flags; rows whose definition does not match are left
//! out.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌──────────────────┐
//! │  Directory  │────▶│    Batch    │────▶│   Convert   │────▶│ *_extended.csv   │
//! │  (./csv)    │     │ (join_all)  │     │ parse+trans │     │ (one per input)  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └──────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use csv_extend::convert_directory;
//! use std::path::Path;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let report = convert_directory(Path::new("./csv")).await.unwrap();
//!     println!("{}", report.summary());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Layered error types
//! - [`parser`] - CSV decoding and typed rows
//! - [`transform`] - Definition grammar and output document
//! - [`convert`] - Single-file conversion
//! - [`batch`] - Directory-level orchestration
//! - [`action`] - Command-line actions
//! - [`config`] - Directory resolution and constants
//! - [`logs`] - Console logging

// Core modules
pub mod config;
pub mod error;
pub mod logs;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// Conversion
pub mod batch;
pub mod convert;

// Command surface
pub mod action;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{BatchError, ConvertError, CsvError, UnknownAction};

pub use parser::{decode_content, detect_encoding, parse_bytes, parse_csv, InputRow, ParseResult};

pub use transform::{
    transform_rows, Definition, OutputDocument, OutputRow, SkippedRow, TransformResult,
    OUTPUT_HEADER,
};

pub use convert::{convert_content, convert_file, destination_path, Conversion, ConvertedFile};

pub use batch::{convert_directory, is_candidate, list_candidates, BatchReport, FailedFile};

pub use action::{Action, ActionOptions};
