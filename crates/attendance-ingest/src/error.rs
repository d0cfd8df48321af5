//! Error types for attendance workbook ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a workbook.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Workbook file not found.
    #[error("workbook not found: {path}")]
    FileNotFound { path: PathBuf },

    // === Spreadsheet Errors ===
    /// The file could not be opened as a spreadsheet.
    #[error("failed to open workbook {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// A worksheet could not be read.
    #[error("failed to read sheet '{sheet}': {source}")]
    SheetRead {
        sheet: String,
        #[source]
        source: calamine::Error,
    },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
