//! Attendance workbook ingestion.
//!
//! Loads spreadsheets with `calamine` and turns each sheet into a
//! [`attendance_model::RawSheet`] of string columns.

pub mod cells;
pub mod error;
pub mod workbook;

pub use cells::{cell_text, format_float};
pub use error::{IngestError, Result};
pub use workbook::{IngestOptions, load_workbook, load_workbook_with_options, sheet_from_range};
