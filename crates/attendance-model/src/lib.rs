//! Shared types for the attendance normalizer.
//!
//! - **columns**: the four canonical attendance columns and their labels
//! - **rows**: raw rows as read from a sheet and canonical month rows
//! - **sheet**: raw sheets and workbooks backed by Polars frames
//! - **outcome**: per-sheet outcomes and the workbook report
//! - **options**: normalization settings

pub mod columns;
pub mod error;
pub mod options;
pub mod outcome;
pub mod rows;
pub mod sheet;

pub use columns::{AttendanceColumn, REQUIRED_COLUMNS};
pub use error::{NormalizeError, Result};
pub use options::{ClockStyle, NormalizeOptions};
pub use outcome::{NormalizeReport, NormalizedSheet, SheetOutcome, SkipReason};
pub use rows::{CanonicalMonthRow, RawAttendanceRow};
pub use sheet::{RawSheet, RawWorkbook};
