//! Attendance output generation.
//!
//! Writes normalized sheets to an `.xlsx` workbook with `rust_xlsxwriter`:
//! one worksheet per sheet in report order, a bold header row with the four
//! canonical labels, and every value written as a string. Empty values are
//! left as blank cells.

use std::path::{Path, PathBuf};
use std::time::Instant;

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use thiserror::Error;
use tracing::{debug, info, info_span};

use attendance_model::{AttendanceColumn, NormalizeReport, NormalizedSheet};

const COLUMN_WIDTHS: [f64; 4] = [12.0, 12.0, 16.0, 16.0];

/// Errors that can occur while writing an output workbook.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The report held no normalized sheets.
    #[error("no normalized sheets to write")]
    NothingToWrite,

    /// Excel rejected a sheet name.
    #[error("invalid sheet name '{name}': {source}")]
    SheetName {
        name: String,
        #[source]
        source: XlsxError,
    },

    /// A cell could not be written.
    #[error("failed to write cell: {0}")]
    Write(#[from] XlsxError),

    /// The workbook could not be saved.
    #[error("failed to save workbook {path}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: XlsxError,
    },
}

pub type Result<T> = std::result::Result<T, OutputError>;

/// What was written by [`save_workbook`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveSummary {
    pub path: PathBuf,
    pub sheets: usize,
    pub rows: usize,
}

/// Write every normalized sheet of `report` to `path`.
///
/// # Errors
///
/// Returns an error when the report has no normalized sheets, a sheet name
/// is not a valid Excel sheet name, or the file cannot be written.
pub fn save_workbook(path: &Path, report: &NormalizeReport) -> Result<SaveSummary> {
    let span = info_span!("save_workbook", path = %path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let sheets: Vec<&NormalizedSheet> = report.normalized().collect();
    if sheets.is_empty() {
        return Err(OutputError::NothingToWrite);
    }

    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let mut rows = 0usize;
    for sheet in &sheets {
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(&sheet.name)
            .map_err(|source| OutputError::SheetName {
                name: sheet.name.clone(),
                source,
            })?;
        write_sheet(worksheet, sheet, &header)?;
        rows += sheet.row_count();
        debug!(sheet = %sheet.name, rows = sheet.row_count(), "sheet written");
    }

    workbook.save(path).map_err(|source| OutputError::Save {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        sheets = sheets.len(),
        rows,
        duration_ms = start.elapsed().as_millis(),
        "workbook saved"
    );
    Ok(SaveSummary {
        path: path.to_path_buf(),
        sheets: sheets.len(),
        rows,
    })
}

fn write_sheet(worksheet: &mut Worksheet, sheet: &NormalizedSheet, header: &Format) -> Result<()> {
    for (col, label) in AttendanceColumn::labels().iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *label, header)?;
    }
    for (idx, row) in sheet.rows.iter().enumerate() {
        let row_idx = (idx + 1) as u32;
        for (col, value) in row.cells().iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            worksheet.write_string(row_idx, col as u16, value)?;
        }
    }
    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        worksheet.set_column_width(col as u16, *width)?;
    }
    Ok(())
}

/// Default output path for an input workbook: `updated_<name>` alongside it.
pub fn default_output_path(input: &Path) -> PathBuf {
    let file_name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "attendance.xlsx".to_string());
    input.with_file_name(format!("updated_{file_name}"))
}
