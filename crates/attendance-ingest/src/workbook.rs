//! Workbook loading.
//!
//! Every sheet of the workbook is read into a [`RawSheet`]. The first row of
//! the used range is a metadata row (report title, employee name) and is
//! skipped; the next non-blank row is the header. Entirely blank rows are
//! dropped. Columns keep their spreadsheet positions, so a sheet whose data
//! starts in column B gets an empty leading column.

use std::path::Path;
use std::time::Instant;

use calamine::{Data, Range, Reader, open_workbook_auto};
use tracing::{debug, info, info_span};

use attendance_model::{RawSheet, RawWorkbook};

use crate::cells::cell_text;
use crate::error::{IngestError, Result};

/// Options controlling how sheets are read.
#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// Rows at the top of each sheet to skip before the header.
    pub metadata_rows: usize,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self { metadata_rows: 1 }
    }
}

/// Load every sheet of a spreadsheet, skipping one metadata row per sheet.
///
/// # Errors
///
/// Returns an error if the file is missing, is not a readable spreadsheet, or
/// a sheet cannot be read.
pub fn load_workbook(path: &Path) -> Result<RawWorkbook> {
    load_workbook_with_options(path, &IngestOptions::default())
}

/// Load every sheet of a spreadsheet with explicit options.
pub fn load_workbook_with_options(path: &Path, options: &IngestOptions) -> Result<RawWorkbook> {
    let span = info_span!("load_workbook", path = %path.display());
    let _guard = span.enter();
    let start = Instant::now();

    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut workbook = open_workbook_auto(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let sheet_names = workbook.sheet_names().to_owned();

    let mut sheets = Vec::with_capacity(sheet_names.len());
    for sheet_name in sheet_names {
        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|source| IngestError::SheetRead {
                sheet: sheet_name.clone(),
                source,
            })?;
        let sheet = sheet_from_range(&sheet_name, &range, options)?;
        debug!(
            sheet = %sheet.name,
            columns = sheet.width(),
            rows = sheet.height(),
            "sheet loaded"
        );
        sheets.push(sheet);
    }

    info!(
        sheet_count = sheets.len(),
        duration_ms = start.elapsed().as_millis(),
        "workbook loaded"
    );
    Ok(RawWorkbook::new(sheets).with_source(path))
}

/// Build a raw sheet from a calamine cell range.
pub fn sheet_from_range(
    name: &str,
    range: &Range<Data>,
    options: &IngestOptions,
) -> Result<RawSheet> {
    let (first_row, leading_columns) = range
        .start()
        .map_or((0, 0), |(row, col)| (row as usize, col as usize));
    // Metadata rows count from the top of the sheet, not the used range.
    let skip = options.metadata_rows.saturating_sub(first_row);
    let mut rows = range.rows().skip(skip).map(|row| {
        let mut cells: Vec<Option<String>> = vec![None; leading_columns];
        cells.extend(row.iter().map(cell_text));
        cells
    });

    let headers: Vec<String> = rows
        .by_ref()
        .find(|row| !is_blank(row))
        .map(|row| row.into_iter().map(Option::unwrap_or_default).collect())
        .unwrap_or_default();
    let data: Vec<Vec<Option<String>>> = rows.filter(|row| !is_blank(row)).collect();

    Ok(RawSheet::from_rows(name, &headers, &data)?)
}

fn is_blank(row: &[Option<String>]) -> bool {
    row.iter().all(Option::is_none)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(rows: &[&[Data]]) -> Range<Data> {
        let height = rows.len() as u32;
        let width = rows.iter().map(|row| row.len()).max().unwrap_or(0) as u32;
        let mut range = Range::new((0, 0), (height - 1, width - 1));
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                range.set_value((r as u32, c as u32), cell.clone());
            }
        }
        range
    }

    fn text(value: &str) -> Data {
        Data::String(value.to_string())
    }

    #[test]
    fn skips_metadata_and_blank_rows() {
        let range = range(&[
            &[text("Attendance - January"), Data::Empty, Data::Empty, Data::Empty],
            &[text("Date"), text("Day"), text("In"), text("Out")],
            &[text("2024-01-02"), text("Tuesday"), text("09:00"), Data::Empty],
            &[Data::Empty, Data::Empty, Data::Empty, Data::Empty],
            &[text("2024-01-03"), text("Wednesday"), Data::Empty, text("17:00")],
        ]);
        let sheet = sheet_from_range("Alice", &range, &IngestOptions::default()).unwrap();
        assert_eq!(sheet.column_names(), vec!["Date", "Day", "In", "Out"]);
        assert_eq!(sheet.height(), 2);
        let dates = sheet.data.column("Date").unwrap().str().unwrap();
        assert_eq!(dates.get(1), Some("2024-01-03"));
    }

    #[test]
    fn metadata_only_sheet_has_no_columns() {
        let range = range(&[&[text("Attendance - January")]]);
        let sheet = sheet_from_range("Empty", &range, &IngestOptions::default()).unwrap();
        assert!(sheet.is_empty());
        assert_eq!(sheet.width(), 0);
    }

    #[test]
    fn metadata_row_counts_from_top_of_sheet() {
        let mut range = Range::new((1, 0), (2, 0));
        range.set_value((1, 0), text("Date"));
        range.set_value((2, 0), text("2024-01-02"));
        let sheet = sheet_from_range("Offset", &range, &IngestOptions::default()).unwrap();
        assert_eq!(sheet.column_names(), vec!["Date"]);
        assert_eq!(sheet.height(), 1);
    }

    #[test]
    fn metadata_rows_are_configurable() {
        let range = range(&[
            &[text("Company")],
            &[text("Employee")],
            &[text("Date")],
            &[text("2024-01-02")],
        ]);
        let options = IngestOptions { metadata_rows: 2 };
        let sheet = sheet_from_range("Two", &range, &options).unwrap();
        assert_eq!(sheet.column_names(), vec!["Date"]);
        assert_eq!(sheet.height(), 1);
    }
}
