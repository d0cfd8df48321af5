//! Raw sheet and workbook types.
//!
//! A [`RawSheet`] wraps a Polars [`DataFrame`] whose columns are nullable
//! strings, one per spreadsheet column. Null marks an empty cell. Column names
//! come from the header row and are made unique on construction, since a
//! frame cannot hold two columns with the same name.

use std::collections::BTreeSet;
use std::path::PathBuf;

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, PolarsResult, Series};

/// One sheet of a workbook after the metadata row has been skipped.
#[derive(Debug, Clone)]
pub struct RawSheet {
    /// Sheet name as shown in the workbook tab.
    pub name: String,
    /// The sheet contents as string columns.
    pub data: DataFrame,
}

impl RawSheet {
    pub fn new(name: impl Into<String>, data: DataFrame) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// Build a sheet from a header row and data rows.
    ///
    /// Rows shorter than the widest row are padded with empty cells. Header
    /// names that are empty become `Unnamed: N`; repeated names get a `.1`,
    /// `.2`, ... suffix.
    pub fn from_rows(
        name: impl Into<String>,
        headers: &[String],
        rows: &[Vec<Option<String>>],
    ) -> PolarsResult<Self> {
        let width = rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(headers.len()))
            .max()
            .unwrap_or(0);
        let names = unique_headers(headers, width);
        let mut columns: Vec<Column> = Vec::with_capacity(width);
        for (idx, column_name) in names.iter().enumerate() {
            let values: Vec<Option<String>> = rows
                .iter()
                .map(|row| row.get(idx).cloned().flatten())
                .collect();
            columns.push(Series::new(column_name.as_str().into(), values).into_column());
        }
        Ok(Self::new(name, DataFrame::new(columns)?))
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.data.width()
    }

    /// Number of data rows.
    pub fn height(&self) -> usize {
        self.data.height()
    }

    /// True when the sheet has no data rows or no columns.
    pub fn is_empty(&self) -> bool {
        self.height() == 0 || self.width() == 0
    }

    /// Column names in sheet order.
    pub fn column_names(&self) -> Vec<String> {
        self.data
            .get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect()
    }
}

/// All sheets of one workbook in tab order.
#[derive(Debug, Clone, Default)]
pub struct RawWorkbook {
    /// File the workbook was loaded from, when it came from disk.
    pub source: Option<PathBuf>,
    pub sheets: Vec<RawSheet>,
}

impl RawWorkbook {
    pub fn new(sheets: Vec<RawSheet>) -> Self {
        Self {
            source: None,
            sheets,
        }
    }

    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(path.into());
        self
    }

    pub fn sheet(&self, name: &str) -> Option<&RawSheet> {
        self.sheets.iter().find(|sheet| sheet.name == name)
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|sheet| sheet.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

fn unique_headers(headers: &[String], width: usize) -> Vec<String> {
    let mut seen: BTreeSet<String> = BTreeSet::new();
    let mut names = Vec::with_capacity(width);
    for idx in 0..width {
        let base = headers
            .get(idx)
            .map(|header| header.trim())
            .filter(|header| !header.is_empty())
            .map_or_else(|| format!("Unnamed: {idx}"), str::to_string);
        let mut candidate = base.clone();
        let mut suffix = 1;
        while seen.contains(&candidate) {
            candidate = format!("{base}.{suffix}");
            suffix += 1;
        }
        seen.insert(candidate.clone());
        names.push(candidate);
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<Option<String>> {
        values
            .iter()
            .map(|value| {
                if value.is_empty() {
                    None
                } else {
                    Some((*value).to_string())
                }
            })
            .collect()
    }

    #[test]
    fn duplicate_and_blank_headers_are_renamed() {
        let headers = vec![
            "Date".to_string(),
            "".to_string(),
            "Time".to_string(),
            "Time".to_string(),
        ];
        assert_eq!(
            unique_headers(&headers, 5),
            vec!["Date", "Unnamed: 1", "Time", "Time.1", "Unnamed: 4"]
        );
    }

    #[test]
    fn from_rows_pads_short_rows() {
        let headers = vec!["Date".to_string(), "Day".to_string()];
        let rows = vec![cells(&["2024-01-01", "Monday", "09:00"]), cells(&["2024-01-02"])];
        let sheet = RawSheet::from_rows("Alice", &headers, &rows).unwrap();
        assert_eq!(sheet.width(), 3);
        assert_eq!(sheet.height(), 2);
        assert_eq!(sheet.column_names(), vec!["Date", "Day", "Unnamed: 2"]);
        let day = sheet.data.column("Day").unwrap().str().unwrap();
        assert_eq!(day.get(0), Some("Monday"));
        assert_eq!(day.get(1), None);
    }

    #[test]
    fn header_only_sheet_is_empty() {
        let headers = vec!["Date".to_string(), "Day".to_string()];
        let sheet = RawSheet::from_rows("Bob", &headers, &[]).unwrap();
        assert!(sheet.is_empty());
        assert_eq!(sheet.width(), 2);
    }
}
