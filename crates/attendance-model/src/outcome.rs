//! Per-sheet outcomes and the workbook-level report.

use std::fmt;

use chrono::NaiveDate;
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, PolarsResult, Series};

use crate::columns::AttendanceColumn;
use crate::rows::CanonicalMonthRow;

/// A sheet re-expressed as one full calendar month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedSheet {
    pub name: String,
    /// First day of the normalized month.
    pub month_start: NaiveDate,
    /// One row per calendar day, ascending.
    pub rows: Vec<CanonicalMonthRow>,
    /// Raw rows whose date landed inside the normalized month.
    pub recorded_days: usize,
    /// Raw rows dropped because their date could not be parsed.
    pub rejected_dates: usize,
    /// Raw rows whose date repeated an earlier row.
    pub duplicate_dates: usize,
}

impl NormalizedSheet {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Month label such as `2024-01`.
    pub fn month_label(&self) -> String {
        self.month_start.format("%Y-%m").to_string()
    }

    /// The rows as a frame of four string columns with canonical labels.
    pub fn to_frame(&self) -> PolarsResult<DataFrame> {
        let mut columns: Vec<Column> = Vec::with_capacity(AttendanceColumn::ALL.len());
        for column in AttendanceColumn::ALL {
            let values: Vec<String> = self
                .rows
                .iter()
                .map(|row| match column {
                    AttendanceColumn::Date => row.date_string(),
                    AttendanceColumn::Day => row.day.clone(),
                    AttendanceColumn::FirstCheckIn => row.first_check_in.clone(),
                    AttendanceColumn::LastCheckOut => row.last_check_out.clone(),
                })
                .collect();
            columns.push(Series::new(column.label().into(), values).into_column());
        }
        DataFrame::new(columns)
    }
}

/// Why a sheet was left out of the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// No data rows below the header.
    Empty,
    /// Fewer than the four required columns.
    TooFewColumns { found: usize },
    /// Every date value was missing or unparseable.
    NoValidDates { rejected: usize },
    /// An error while processing the sheet.
    Failed { message: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Empty => write!(f, "sheet has no data rows"),
            SkipReason::TooFewColumns { found } => {
                write!(f, "sheet has {found} columns, expected at least 4")
            }
            SkipReason::NoValidDates { rejected } => {
                write!(f, "no valid dates ({rejected} rejected)")
            }
            SkipReason::Failed { message } => write!(f, "processing failed: {message}"),
        }
    }
}

/// Result of normalizing one sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetOutcome {
    Normalized(NormalizedSheet),
    Skipped { name: String, reason: SkipReason },
}

impl SheetOutcome {
    pub fn as_normalized(&self) -> Option<&NormalizedSheet> {
        match self {
            SheetOutcome::Normalized(sheet) => Some(sheet),
            SheetOutcome::Skipped { .. } => None,
        }
    }

    pub fn skip_reason(&self) -> Option<&SkipReason> {
        match self {
            SheetOutcome::Normalized(_) => None,
            SheetOutcome::Skipped { reason, .. } => Some(reason),
        }
    }
}

/// Outcomes for every sheet of a workbook, in workbook order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    pub outcomes: Vec<SheetOutcome>,
}

impl NormalizeReport {
    pub fn normalized(&self) -> impl Iterator<Item = &NormalizedSheet> {
        self.outcomes.iter().filter_map(SheetOutcome::as_normalized)
    }

    pub fn skipped(&self) -> impl Iterator<Item = (&str, &SkipReason)> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            SheetOutcome::Skipped { name, reason } => Some((name.as_str(), reason)),
            SheetOutcome::Normalized(_) => None,
        })
    }

    pub fn normalized_count(&self) -> usize {
        self.normalized().count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes.len() - self.normalized_count()
    }

    pub fn has_skips(&self) -> bool {
        self.skipped_count() > 0
    }
}
