//! Month normalization of attendance sheets.
//!
//! Each sheet is handled independently:
//!
//! 1. Sheets narrower than four columns, or without data rows, are skipped.
//! 2. Dates are parsed; rows with unparseable dates are dropped.
//! 3. The month containing the earliest surviving date becomes the target.
//! 4. A skeleton with one empty row per day of that month is built.
//! 5. Recorded check-in/check-out values are merged onto the skeleton by
//!    date. A present value always beats the skeleton's empty default.
//! 6. Times are formatted as `HH:MM AM|PM`; unparseable times pass through.
//!
//! When a date occurs more than once in a sheet the later row wins for each
//! field it carries a value for.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::time::Instant;

use chrono::NaiveDate;
use tracing::{debug, debug_span, info, trace, warn};

use attendance_model::{
    CanonicalMonthRow, NormalizeError, NormalizeOptions, NormalizeReport, NormalizedSheet,
    REQUIRED_COLUMNS, RawAttendanceRow, RawSheet, RawWorkbook, Result, SheetOutcome, SkipReason,
};

use crate::calendar::{month_days, weekday_name};
use crate::datetime::{format_time_with_period, parse_attendance_date};
use crate::frame::extract_rows;

/// Placeholder used when cell values must not appear in logs.
pub const REDACTED_VALUE: &str = "[REDACTED]";

/// Check-in/check-out values recorded for one date.
#[derive(Debug, Clone, Default)]
struct RecordedTimes {
    first_check_in: Option<String>,
    last_check_out: Option<String>,
}

impl RecordedTimes {
    fn from_row(row: &RawAttendanceRow) -> Self {
        Self {
            first_check_in: present(row.first_check_in.as_deref()),
            last_check_out: present(row.last_check_out.as_deref()),
        }
    }

    /// Apply a later row for the same date.
    fn overlay(&mut self, later: RecordedTimes) {
        if later.first_check_in.is_some() {
            self.first_check_in = later.first_check_in;
        }
        if later.last_check_out.is_some() {
            self.last_check_out = later.last_check_out;
        }
    }
}

/// Normalize every sheet of a workbook.
///
/// Skipped sheets are logged and kept in the report with their reason.
///
/// # Errors
///
/// Returns [`NormalizeError::NoValidSheets`] when no sheet could be
/// normalized.
pub fn normalize_workbook(
    workbook: &RawWorkbook,
    options: &NormalizeOptions,
) -> Result<NormalizeReport> {
    let start = Instant::now();
    let mut outcomes = Vec::with_capacity(workbook.len());
    for sheet in &workbook.sheets {
        let outcome = normalize_sheet(sheet, options);
        match &outcome {
            SheetOutcome::Normalized(normalized) => debug!(
                sheet = %normalized.name,
                month = %normalized.month_label(),
                rows = normalized.row_count(),
                recorded_days = normalized.recorded_days,
                "sheet normalized"
            ),
            SheetOutcome::Skipped { name, reason } => {
                warn!(sheet = %name, reason = %reason, "skipping sheet");
            }
        }
        outcomes.push(outcome);
    }

    let report = NormalizeReport { outcomes };
    if report.normalized_count() == 0 {
        return Err(NormalizeError::NoValidSheets {
            skipped: report.skipped_count(),
        });
    }
    info!(
        normalized = report.normalized_count(),
        skipped = report.skipped_count(),
        duration_ms = start.elapsed().as_millis(),
        "normalization complete"
    );
    Ok(report)
}

/// Normalize one sheet into a full calendar month.
pub fn normalize_sheet(sheet: &RawSheet, options: &NormalizeOptions) -> SheetOutcome {
    let span = debug_span!("sheet", sheet = %sheet.name);
    let _guard = span.enter();

    if sheet.width() < REQUIRED_COLUMNS {
        return skipped(
            &sheet.name,
            SkipReason::TooFewColumns {
                found: sheet.width(),
            },
        );
    }
    if sheet.is_empty() {
        return skipped(&sheet.name, SkipReason::Empty);
    }
    match extract_rows(sheet) {
        Ok(rows) => normalize_rows(&sheet.name, &rows, options),
        Err(error) => skipped(
            &sheet.name,
            SkipReason::Failed {
                message: error.to_string(),
            },
        ),
    }
}

/// Normalize already-extracted rows of the sheet called `name`.
pub fn normalize_rows(
    name: &str,
    rows: &[RawAttendanceRow],
    options: &NormalizeOptions,
) -> SheetOutcome {
    let mut recorded: BTreeMap<NaiveDate, RecordedTimes> = BTreeMap::new();
    let mut rejected_dates = 0usize;
    let mut duplicate_dates = 0usize;

    for row in rows {
        let Some(raw_date) = present(row.date.as_deref()) else {
            continue;
        };
        let Some(date) = parse_attendance_date(&raw_date) else {
            rejected_dates += 1;
            trace!(value = shown(&raw_date, options), "unparseable date");
            continue;
        };
        let times = RecordedTimes::from_row(row);
        match recorded.entry(date) {
            Entry::Vacant(slot) => {
                slot.insert(times);
            }
            Entry::Occupied(mut slot) => {
                duplicate_dates += 1;
                warn!(
                    sheet = %name,
                    date = shown(&raw_date, options),
                    "duplicate date, later row wins"
                );
                slot.get_mut().overlay(times);
            }
        }
    }

    let Some(earliest) = recorded.keys().next().copied() else {
        return skipped(
            name,
            SkipReason::NoValidDates {
                rejected: rejected_dates,
            },
        );
    };
    let Some(days) = month_days(earliest) else {
        return skipped(
            name,
            SkipReason::Failed {
                message: format!("no calendar month for {earliest}"),
            },
        );
    };
    let month_start = days[0];

    let mut recorded_days = 0usize;
    let month_rows: Vec<CanonicalMonthRow> = days
        .into_iter()
        .map(|date| {
            let times = recorded.get(&date);
            if times.is_some() {
                recorded_days += 1;
            }
            CanonicalMonthRow {
                date,
                day: weekday_name(date).to_string(),
                first_check_in: format_time_with_period(
                    times.and_then(|t| t.first_check_in.as_deref()),
                    options.clock,
                ),
                last_check_out: format_time_with_period(
                    times.and_then(|t| t.last_check_out.as_deref()),
                    options.clock,
                ),
            }
        })
        .collect();

    let outside_month = recorded.len() - recorded_days;
    if outside_month > 0 {
        debug!(
            sheet = %name,
            outside_month,
            "dates outside the target month left out"
        );
    }
    if rejected_dates > 0 {
        debug!(sheet = %name, rejected_dates, "rows with unparseable dates dropped");
    }

    SheetOutcome::Normalized(NormalizedSheet {
        name: name.to_string(),
        month_start,
        rows: month_rows,
        recorded_days,
        rejected_dates,
        duplicate_dates,
    })
}

fn skipped(name: &str, reason: SkipReason) -> SheetOutcome {
    SheetOutcome::Skipped {
        name: name.to_string(),
        reason,
    }
}

fn present(value: Option<&str>) -> Option<String> {
    value
        .filter(|value| !value.trim().is_empty())
        .map(str::to_string)
}

fn shown<'a>(value: &'a str, options: &NormalizeOptions) -> &'a str {
    if options.log_data {
        value
    } else {
        REDACTED_VALUE
    }
}
