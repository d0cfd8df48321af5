//! Row types flowing through the normalizer.

use chrono::NaiveDate;

/// One attendance row as read from a sheet, before any parsing.
///
/// Every field is the raw cell text; `None` means the cell was empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawAttendanceRow {
    pub date: Option<String>,
    pub day: Option<String>,
    pub first_check_in: Option<String>,
    pub last_check_out: Option<String>,
}

impl RawAttendanceRow {
    pub fn new(
        date: impl Into<String>,
        first_check_in: Option<&str>,
        last_check_out: Option<&str>,
    ) -> Self {
        Self {
            date: Some(date.into()),
            day: None,
            first_check_in: first_check_in.map(str::to_string),
            last_check_out: last_check_out.map(str::to_string),
        }
    }
}

/// One calendar day of a normalized month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalMonthRow {
    pub date: NaiveDate,
    /// English weekday name derived from `date`.
    pub day: String,
    /// Formatted check-in time, or empty.
    pub first_check_in: String,
    /// Formatted check-out time, or empty.
    pub last_check_out: String,
}

impl CanonicalMonthRow {
    /// ISO 8601 calendar date (`YYYY-MM-DD`).
    pub fn date_string(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// True when neither time field carries a value.
    pub fn is_blank(&self) -> bool {
        self.first_check_in.is_empty() && self.last_check_out.is_empty()
    }

    /// Output cells in canonical column order.
    pub fn cells(&self) -> [String; 4] {
        [
            self.date_string(),
            self.day.clone(),
            self.first_check_in.clone(),
            self.last_check_out.clone(),
        ]
    }
}
