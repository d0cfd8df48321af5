//! Canonical attendance columns.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of leading columns a sheet needs before it can be normalized.
pub const REQUIRED_COLUMNS: usize = 4;

/// One of the four semantic columns of an attendance sheet.
///
/// Columns are assigned positionally: the first column of a sheet is always
/// the date, whatever its header says.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceColumn {
    Date,
    Day,
    FirstCheckIn,
    LastCheckOut,
}

impl AttendanceColumn {
    /// All columns in output order.
    pub const ALL: [AttendanceColumn; REQUIRED_COLUMNS] = [
        AttendanceColumn::Date,
        AttendanceColumn::Day,
        AttendanceColumn::FirstCheckIn,
        AttendanceColumn::LastCheckOut,
    ];

    /// Header label written to output sheets.
    pub fn label(self) -> &'static str {
        match self {
            AttendanceColumn::Date => "Date",
            AttendanceColumn::Day => "Day",
            AttendanceColumn::FirstCheckIn => "First Check In",
            AttendanceColumn::LastCheckOut => "Last Check Out",
        }
    }

    /// Zero-based position of the column in a raw sheet.
    pub fn position(self) -> usize {
        match self {
            AttendanceColumn::Date => 0,
            AttendanceColumn::Day => 1,
            AttendanceColumn::FirstCheckIn => 2,
            AttendanceColumn::LastCheckOut => 3,
        }
    }

    /// Labels of all columns in output order.
    pub fn labels() -> [&'static str; REQUIRED_COLUMNS] {
        Self::ALL.map(AttendanceColumn::label)
    }
}

impl fmt::Display for AttendanceColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
