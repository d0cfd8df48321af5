//! Rendering of spreadsheet cells as text.

use calamine::{Data, ExcelDateTime};
use chrono::NaiveTime;

/// Text of a cell, or `None` when the cell is empty or an error.
///
/// Excel date/time cells become `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS` or, for
/// time-only values, `HH:MM:SS`.
pub fn cell_text(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::Empty | Data::Error(_) => return None,
        Data::String(value) => value
            .trim_matches(|ch: char| ch.is_whitespace() || ch == '\u{feff}')
            .to_string(),
        Data::Int(value) => value.to_string(),
        Data::Float(value) => format_float(*value),
        Data::Bool(value) => (if *value { "TRUE" } else { "FALSE" }).to_string(),
        Data::DateTime(value) => format_excel_datetime(value)?,
        Data::DateTimeIso(value) | Data::DurationIso(value) => value.trim().to_string(),
    };
    if text.is_empty() { None } else { Some(text) }
}

/// Render a float without a trailing `.0` when it holds an integer.
pub fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

fn format_excel_datetime(value: &ExcelDateTime) -> Option<String> {
    let datetime = value.as_datetime()?;
    let text = if value.as_f64() < 1.0 {
        datetime.format("%H:%M:%S").to_string()
    } else if datetime.time() == NaiveTime::MIN {
        datetime.format("%Y-%m-%d").to_string()
    } else {
        datetime.format("%Y-%m-%d %H:%M:%S").to_string()
    };
    Some(text)
}
