//! Attendance normalization.
//!
//! This crate turns raw attendance sheets into full calendar months:
//!
//! - **datetime**: best-effort date and time-of-day parsing, `AM`/`PM` formatting
//! - **calendar**: month bounds, month day lists and weekday names
//! - **frame**: positional extraction of attendance rows from sheet frames
//! - **normalize**: the per-sheet and per-workbook normalization

pub mod calendar;
pub mod datetime;
pub mod frame;
pub mod normalize;

pub use calendar::{days_in_month, month_bounds, month_days, weekday_name};
pub use datetime::{format_time, format_time_with_period, parse_attendance_date, parse_time_of_day};
pub use frame::extract_rows;
pub use normalize::{normalize_rows, normalize_sheet, normalize_workbook};
