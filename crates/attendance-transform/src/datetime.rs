//! Best-effort date and time-of-day parsing for attendance cells.
//!
//! Attendance exports arrive in whatever format the clocking system or the
//! person typing the sheet used. Dates are tried against a list of datetime
//! formats and then date-only formats; the first match wins. Slash dates are
//! read month-first when both readings are valid.
//!
//! Times accept 24-hour clocks, 12-hour clocks with an `AM`/`PM` suffix and
//! full datetimes (the time part is kept). A 24-hour time carrying a
//! consistent `PM` suffix, such as `17:30 PM`, parses as written so that
//! formatted output reads back unchanged.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use attendance_model::ClockStyle;

const WEEKDAY_NAMES: [&str; 14] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
    "mon",
    "tue",
    "wed",
    "thu",
    "fri",
    "sat",
    "sun",
];

/// Half of the day a 12-hour clock value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Am,
    Pm,
}

impl Period {
    /// Period of a time of day: hours before noon are `AM`.
    pub fn of(time: NaiveTime) -> Self {
        if time.hour() < 12 { Period::Am } else { Period::Pm }
    }

    pub fn label(self) -> &'static str {
        match self {
            Period::Am => "AM",
            Period::Pm => "PM",
        }
    }
}

/// Parse a date cell into a calendar date, discarding any time of day.
///
/// A trailing `AM`/`PM` on a datetime is accepted. Four-digit year formats
/// are tried before two-digit ones and never match a shorter year.
///
/// Returns `None` for empty values, values holding only a time of day, and
/// anything no known format accepts.
pub fn parse_attendance_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let candidate = strip_weekday_prefix(trimmed);
    if let Ok(dt) = DateTime::parse_from_rfc3339(candidate) {
        return Some(dt.date_naive());
    }
    if let (stamp, Some(period)) = split_period(candidate) {
        let dt = try_parse_datetime(stamp)?;
        apply_period(dt.time(), period)?;
        return Some(dt.date());
    }
    try_parse_datetime(candidate)
        .map(|dt| dt.date())
        .or_else(|| try_parse_date(candidate))
}

/// Parse a check-in or check-out cell into a time of day.
pub fn parse_time_of_day(value: &str) -> Option<NaiveTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let (clock, period) = split_period(trimmed);
    let time = try_parse_clock(clock)
        .or_else(|| try_parse_datetime(clock).map(|dt| dt.time()))
        .or_else(|| {
            DateTime::parse_from_rfc3339(clock)
                .ok()
                .map(|dt| dt.naive_local().time())
        })
        .or_else(|| try_parse_date(clock).map(|_| NaiveTime::MIN))?;
    match period {
        None => Some(time),
        Some(period) => apply_period(time, period),
    }
}

/// Format a raw time cell as `HH:MM AM` / `HH:MM PM`.
///
/// Missing or blank values become an empty string. Values that cannot be
/// read as a time of day are returned unchanged.
pub fn format_time_with_period(value: Option<&str>, clock: ClockStyle) -> String {
    let Some(raw) = value else {
        return String::new();
    };
    if raw.trim().is_empty() {
        return String::new();
    }
    match parse_time_of_day(raw) {
        Some(time) => format_time(time, clock),
        None => raw.to_string(),
    }
}

/// Format a time of day with its period suffix.
pub fn format_time(time: NaiveTime, clock: ClockStyle) -> String {
    format!(
        "{} {}",
        time.format(clock.digits_format()),
        Period::of(time).label()
    )
}

fn strip_weekday_prefix(value: &str) -> &str {
    let Some(split) = value.find([',', ' ']) else {
        return value;
    };
    let head = value[..split].trim_end_matches('.').to_ascii_lowercase();
    if WEEKDAY_NAMES.contains(&head.as_str()) {
        value[split..].trim_start_matches([',', ' '])
    } else {
        value
    }
}

fn split_period(value: &str) -> (&str, Option<Period>) {
    let upper = value.to_ascii_uppercase();
    for (suffix, period) in [
        ("A.M.", Period::Am),
        ("P.M.", Period::Pm),
        ("AM", Period::Am),
        ("PM", Period::Pm),
    ] {
        if upper.ends_with(suffix) {
            let clock = value[..value.len() - suffix.len()].trim_end();
            return (clock, Some(period));
        }
    }
    (value, None)
}

fn apply_period(time: NaiveTime, period: Period) -> Option<NaiveTime> {
    let hour = time.hour();
    let adjusted = match (period, hour) {
        (Period::Am, 12) => 0,
        (Period::Am, 0..=11) => hour,
        (Period::Pm, 1..=11) => hour + 12,
        (Period::Pm, 12..=23) => hour,
        _ => return None,
    };
    time.with_hour(adjusted)
}

fn try_parse_clock(value: &str) -> Option<NaiveTime> {
    let formats = ["%H:%M:%S%.f", "%H:%M:%S", "%H:%M"];
    formats
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(value, fmt).ok())
}

fn try_parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let formats = [
        "%Y-%m-%dT%H:%M:%S%.f", // With fractional seconds
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M:%S",
        "%Y/%m/%d %H:%M",
        "%Y.%m.%d %H:%M:%S",
        "%Y.%m.%d %H:%M",
        "%d-%b-%Y %H:%M:%S", // 15-Jan-2024 10:30:00
        "%d-%b-%Y %H:%M",
        "%d %b %Y %H:%M:%S", // 15 Jan 2024 10:30:00
        "%d %b %Y %H:%M",
        "%b %d %Y %H:%M:%S", // Jan 15 2024 10:30:00
        "%b %d %Y %H:%M",
        "%m/%d/%Y %H:%M:%S", // US
        "%m/%d/%Y %H:%M",
        "%d/%m/%Y %H:%M:%S", // European
        "%d/%m/%Y %H:%M",
        "%d.%m.%Y %H:%M:%S",
        "%d.%m.%Y %H:%M",
        "%m/%d/%y %H:%M:%S", // 01/15/24 10:30:00
        "%m/%d/%y %H:%M",
        "%d-%b-%y %H:%M:%S",
        "%d-%b-%y %H:%M",
    ];
    formats.iter().find_map(|fmt| {
        NaiveDateTime::parse_from_str(value, fmt)
            .ok()
            .filter(|dt| full_year(fmt, dt.year()))
    })
}

fn try_parse_date(value: &str) -> Option<NaiveDate> {
    let formats = [
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%Y.%m.%d",  // 2024.01.15
        "%d-%b-%Y",  // 15-Jan-2024
        "%d-%B-%Y",  // 15-January-2024
        "%m/%d/%Y",  // US: 01/15/2024
        "%d/%m/%Y",  // European: 15/01/2024
        "%d.%m.%Y",  // German: 15.01.2024
        "%Y%m%d",    // Compact: 20240115
        "%b %d, %Y", // Jan 15, 2024
        "%B %d, %Y", // January 15, 2024
        "%b %d %Y",  // Jan 15 2024
        "%B %d %Y",  // January 15 2024
        "%d %b %Y",  // 15 Jan 2024
        "%d %B %Y",  // 15 January 2024
        "%Y-%b-%d",  // 2024-Jan-15
        "%d-%m-%Y",  // 15-01-2024
        "%m/%d/%y",  // 01/15/24
        "%d-%b-%y",  // 15-Jan-24
        "%d %b %y",  // 15 Jan 24
    ];
    formats.iter().find_map(|fmt| {
        NaiveDate::parse_from_str(value, fmt)
            .ok()
            .filter(|date| full_year(fmt, date.year()))
    })
}

/// `%Y` also reads one- to three-digit years; those belong to the `%y` forms.
fn full_year(format: &str, year: i32) -> bool {
    !format.contains("%Y") || year >= 1000
}
