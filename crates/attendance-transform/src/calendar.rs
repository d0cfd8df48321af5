//! Calendar month helpers.

use chrono::{Datelike, NaiveDate, Weekday};

/// First and last day of the month containing `date`.
///
/// Returns `None` only at the edges of the representable date range.
pub fn month_bounds(date: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let first = date.with_day(1)?;
    let next_month = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)?
    };
    Some((first, next_month.pred_opt()?))
}

/// Every day of the month containing `date`, ascending.
pub fn month_days(date: NaiveDate) -> Option<Vec<NaiveDate>> {
    let (first, last) = month_bounds(date)?;
    Some(first.iter_days().take_while(|day| *day <= last).collect())
}

/// Number of days in a month, or `None` for an invalid year/month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let date = NaiveDate::from_ymd_opt(year, month, 1)?;
    month_bounds(date).map(|(_, last)| last.day())
}

/// English weekday name, e.g. `Monday`.
pub fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
