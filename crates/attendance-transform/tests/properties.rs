//! Property tests for calendar reconstruction and time formatting.

use chrono::{Datelike, NaiveDate, NaiveTime};
use proptest::prelude::*;

use attendance_model::{ClockStyle, NormalizeOptions, RawAttendanceRow, SheetOutcome};
use attendance_transform::{days_in_month, format_time, format_time_with_period, normalize_rows};

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1950i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

proptest! {
    #[test]
    fn month_is_complete_and_contiguous(
        anchor in date_strategy(),
        offsets in proptest::collection::vec(0u32..28, 1..10),
    ) {
        let rows: Vec<RawAttendanceRow> = offsets
            .iter()
            .map(|offset| {
                let date = anchor.with_day(1 + offset).unwrap();
                RawAttendanceRow::new(date.format("%Y-%m-%d").to_string(), Some("08:00"), None)
            })
            .collect();
        let SheetOutcome::Normalized(sheet) =
            normalize_rows("Prop", &rows, &NormalizeOptions::default())
        else {
            panic!("sheet should normalize");
        };

        let expected = days_in_month(anchor.year(), anchor.month()).unwrap() as usize;
        prop_assert_eq!(sheet.row_count(), expected);
        prop_assert_eq!(sheet.rows[0].date.day(), 1);
        for pair in sheet.rows.windows(2) {
            prop_assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
        }
        for row in &sheet.rows {
            let recorded = offsets.iter().any(|offset| row.date.day() == 1 + offset);
            prop_assert_eq!(row.is_blank(), !recorded);
        }
    }

    #[test]
    fn period_suffix_follows_hour(hour in 0u32..24, minute in 0u32..60) {
        let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap();
        for clock in [ClockStyle::TwentyFourHour, ClockStyle::TwelveHour] {
            let formatted = format_time(time, clock);
            prop_assert_eq!(formatted.len(), 8);
            prop_assert_eq!(&formatted[2..3], ":");
            let suffix = if hour < 12 { " AM" } else { " PM" };
            prop_assert!(formatted.ends_with(suffix));
        }
        let raw = format!("{hour:02}:{minute:02}:00");
        let formatted = format_time_with_period(Some(&raw), ClockStyle::TwentyFourHour);
        prop_assert_eq!(&formatted[..5], &raw[..5]);
    }
}
