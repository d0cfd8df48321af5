//! Tests for attendance-model types.

use attendance_model::{
    CanonicalMonthRow, ClockStyle, NormalizeError, NormalizeOptions, NormalizeReport,
    NormalizedSheet, SheetOutcome, SkipReason,
};
use chrono::NaiveDate;

fn sheet(name: &str) -> NormalizedSheet {
    let month_start = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
    NormalizedSheet {
        name: name.to_string(),
        month_start,
        rows: vec![
            CanonicalMonthRow {
                date: month_start,
                day: "Thursday".to_string(),
                first_check_in: "09:00 AM".to_string(),
                last_check_out: String::new(),
            },
            CanonicalMonthRow {
                date: NaiveDate::from_ymd_opt(2024, 2, 2).unwrap(),
                day: "Friday".to_string(),
                first_check_in: String::new(),
                last_check_out: String::new(),
            },
        ],
        recorded_days: 1,
        rejected_dates: 0,
        duplicate_dates: 0,
    }
}

#[test]
fn report_counts() {
    let report = NormalizeReport {
        outcomes: vec![
            SheetOutcome::Normalized(sheet("Alice")),
            SheetOutcome::Skipped {
                name: "Notes".to_string(),
                reason: SkipReason::TooFewColumns { found: 2 },
            },
            SheetOutcome::Normalized(sheet("Bob")),
        ],
    };
    assert_eq!(report.normalized_count(), 2);
    assert_eq!(report.skipped_count(), 1);
    assert!(report.has_skips());
    let names: Vec<&str> = report.normalized().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob"]);
    let skipped: Vec<&str> = report.skipped().map(|(name, _)| name).collect();
    assert_eq!(skipped, vec!["Notes"]);
}

#[test]
fn skip_reasons_render() {
    assert_eq!(SkipReason::Empty.to_string(), "sheet has no data rows");
    assert_eq!(
        SkipReason::TooFewColumns { found: 3 }.to_string(),
        "sheet has 3 columns, expected at least 4"
    );
    assert_eq!(
        SkipReason::NoValidDates { rejected: 5 }.to_string(),
        "no valid dates (5 rejected)"
    );
}

#[test]
fn no_valid_sheets_message() {
    let err = NormalizeError::NoValidSheets { skipped: 2 };
    assert_eq!(err.to_string(), "no valid sheets found to update (2 skipped)");
}

#[test]
fn canonical_row_cells_follow_column_order() {
    let normalized = sheet("Alice");
    assert_eq!(
        normalized.rows[0].cells(),
        [
            "2024-02-01".to_string(),
            "Thursday".to_string(),
            "09:00 AM".to_string(),
            String::new()
        ]
    );
    assert!(!normalized.rows[0].is_blank());
    assert!(normalized.rows[1].is_blank());
    assert_eq!(normalized.month_label(), "2024-02");
}

#[test]
fn normalized_sheet_to_frame() {
    let frame = sheet("Alice").to_frame().unwrap();
    assert_eq!(frame.height(), 2);
    let names: Vec<String> = frame
        .get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect();
    assert_eq!(names, vec!["Date", "Day", "First Check In", "Last Check Out"]);
    let dates = frame.column("Date").unwrap().str().unwrap();
    assert_eq!(dates.get(1), Some("2024-02-02"));
}

#[test]
fn options_serialize() {
    let options = NormalizeOptions::new().with_clock(ClockStyle::TwelveHour);
    let json = serde_json::to_string(&options).expect("serialize options");
    let round: NormalizeOptions = serde_json::from_str(&json).expect("deserialize options");
    assert_eq!(round.clock, ClockStyle::TwelveHour);
    assert!(!round.log_data);
}
