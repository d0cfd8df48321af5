//! Integration tests for the pipeline stages.

use std::path::{Path, PathBuf};

use attendance_cli::pipeline::{ingest, normalize, output, validate_input};
use attendance_ingest::IngestOptions;
use attendance_model::{ClockStyle, NormalizeOptions, SkipReason};
use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

const HEADER: [&str; 4] = ["Date", "Day", "First Check In", "Last Check Out"];

fn write_sheet(workbook: &mut Workbook, name: &str, rows: &[[&str; 4]]) {
    let sheet = workbook.add_worksheet();
    sheet.set_name(name).unwrap();
    sheet.write_string(0, 0, format!("Exported attendance for {name}")).unwrap();
    for (col, label) in HEADER.iter().enumerate() {
        sheet.write_string(1, col as u16, *label).unwrap();
    }
    for (idx, row) in rows.iter().enumerate() {
        for (col, value) in row.iter().enumerate() {
            if !value.is_empty() {
                sheet
                    .write_string((idx + 2) as u32, col as u16, *value)
                    .unwrap();
            }
        }
    }
}

fn fixture(dir: &Path) -> PathBuf {
    let path = dir.join("attendance.xlsx");
    let mut workbook = Workbook::new();
    write_sheet(
        &mut workbook,
        "Alice",
        &[
            ["2024-01-05", "Friday", "09:15:00", ""],
            ["2024-01-20", "", "08:00", "17:30"],
        ],
    );
    write_sheet(&mut workbook, "Broken", &[["not a date", "", "09:00", ""]]);
    workbook.save(&path).unwrap();
    path
}

#[test]
fn runs_every_stage_and_skips_bad_sheets() {
    let dir = TempDir::new().unwrap();
    let input = fixture(dir.path());
    validate_input(&input).unwrap();

    let workbook = ingest(&input, &IngestOptions::default()).unwrap();
    assert_eq!(workbook.sheet_names(), vec!["Alice", "Broken"]);

    let options = NormalizeOptions::new().with_clock(ClockStyle::TwelveHour);
    let report = normalize(&workbook, &options).unwrap();
    assert_eq!(report.normalized_count(), 1);
    let skipped: Vec<_> = report.skipped().collect();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].0, "Broken");
    assert!(matches!(skipped[0].1, SkipReason::NoValidDates { rejected: 1 }));

    let alice = report.normalized().next().unwrap();
    assert_eq!(alice.row_count(), 31);
    let jan_20 = &alice.rows[19];
    assert_eq!(jan_20.day, "Saturday");
    assert_eq!(jan_20.first_check_in, "08:00 AM");
    assert_eq!(jan_20.last_check_out, "05:30 PM");

    let target = dir.path().join("updated_attendance.xlsx");
    let summary = output(&target, &report).unwrap();
    assert_eq!(summary.sheets, 1);
    assert_eq!(summary.rows, 31);
    assert!(target.is_file());
}

#[test]
fn normalized_output_can_be_normalized_again() {
    let dir = TempDir::new().unwrap();
    let input = fixture(dir.path());
    let options = NormalizeOptions::default();
    let first = normalize(&ingest(&input, &IngestOptions::default()).unwrap(), &options).unwrap();

    let target = dir.path().join("updated_attendance.xlsx");
    output(&target, &first).unwrap();

    let reread = ingest(&target, &IngestOptions { metadata_rows: 0 }).unwrap();
    let second = normalize(&reread, &options).unwrap();
    let before = first.normalized().next().unwrap();
    let after = second.normalized().next().unwrap();
    assert_eq!(before.rows, after.rows);
}

#[test]
fn workbook_without_valid_sheets_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.xlsx");
    let mut workbook = Workbook::new();
    write_sheet(&mut workbook, "Only", &[["garbage", "", "", ""]]);
    workbook.save(&path).unwrap();

    let raw = ingest(&path, &IngestOptions::default()).unwrap();
    let error = normalize(&raw, &NormalizeOptions::default()).unwrap_err();
    assert!(format!("{error:#}").contains("no valid sheets"));
}

#[test]
fn missing_input_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.xlsx");
    let error = ingest(&path, &IngestOptions::default()).unwrap_err();
    assert!(format!("{error:#}").contains("missing.xlsx"));
}
