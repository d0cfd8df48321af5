//! Positional extraction of attendance rows from raw sheet frames.

use polars::prelude::{Column, DataType, PolarsError, PolarsResult};

use attendance_model::{AttendanceColumn, REQUIRED_COLUMNS, RawAttendanceRow, RawSheet};

/// Read the first four columns of a sheet as raw attendance rows.
///
/// Columns are mapped by position; header names and any extra columns are
/// ignored. Non-string columns are cast to strings first.
pub fn extract_rows(sheet: &RawSheet) -> PolarsResult<Vec<RawAttendanceRow>> {
    let columns = sheet.data.get_columns();
    if columns.len() < REQUIRED_COLUMNS {
        return Err(PolarsError::ShapeMismatch(
            format!(
                "sheet '{}' has {} columns, expected at least {REQUIRED_COLUMNS}",
                sheet.name,
                columns.len()
            )
            .into(),
        ));
    }
    let dates = column_values(&columns[AttendanceColumn::Date.position()])?;
    let days = column_values(&columns[AttendanceColumn::Day.position()])?;
    let check_ins = column_values(&columns[AttendanceColumn::FirstCheckIn.position()])?;
    let check_outs = column_values(&columns[AttendanceColumn::LastCheckOut.position()])?;

    let rows = dates
        .into_iter()
        .zip(days)
        .zip(check_ins)
        .zip(check_outs)
        .map(|(((date, day), first_check_in), last_check_out)| RawAttendanceRow {
            date,
            day,
            first_check_in,
            last_check_out,
        })
        .collect();
    Ok(rows)
}

fn column_values(column: &Column) -> PolarsResult<Vec<Option<String>>> {
    let cast = column.cast(&DataType::String)?;
    let values = cast.str()?;
    Ok(values
        .into_iter()
        .map(|value| value.map(str::to_string))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};

    #[test]
    fn maps_columns_by_position() {
        let headers: Vec<String> = ["Tarih", "Gun", "Giris", "Cikis", "Not"]
            .iter()
            .map(|h| (*h).to_string())
            .collect();
        let rows = vec![vec![
            Some("2024-01-05".to_string()),
            Some("Friday".to_string()),
            Some("09:15:00".to_string()),
            None,
            Some("late".to_string()),
        ]];
        let sheet = RawSheet::from_rows("Alice", &headers, &rows).unwrap();
        let extracted = extract_rows(&sheet).unwrap();
        assert_eq!(extracted.len(), 1);
        assert_eq!(extracted[0].date.as_deref(), Some("2024-01-05"));
        assert_eq!(extracted[0].first_check_in.as_deref(), Some("09:15:00"));
        assert_eq!(extracted[0].last_check_out, None);
    }

    #[test]
    fn casts_non_string_columns() {
        let data = DataFrame::new(vec![
            Series::new("Date".into(), vec!["2024-01-05"]).into_column(),
            Series::new("Day".into(), vec![5i64]).into_column(),
            Series::new("In".into(), vec!["09:00"]).into_column(),
            Series::new("Out".into(), vec!["17:00"]).into_column(),
        ])
        .unwrap();
        let extracted = extract_rows(&RawSheet::new("Bob", data)).unwrap();
        assert_eq!(extracted[0].day.as_deref(), Some("5"));
    }

    #[test]
    fn narrow_sheet_is_an_error() {
        let data = DataFrame::new(vec![
            Series::new("Date".into(), vec!["2024-01-05"]).into_column(),
        ])
        .unwrap();
        assert!(extract_rows(&RawSheet::new("Carol", data)).is_err());
    }
}
