use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use attendance_model::SheetOutcome;

use crate::types::{RunResult, SheetInspection};

pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sheet"),
        header_cell("Status"),
        header_cell("Month"),
        header_cell("Rows"),
        header_cell("Recorded"),
        header_cell("Rejected"),
        header_cell("Duplicates"),
        header_cell("Reason"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for index in 3..=6 {
        align_column(&mut table, index, CellAlignment::Right);
    }

    let mut total_rows = 0usize;
    let mut total_recorded = 0usize;
    for outcome in &result.report.outcomes {
        match outcome {
            SheetOutcome::Normalized(sheet) => {
                total_rows += sheet.row_count();
                total_recorded += sheet.recorded_days;
                table.add_row(vec![
                    Cell::new(&sheet.name).add_attribute(Attribute::Bold),
                    Cell::new("OK").fg(Color::Green).add_attribute(Attribute::Bold),
                    Cell::new(sheet.month_label()),
                    Cell::new(sheet.row_count()),
                    Cell::new(sheet.recorded_days),
                    count_cell(sheet.rejected_dates, Color::Yellow),
                    count_cell(sheet.duplicate_dates, Color::Yellow),
                    dim_cell("-"),
                ]);
            }
            SheetOutcome::Skipped { name, reason } => {
                table.add_row(vec![
                    Cell::new(name).fg(Color::DarkGrey),
                    Cell::new("SKIPPED").fg(Color::Yellow),
                    dim_cell("-"),
                    dim_cell("-"),
                    dim_cell("-"),
                    dim_cell("-"),
                    dim_cell("-"),
                    Cell::new(reason.to_string()).fg(Color::Yellow),
                ]);
            }
        }
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!(
            "{}/{}",
            result.report.normalized_count(),
            result.report.outcomes.len()
        ))
        .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
        Cell::new(total_recorded).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    println!("{table}");
}

pub fn print_inspection(sheets: &[SheetInspection]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sheet"),
        header_cell("Columns"),
        header_cell("Rows"),
        header_cell("Month"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for sheet in sheets {
        let status = match &sheet.reason {
            Some(reason) => Cell::new(format!("skip: {reason}")).fg(Color::Yellow),
            None => Cell::new("ready").fg(Color::Green),
        };
        table.add_row(vec![
            Cell::new(&sheet.name).add_attribute(Attribute::Bold),
            Cell::new(sheet.columns),
            Cell::new(sheet.rows),
            match &sheet.month {
                Some(month) => Cell::new(month),
                None => dim_cell("-"),
            },
            status,
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}
