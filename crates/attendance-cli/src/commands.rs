use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span};

use attendance_cli::pipeline::{ingest, normalize, output, validate_input};
use attendance_ingest::IngestOptions;
use attendance_model::{NormalizeOptions, SheetOutcome};
use attendance_output::default_output_path;
use attendance_transform::normalize_sheet;

use crate::cli::{InspectArgs, NormalizeArgs};
use crate::types::{RunResult, SheetInspection};

pub fn run_normalize(args: &NormalizeArgs, log_data: bool) -> Result<RunResult> {
    let run_span = info_span!("normalize_run", input = %args.input.display());
    let _run_guard = run_span.enter();
    let start = Instant::now();

    validate_input(&args.input)?;
    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));

    let ingest_options = IngestOptions {
        metadata_rows: args.metadata_rows,
    };
    let workbook = ingest(&args.input, &ingest_options)?;

    let options = NormalizeOptions::new()
        .with_clock(args.clock.into())
        .with_log_data(log_data);
    let report = normalize(&workbook, &options)?;

    let written = if args.dry_run {
        info!(path = %output_path.display(), "dry run, output not written");
        None
    } else {
        let summary = output(&output_path, &report)?;
        Some(summary.path)
    };

    info!(
        normalized = report.normalized_count(),
        skipped = report.skipped_count(),
        duration_ms = start.elapsed().as_millis(),
        "run complete"
    );
    let has_errors = args.strict && report.has_skips();
    Ok(RunResult {
        input: args.input.clone(),
        output: written,
        report,
        has_errors,
    })
}

pub fn run_inspect(args: &InspectArgs) -> Result<Vec<SheetInspection>> {
    validate_input(&args.input)?;
    let ingest_options = IngestOptions {
        metadata_rows: args.metadata_rows,
    };
    let workbook = ingest(&args.input, &ingest_options)?;
    let options = NormalizeOptions::default();
    let inspections = workbook
        .sheets
        .iter()
        .map(|sheet| {
            let (month, reason) = match normalize_sheet(sheet, &options) {
                SheetOutcome::Normalized(normalized) => (Some(normalized.month_label()), None),
                SheetOutcome::Skipped { reason, .. } => (None, Some(reason.to_string())),
            };
            SheetInspection {
                name: sheet.name.clone(),
                columns: sheet.width(),
                rows: sheet.height(),
                month,
                reason,
            }
        })
        .collect();
    Ok(inspections)
}
