//! Workbook processing pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Validate**: Check the input path names an `.xlsx` file
//! 2. **Ingest**: Read every sheet into a raw frame
//! 3. **Normalize**: Rebuild each sheet as a full calendar month
//! 4. **Output**: Write the normalized sheets to a new workbook
//!
//! Each stage takes the output of the previous stage and returns typed results.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use attendance_ingest::{IngestOptions, load_workbook_with_options};
use attendance_model::{NormalizeOptions, NormalizeReport, RawWorkbook};
use attendance_output::{SaveSummary, save_workbook};
use attendance_transform::normalize_workbook;

// ============================================================================
// Stage 1: Validate
// ============================================================================

/// Reject paths that are not `.xlsx` workbooks.
///
/// The extension check is case-insensitive.
pub fn validate_input(path: &Path) -> Result<()> {
    let is_xlsx = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xlsx"));
    if !is_xlsx {
        bail!(
            "please provide a valid Excel (.xlsx) file: {}",
            path.display()
        );
    }
    Ok(())
}

// ============================================================================
// Stage 2: Ingest
// ============================================================================

/// Read every sheet of the workbook at `path`.
pub fn ingest(path: &Path, options: &IngestOptions) -> Result<RawWorkbook> {
    let span = info_span!("ingest", path = %path.display());
    let _guard = span.enter();
    let start = Instant::now();
    let workbook = load_workbook_with_options(path, options)
        .with_context(|| format!("read workbook {}", path.display()))?;
    info!(
        sheets = workbook.len(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(workbook)
}

// ============================================================================
// Stage 3: Normalize
// ============================================================================

/// Normalize every sheet, failing when none survives.
pub fn normalize(workbook: &RawWorkbook, options: &NormalizeOptions) -> Result<NormalizeReport> {
    let span = info_span!("normalize", clock = %options.clock);
    let _guard = span.enter();
    let report = normalize_workbook(workbook, options)?;
    Ok(report)
}

// ============================================================================
// Stage 4: Output
// ============================================================================

/// Write the normalized sheets of `report` to `path`.
pub fn output(path: &Path, report: &NormalizeReport) -> Result<SaveSummary> {
    let span = info_span!("output", path = %path.display());
    let _guard = span.enter();
    let summary =
        save_workbook(path, report).with_context(|| format!("write {}", path.display()))?;
    Ok(summary)
}
