use std::path::PathBuf;

use attendance_model::NormalizeReport;

#[derive(Debug)]
pub struct RunResult {
    pub input: PathBuf,
    /// Written workbook; `None` on a dry run.
    pub output: Option<PathBuf>,
    pub report: NormalizeReport,
    pub has_errors: bool,
}

#[derive(Debug)]
pub struct SheetInspection {
    pub name: String,
    pub columns: usize,
    pub rows: usize,
    /// Month label when the sheet would normalize.
    pub month: Option<String>,
    /// Skip reason when it would not.
    pub reason: Option<String>,
}
