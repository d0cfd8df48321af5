//! CLI argument definitions for the attendance normalizer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use attendance_model::ClockStyle;

#[derive(Parser)]
#[command(
    name = "attendance",
    version,
    about = "Attendance normalizer - rebuild full calendar months from attendance workbooks",
    long_about = "Rebuild every sheet of an attendance workbook as a full calendar month.\n\n\
                  Days without attendance are filled in, weekday names are recomputed\n\
                  and check-in/check-out times are formatted as HH:MM AM/PM."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow cell values (dates, times) to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize every sheet of a workbook and write the result.
    Normalize(NormalizeArgs),

    /// List the sheets of a workbook and whether they can be normalized.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Attendance workbook (.xlsx).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output workbook (default: updated_<INPUT> next to the input).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Hour digits of formatted times.
    #[arg(long = "clock", value_enum, default_value = "24h")]
    pub clock: ClockArg,

    /// Rows at the top of each sheet to skip before the header.
    #[arg(long = "metadata-rows", value_name = "N", default_value_t = 1)]
    pub metadata_rows: usize,

    /// Normalize and report without writing the output workbook.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Exit with an error status when any sheet is skipped.
    #[arg(long = "strict")]
    pub strict: bool,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Attendance workbook (.xlsx).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Rows at the top of each sheet to skip before the header.
    #[arg(long = "metadata-rows", value_name = "N", default_value_t = 1)]
    pub metadata_rows: usize,
}

/// CLI clock style choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ClockArg {
    /// 24-hour digits: 17:30 PM.
    #[value(name = "24h")]
    TwentyFourHour,
    /// 12-hour digits: 05:30 PM.
    #[value(name = "12h")]
    TwelveHour,
}

impl From<ClockArg> for ClockStyle {
    fn from(value: ClockArg) -> Self {
        match value {
            ClockArg::TwentyFourHour => ClockStyle::TwentyFourHour,
            ClockArg::TwelveHour => ClockStyle::TwelveHour,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
