//! Configuration options for attendance normalization.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How the hour digits of a formatted time are rendered.
///
/// The `AM`/`PM` suffix is decided by the same rule in both styles: hours
/// before noon are `AM`, noon and later are `PM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClockStyle {
    /// 24-hour digits, e.g. `17:30 PM`.
    #[default]
    TwentyFourHour,
    /// 12-hour digits, e.g. `05:30 PM`.
    TwelveHour,
}

impl ClockStyle {
    /// `chrono` format string for the digits part of a formatted time.
    pub fn digits_format(self) -> &'static str {
        match self {
            ClockStyle::TwentyFourHour => "%H:%M",
            ClockStyle::TwelveHour => "%I:%M",
        }
    }
}

impl fmt::Display for ClockStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockStyle::TwentyFourHour => f.write_str("24h"),
            ClockStyle::TwelveHour => f.write_str("12h"),
        }
    }
}

/// Options controlling attendance normalization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NormalizeOptions {
    /// Rendering of check-in and check-out times.
    pub clock: ClockStyle,

    /// Allow raw cell values in log output.
    ///
    /// Attendance records are personal data, so values are redacted unless
    /// this is set.
    pub log_data: bool,
}

impl NormalizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clock(mut self, clock: ClockStyle) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_log_data(mut self, enable: bool) -> Self {
        self.log_data = enable;
        self
    }
}
