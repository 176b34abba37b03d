use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fifteen resampling windows offered by the explorer, 60 minutes
/// through 60 days. Each maps a dropdown label ("24-hr") to a standard
/// calendar-offset code ("1D").
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Duration {
    Min60,
    Hr2,
    Hr3,
    Hr6,
    Hr12,
    Hr24,
    Day2,
    Day3,
    Day4,
    Day7,
    Day10,
    Day20,
    Day30,
    Day45,
    Day60,
}

/// All windows, in dropdown order.
pub const ALL_DURATIONS: [Duration; 15] = [
    Duration::Min60,
    Duration::Hr2,
    Duration::Hr3,
    Duration::Hr6,
    Duration::Hr12,
    Duration::Hr24,
    Duration::Day2,
    Duration::Day3,
    Duration::Day4,
    Duration::Day7,
    Duration::Day10,
    Duration::Day20,
    Duration::Day30,
    Duration::Day45,
    Duration::Day60,
];

impl Duration {
    /// The calendar-offset code, e.g. "1D" for the 24-hr window.
    pub fn code(self) -> &'static str {
        match self {
            Duration::Min60 => "1H",
            Duration::Hr2 => "2H",
            Duration::Hr3 => "3H",
            Duration::Hr6 => "6H",
            Duration::Hr12 => "12H",
            Duration::Hr24 => "1D",
            Duration::Day2 => "2D",
            Duration::Day3 => "3D",
            Duration::Day4 => "4D",
            Duration::Day7 => "7D",
            Duration::Day10 => "10D",
            Duration::Day20 => "20D",
            Duration::Day30 => "30D",
            Duration::Day45 => "45D",
            Duration::Day60 => "60D",
        }
    }

    /// The dropdown label, e.g. "24-hr".
    pub fn label(self) -> &'static str {
        match self {
            Duration::Min60 => "60-min",
            Duration::Hr2 => "2-hr",
            Duration::Hr3 => "3-hr",
            Duration::Hr6 => "6-hr",
            Duration::Hr12 => "12-hr",
            Duration::Hr24 => "24-hr",
            Duration::Day2 => "2-day",
            Duration::Day3 => "3-day",
            Duration::Day4 => "4-day",
            Duration::Day7 => "7-day",
            Duration::Day10 => "10-day",
            Duration::Day20 => "20-day",
            Duration::Day30 => "30-day",
            Duration::Day45 => "45-day",
            Duration::Day60 => "60-day",
        }
    }

    /// Width of one resampling bucket in seconds.
    pub fn span_seconds(self) -> i64 {
        const HOUR: i64 = 3600;
        const DAY: i64 = 86_400;
        match self {
            Duration::Min60 => HOUR,
            Duration::Hr2 => 2 * HOUR,
            Duration::Hr3 => 3 * HOUR,
            Duration::Hr6 => 6 * HOUR,
            Duration::Hr12 => 12 * HOUR,
            Duration::Hr24 => DAY,
            Duration::Day2 => 2 * DAY,
            Duration::Day3 => 3 * DAY,
            Duration::Day4 => 4 * DAY,
            Duration::Day7 => 7 * DAY,
            Duration::Day10 => 10 * DAY,
            Duration::Day20 => 20 * DAY,
            Duration::Day30 => 30 * DAY,
            Duration::Day45 => 45 * DAY,
            Duration::Day60 => 60 * DAY,
        }
    }

    /// Look up a window by its offset code.
    pub fn from_code(code: &str) -> Option<Duration> {
        ALL_DURATIONS.iter().copied().find(|d| d.code() == code)
    }

    /// Look up a window by its dropdown label.
    pub fn from_label(label: &str) -> Option<Duration> {
        ALL_DURATIONS.iter().copied().find(|d| d.label() == label)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Duration {
    type Err = String;

    /// Accepts either the offset code ("1D") or the label ("24-hr").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Duration::from_code(s)
            .or_else(|| Duration::from_label(s))
            .ok_or_else(|| format!("unknown duration: {}", s))
    }
}
