use serde::{Deserialize, Serialize};

/// Inches represented by the ACIS trace sentinel "T".
pub const TRACE_INCHES: f32 = 0.001;

/// Millimeters per inch; station values are converted before aggregation.
pub const INCHES_TO_MM: f32 = 25.4;

/// Represents a raw precipitation value from the ACIS StnData feed.
/// - `Missing`: "M", no measurement (propagated as absent, never zero)
/// - `Trace`: "T", too small to measure, stands in for 0.001 inch
/// - `Inches(f32)`: a measured value in inches
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum StationRecording {
    Missing,
    Trace,
    Inches(f32),
}

impl StationRecording {
    /// Parse a raw StnData value string. Returns None for anything that is
    /// neither a sentinel nor a number; callers treat that as a fatal
    /// parse error, matching the no-partial-data load policy.
    pub fn parse(raw: &str) -> Option<StationRecording> {
        match raw.trim() {
            "M" => Some(StationRecording::Missing),
            "T" => Some(StationRecording::Trace),
            s => s.parse::<f32>().ok().map(StationRecording::Inches),
        }
    }

    /// The value in inches, or None when missing.
    pub fn as_inches(self) -> Option<f32> {
        match self {
            StationRecording::Missing => None,
            StationRecording::Trace => Some(TRACE_INCHES),
            StationRecording::Inches(v) => Some(v),
        }
    }

    /// The value in millimeters, or None when missing.
    pub fn as_millimeters(self) -> Option<f32> {
        self.as_inches().map(|v| v * INCHES_TO_MM)
    }
}
