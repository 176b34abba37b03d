use chrono::NaiveDateTime;

/// Timestamp format used by the WRF grid CSV index column.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Date format used by ACIS daily rows and API query parameters.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A time-indexed precipitation series in millimeters.
///
/// Points are kept sorted by timestamp. A missing observation is simply
/// absent from the series; there is no NaN or zero sentinel inside it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrecipSeries {
    points: Vec<(NaiveDateTime, f32)>,
}

impl PrecipSeries {
    /// Build a series from unordered points, sorting by timestamp.
    pub fn from_points(mut points: Vec<(NaiveDateTime, f32)>) -> PrecipSeries {
        points.sort_by_key(|&(stamp, _)| stamp);
        PrecipSeries { points }
    }

    /// The sorted (timestamp, millimeters) points.
    pub fn points(&self) -> &[(NaiveDateTime, f32)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
