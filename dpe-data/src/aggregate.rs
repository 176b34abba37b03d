//! The aggregation engine: duration resample, then annual metric reduce.

use crate::annual::AnnualSeries;
use crate::duration::Duration;
use crate::metric::Metric;
use crate::resample;
use chrono::{Datelike, NaiveDateTime};
use dpe_sources::dataset::PrecipDataset;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AggregateError {
    /// The selectors only offer known communities, so this is reachable
    /// only through direct library use.
    #[error("unknown community: {0}")]
    UnknownCommunity(String),
}

/// Aggregate both sources for one selection.
///
/// Step 1 sums raw values into duration buckets; step 2 groups bucket
/// totals by calendar year and reduces each year with the metric (mean or
/// max, never sum). Returns (grid_annual, station_annual) at full
/// precision, aligned by whatever years each series itself covers.
pub fn aggregate(
    dataset: &PrecipDataset,
    community: &str,
    duration: Duration,
    metric: Metric,
) -> Result<(AnnualSeries, AnnualSeries), AggregateError> {
    let grid = dataset
        .grid_series(community)
        .ok_or_else(|| AggregateError::UnknownCommunity(community.to_string()))?;
    let station = dataset
        .station_series(community)
        .ok_or_else(|| AggregateError::UnknownCommunity(community.to_string()))?;

    let grid_annual = annual_reduce(&resample::duration_totals(grid, duration), metric);
    let station_annual = annual_reduce(&resample::duration_totals(station, duration), metric);
    Ok((grid_annual, station_annual))
}

/// Group duration-bucket totals by calendar year and reduce each year's
/// totals with the metric. Years with no buckets are omitted.
pub fn annual_reduce(totals: &[(NaiveDateTime, f64)], metric: Metric) -> AnnualSeries {
    let mut points = Vec::new();
    let mut idx = 0;
    while idx < totals.len() {
        let year = totals[idx].0.year();
        let mut year_totals = Vec::new();
        while idx < totals.len() && totals[idx].0.year() == year {
            year_totals.push(totals[idx].1);
            idx += 1;
        }
        if let Some(value) = metric.reduce(&year_totals) {
            points.push((year, value));
        }
    }
    AnnualSeries::from_points(points)
}
