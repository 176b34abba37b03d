//! Duration bucketing of raw series.

use crate::duration::Duration;
use chrono::{NaiveDateTime, TimeDelta};
use dpe_sources::series::PrecipSeries;

/// Sum raw values into duration-sized buckets.
///
/// Buckets are anchored at midnight of the first observation's day and
/// labeled by their start timestamp. A bucket containing no observations
/// is omitted entirely, never emitted as a zero total.
pub fn duration_totals(series: &PrecipSeries, duration: Duration) -> Vec<(NaiveDateTime, f64)> {
    let points = series.points();
    let Some(&(first, _)) = points.first() else {
        return Vec::new();
    };
    let origin = first.date().and_hms_opt(0, 0, 0).unwrap();
    let span = duration.span_seconds();

    let mut totals: Vec<(NaiveDateTime, f64)> = Vec::new();
    for &(stamp, value) in points {
        let bucket = (stamp - origin).num_seconds().div_euclid(span);
        let start = origin + TimeDelta::seconds(bucket * span);
        match totals.last_mut() {
            Some((last_start, total)) if *last_start == start => *total += f64::from(value),
            _ => totals.push((start, f64::from(value))),
        }
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::duration_totals;
    use crate::duration::Duration;
    use chrono::{NaiveDate, NaiveDateTime};
    use dpe_sources::series::PrecipSeries;

    fn stamp(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(1979, 1, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_daily_sums_from_hourly_points() {
        let series = PrecipSeries::from_points(vec![
            (stamp(2, 0), 0.5),
            (stamp(2, 6), 1.0),
            (stamp(2, 23), 0.25),
            (stamp(3, 1), 2.0),
        ]);
        let totals = duration_totals(&series, Duration::Hr24);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0], (stamp(2, 0), 1.75));
        assert_eq!(totals[1], (stamp(3, 0), 2.0));
    }

    #[test]
    fn test_two_day_buckets_anchor_at_first_day() {
        let series = PrecipSeries::from_points(vec![
            (stamp(2, 0), 1.0),
            (stamp(3, 12), 2.0),
            (stamp(4, 0), 4.0),
        ]);
        let totals = duration_totals(&series, Duration::Day2);
        // Jan 2-3 form one bucket, Jan 4 starts the next
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0], (stamp(2, 0), 3.0));
        assert_eq!(totals[1], (stamp(4, 0), 4.0));
    }

    #[test]
    fn test_hourly_buckets_align_to_midnight() {
        let series = PrecipSeries::from_points(vec![
            (stamp(2, 5), 1.0),
            (stamp(2, 6), 2.0),
            (stamp(2, 11), 4.0),
        ]);
        let totals = duration_totals(&series, Duration::Hr6);
        assert_eq!(totals.len(), 2);
        // 00-06 and 06-12 windows, counted from midnight not from 05:00
        assert_eq!(totals[0], (stamp(2, 0), 1.0));
        assert_eq!(totals[1], (stamp(2, 6), 6.0));
    }

    #[test]
    fn test_gap_buckets_are_omitted() {
        let series = PrecipSeries::from_points(vec![(stamp(2, 0), 1.0), (stamp(9, 0), 2.0)]);
        let totals = duration_totals(&series, Duration::Hr24);
        // five interior days have no observations and produce no buckets
        assert_eq!(totals.len(), 2);
    }

    #[test]
    fn test_empty_series() {
        let series = PrecipSeries::default();
        assert!(duration_totals(&series, Duration::Min60).is_empty());
    }
}
