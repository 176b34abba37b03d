//! Presentation adapter for the precipitation explorer.
//!
//! A pure function from (selection, dataset) to the three outputs one
//! interaction produces: the bar chart spec, the correlation summary, and
//! the pivoted table. No UI framework, no network; whatever event or
//! request layer hosts the page calls [`render`] on every selector change.

pub mod chart;
pub mod table;

use dpe_data::aggregate::{aggregate, AggregateError};
use dpe_data::correlation::{correlate, Correlations};
use dpe_data::duration::Duration;
use dpe_data::metric::Metric;
use dpe_sources::dataset::PrecipDataset;
use serde::Serialize;

/// A selection from the three dashboard dropdowns.
#[derive(Debug, Clone)]
pub struct Selection {
    pub community: String,
    pub duration: Duration,
    pub metric: Metric,
}

/// Everything one interaction renders.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub chart: chart::BarChartSpec,
    pub summary: String,
    pub table: table::DataTable,
}

/// Run the full pipeline for one selection: aggregate both sources,
/// correlate at full precision, then round for display.
pub fn render(dataset: &PrecipDataset, selection: &Selection) -> Result<DashboardView, AggregateError> {
    let (grid_annual, station_annual) = aggregate(
        dataset,
        &selection.community,
        selection.duration,
        selection.metric,
    )?;
    let correlations = correlate(&grid_annual, &station_annual);

    let grid_display = grid_annual.rounded(2);
    let station_display = station_annual.rounded(2);
    Ok(DashboardView {
        chart: chart::bar_chart(
            &selection.community,
            selection.duration,
            selection.metric,
            &grid_display,
            &station_display,
        ),
        summary: correlation_summary(&correlations),
        table: table::year_table(&grid_display, &station_display),
    })
}

/// The multi-line correlation block shown beside the selectors. NaN
/// coefficients print as NaN; an empty selection never errors here.
pub fn correlation_summary(correlations: &Correlations) -> String {
    format!(
        "WRF/ACIS Series Correlation:\n  pearson : {}\n  spearman: {}\n  kendall : {}",
        correlations.pearson, correlations.spearman, correlations.kendall
    )
}

#[cfg(test)]
mod tests {
    use super::{correlation_summary, render, Selection};
    use dpe_data::correlation::Correlations;
    use dpe_data::duration::Duration;
    use dpe_data::metric::Metric;
    use dpe_sources::dataset::PrecipDataset;
    use dpe_sources::series::PrecipSeries;
    use chrono::NaiveDate;
    use std::collections::HashMap;

    fn hourly(points: &[(i32, u32, u32, u32, f32)]) -> PrecipSeries {
        PrecipSeries::from_points(
            points
                .iter()
                .map(|&(year, month, day, hour, value)| {
                    (
                        NaiveDate::from_ymd_opt(year, month, day)
                            .unwrap()
                            .and_hms_opt(hour, 0, 0)
                            .unwrap(),
                        value,
                    )
                })
                .collect(),
        )
    }

    fn fixture_dataset() -> PrecipDataset {
        let grid = hourly(&[
            (1979, 1, 2, 0, 1.0),
            (1979, 1, 2, 6, 2.0),
            (1980, 7, 1, 0, 4.0),
        ]);
        let station = hourly(&[(1979, 1, 2, 0, 2.5), (1980, 7, 1, 0, 3.5)]);
        PrecipDataset::new(
            HashMap::from([("Fairbanks".to_string(), grid)]),
            HashMap::from([("Fairbanks".to_string(), station)]),
        )
        .unwrap()
    }

    #[test]
    fn test_render_end_to_end() {
        let selection = Selection {
            community: "Fairbanks".to_string(),
            duration: Duration::Hr24,
            metric: Metric::Max,
        };
        let view = render(&fixture_dataset(), &selection).unwrap();
        assert_eq!(
            view.chart.title,
            "ERA-Interim / ACIS 24-hr Precip Total: Fairbanks - Annual Max"
        );
        assert_eq!(view.chart.series[0].x, vec![1979, 1980]);
        assert_eq!(view.chart.series[0].y, vec![3.0, 4.0]);
        assert_eq!(view.chart.series[1].y, vec![2.5, 3.5]);
        // two aligned years correlate perfectly
        assert!(view.summary.contains("pearson : 1"));
        assert_eq!(view.table.columns, vec!["", "1979", "1980"]);
        assert_eq!(view.table.rows[0], vec!["wrf", "3.0", "4.0"]);
    }

    #[test]
    fn test_render_unknown_community_errors() {
        let selection = Selection {
            community: "Homer".to_string(),
            duration: Duration::Hr24,
            metric: Metric::Mean,
        };
        assert!(render(&fixture_dataset(), &selection).is_err());
    }

    #[test]
    fn test_summary_renders_nan_gracefully() {
        let summary = correlation_summary(&Correlations {
            pearson: f64::NAN,
            spearman: f64::NAN,
            kendall: f64::NAN,
        });
        assert!(summary.starts_with("WRF/ACIS Series Correlation:"));
        assert!(summary.contains("pearson : NaN"));
    }
}
