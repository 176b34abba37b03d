//! Serializable bar-chart specification.
//!
//! The explorer stops at a chart spec; whatever widget hosts the page
//! consumes this JSON shape and draws the bars.

use dpe_data::annual::AnnualSeries;
use dpe_data::duration::Duration;
use dpe_data::metric::Metric;
use serde::Serialize;

/// Two bar series keyed by year, plus title and axis labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<BarSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSeries {
    pub name: String,
    pub x: Vec<i32>,
    pub y: Vec<f64>,
}

/// Build the comparison chart for one selection. Annual values arrive
/// already rounded for display.
pub fn bar_chart(
    community: &str,
    duration: Duration,
    metric: Metric,
    grid_annual: &AnnualSeries,
    station_annual: &AnnualSeries,
) -> BarChartSpec {
    BarChartSpec {
        title: format!(
            "ERA-Interim / ACIS {} Precip Total: {} - Annual {}",
            duration.label(),
            community,
            metric.title()
        ),
        x_label: "time".to_string(),
        y_label: "mm".to_string(),
        series: vec![
            bar_series("wrf", grid_annual),
            bar_series("acis", station_annual),
        ],
    }
}

fn bar_series(name: &str, annual: &AnnualSeries) -> BarSeries {
    BarSeries {
        name: name.to_string(),
        x: annual.years(),
        y: annual.points().iter().map(|&(_, value)| value).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::bar_chart;
    use dpe_data::annual::AnnualSeries;
    use dpe_data::duration::Duration;
    use dpe_data::metric::Metric;

    #[test]
    fn test_bar_chart_spec() {
        let grid = AnnualSeries::from_points(vec![(1979, 10.5), (1980, 12.0)]);
        let station = AnnualSeries::from_points(vec![(1979, 9.5)]);
        let chart = bar_chart("Fairbanks", Duration::Hr24, Metric::Max, &grid, &station);
        assert_eq!(
            chart.title,
            "ERA-Interim / ACIS 24-hr Precip Total: Fairbanks - Annual Max"
        );
        assert_eq!(chart.y_label, "mm");
        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[0].name, "wrf");
        assert_eq!(chart.series[0].x, vec![1979, 1980]);
        assert_eq!(chart.series[0].y, vec![10.5, 12.0]);
        assert_eq!(chart.series[1].name, "acis");
    }

    #[test]
    fn test_chart_serializes() {
        let grid = AnnualSeries::from_points(vec![(1979, 1.0)]);
        let station = AnnualSeries::from_points(vec![(1979, 2.0)]);
        let chart = bar_chart("Nome", Duration::Min60, Metric::Mean, &grid, &station);
        let json = serde_json::to_string(&chart).unwrap();
        assert!(json.contains("60-min"));
        assert!(json.contains("\"acis\""));
    }
}
