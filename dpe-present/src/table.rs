//! The transposed data table: one row per source, one column per year.

use dpe_data::annual::AnnualSeries;
use serde::Serialize;
use std::collections::BTreeSet;

/// A pivoted table ready for rendering. The first column is the source
/// name; the remaining columns are years, cells formatted to one decimal
/// place, blank where a source has no value for that year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataTable {
    /// Plain-text rendering, one tab-separated line per row.
    pub fn to_text(&self) -> String {
        let mut lines = vec![self.columns.join("\t")];
        for row in &self.rows {
            lines.push(row.join("\t"));
        }
        lines.join("\n")
    }
}

/// Pivot the two annual series into the year-columns table.
pub fn year_table(grid_annual: &AnnualSeries, station_annual: &AnnualSeries) -> DataTable {
    let years: BTreeSet<i32> = grid_annual
        .years()
        .into_iter()
        .chain(station_annual.years())
        .collect();

    let mut columns = vec![String::new()];
    columns.extend(years.iter().map(|year| year.to_string()));

    let rows = vec![
        source_row("wrf", grid_annual, &years),
        source_row("acis", station_annual, &years),
    ];
    DataTable { columns, rows }
}

fn source_row(name: &str, annual: &AnnualSeries, years: &BTreeSet<i32>) -> Vec<String> {
    let mut row = vec![name.to_string()];
    for &year in years {
        row.push(
            annual
                .value_for(year)
                .map(|value| format!("{:.1}", value))
                .unwrap_or_default(),
        );
    }
    row
}
