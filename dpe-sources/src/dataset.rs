//! The immutable two-source dataset.
//!
//! Both sources are loaded once at startup and held for the process
//! lifetime; nothing mutates them afterwards. Aggregation takes the
//! dataset by reference, so tests can inject fixtures with no network.

use crate::error::{Result, SourceError};
use crate::series::{PrecipSeries, TIMESTAMP_FORMAT};
use crate::wrf;
use chrono::NaiveDateTime;
use std::collections::{BTreeMap, HashMap};

/// The grid (WRF hourly) and station (ACIS daily) series, keyed by
/// community name, both in millimeters.
#[derive(Debug, Clone, PartialEq)]
pub struct PrecipDataset {
    grid: HashMap<String, PrecipSeries>,
    station: HashMap<String, PrecipSeries>,
}

impl PrecipDataset {
    /// Bundle the two source maps, verifying they cover the same communities.
    pub fn new(
        grid: HashMap<String, PrecipSeries>,
        station: HashMap<String, PrecipSeries>,
    ) -> Result<PrecipDataset> {
        let grid_names = sorted_keys(&grid);
        let station_names = sorted_keys(&station);
        if grid_names != station_names {
            return Err(SourceError::CommunityMismatch(format!(
                "grid [{}] vs station [{}]",
                grid_names.join(", "),
                station_names.join(", ")
            )));
        }
        Ok(PrecipDataset { grid, station })
    }

    /// Rebuild a dataset from two locally cached wide CSVs, as written by
    /// `grid_to_csv` / `station_to_csv`.
    pub fn from_csv(grid_body: &str, station_body: &str) -> Result<PrecipDataset> {
        PrecipDataset::new(
            wrf::parse_grid_csv(grid_body)?,
            wrf::parse_grid_csv(station_body)?,
        )
    }

    /// The community names covered by both sources, sorted.
    pub fn communities(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.grid.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn grid_series(&self, community: &str) -> Option<&PrecipSeries> {
        self.grid.get(community)
    }

    pub fn station_series(&self, community: &str) -> Option<&PrecipSeries> {
        self.station.get(community)
    }

    /// Serialize the grid source as a wide CSV (timestamp index column plus
    /// one column per community).
    pub fn grid_to_csv(&self) -> String {
        to_wide_csv(&self.grid)
    }

    /// Serialize the station source as a wide CSV.
    pub fn station_to_csv(&self) -> String {
        to_wide_csv(&self.station)
    }
}

fn sorted_keys(map: &HashMap<String, PrecipSeries>) -> Vec<String> {
    let mut names: Vec<String> = map.keys().cloned().collect();
    names.sort_unstable();
    names
}

/// Write a keyed series map as a wide CSV. Absent observations become
/// empty cells so they survive a round trip as absent, not zero.
fn to_wide_csv(map: &HashMap<String, PrecipSeries>) -> String {
    let names = sorted_keys(map);
    let mut rows: BTreeMap<NaiveDateTime, Vec<Option<f32>>> = BTreeMap::new();
    for (idx, name) in names.iter().enumerate() {
        for &(stamp, value) in map[name].points() {
            rows.entry(stamp)
                .or_insert_with(|| vec![None; names.len()])[idx] = Some(value);
        }
    }

    let mut out = String::new();
    out.push_str("time");
    for name in &names {
        out.push(',');
        out.push_str(name);
    }
    out.push('\n');
    for (stamp, cells) in rows {
        out.push_str(&stamp.format(TIMESTAMP_FORMAT).to_string());
        for cell in cells {
            out.push(',');
            if let Some(value) = cell {
                out.push_str(&value.to_string());
            }
        }
        out.push('\n');
    }
    out
}
