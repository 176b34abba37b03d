//! WRF grid precipitation source.
//!
//! One bulk CSV, ERA-Interim historical run downscaled to the six study
//! communities: a timestamp index column followed by one hourly
//! precipitation column per community, already in millimeters.

use crate::error::{Result, SourceError};
use crate::series::{PrecipSeries, DATE_FORMAT, TIMESTAMP_FORMAT};
use chrono::{NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;
#[cfg(feature = "api")]
use log::info;
use std::collections::HashMap;

/// Bulk hourly grid CSV covering 1979-01-02 through 2015-10-29.
pub const GRID_URL: &str =
    "https://www.snap.uaf.edu/webshared/Michael/data/pcpt_hourly_communities_v2_ERA-Interim_historical.csv";

/// Parse the wide grid CSV into one series per community column.
///
/// Column 0 is the timestamp index; every other header names a community.
/// Empty cells are treated as absent observations, never as zero.
pub fn parse_grid_csv(body: &str) -> Result<HashMap<String, PrecipSeries>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(body.as_bytes());
    let headers = rdr.headers()?.clone();
    let names: Vec<String> = headers.iter().skip(1).map(String::from).collect();
    let mut columns: Vec<Vec<(NaiveDateTime, f32)>> = vec![Vec::new(); names.len()];

    for row in rdr.records() {
        let record = row?;
        let stamp = parse_timestamp(record.get(0).unwrap_or("").trim())?;
        for (idx, column) in columns.iter_mut().enumerate() {
            let raw = record.get(idx + 1).unwrap_or("").trim();
            if raw.is_empty() {
                continue;
            }
            let value = raw.parse::<f32>().map_err(|_| SourceError::ValueParse {
                value: raw.to_string(),
                context: format!("grid column {}", names[idx]),
            })?;
            column.push((stamp, value));
        }
    }

    Ok(names
        .into_iter()
        .zip(columns)
        .map(|(name, points)| (name, PrecipSeries::from_points(points)))
        .collect())
}

fn parse_timestamp(raw: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .or_else(|_| {
            NaiveDate::parse_from_str(raw, DATE_FORMAT)
                .map(|d| d.and_hms_opt(0, 0, 0).unwrap())
        })
        .map_err(|_| SourceError::DateParse(raw.to_string()))
}

/// Fetch and parse the bulk grid CSV. One attempt; any failure is fatal.
#[cfg(feature = "api")]
pub async fn fetch_grid(client: &reqwest::Client) -> Result<HashMap<String, PrecipSeries>> {
    info!("fetching grid series from {}", GRID_URL);
    let response = client.get(GRID_URL).send().await?;
    if !response.status().is_success() {
        return Err(SourceError::BadStatus {
            url: GRID_URL.to_string(),
            status: response.status().to_string(),
        });
    }
    let body = response.text().await?;
    parse_grid_csv(&body)
}
