//! ACIS station observation source.
//!
//! One `StnData` JSON call per community returns daily precipitation as
//! `{ "data": [[date, value], ...] }` with values in inches. Sentinels:
//! "M" for missing, "T" for trace amounts. Values are converted to
//! millimeters here so downstream code sees one unit.
//!
//! API documentation: <https://www.rcc-acis.org/docs_webservices.html>

use crate::error::{Result, SourceError};
#[cfg(feature = "api")]
use crate::community::Community;
use crate::recording::StationRecording;
use crate::series::{PrecipSeries, DATE_FORMAT};
use chrono::NaiveDate;
#[cfg(feature = "api")]
use log::info;
use serde::Deserialize;

pub const ACIS_BASE_URL: &str = "http://data.rcc-acis.org";

/// Fixed query bounds shared by both data sources.
pub const START_DATE: &str = "1979-01-02";
pub const END_DATE: &str = "2015-10-29";

/// StnData response body: a list of (date, value) pairs.
#[derive(Debug, Deserialize)]
pub struct StnDataResponse {
    pub data: Vec<(String, String)>,
}

/// Parse a StnData JSON body into a daily series in millimeters.
///
/// Missing values are dropped (absent, never zero); trace values resolve
/// to 0.001 inch before conversion. Any other non-numeric value string is
/// a fatal parse error.
pub fn parse_station_json(body: &str) -> Result<PrecipSeries> {
    let response: StnDataResponse = serde_json::from_str(body)?;
    let mut points = Vec::with_capacity(response.data.len());
    for (date_raw, value_raw) in &response.data {
        let date = NaiveDate::parse_from_str(date_raw, DATE_FORMAT)
            .map_err(|_| SourceError::DateParse(date_raw.clone()))?;
        let recording =
            StationRecording::parse(value_raw).ok_or_else(|| SourceError::ValueParse {
                value: value_raw.clone(),
                context: format!("station value on {}", date_raw),
            })?;
        if let Some(mm) = recording.as_millimeters() {
            points.push((date.and_hms_opt(0, 0, 0).unwrap(), mm));
        }
    }
    Ok(PrecipSeries::from_points(points))
}

/// Fetch one community's daily precipitation series.
///
/// One attempt per station; a bad status or malformed payload is fatal,
/// with no retry or partial-success path.
#[cfg(feature = "api")]
pub async fn fetch_station(
    client: &reqwest::Client,
    community: &Community,
) -> Result<PrecipSeries> {
    let url = format!(
        "{}/StnData?sid={}&sdate={}&edate={}&elems=pcpn&output=json",
        ACIS_BASE_URL, community.sid, START_DATE, END_DATE
    );
    info!(
        "fetching station series for {} ({})",
        community.name, community.sid
    );
    let response = client.get(&url).send().await?;
    if !response.status().is_success() {
        return Err(SourceError::BadStatus {
            url,
            status: response.status().to_string(),
        });
    }
    let body = response.text().await?;
    parse_station_json(&body)
}
