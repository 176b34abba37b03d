//! The one-time startup download of both remote precipitation sources.

use anyhow::Context;
use dpe_sources::{acis, community::Community, dataset::PrecipDataset, wrf};
use log::info;
use std::collections::HashMap;

/// Fetch both datasets and cache them as local wide CSVs.
pub async fn run_fetch(wrf_csv: &str, acis_csv: &str) -> anyhow::Result<()> {
    let dataset = load_remote().await?;
    std::fs::write(wrf_csv, dataset.grid_to_csv())
        .with_context(|| format!("writing {}", wrf_csv))?;
    std::fs::write(acis_csv, dataset.station_to_csv())
        .with_context(|| format!("writing {}", acis_csv))?;
    info!("fetch complete. Output: {} and {}", wrf_csv, acis_csv);
    Ok(())
}

/// Load both remote sources: one grid call, then six sequential station
/// calls. Any failure aborts the load outright; there is no retry and no
/// partial-data mode.
pub async fn load_remote() -> anyhow::Result<PrecipDataset> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(60))
        .build()?;

    info!("loading remote data files...");
    let grid = wrf::fetch_grid(&client)
        .await
        .context("fetching the WRF grid CSV")?;

    let mut station = HashMap::new();
    for community in Community::get_community_vector() {
        let series = acis::fetch_station(&client, &community)
            .await
            .with_context(|| format!("fetching ACIS data for {}", community.name))?;
        info!("  {} observations for {}", series.len(), community.name);
        station.insert(community.name, series);
    }
    info!("data loaded.");

    Ok(PrecipDataset::new(grid, station)?)
}
