//! Precipitation data sources for the WRF / ACIS annual comparison explorer.
//!
//! Two independent remote sources feed the explorer: a bulk hourly grid CSV
//! downscaled from ERA-Interim (WRF) and the ACIS station-observation API.
//! This crate normalizes both into [`series::PrecipSeries`] values in
//! millimeters and bundles them into an immutable [`dataset::PrecipDataset`].

pub mod acis;
pub mod community;
pub mod dataset;
pub mod error;
pub mod recording;
pub mod series;
pub mod wrf;
