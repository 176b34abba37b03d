//! Aggregation and correlation for the precipitation explorer.
//!
//! The pipeline is fixed: duration resample (sum) first, annual resample
//! with the selected metric second, never reordered. Correlation runs on
//! the full-precision annual values; rounding belongs to presentation.

pub mod aggregate;
pub mod annual;
pub mod correlation;
pub mod duration;
pub mod metric;
pub mod resample;
