//! MPU Plot - MPU6050 sensor CSV chart viewer
//!
//! Loads a capture file, derives time in seconds and shows acceleration and
//! angular velocity charts.

pub mod charts;
pub mod config;
pub mod data;
pub mod error;
pub mod gui;
pub mod logger;

use charts::{ChartStyle, TimeSeriesChart};
use data::{DataLoader, DataProcessor, SampleTable};
use error::AppError;
use std::path::Path;

/// Load `csv_path` and derive `time_s`.
pub fn load_samples(csv_path: impl AsRef<Path>) -> Result<SampleTable, AppError> {
    let mut loader = DataLoader::new();
    let df = loader.load_csv(csv_path)?;
    Ok(DataProcessor::prepare_samples(df)?)
}

/// Every step up to, but not including, opening windows.
pub fn build_charts(
    csv_path: impl AsRef<Path>,
    style: &ChartStyle,
) -> Result<Vec<TimeSeriesChart>, AppError> {
    let table = load_samples(csv_path)?;
    Ok(TimeSeriesChart::build_all(&table, style))
}
