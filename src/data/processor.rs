//! Data Processor Module
//! Derives the seconds column and extracts typed sensor columns.

use crate::data::loader::{SENSOR_COLS, TIME_MS_COL};
use crate::data::SampleTable;
use log::debug;
use polars::prelude::*;
use thiserror::Error;

/// Derived timestamp column, in seconds.
pub const TIME_S_COL: &str = "time_s";

const MS_PER_SECOND: f64 = 1000.0;

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
    #[error("Missing column: {0}")]
    MissingColumn(String),
    #[error("Invalid value in column {column} at row {row}")]
    InvalidValue { column: String, row: usize },
}

/// Handles the transformation from a loaded frame to a sample table.
pub struct DataProcessor;

impl DataProcessor {
    /// Add `time_s = time_ms / 1000` as a new column.
    pub fn add_time_seconds(df: &DataFrame) -> Result<DataFrame, ProcessorError> {
        if df.column(TIME_MS_COL).is_err() {
            return Err(ProcessorError::MissingColumn(TIME_MS_COL.to_string()));
        }

        let derived = df
            .clone()
            .lazy()
            .with_column(
                (col(TIME_MS_COL).cast(DataType::Float64) / lit(MS_PER_SECOND)).alias(TIME_S_COL),
            )
            .collect()?;
        Ok(derived)
    }

    /// Read one column as `f64` values, rejecting nulls and non-numeric cells.
    pub fn column_values(df: &DataFrame, name: &str) -> Result<Vec<f64>, ProcessorError> {
        let column = df
            .column(name)
            .map_err(|_| ProcessorError::MissingColumn(name.to_string()))?;
        let as_f64 = column.cast(&DataType::Float64)?;
        let values = as_f64.f64()?;

        values
            .into_iter()
            .enumerate()
            .map(|(row, v)| {
                v.ok_or_else(|| ProcessorError::InvalidValue {
                    column: name.to_string(),
                    row,
                })
            })
            .collect()
    }

    /// Derive `time_s` and extract every sensor column into a sample table.
    pub fn prepare_samples(df: &DataFrame) -> Result<SampleTable, ProcessorError> {
        let derived = Self::add_time_seconds(df)?;

        let [accel_x, accel_y, accel_z, giro_x, giro_y, giro_z] = SENSOR_COLS;
        let table = SampleTable {
            time_ms: Self::column_values(&derived, TIME_MS_COL)?,
            time_s: Self::column_values(&derived, TIME_S_COL)?,
            accel_x: Self::column_values(&derived, accel_x)?,
            accel_y: Self::column_values(&derived, accel_y)?,
            accel_z: Self::column_values(&derived, accel_z)?,
            giro_x: Self::column_values(&derived, giro_x)?,
            giro_y: Self::column_values(&derived, giro_y)?,
            giro_z: Self::column_values(&derived, giro_z)?,
        };

        debug!(
            "Prepared {} samples spanning {:?} s",
            table.len(),
            table.time_span()
        );
        Ok(table)
    }
}
