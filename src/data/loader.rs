//! CSV Data Loader Module
//! Handles CSV file loading and column validation using Polars.

use log::{debug, info};
use polars::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Timestamp column written by the capture firmware.
pub const TIME_MS_COL: &str = "time_ms";

/// Sensor columns, in the order the firmware writes them.
pub const SENSOR_COLS: [&str; 6] = [
    "accel_x", "accel_y", "accel_z", "giro_x", "giro_y", "giro_z",
];

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("CSV file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Missing required column: {0}")]
    MissingColumn(String),
}

/// Handles CSV file loading with Polars.
pub struct DataLoader {
    df: Option<DataFrame>,
    file_path: Option<PathBuf>,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoader {
    pub fn new() -> Self {
        Self {
            df: None,
            file_path: None,
        }
    }

    /// Load a sensor CSV file and check that every required column is present.
    ///
    /// Required columns are always parsed as `Float64`, so a column holding
    /// only integers in its first rows still accepts decimals later on.
    pub fn load_csv(&mut self, file_path: impl AsRef<Path>) -> Result<&DataFrame, LoaderError> {
        let file_path = file_path.as_ref();
        if !file_path.is_file() {
            return Err(LoaderError::FileNotFound(file_path.to_path_buf()));
        }
        self.file_path = Some(file_path.to_path_buf());

        let header = LazyCsvReader::new(file_path)
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .finish()?
            .collect_schema()?;
        Self::check_required_columns(&header)?;

        let df = LazyCsvReader::new(file_path)
            .with_has_header(true)
            .with_infer_schema_length(Some(10000))
            .with_dtype_overwrite(Some(Arc::new(Self::required_schema())))
            .finish()?
            .collect()?;

        info!(
            "Loaded {} rows from {}",
            df.height(),
            file_path.display()
        );
        debug!("Columns: {:?}", df.get_column_names());

        Ok(&*self.df.insert(df))
    }

    fn required_columns() -> impl Iterator<Item = &'static str> {
        std::iter::once(TIME_MS_COL).chain(SENSOR_COLS)
    }

    /// `Float64` for `time_ms` and every sensor column.
    pub fn required_schema() -> Schema {
        let mut schema = Schema::with_capacity(SENSOR_COLS.len() + 1);
        for name in Self::required_columns() {
            schema.with_column(name.into(), DataType::Float64);
        }
        schema
    }

    /// Fail on the first required column missing from the header.
    pub fn check_required_columns(header: &Schema) -> Result<(), LoaderError> {
        Self::required_columns()
            .find(|name| !header.contains(name))
            .map_or(Ok(()), |name| Err(LoaderError::MissingColumn(name.to_string())))
    }

    /// Get list of column names from loaded DataFrame.
    pub fn columns(&self) -> Vec<String> {
        self.df
            .as_ref()
            .map(|df| {
                df.get_column_names()
                    .iter()
                    .map(|s| s.to_string())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Get the number of rows in the DataFrame.
    pub fn row_count(&self) -> usize {
        self.df.as_ref().map(|df| df.height()).unwrap_or(0)
    }

    /// Get a reference to the loaded DataFrame.
    pub fn dataframe(&self) -> Option<&DataFrame> {
        self.df.as_ref()
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }
}
