//! Data module - CSV loading and processing

mod loader;
mod processor;
mod table;

pub use loader::{DataLoader, LoaderError, SENSOR_COLS, TIME_MS_COL};
pub use processor::{DataProcessor, ProcessorError, TIME_S_COL};
pub use table::SampleTable;
