//! GUI module - Chart windows

mod app;
mod chart_viewer;

pub use app::{run, MpuPlotApp};
pub use chart_viewer::ChartViewer;
