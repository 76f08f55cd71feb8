//! Charts module - Chart model and drawing

mod plotter;
mod series;

pub use plotter::ChartPlotter;
pub use series::{
    grid_marks, nice_step, Bounds, ChartStyle, Series, TimeSeriesChart, TIME_AXIS_LABEL,
};
