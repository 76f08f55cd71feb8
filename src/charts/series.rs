//! Chart model
//! Plain values describing what to draw, built from a sample table.

use crate::config::PlotConfig;
use crate::data::SampleTable;

pub const TIME_AXIS_LABEL: &str = "Time (s)";

/// Visual settings shared by every chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub line_width: f32,
    pub grid_alpha: f32,
    pub title_size: f32,
    pub axis_label_size: f32,
    pub legend_size: f32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::from(&PlotConfig::default())
    }
}

impl From<&PlotConfig> for ChartStyle {
    fn from(config: &PlotConfig) -> Self {
        Self {
            line_width: config.line_width,
            grid_alpha: config.grid_alpha,
            title_size: config.title_size,
            axis_label_size: config.axis_label_size,
            legend_size: config.legend_size,
        }
    }
}

/// A named line of `[x, y]` points.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub points: Vec<[f64; 2]>,
}

impl Series {
    /// Pair `xs` with `ys` index by index.
    pub fn new(name: &str, xs: &[f64], ys: &[f64]) -> Self {
        Self {
            name: name.to_string(),
            points: xs.iter().zip(ys).map(|(&x, &y)| [x, y]).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p[0])
    }

    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p[1])
    }
}

/// Axis-aligned data range of a chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// One figure: title, axis labels, style and its series.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesChart {
    /// Stable identifier, used for widget and window ids.
    pub id: &'static str,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
    pub style: ChartStyle,
}

impl TimeSeriesChart {
    /// Acceleration triple against time.
    pub fn acceleration(table: &SampleTable, style: &ChartStyle) -> Self {
        Self::from_columns(
            "acceleration",
            "Acceleration data over time",
            "Acceleration (g)",
            ["Accel X", "Accel Y", "Accel Z"],
            &table.time_s,
            table.accel(),
            style,
        )
    }

    /// Angular velocity triple against time.
    pub fn gyroscope(table: &SampleTable, style: &ChartStyle) -> Self {
        Self::from_columns(
            "gyroscope",
            "Gyroscope data over time",
            "Angular velocity (°/s)",
            ["Giro X", "Giro Y", "Giro Z"],
            &table.time_s,
            table.giro(),
            style,
        )
    }

    /// Both charts, acceleration first.
    pub fn build_all(table: &SampleTable, style: &ChartStyle) -> Vec<Self> {
        vec![Self::acceleration(table, style), Self::gyroscope(table, style)]
    }

    fn from_columns(
        id: &'static str,
        title: &str,
        y_label: &str,
        names: [&str; 3],
        time_s: &[f64],
        columns: [&[f64]; 3],
        style: &ChartStyle,
    ) -> Self {
        let series = names
            .iter()
            .zip(columns)
            .map(|(name, ys)| Series::new(name, time_s, ys))
            .collect();

        Self {
            id,
            title: title.to_string(),
            x_label: TIME_AXIS_LABEL.to_string(),
            y_label: y_label.to_string(),
            series,
            style: style.clone(),
        }
    }

    /// Range covered by all finite points. Empty charts get the unit square,
    /// and a flat axis is widened by 0.5 on each side.
    pub fn bounds(&self) -> Bounds {
        let (x_min, x_max) = finite_range(self.series.iter().flat_map(Series::xs));
        let (y_min, y_max) = finite_range(self.series.iter().flat_map(Series::ys));
        Bounds {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }
}

fn finite_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if min > max {
        (0.0, 1.0)
    } else if min == max {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    }
}

/// Round `range / target_steps` up to 1, 2 or 5 times a power of ten.
pub fn nice_step(range: f64, target_steps: usize) -> f64 {
    let raw_step = range / target_steps.max(1) as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let normalized = raw_step / magnitude;

    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };

    nice * magnitude
}

/// Grid positions at multiples of a nice step inside `[min, max]`, ascending.
pub fn grid_marks(min: f64, max: f64, target_steps: usize) -> Vec<f64> {
    if !(min.is_finite() && max.is_finite()) || max <= min {
        return Vec::new();
    }

    let step = nice_step(max - min, target_steps);
    if !step.is_finite() || step <= 0.0 {
        return Vec::new();
    }

    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_row_table() -> SampleTable {
        SampleTable {
            time_ms: vec![0.0, 1000.0],
            time_s: vec![0.0, 1.0],
            accel_x: vec![0.1, 0.2],
            accel_y: vec![0.2, 0.3],
            accel_z: vec![9.8, 9.7],
            giro_x: vec![1.0, 1.0],
            giro_y: vec![2.0, 2.0],
            giro_z: vec![3.0, 3.0],
        }
    }

    #[test]
    fn acceleration_chart_matches_table() {
        let chart = TimeSeriesChart::acceleration(&two_row_table(), &ChartStyle::default());

        assert_eq!(chart.title, "Acceleration data over time");
        assert_eq!(chart.x_label, "Time (s)");
        assert_eq!(chart.y_label, "Acceleration (g)");
        assert_eq!(chart.series.len(), 3);

        let accel_x = &chart.series[0];
        assert_eq!(accel_x.name, "Accel X");
        assert_eq!(accel_x.points, vec![[0.0, 0.1], [1.0, 0.2]]);
        assert_eq!(chart.series[2].name, "Accel Z");
    }

    #[test]
    fn gyroscope_chart_matches_table() {
        let chart = TimeSeriesChart::gyroscope(&two_row_table(), &ChartStyle::default());

        assert_eq!(chart.y_label, "Angular velocity (°/s)");
        let names: Vec<_> = chart.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Giro X", "Giro Y", "Giro Z"]);
        assert_eq!(chart.series[1].ys().collect::<Vec<_>>(), vec![2.0, 2.0]);
    }

    #[test]
    fn every_series_uses_time_in_row_order() {
        let mut table = two_row_table();
        table.time_s = vec![3.0, 1.0];

        for chart in TimeSeriesChart::build_all(&table, &ChartStyle::default()) {
            for series in &chart.series {
                assert_eq!(series.len(), 2);
                assert_eq!(series.xs().collect::<Vec<_>>(), vec![3.0, 1.0]);
            }
        }
    }

    #[test]
    fn empty_table_gives_empty_series() {
        let charts = TimeSeriesChart::build_all(&SampleTable::default(), &ChartStyle::default());

        assert_eq!(charts.len(), 2);
        for chart in &charts {
            assert_eq!(chart.series.len(), 3);
            assert!(chart.series.iter().all(Series::is_empty));
            assert_eq!(
                chart.bounds(),
                Bounds {
                    x_min: 0.0,
                    x_max: 1.0,
                    y_min: 0.0,
                    y_max: 1.0
                }
            );
        }
    }

    #[test]
    fn style_comes_from_config() {
        let config = PlotConfig {
            line_width: 3.0,
            ..PlotConfig::default()
        };
        let chart = TimeSeriesChart::acceleration(&two_row_table(), &ChartStyle::from(&config));
        assert_eq!(chart.style.line_width, 3.0);
        assert_eq!(chart.style.grid_alpha, 0.7);
    }

    #[test]
    fn bounds_skip_non_finite_and_widen_flat_axis() {
        let mut table = two_row_table();
        table.giro_x = vec![f64::NAN, 1.0];
        let chart = TimeSeriesChart::gyroscope(&table, &ChartStyle::default());
        let bounds = chart.bounds();

        assert_eq!((bounds.x_min, bounds.x_max), (0.0, 1.0));
        assert_eq!((bounds.y_min, bounds.y_max), (1.0, 3.0));

        let flat = Series::new("flat", &[0.0, 1.0], &[2.0, 2.0]);
        let chart = TimeSeriesChart {
            series: vec![flat],
            ..chart
        };
        assert_eq!(chart.bounds().y_min, 1.5);
        assert_eq!(chart.bounds().y_max, 2.5);
    }

    #[test]
    fn nice_step_rounds_up_to_1_2_5() {
        assert_eq!(nice_step(10.0, 10), 1.0);
        assert_eq!(nice_step(15.0, 10), 2.0);
        assert_eq!(nice_step(40.0, 10), 5.0);
        assert_eq!(nice_step(70.0, 10), 10.0);
        assert!((nice_step(0.3, 10) - 0.05).abs() < 1e-12);
    }

    #[test]
    fn grid_marks_are_even_and_inside_bounds() {
        let marks = grid_marks(-0.3, 9.7, 10);
        assert_eq!(marks.first().copied(), Some(0.0));
        assert_eq!(marks.last().copied(), Some(9.0));
        assert_eq!(marks.len(), 10);
        for pair in marks.windows(2) {
            assert!((pair[1] - pair[0] - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn grid_marks_for_degenerate_range_are_empty() {
        assert!(grid_marks(1.0, 1.0, 10).is_empty());
        assert!(grid_marks(f64::NAN, 1.0, 10).is_empty());
    }
}
