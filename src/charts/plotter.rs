//! Chart Plotter Module
//! Draws time-series charts using egui_plot.

use crate::charts::{grid_marks, ChartStyle, TimeSeriesChart};
use egui::{Color32, FontId, RichText, TextStyle};
use egui_plot::{Corner, HLine, Legend, Line, LineStyle, Plot, PlotPoints, VLine};

/// Series colors, in draw order
pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(31, 119, 180),  // Blue
    Color32::from_rgb(255, 127, 14),  // Orange
    Color32::from_rgb(44, 160, 44),   // Green
    Color32::from_rgb(214, 39, 40),   // Red
    Color32::from_rgb(148, 103, 189), // Purple
    Color32::from_rgb(140, 86, 75),   // Brown
    Color32::from_rgb(227, 119, 194), // Pink
    Color32::from_rgb(127, 127, 127), // Grey
    Color32::from_rgb(188, 189, 34),  // Olive
    Color32::from_rgb(23, 190, 207),  // Cyan
];

pub const GRID_COLOR: Color32 = Color32::from_gray(176);

const LEGEND_STYLE: &str = "chart_legend";
const GRID_TARGET_STEPS: usize = 10;
const GRID_DASH_LENGTH: f32 = 6.0;
const GRID_LINE_WIDTH: f32 = 0.8;

/// Draws `TimeSeriesChart` values into an egui `Ui`.
pub struct ChartPlotter;

impl ChartPlotter {
    pub fn series_color(index: usize) -> Color32 {
        PALETTE[index % PALETTE.len()]
    }

    pub fn grid_color(alpha: f32) -> Color32 {
        GRID_COLOR.gamma_multiply(alpha.clamp(0.0, 1.0))
    }

    pub fn legend_text_style() -> TextStyle {
        TextStyle::Name(LEGEND_STYLE.into())
    }

    /// Register the legend font size. Must run before the first chart is drawn.
    pub fn install_text_styles(ctx: &egui::Context, style: &ChartStyle) {
        let legend_font = FontId::proportional(style.legend_size);
        ctx.all_styles_mut(|s| {
            s.text_styles
                .insert(Self::legend_text_style(), legend_font.clone());
        });
    }

    /// Draw title, then the plot filling the rest of `ui`.
    pub fn draw_chart(ui: &mut egui::Ui, chart: &TimeSeriesChart) {
        let style = &chart.style;

        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&chart.title).size(style.title_size).strong());
        });
        ui.add_space(4.0);

        let bounds = chart.bounds();
        let x_grid = grid_marks(bounds.x_min, bounds.x_max, GRID_TARGET_STEPS);
        let y_grid = grid_marks(bounds.y_min, bounds.y_max, GRID_TARGET_STEPS);
        let grid_color = Self::grid_color(style.grid_alpha);

        Plot::new(chart.id)
            .legend(
                Legend::default()
                    .position(Corner::RightTop)
                    .text_style(Self::legend_text_style()),
            )
            .x_axis_label(RichText::new(&chart.x_label).size(style.axis_label_size))
            .y_axis_label(RichText::new(&chart.y_label).size(style.axis_label_size))
            .show_grid(false)
            .include_x(bounds.x_min)
            .include_x(bounds.x_max)
            .include_y(bounds.y_min)
            .include_y(bounds.y_max)
            .show(ui, |plot_ui| {
                for &x in &x_grid {
                    plot_ui.vline(
                        VLine::new(x)
                            .color(grid_color)
                            .width(GRID_LINE_WIDTH)
                            .style(LineStyle::Dashed {
                                length: GRID_DASH_LENGTH,
                            }),
                    );
                }
                for &y in &y_grid {
                    plot_ui.hline(
                        HLine::new(y)
                            .color(grid_color)
                            .width(GRID_LINE_WIDTH)
                            .style(LineStyle::Dashed {
                                length: GRID_DASH_LENGTH,
                            }),
                    );
                }

                for (i, series) in chart.series.iter().enumerate() {
                    plot_ui.line(
                        Line::new(PlotPoints::from(series.points.clone()))
                            .color(Self::series_color(i))
                            .width(style.line_width)
                            .name(&series.name),
                    );
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_three_series_get_distinct_colors() {
        let colors: Vec<_> = (0..3).map(ChartPlotter::series_color).collect();
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_eq!(ChartPlotter::series_color(10), colors[0]);
    }

    #[test]
    fn grid_color_is_translucent() {
        let color = ChartPlotter::grid_color(0.7);
        assert!(color.a() < 255);
        assert!(color.a() > 0);
        assert_eq!(ChartPlotter::grid_color(1.0), GRID_COLOR);
    }
}
