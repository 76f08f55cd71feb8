//! MPU Plot Main Application
//! The first chart owns the root window, every other chart gets its own viewport.

use crate::charts::{ChartPlotter, TimeSeriesChart};
use crate::config::WindowConfig;
use crate::error::AppError;
use crate::gui::ChartViewer;
use log::info;

/// Main application window.
pub struct MpuPlotApp {
    root: Option<ChartViewer>,
    secondary: Vec<ChartViewer>,
    window_size: [f32; 2],
}

impl MpuPlotApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        charts: Vec<TimeSeriesChart>,
        window: &WindowConfig,
    ) -> Self {
        if let Some(first) = charts.first() {
            ChartPlotter::install_text_styles(&cc.egui_ctx, &first.style);
        }

        let mut viewers = charts.into_iter().map(ChartViewer::new);
        Self {
            root: viewers.next(),
            secondary: viewers.collect(),
            window_size: [window.width, window.height],
        }
    }
}

impl eframe::App for MpuPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(root) = &self.root {
            root.show_in_panel(ctx);
        }

        for viewer in &mut self.secondary {
            viewer.show_viewport(ctx, self.window_size);
        }
    }
}

/// Open one window per chart and block until the root window is closed.
pub fn run(charts: Vec<TimeSeriesChart>, window: &WindowConfig) -> Result<(), AppError> {
    let title = charts
        .first()
        .map(|chart| chart.title.clone())
        .unwrap_or_else(|| "MPU Plot".to_string());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([window.width, window.height])
            .with_title(title),
        ..Default::default()
    };

    info!("Opening {} chart windows", charts.len());
    let window = window.clone();
    eframe::run_native(
        "MPU Plot",
        options,
        Box::new(move |cc| Ok(Box::new(MpuPlotApp::new(cc, charts, &window)))),
    )
    .map_err(|e| AppError::RenderEnvironment(e.to_string()))
}
