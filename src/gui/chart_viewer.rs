//! Chart Viewer Widget
//! Shows one chart in a native window, or in a floating egui window when the
//! backend cannot open more than one.

use crate::charts::{ChartPlotter, TimeSeriesChart};
use egui::{CentralPanel, ViewportBuilder, ViewportClass, ViewportId};
use log::info;

/// A chart bound to its own viewport.
pub struct ChartViewer {
    pub chart: TimeSeriesChart,
    pub open: bool,
}

impl ChartViewer {
    pub fn new(chart: TimeSeriesChart) -> Self {
        Self { chart, open: true }
    }

    pub fn viewport_id(&self) -> ViewportId {
        ViewportId::from_hash_of(self.chart.id)
    }

    /// Draw into the current viewport's central panel.
    pub fn show_in_panel(&self, ctx: &egui::Context) {
        CentralPanel::default().show(ctx, |ui| {
            ChartPlotter::draw_chart(ui, &self.chart);
        });
    }

    /// Draw as a secondary viewport. Marks the viewer closed once the user
    /// closes its window.
    pub fn show_viewport(&mut self, ctx: &egui::Context, size: [f32; 2]) {
        if !self.open {
            return;
        }

        let builder = ViewportBuilder::default()
            .with_title(self.chart.title.clone())
            .with_inner_size(size);

        let chart = &self.chart;
        let closed = ctx.show_viewport_immediate(self.viewport_id(), builder, |ctx, class| {
            if matches!(class, ViewportClass::Embedded) {
                let mut open = true;
                egui::Window::new(chart.title.as_str())
                    .open(&mut open)
                    .default_size(size)
                    .show(ctx, |ui| ChartPlotter::draw_chart(ui, chart));
                !open
            } else {
                CentralPanel::default().show(ctx, |ui| ChartPlotter::draw_chart(ui, chart));
                ctx.input(|i| i.viewport().close_requested())
            }
        });

        if closed {
            info!("Closed chart window: {}", self.chart.title);
            self.open = false;
        }
    }
}
