use anyhow::{anyhow, Result};
use eframe::egui;

use crate::report::Summary;
use crate::state::TrendChart;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct TrendApp {
    pub chart: TrendChart,
    pub summary: Summary,
}

impl eframe::App for TrendApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title ----
        egui::TopBottomPanel::top("title_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.chart);
        });

        // ---- Bottom panel: headline figures ----
        egui::TopBottomPanel::bottom("summary_bar").show(ctx, |ui| {
            panels::summary_bar(ui, &self.summary);
        });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::trend_plot(ui, &self.chart);
        });
    }
}

/// Open the chart window and block until it is closed.
pub fn show(chart: TrendChart, summary: Summary) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 600.0])
            .with_min_inner_size([600.0, 300.0]),
        ..Default::default()
    };

    let title = chart.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(TrendApp { chart, summary }))),
    )
    .map_err(|e| anyhow!("chart window failed: {e}"))
}
