use eframe::egui::{RichText, Ui};

use crate::report::Summary;
use crate::state::TrendChart;

// ---------------------------------------------------------------------------
// Top bar – chart title
// ---------------------------------------------------------------------------

pub fn top_bar(ui: &mut Ui, chart: &TrendChart) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(&chart.title);
    });
}

// ---------------------------------------------------------------------------
// Bottom bar – headline figures
// ---------------------------------------------------------------------------

/// The same three figures the console report prints.
pub fn summary_bar(ui: &mut Ui, summary: &Summary) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(RichText::new(format!("Average AQI: {:.2}", summary.overall_mean)).strong());
        ui.separator();
        if let Some(mean) = summary.highest.mean {
            ui.label(format!("Highest: {} ({mean:.2})", summary.highest.month));
        }
        ui.separator();
        if let Some(mean) = summary.lowest.mean {
            ui.label(format!("Lowest: {} ({mean:.2})", summary.lowest.month));
        }
    });
}
