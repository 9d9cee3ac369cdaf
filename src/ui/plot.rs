use eframe::egui::{Color32, Ui};
use egui_plot::{GridMark, Line, MarkerShape, Plot, PlotPoint, PlotPoints, Points};

use crate::state::{month_label, TrendChart};

const CRIMSON: Color32 = Color32::from_rgb(220, 20, 60);

// ---------------------------------------------------------------------------
// Monthly trend plot (central panel)
// ---------------------------------------------------------------------------

/// Render the monthly average AQI line chart.
pub fn trend_plot(ui: &mut Ui, chart: &TrendChart) {
    if chart.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No monthly averages to plot");
        });
        return;
    }

    Plot::new("monthly_aqi_plot")
        .x_axis_label("Month")
        .y_axis_label("Average Air Quality Index (AQI)")
        .x_axis_formatter(|mark: GridMark, _range| month_label(mark.value))
        .label_formatter(|_name, value: &PlotPoint| {
            format!("{}\nAQI {:.2}", month_label(value.x.round()), value.y)
        })
        .show_grid(true)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for segment in &chart.segments {
                let line = Line::new(PlotPoints::from(segment.clone()))
                    .color(CRIMSON)
                    .width(2.0);
                plot_ui.line(line);
            }

            let markers = Points::new(PlotPoints::from(chart.points.clone()))
                .shape(MarkerShape::Circle)
                .filled(true)
                .radius(4.0)
                .color(CRIMSON);
            plot_ui.points(markers);
        });
}
