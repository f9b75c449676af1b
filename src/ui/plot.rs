use eframe::egui::Ui;
use egui_plot::{Legend, MarkerShape, Plot, PlotPoints, Points};

use crate::color::legend_entries;
use crate::data::model::{ACCEPTORS_COLUMN, DONORS_COLUMN};
use crate::pipeline::Report;

pub const PLOT_TITLE: &str = "Distribución de Donantes y Aceptores de Hidrógeno";

// ---------------------------------------------------------------------------
// Donor / acceptor scatter plot
// ---------------------------------------------------------------------------

/// Scatter of `Aceptores_H` (x, 0..10) against `Donantes_H` (y, 0..5),
/// one series per compliance flag value.
pub fn scatter_plot(ui: &mut Ui, report: &Report) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(PLOT_TITLE);
    });

    Plot::new("descriptor_scatter")
        .height(360.0)
        .legend(Legend::default())
        .x_axis_label(ACCEPTORS_COLUMN)
        .y_axis_label(DONORS_COLUMN)
        .include_x(0.0)
        .include_x(10.0)
        .include_y(0.0)
        .include_y(5.0)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (compliant, (name, color)) in [false, true].into_iter().zip(legend_entries()) {
                let points: PlotPoints = report
                    .points
                    .iter()
                    .filter(|p| p.compliant == compliant)
                    .map(|p| [p.acceptors, p.donors])
                    .collect();

                plot_ui.points(
                    Points::new(points)
                        .name(name)
                        .color(color)
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(4.0),
                );
            }
        });
}
