use eframe::egui::{Align, Layout, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::Dataset;

const ROW_HEIGHT: f32 = 18.0;

/// Render the processed records, one column per dataset column.
pub fn data_table(ui: &mut Ui, dataset: &Dataset) {
    if dataset.columns.is_empty() {
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .vscroll(false)
        .cell_layout(Layout::left_to_right(Align::Center))
        .columns(Column::auto().at_least(60.0), dataset.columns.len())
        .header(22.0, |mut header| {
            for name in &dataset.columns {
                header.col(|ui: &mut Ui| {
                    ui.strong(name.as_str());
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, dataset.len(), |mut row| {
                let record = &dataset.records[row.index()];
                for value in &record.values {
                    row.col(|ui: &mut Ui| {
                        ui.label(value.to_string());
                    });
                }
            });
        });

    if dataset.is_empty() {
        ui.label(RichText::new("Ninguna fila dentro del rango.").weak());
    }
}
