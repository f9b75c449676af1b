use eframe::egui::{self, ScrollArea, Ui};

use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct LipinskiApp {
    pub state: AppState,
}

impl LipinskiApp {
    /// Load the first file dropped on the window, if any.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .find_map(|f| f.path.clone())
        });
        if let Some(path) = dropped {
            self.state.load_path(&path);
        }
    }
}

impl eframe::App for LipinskiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: summary, plot, table, download ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    panels::header(ui);

                    let mut export_clicked = false;
                    match &self.state.outcome {
                        None => panels::idle_hint(ui),
                        Some(Err(e)) => panels::error_banner(ui, e),
                        Some(Ok(report)) => {
                            panels::summary(ui, report);
                            plot::scatter_plot(ui, report);

                            ui.add_space(8.0);
                            ui.heading("Datos Procesados");
                            table::data_table(ui, &report.dataset);

                            export_clicked = panels::download_button(ui);
                        }
                    }

                    if export_clicked {
                        panels::save_export_dialog(&mut self.state);
                    }
                });
        });
    }
}
