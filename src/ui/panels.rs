use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::export::EXPORT_FILE_NAME;
use crate::data::loader::{SUPPORTED_EXTENSIONS, WORKBOOK_EXTENSIONS};
use crate::error::PipelineError;
use crate::pipeline::Report;
use crate::state::AppState;

pub const APP_TITLE: &str = "Visualización de Reglas de Lipinski";
const INSTRUCTIONS: &str = "Sube un archivo Excel con datos de moléculas para analizar los \
                            donantes y aceptores de enlaces de hidrógeno.";

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("Archivo", |ui: &mut Ui| {
            if ui.button("Abrir…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(path) = &state.source {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            ui.label(name);
        }

        if let Some(report) = state.report() {
            ui.separator();
            ui.label(format!(
                "{} filas cargadas, {} en rango",
                report.loaded_rows,
                report.dataset.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(msg.as_str());
        }
    });
}

// ---------------------------------------------------------------------------
// Central panel sections
// ---------------------------------------------------------------------------

/// Title and instruction text, always visible.
pub fn header(ui: &mut Ui) {
    ui.heading(APP_TITLE);
    ui.label(INSTRUCTIONS);
    ui.add_space(8.0);
}

/// Shown while no file has been loaded.
pub fn idle_hint(ui: &mut Ui) {
    ui.label(
        RichText::new("Archivo → Abrir…, o arrastra un archivo a la ventana.").weak(),
    );
}

/// Red banner with the pipeline error text.
pub fn error_banner(ui: &mut Ui, error: &PipelineError) {
    egui::Frame::group(ui.style())
        .fill(Color32::from_rgb(0x5a, 0x1e, 0x1e))
        .show(ui, |ui: &mut Ui| {
            ui.label(RichText::new(error.to_string()).color(Color32::from_rgb(0xff, 0xb4, 0xb4)));
        });
}

/// The compliant-molecule count.
pub fn summary(ui: &mut Ui, report: &Report) {
    ui.label(format!(
        "Área de la matriz (cantidad de moléculas que cumplen las reglas): {}",
        report.compliant
    ));
    ui.add_space(8.0);
}

/// Returns true when the download button was clicked.
pub fn download_button(ui: &mut Ui) -> bool {
    ui.add_space(8.0);
    ui.button("Descargar Datos Procesados").clicked()
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Sube un archivo Excel")
        .add_filter("Archivos compatibles", SUPPORTED_EXTENSIONS)
        .add_filter("Excel / OpenDocument", WORKBOOK_EXTENSIONS)
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}

/// Ask for a destination (pre-filled with `datos_procesados.csv`) and write
/// the processed table there. Cancelling the dialog is not an error.
pub fn save_export_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Descargar Datos Procesados")
        .set_file_name(EXPORT_FILE_NAME)
        .add_filter("CSV", &["csv"])
        .save_file();

    let Some(path) = file else {
        return;
    };

    state.status_message = Some(match state.export_to(&path) {
        Ok(_) => format!("Guardado en {}", path.display()),
        Err(e) => {
            log::error!("Failed to export: {e:#}");
            format!("Error al guardar: {e:#}")
        }
    });
}
