use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::data::export::{ExportCache, write_export};
use crate::error::PipelineError;
use crate::pipeline::{self, Report};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// File the current outcome was produced from.
    pub source: Option<PathBuf>,

    /// Result of the last pipeline run (None until the user loads a file).
    pub outcome: Option<Result<Report, PipelineError>>,

    /// Cached CSV encoding of the processed table.
    pub export_cache: ExportCache,

    /// Status message shown in the top bar (export results).
    pub status_message: Option<String>,
}

impl AppState {
    /// Run the whole pipeline on `path`, replacing any previous outcome.
    pub fn load_path(&mut self, path: &Path) {
        let outcome = pipeline::run_file(path);
        match &outcome {
            Ok(report) => log::info!(
                "Processed {}: {} compliant of {} retained",
                path.display(),
                report.compliant,
                report.dataset.len()
            ),
            Err(PipelineError::Schema { missing }) => {
                log::warn!("{}: missing columns {missing:?}", path.display());
            }
            Err(e) => log::error!("{}: {e}", path.display()),
        }

        self.source = Some(path.to_path_buf());
        self.outcome = Some(outcome);
        self.export_cache.clear();
        self.status_message = None;
    }

    /// The current report, if the last run succeeded.
    pub fn report(&self) -> Option<&Report> {
        self.outcome.as_ref().and_then(|o| o.as_ref().ok())
    }

    /// Encode the processed table and write it to `path`.
    /// Returns the number of bytes written.
    pub fn export_to(&mut self, path: &Path) -> Result<usize> {
        let report = self
            .outcome
            .as_ref()
            .and_then(|o| o.as_ref().ok())
            .context("No processed data to export")?;

        let bytes = self.export_cache.encode(&report.dataset)?;
        write_export(path, &bytes)?;
        log::info!("Exported {} bytes to {}", bytes.len(), path.display());
        Ok(bytes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn starts_idle() {
        let state = AppState::default();
        assert!(state.outcome.is_none());
        assert!(state.report().is_none());
    }

    #[test]
    fn load_then_export_writes_processed_csv() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_file(
            &dir,
            "moleculas.csv",
            "Molecula,Donantes_H,Aceptores_H\nA,3,4\nB,5,10\nC,6,2\n",
        );

        let mut state = AppState::default();
        state.load_path(&input);
        assert_eq!(state.report().map(|r| r.compliant), Some(1));

        let output = dir.path().join("datos_procesados.csv");
        let written = state.export_to(&output).unwrap();
        let text = std::fs::read_to_string(&output).unwrap();
        assert_eq!(written, text.len());
        assert_eq!(
            text,
            "Molecula,Donantes_H,Aceptores_H,Cumple_Regla\nA,3,4,1\nB,5,10,0\n"
        );
        assert!(!state.export_cache.is_empty());
    }

    #[test]
    fn schema_error_blocks_export() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_file(&dir, "malo.csv", "Molecula,Donantes_H\nA,3\n");

        let mut state = AppState::default();
        state.load_path(&input);
        assert!(matches!(
            state.outcome,
            Some(Err(PipelineError::Schema { .. }))
        ));
        assert!(state.export_to(&dir.path().join("out.csv")).is_err());
    }

    #[test]
    fn new_load_replaces_previous_outcome_and_cache() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_file(&dir, "a.csv", "Donantes_H,Aceptores_H\n1,1\n");
        let bad = write_file(&dir, "b.json", "not json");

        let mut state = AppState::default();
        state.load_path(&good);
        state.export_to(&dir.path().join("out.csv")).unwrap();

        state.load_path(&bad);
        assert!(state.report().is_none());
        assert!(state.export_cache.is_empty());
        assert_eq!(state.source.as_deref(), Some(bad.as_path()));
    }
}
