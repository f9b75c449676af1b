use thiserror::Error;

use crate::data::model::{ACCEPTORS_COLUMN, DONORS_COLUMN};

/// Why a pipeline run stopped. Either variant is terminal for that run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// One or both descriptor columns are absent; nothing was filtered.
    #[error("El archivo debe contener las columnas '{}' y '{}'.", DONORS_COLUMN, ACCEPTORS_COLUMN)]
    Schema { missing: Vec<String> },

    /// Any failure while loading, filtering or deriving.
    #[error("Error al procesar el archivo: {0:#}")]
    Processing(#[from] anyhow::Error),
}
