use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};

use super::model::Dataset;

/// File name offered in the save dialog.
pub const EXPORT_FILE_NAME: &str = "datos_procesados.csv";

// ---------------------------------------------------------------------------
// CSV encoding
// ---------------------------------------------------------------------------

/// Encode a dataset as UTF-8 CSV: header row, then one line per record,
/// no index column.
pub fn to_csv(dataset: &Dataset) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(&dataset.columns)
        .context("writing CSV header")?;

    for (row, record) in dataset.records.iter().enumerate() {
        writer
            .write_record(record.values.iter().map(|v| v.to_csv_field()))
            .with_context(|| format!("writing CSV row {row}"))?;
    }

    writer
        .into_inner()
        .map_err(|e| anyhow!("flushing CSV buffer: {}", e.error()))
}

// ---------------------------------------------------------------------------
// Export cache
// ---------------------------------------------------------------------------

/// Holds the most recent encoding, keyed by a hash of the table contents.
#[derive(Debug, Default)]
pub struct ExportCache {
    entry: Option<(u64, Arc<[u8]>)>,
}

impl ExportCache {
    /// Return the CSV bytes for `dataset`, reusing the cached encoding when
    /// the table has not changed.
    pub fn encode(&mut self, dataset: &Dataset) -> Result<Arc<[u8]>> {
        let key = content_hash(dataset);
        if let Some((cached_key, bytes)) = &self.entry {
            if *cached_key == key {
                log::debug!("Export cache hit ({} bytes)", bytes.len());
                return Ok(Arc::clone(bytes));
            }
        }

        let bytes: Arc<[u8]> = to_csv(dataset)?.into();
        self.entry = Some((key, Arc::clone(&bytes)));
        Ok(bytes)
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }

    pub fn is_empty(&self) -> bool {
        self.entry.is_none()
    }
}

fn content_hash(dataset: &Dataset) -> u64 {
    let mut hasher = DefaultHasher::new();
    dataset.hash(&mut hasher);
    hasher.finish()
}

/// Write exported bytes to `path`.
pub fn write_export(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))
}
