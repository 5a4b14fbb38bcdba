// ============================================================
// Layer 4 — CSV Writer
// ============================================================
// Writes a Dataset back to disk as CSV:
//   - header row first
//   - one line per data row, in Dataset order
//   - NO row index column
//
// An existing file at the same path is truncated, so repeated
// runs simply overwrite earlier output (last writer wins).
//
// Reference: csv crate documentation

use anyhow::{Context, Result};
use std::path::Path;

use crate::domain::dataset::Dataset;

/// Write `dataset` to `path`, header included, index excluded.
pub fn write_csv(dataset: &Dataset, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Cannot create '{}'", path.display()))?;

    writer
        .write_record(&dataset.headers)
        .with_context(|| format!("Cannot write header to '{}'", path.display()))?;

    for row in &dataset.rows {
        writer
            .write_record(row)
            .with_context(|| format!("Cannot write row to '{}'", path.display()))?;
    }

    // Flush explicitly: Drop would swallow a late I/O error
    writer
        .flush()
        .with_context(|| format!("Cannot flush '{}'", path.display()))?;

    tracing::debug!("Wrote {} rows to '{}'", dataset.row_count(), path.display());
    Ok(())
}
