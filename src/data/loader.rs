// ============================================================
// Layer 4 — CSV Loader
// ============================================================
// Loads one delimited file with a header row into a Dataset
// using the `csv` crate.
//
// Rules:
//   - The first record is the header row
//   - Every data row must have as many cells as the header
//     (the csv reader rejects ragged rows)
//   - Cells are kept verbatim, no trimming, no type parsing
//   - An empty file (no header) is an error
//
// Reference: csv crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

use crate::domain::dataset::Dataset;
use crate::domain::traits::DatasetSource;

/// Loads a Dataset from a CSV file.
/// Implements the DatasetSource trait from Layer 3.
pub struct CsvLoader {
    /// Path to the CSV file
    path: PathBuf,
}

impl CsvLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetSource for CsvLoader {
    fn load(&self) -> Result<Dataset> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)
            .with_context(|| format!("Cannot open '{}'", self.path.display()))?;

        let headers: Vec<String> = reader
            .headers()
            .with_context(|| format!("Cannot read header row of '{}'", self.path.display()))?
            .iter()
            .map(str::to_string)
            .collect();

        if headers.is_empty() {
            bail!("'{}' has no header row", self.path.display());
        }

        let mut rows = Vec::new();
        for (i, record) in reader.records().enumerate() {
            // +2: one for the header, one for 1-based line numbers
            let record = record.with_context(|| {
                format!("Malformed row at line {} of '{}'", i + 2, self.path.display())
            })?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        tracing::debug!(
            "Loaded '{}': {} rows x {} columns",
            self.path.display(),
            rows.len(),
            headers.len()
        );

        Ok(Dataset::new(headers, rows))
    }
}
