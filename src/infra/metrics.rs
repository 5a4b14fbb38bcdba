// ============================================================
// Layer 6 — Metrics Logger
// ============================================================
// Records the training loss to a CSV file after each epoch,
// so the learning curve can be plotted after a run.
//
// Metrics recorded per epoch:
//   - epoch:     the epoch number (1, 2, 3, ...)
//   - train_mse: mean squared error on the training set
//                (before the L2 penalty is added)
//
// Output file: artifacts/metrics.csv
//
// Example CSV output:
//   epoch,train_mse
//   1,4521.330000
//   2,3187.912000
//   ...
//
// The file is recreated at the start of every run, so it
// always describes the most recent training only. It stays
// open for the whole run behind a buffered csv::Writer;
// call `finish()` once training ends to flush it.
//
// Reference: Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{
    fs::{self, File},
    path::{Path, PathBuf},
};

/// One row of metrics data for a single training epoch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochMetrics {
    /// The epoch number (starts at 1)
    pub epoch: usize,

    /// Mean squared error over the training rows
    pub train_mse: f64,
}

impl EpochMetrics {
    pub fn new(epoch: usize, train_mse: f64) -> Self {
        Self { epoch, train_mse }
    }

    /// Returns true if this epoch beat the previous best loss
    pub fn is_improvement(&self, best_mse: f64) -> bool {
        self.train_mse < best_mse
    }
}

/// Logs epoch metrics to a CSV file.
pub struct MetricsLogger {
    /// Full path to the CSV file
    csv_path: PathBuf,

    /// Open for the whole run
    writer: csv::Writer<File>,
}

impl MetricsLogger {
    /// Create the logger and (re)write the CSV header.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)
            .with_context(|| format!("Cannot create '{}'", dir.display()))?;

        let csv_path = dir.join("metrics.csv");

        // Truncate: one metrics file per run
        let mut writer = csv::Writer::from_path(&csv_path)
            .with_context(|| format!("Cannot create '{}'", csv_path.display()))?;
        writer.write_record(["epoch", "train_mse"])?;
        tracing::debug!("Created metrics CSV: '{}'", csv_path.display());

        Ok(Self { csv_path, writer })
    }

    /// Append one epoch's metrics as a new row.
    pub fn log(&mut self, m: &EpochMetrics) -> Result<()> {
        self.writer
            .write_record([m.epoch.to_string(), format!("{:.6}", m.train_mse)])
            .with_context(|| format!("Cannot write to '{}'", self.csv_path.display()))?;
        Ok(())
    }

    /// Flush buffered rows to disk.
    pub fn finish(&mut self) -> Result<()> {
        self.writer
            .flush()
            .with_context(|| format!("Cannot flush '{}'", self.csv_path.display()))?;
        Ok(())
    }

    /// Return the path to the metrics CSV file
    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }
}
