// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The ingestion and transformation stages only need
// "something that yields a Dataset". Programming against a
// trait keeps them independent of the file format:
//   - CsvLoader implements DatasetSource today
//   - any other tabular reader can be dropped in later
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use crate::domain::dataset::Dataset;

// ─── DatasetSource ────────────────────────────────────────────────────────────
/// Any component that can load one tabular dataset.
///
/// Implementations:
///   - CsvLoader → reads a delimited file with a header row
pub trait DatasetSource {
    /// Load the whole dataset into memory.
    fn load(&self) -> Result<Dataset>;
}
