// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer handles everything from the source CSV all the
// way to numeric matrices ready for the model.
//
// The pipeline flows in this order:
//
//   notebook/data/stud.csv
//       │
//       ▼
//   CsvLoader           → reads the file into a Dataset
//       │
//       ▼
//   DataIngestion       → raw copy + seeded 80/20 split,
//       │                 writes data.csv / train.csv / test.csv
//       ▼
//   DataTransformation  → fits a Preprocessor on train.csv,
//       │                 encodes both sets as Array2<f64>
//       ▼
//   ModelTrainer (Layer 5)
//
// Each module is responsible for exactly one step.
//
// Reference: csv and ndarray crate documentation
//            Rust Book §13 (Iterators and Closures)

/// Reads a CSV file into a Dataset
pub mod loader;

/// Writes a Dataset back out as CSV
pub mod writer;

/// Seeded shuffle and train/test split
pub mod splitter;

/// The data ingestor: raw copy, split, persisted subsets
pub mod ingestion;

/// Imputation, scaling and one-hot encoding
pub mod transformation;
