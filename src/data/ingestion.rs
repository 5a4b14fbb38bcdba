// ============================================================
// Layer 4 — Data Ingestor
// ============================================================
// Produces the train/test CSV files every later stage reads.
//
// One ingestion run, in order:
//
//   notebook/data/stud.csv
//       │  CsvLoader
//       ▼
//   Dataset (in memory)
//       │  create_dir_all(artifacts/)
//       ├──────────────► artifacts/data.csv   (raw copy)
//       │  train_test_split(0.2, seed 42)
//       ├──────────────► artifacts/train.csv  (80%)
//       └──────────────► artifacts/test.csv   (20%)
//
// Every written file has a header row and no index column.
// The Dataset is dropped when the call returns; only the
// two paths survive.
//
// Any failure aborts the run and is reported as a single
// IngestionError (stage + location + cause). There is no
// retry and no cleanup of files already written.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::data::{
    loader::CsvLoader,
    splitter::{train_test_split, RANDOM_STATE, TEST_SIZE},
    writer::write_csv,
};
use crate::domain::traits::DatasetSource;
use crate::infra::error::{IngestionError, IngestionStage, StageContext};

/// Where the source dataset is read from
pub const SOURCE_DATA_PATH: &str = "notebook/data/stud.csv";

/// Default directory for every artifact the pipeline writes
pub const ARTIFACTS_DIR: &str = "artifacts";

// ─── Ingestion Configuration ─────────────────────────────────────────────────
// The three output paths. Fields are private so a config
// cannot change after it is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestionConfig {
    train_data_path: PathBuf,
    test_data_path:  PathBuf,
    raw_data_path:   PathBuf,
}

impl IngestionConfig {
    /// Place train.csv, test.csv and data.csv under `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            train_data_path: dir.join("train.csv"),
            test_data_path:  dir.join("test.csv"),
            raw_data_path:   dir.join("data.csv"),
        }
    }

    pub fn train_data_path(&self) -> &Path {
        &self.train_data_path
    }

    pub fn test_data_path(&self) -> &Path {
        &self.test_data_path
    }

    pub fn raw_data_path(&self) -> &Path {
        &self.raw_data_path
    }
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self::in_dir(ARTIFACTS_DIR)
    }
}

// ─── DataIngestion ────────────────────────────────────────────────────────────
pub struct DataIngestion {
    ingestion_config: IngestionConfig,
    source:           PathBuf,
}

impl DataIngestion {
    /// Ingest from the fixed source path
    pub fn new(ingestion_config: IngestionConfig) -> Self {
        Self::with_source(ingestion_config, SOURCE_DATA_PATH)
    }

    /// Ingest from another source file
    pub fn with_source(ingestion_config: IngestionConfig, source: impl Into<PathBuf>) -> Self {
        Self {
            ingestion_config,
            source: source.into(),
        }
    }

    pub fn config(&self) -> &IngestionConfig {
        &self.ingestion_config
    }

    /// Run one ingestion and return (train_path, test_path).
    pub fn initiate_data_ingestion(&self) -> Result<(PathBuf, PathBuf), IngestionError> {
        tracing::info!("Entered the data ingestion method or component");
        let cfg = &self.ingestion_config;

        let dataset = CsvLoader::new(&self.source)
            .load()
            .at_stage(IngestionStage::ReadSource)?;
        tracing::info!(
            "Read the dataset as dataframe: {} rows x {} columns",
            dataset.row_count(),
            dataset.column_count()
        );

        // The train path's parent holds all three files in the default layout
        if let Some(dir) = cfg.train_data_path.parent().filter(|d| !d.as_os_str().is_empty()) {
            tracing::info!("Creating directory: {}", dir.display());
            fs::create_dir_all(dir).at_stage(IngestionStage::CreateDirectory)?;
        }

        write_csv(&dataset, &cfg.raw_data_path).at_stage(IngestionStage::WriteRaw)?;

        tracing::info!("Train test split initiated");
        let (train_rows, test_rows) = train_test_split(dataset.rows.clone(), TEST_SIZE, RANDOM_STATE)
            .at_stage(IngestionStage::Split)?;

        let train_set = dataset.with_rows(train_rows);
        let test_set  = dataset.with_rows(test_rows);

        write_csv(&train_set, &cfg.train_data_path).at_stage(IngestionStage::WriteTrain)?;
        write_csv(&test_set, &cfg.test_data_path).at_stage(IngestionStage::WriteTest)?;

        tracing::info!(
            "Ingestion of the data is completed: {} train rows, {} test rows",
            train_set.row_count(),
            test_set.row_count()
        );

        Ok((cfg.train_data_path.clone(), cfg.test_data_path.clone()))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const HEADER: &str = "gender,race_ethnicity,lunch,math_score,reading_score";

    /// Write a CSV with `n` distinct rows and return its path
    fn write_source(dir: &Path, n: usize) -> PathBuf {
        let mut text = format!("{HEADER}\n");
        for i in 0..n {
            let gender = if i % 2 == 0 { "female" } else { "male" };
            text.push_str(&format!("{gender},group {},standard,{},{}\n", i % 5, i, 100 - i % 100));
        }
        let path = dir.join("stud.csv");
        fs::write(&path, text).unwrap();
        path
    }

    fn data_lines(path: &Path) -> Vec<String> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .skip(1)
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_hundred_rows_split_eighty_twenty() {
        let dir    = tempfile::tempdir().unwrap();
        let source = write_source(dir.path(), 100);
        let config = IngestionConfig::in_dir(dir.path().join("artifacts"));

        let (train, test) = DataIngestion::with_source(config.clone(), &source)
            .initiate_data_ingestion()
            .unwrap();

        assert_eq!(train, config.train_data_path());
        assert_eq!(test,  config.test_data_path());

        for path in [&train, &test] {
            let text = fs::read_to_string(path).unwrap();
            assert_eq!(text.lines().next(), Some(HEADER));
        }
        assert_eq!(data_lines(&train).len(), 80);
        assert_eq!(data_lines(&test).len(),  20);
    }

    #[test]
    fn test_raw_copy_equals_input() {
        let dir    = tempfile::tempdir().unwrap();
        let source = write_source(dir.path(), 100);
        let config = IngestionConfig::in_dir(dir.path().join("artifacts"));

        DataIngestion::with_source(config.clone(), &source)
            .initiate_data_ingestion()
            .unwrap();

        let raw = fs::read_to_string(config.raw_data_path()).unwrap();
        assert_eq!(raw, fs::read_to_string(&source).unwrap());
        assert_eq!(raw.lines().count(), 101);
    }

    #[test]
    fn test_train_and_test_partition_the_input() {
        let dir    = tempfile::tempdir().unwrap();
        let source = write_source(dir.path(), 37);
        let config = IngestionConfig::in_dir(dir.path().join("out"));

        let (train, test) = DataIngestion::with_source(config, &source)
            .initiate_data_ingestion()
            .unwrap();

        let train_rows: HashSet<String> = data_lines(&train).into_iter().collect();
        let test_rows:  HashSet<String> = data_lines(&test).into_iter().collect();
        let input_rows: HashSet<String> = data_lines(&source).into_iter().collect();

        assert!(train_rows.is_disjoint(&test_rows));
        assert_eq!(train_rows.len() + test_rows.len(), 37);
        assert_eq!(&train_rows | &test_rows, input_rows);
    }

    #[test]
    fn test_rerun_is_deterministic_and_overwrites() {
        let dir    = tempfile::tempdir().unwrap();
        let source = write_source(dir.path(), 50);
        let config = IngestionConfig::in_dir(dir.path().join("artifacts"));
        let ingest = DataIngestion::with_source(config.clone(), &source);

        let (train, test) = ingest.initiate_data_ingestion().unwrap();
        let first_train   = fs::read_to_string(&train).unwrap();
        let first_test    = fs::read_to_string(&test).unwrap();

        // Clobber the outputs; the second run must replace them
        fs::write(&train, "junk\n").unwrap();
        fs::write(config.raw_data_path(), "junk\n").unwrap();

        ingest.initiate_data_ingestion().unwrap();
        assert_eq!(fs::read_to_string(&train).unwrap(), first_train);
        assert_eq!(fs::read_to_string(&test).unwrap(),  first_test);
        assert_ne!(fs::read_to_string(config.raw_data_path()).unwrap(), "junk\n");
    }

    #[test]
    fn test_missing_source_is_wrapped() {
        let dir    = tempfile::tempdir().unwrap();
        let config = IngestionConfig::in_dir(dir.path().join("artifacts"));

        let err = DataIngestion::with_source(config.clone(), dir.path().join("missing.csv"))
            .initiate_data_ingestion()
            .unwrap_err();

        assert_eq!(err.stage(), IngestionStage::ReadSource);
        assert!(err.location().file().ends_with("ingestion.rs"));
        assert!(!config.raw_data_path().exists());
        assert!(!config.train_data_path().exists());
        assert!(!config.test_data_path().exists());
    }

    #[test]
    fn test_single_row_fails_at_split() {
        let dir    = tempfile::tempdir().unwrap();
        let source = write_source(dir.path(), 1);
        let config = IngestionConfig::in_dir(dir.path().join("artifacts"));

        let err = DataIngestion::with_source(config.clone(), &source)
            .initiate_data_ingestion()
            .unwrap_err();

        assert_eq!(err.stage(), IngestionStage::Split);
        // The raw copy was already written before the split failed
        assert!(config.raw_data_path().exists());
        assert!(!config.train_data_path().exists());
    }

    #[test]
    fn test_unwritable_output_dir_is_wrapped() {
        let dir    = tempfile::tempdir().unwrap();
        let source = write_source(dir.path(), 10);

        // A regular file where a parent directory should be
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();
        let config = IngestionConfig::in_dir(blocker.join("out"));

        let err = DataIngestion::with_source(config.clone(), &source)
            .initiate_data_ingestion()
            .unwrap_err();

        assert_eq!(err.stage(), IngestionStage::CreateDirectory);
        assert!(err.location().file().ends_with("ingestion.rs"));
        assert!(!config.raw_data_path().exists());
        assert!(!config.train_data_path().exists());
    }

    #[test]
    fn test_unwritable_raw_path_is_wrapped() {
        let dir    = tempfile::tempdir().unwrap();
        let source = write_source(dir.path(), 10);
        let config = IngestionConfig::in_dir(dir.path().join("artifacts"));

        // data.csv exists as a directory, so it cannot be opened for writing
        fs::create_dir_all(config.raw_data_path()).unwrap();

        let err = DataIngestion::with_source(config.clone(), &source)
            .initiate_data_ingestion()
            .unwrap_err();

        assert_eq!(err.stage(), IngestionStage::WriteRaw);
        assert!(!config.train_data_path().exists());
        assert!(!config.test_data_path().exists());
    }

    #[test]
    fn test_default_config_points_at_artifacts() {
        let cfg = IngestionConfig::default();
        assert_eq!(cfg.train_data_path(), Path::new("artifacts/train.csv"));
        assert_eq!(cfg.test_data_path(),  Path::new("artifacts/test.csv"));
        assert_eq!(cfg.raw_data_path(),   Path::new("artifacts/data.csv"));
    }
}
