// ============================================================
// Layer 2 — PipelineUseCase
// ============================================================
// Orchestrates the full pipeline in order:
//
//   Step 1: Save the run's config       (Layer 6 - infra)
//   Step 2: Ingest + split the dataset  (Layer 4 - data)
//   Step 3: Fit + apply preprocessing   (Layer 4 - data)
//   Step 4: Train + score the model     (Layer 5 - ml)
//
// `ingest_only()` stops after step 2 and returns the two
// file paths, for callers that consume the CSVs themselves.
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::{
    ingestion::{DataIngestion, IngestionConfig, ARTIFACTS_DIR, SOURCE_DATA_PATH},
    transformation::{DataTransformation, DEFAULT_TARGET_COLUMN},
};
use crate::infra::artifacts::ArtifactStore;
use crate::ml::trainer::{ModelTrainer, TrainerConfig};

/// File name the run's settings are saved under
pub const PIPELINE_CONFIG_FILE: &str = "pipeline_config.json";

// ─── Pipeline Configuration ──────────────────────────────────────────────────
// All settings for one run. Serialisable so every artifacts
// directory records the settings that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub source:        PathBuf,
    pub artifacts_dir: PathBuf,
    pub target_column: String,
    pub epochs:        usize,
    pub learning_rate: f64,
    pub l2:            f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        let trainer = TrainerConfig::default();
        Self {
            source:        PathBuf::from(SOURCE_DATA_PATH),
            artifacts_dir: PathBuf::from(ARTIFACTS_DIR),
            target_column: DEFAULT_TARGET_COLUMN.to_string(),
            epochs:        trainer.epochs,
            learning_rate: trainer.learning_rate,
            l2:            trainer.l2,
        }
    }
}

impl PipelineConfig {
    fn ingestion(&self) -> DataIngestion {
        DataIngestion::with_source(
            IngestionConfig::in_dir(&self.artifacts_dir),
            &self.source,
        )
    }

    fn trainer(&self) -> TrainerConfig {
        TrainerConfig {
            artifacts_dir: self.artifacts_dir.clone(),
            epochs:        self.epochs,
            learning_rate: self.learning_rate,
            l2:            self.l2,
        }
    }
}

// ─── PipelineUseCase ─────────────────────────────────────────────────────────
pub struct PipelineUseCase {
    config: PipelineConfig,
}

impl PipelineUseCase {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Ingestion only: returns (train_path, test_path)
    pub fn ingest_only(&self) -> Result<(PathBuf, PathBuf)> {
        Ok(self.config.ingestion().initiate_data_ingestion()?)
    }

    /// Run every stage and return the test R² score
    pub fn execute(&self) -> Result<f64> {
        let cfg = &self.config;

        // ── Step 1: Record the settings for this run ──────────────────────────
        ArtifactStore::new(&cfg.artifacts_dir).save_json(PIPELINE_CONFIG_FILE, cfg)?;

        // ── Step 2: Ingest ────────────────────────────────────────────────────
        let (train_path, test_path) = cfg.ingestion().initiate_data_ingestion()?;

        // ── Step 3: Transform ─────────────────────────────────────────────────
        let transformation = DataTransformation::new(&cfg.artifacts_dir, &cfg.target_column);
        let (train_arr, test_arr, _) =
            transformation.initiate_data_transformation(&train_path, &test_path)?;

        // ── Step 4: Train and score ───────────────────────────────────────────
        let trainer = ModelTrainer::new(cfg.trainer());
        trainer.initiate_model_trainer(&train_arr, &test_arr)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::error::{IngestionError, IngestionStage};
    use std::fs;

    /// A small student dataset where math_score follows reading_score
    fn write_students(path: &std::path::Path, n: usize) {
        let mut text = String::from("gender,lunch,reading_score,math_score\n");
        for i in 0..n {
            let gender  = if i % 2 == 0 { "female" } else { "male" };
            let lunch   = if i % 3 == 0 { "free/reduced" } else { "standard" };
            let reading = 40 + (i * 7) % 60;
            let bonus   = if lunch == "standard" { 5 } else { 0 };
            text.push_str(&format!("{gender},{lunch},{reading},{}\n", reading + bonus));
        }
        fs::write(path, text).unwrap();
    }

    fn config_in(dir: &std::path::Path) -> PipelineConfig {
        PipelineConfig {
            source:        dir.join("stud.csv"),
            artifacts_dir: dir.join("artifacts"),
            epochs:        2000,
            learning_rate: 0.05,
            l2:            0.0,
            ..PipelineConfig::default()
        }
    }

    #[test]
    fn test_full_pipeline_scores_and_writes_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        write_students(&dir.path().join("stud.csv"), 100);
        let cfg = config_in(dir.path());

        let score = PipelineUseCase::new(cfg.clone()).execute().unwrap();
        assert!(score > 0.95, "r2 was {score}");

        for name in ["data.csv", "train.csv", "test.csv", "preprocessor.json", "model.json", "metrics.csv", PIPELINE_CONFIG_FILE] {
            assert!(cfg.artifacts_dir.join(name).exists(), "missing {name}");
        }

        let saved: PipelineConfig = ArtifactStore::new(&cfg.artifacts_dir)
            .load_json(PIPELINE_CONFIG_FILE)
            .unwrap();
        assert_eq!(saved, cfg);
    }

    #[test]
    fn test_ingest_only_returns_paths() {
        let dir = tempfile::tempdir().unwrap();
        write_students(&dir.path().join("stud.csv"), 100);
        let cfg = config_in(dir.path());

        let (train, test) = PipelineUseCase::new(cfg.clone()).ingest_only().unwrap();
        assert_eq!(train, cfg.artifacts_dir.join("train.csv"));
        assert_eq!(test,  cfg.artifacts_dir.join("test.csv"));
        assert!(!cfg.artifacts_dir.join("model.json").exists());
    }

    #[test]
    fn test_missing_source_surfaces_ingestion_error() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config_in(dir.path());

        let err = PipelineUseCase::new(cfg).ingest_only().unwrap_err();
        let ingestion = err.downcast_ref::<IngestionError>().unwrap();
        assert_eq!(ingestion.stage(), IngestionStage::ReadSource);
    }
}
