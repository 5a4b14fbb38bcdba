// ============================================================
// Layer 6 — Artifact Store
// ============================================================
// Saves and restores the pipeline's fitted state as JSON.
//
// What gets saved per run:
//   1. pipeline_config.json — the settings the run used
//   2. preprocessor.json    — fitted imputation/scaling/encoding
//   3. model.json           — fitted regression weights
//
// Why save the preprocessor separately from the model?
//   New rows must go through exactly the same imputation,
//   one-hot columns and scaling as the training rows before
//   the weights mean anything. Without the fitted
//   preprocessor the model cannot be reused.
//
// File layout:
//   artifacts/
//     data.csv  train.csv  test.csv   ← written by ingestion
//     pipeline_config.json
//     preprocessor.json
//     model.json
//     metrics.csv                     ← written by MetricsLogger
//
// Reference: serde_json crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Reads and writes JSON artifacts under one directory.
pub struct ArtifactStore {
    /// Directory where artifacts are stored
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path an artifact named `name` lives at
    pub fn path_of(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Serialise `value` as pretty JSON to `{dir}/{name}`.
    /// Creates the directory if needed and returns the written path.
    pub fn save_json<T: Serialize>(&self, name: &str, value: &T) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create '{}'", self.dir.display()))?;

        let path = self.path_of(name);
        let json = serde_json::to_string_pretty(value)
            .with_context(|| format!("Cannot serialise '{name}'"))?;

        fs::write(&path, json)
            .with_context(|| format!("Cannot write '{}'", path.display()))?;

        tracing::debug!("Saved artifact '{}'", path.display());
        Ok(path)
    }

    /// Read `{dir}/{name}` back into a `T`.
    pub fn load_json<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let path = self.path_of(name);

        let json = fs::read_to_string(&path).with_context(|| {
            format!(
                "Cannot read '{}'. Has the pipeline been run yet?",
                path.display()
            )
        })?;

        serde_json::from_str(&json)
            .with_context(|| format!("Cannot parse '{}'", path.display()))
    }
}
