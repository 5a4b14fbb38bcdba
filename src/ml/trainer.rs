// ============================================================
// Layer 5 — Model Trainer
// ============================================================
// Fits a LinearRegression on the encoded train array and
// scores it on the encoded test array.
//
// Both arrays come from DataTransformation with the layout
//   [ features ... , target ]
// so the last column is split off as the label.
//
// Per run:
//   - train_mse is logged to artifacts/metrics.csv each epoch
//   - the fitted model is saved to artifacts/model.json
//   - R² on the test array is returned
//
// Reference: ndarray crate documentation

use anyhow::{bail, Context, Result};
use ndarray::{s, Array2, ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::infra::{
    artifacts::ArtifactStore,
    metrics::{EpochMetrics, MetricsLogger},
};
use crate::ml::regression::{r2_score, LinearRegression};

/// File name of the fitted model inside the artifacts dir
pub const MODEL_FILE: &str = "model.json";

// ─── Trainer Configuration ───────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerConfig {
    pub artifacts_dir: PathBuf,
    pub epochs:        usize,
    pub learning_rate: f64,
    pub l2:            f64,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            artifacts_dir: PathBuf::from("artifacts"),
            epochs:        1000,
            learning_rate: 0.05,
            l2:            1e-3,
        }
    }
}

pub struct ModelTrainer {
    config: TrainerConfig,
}

impl ModelTrainer {
    pub fn new(config: TrainerConfig) -> Self {
        Self { config }
    }

    /// Train on `train`, save the model, and return R² on `test`.
    pub fn initiate_model_trainer(&self, train: &Array2<f64>, test: &Array2<f64>) -> Result<f64> {
        let cfg = &self.config;

        tracing::info!("Split training and test input data");
        let (x_train, y_train) = split_features_target(train).context("Invalid train array")?;
        let (x_test,  y_test)  = split_features_target(test).context("Invalid test array")?;

        if x_train.ncols() != x_test.ncols() {
            bail!(
                "Train has {} features but test has {}",
                x_train.ncols(),
                x_test.ncols()
            );
        }

        let mut metrics = MetricsLogger::new(&cfg.artifacts_dir)?;
        let mut model = LinearRegression::zeros(x_train.ncols());
        let mut best  = f64::INFINITY;

        for epoch in 1..=cfg.epochs {
            let train_mse = model.step(x_train, y_train, cfg.learning_rate, cfg.l2);
            let m         = EpochMetrics::new(epoch, train_mse);

            if !train_mse.is_finite() {
                bail!("Training diverged at epoch {epoch}; try a smaller learning rate");
            }
            if m.is_improvement(best) {
                best = train_mse;
            }
            metrics.log(&m)?;

            if epoch % 100 == 0 || epoch == cfg.epochs {
                tracing::debug!("Epoch {:>4}/{} | train_mse={:.4}", epoch, cfg.epochs, train_mse);
            }
        }
        metrics.finish()?;
        tracing::info!("Training complete: best train_mse={:.4}", best);

        let path = ArtifactStore::new(&cfg.artifacts_dir).save_json(MODEL_FILE, &model)?;
        tracing::info!("Saved model to '{}'", path.display());

        let predicted = model.predict(x_test);
        let score     = r2_score(y_test, predicted.view())?;
        tracing::info!("Test R² = {:.4}", score);

        Ok(score)
    }
}

/// Split `[features..., target]` into (features, target) views.
fn split_features_target(arr: &Array2<f64>) -> Result<(ArrayView2<'_, f64>, ArrayView1<'_, f64>)> {
    let cols = arr.ncols();
    if cols == 0 {
        bail!("Array has no target column");
    }
    if arr.nrows() == 0 {
        bail!("Array has no rows");
    }
    Ok((arr.slice(s![.., ..cols - 1]), arr.column(cols - 1)))
}
