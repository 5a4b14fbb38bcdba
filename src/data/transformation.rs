// ============================================================
// Layer 4 — Data Transformation
// ============================================================
// Turns the train/test CSV files written by ingestion into
// numeric matrices a regression model can consume.
//
// The Preprocessor is FITTED on the training rows only and
// then applied unchanged to both sets, so nothing about the
// test rows leaks into the statistics.
//
// Per column (the target column is passed through as-is):
//
//   Numeric columns
//     1. missing cells → median of the training values
//     2. standard scaling: (x - mean) / std
//
//   Categorical columns
//     1. missing cells → most frequent training value
//     2. one-hot encoding, one output column per category
//        seen during fit (sorted); unseen categories encode
//        to all zeros
//     3. scaling without centering: x / std
//
// Output row layout:
//   [ encoded features ... , target ]
//   i.e. the target is always the LAST column.
//
// Reference: ndarray crate documentation
//            Rust Book §13 (Iterators and Closures)

use anyhow::{anyhow, bail, Context, Result};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use crate::data::loader::CsvLoader;
use crate::domain::dataset::{is_missing, ColumnKind, Dataset};
use crate::domain::traits::DatasetSource;
use crate::infra::artifacts::ArtifactStore;

/// Column the model learns to predict
pub const DEFAULT_TARGET_COLUMN: &str = "math_score";

/// File name of the fitted preprocessor inside the artifacts dir
pub const PREPROCESSOR_FILE: &str = "preprocessor.json";

// ─── Fitted column transforms ────────────────────────────────────────────────
/// What the Preprocessor learned about one input column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnTransform {
    Numeric {
        name:   String,
        median: f64,
        mean:   f64,
        std:    f64,
    },
    Categorical {
        name:       String,
        mode:       String,
        categories: Vec<String>,
        /// One scale per category column
        stds:       Vec<f64>,
    },
}

impl ColumnTransform {
    fn name(&self) -> &str {
        match self {
            Self::Numeric { name, .. } | Self::Categorical { name, .. } => name,
        }
    }

    /// Number of output columns this transform produces
    fn width(&self) -> usize {
        match self {
            Self::Numeric { .. }                  => 1,
            Self::Categorical { categories, .. } => categories.len(),
        }
    }

    /// Append the encoded value(s) of `cell` to `out`
    fn encode(&self, cell: &str, out: &mut Vec<f64>) -> Result<()> {
        let cell = cell.trim();
        match self {
            Self::Numeric { name, median, mean, std } => {
                let x = if is_missing(cell) {
                    *median
                } else {
                    cell.parse::<f64>()
                        .map_err(|_| anyhow!("Column '{name}': '{cell}' is not a number"))?
                };
                if !x.is_finite() {
                    bail!("Column '{name}': '{cell}' is not a finite number");
                }
                out.push((x - mean) / std);
            }
            Self::Categorical { mode, categories, stds, .. } => {
                let value = if is_missing(cell) { mode.as_str() } else { cell };
                for (category, std) in categories.iter().zip(stds) {
                    let hot = if category == value { 1.0 } else { 0.0 };
                    out.push(hot / std);
                }
            }
        }
        Ok(())
    }
}

// ─── Preprocessor ─────────────────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preprocessor {
    /// Name of the target column
    pub target:  String,

    /// One transform per feature column, in file order
    pub columns: Vec<ColumnTransform>,
}

impl Preprocessor {
    /// Learn imputation values, categories and scales from `train`.
    pub fn fit(train: &Dataset, target: &str) -> Result<Self> {
        let target_idx = train
            .column_index(target)
            .ok_or_else(|| anyhow!("Target column '{target}' not found"))?;

        if train.column_kind(target_idx) != ColumnKind::Numeric {
            bail!("Target column '{target}' is not numeric");
        }

        let mut columns = Vec::with_capacity(train.column_count().saturating_sub(1));

        for (idx, name) in train.headers.iter().enumerate() {
            if idx == target_idx {
                continue;
            }

            let transform = match train.column_kind(idx) {
                ColumnKind::Numeric     => fit_numeric(train, idx, name),
                ColumnKind::Categorical => fit_categorical(train, idx, name),
            };
            tracing::debug!("Fitted '{}' ({} output columns)", name, transform.width());
            columns.push(transform);
        }

        Ok(Self {
            target: target.to_string(),
            columns,
        })
    }

    /// Total number of encoded feature columns (target excluded)
    pub fn feature_count(&self) -> usize {
        self.columns.iter().map(ColumnTransform::width).sum()
    }

    /// Encode every row of `dataset` as `[features..., target]`.
    pub fn transform(&self, dataset: &Dataset) -> Result<Array2<f64>> {
        // Resolve columns by name so column order in the file doesn't matter
        let mut positions = Vec::with_capacity(self.columns.len());
        for column in &self.columns {
            let pos = dataset
                .column_index(column.name())
                .ok_or_else(|| anyhow!("Column '{}' missing from dataset", column.name()))?;
            positions.push(pos);
        }
        let target_pos = dataset
            .column_index(&self.target)
            .ok_or_else(|| anyhow!("Target column '{}' missing from dataset", self.target))?;

        let width    = self.feature_count() + 1;
        let mut data = Vec::with_capacity(dataset.row_count() * width);

        for (row_no, row) in dataset.rows.iter().enumerate() {
            for (column, &pos) in self.columns.iter().zip(&positions) {
                let cell = row.get(pos).map(String::as_str).unwrap_or("");
                column
                    .encode(cell, &mut data)
                    .with_context(|| format!("Row {}", row_no + 1))?;
            }

            let target_cell = row.get(target_pos).map(String::as_str).unwrap_or("").trim();
            let y = target_cell
                .parse::<f64>()
                .ok()
                .filter(|y| y.is_finite())
                .ok_or_else(|| {
                    anyhow!(
                        "Row {}: target '{}' has no usable value '{}'",
                        row_no + 1,
                        self.target,
                        target_cell
                    )
                })?;
            data.push(y);
        }

        Ok(Array2::from_shape_vec((dataset.row_count(), width), data)?)
    }
}

fn fit_numeric(train: &Dataset, idx: usize, name: &str) -> ColumnTransform {
    let observed: Vec<f64> = train
        .column(idx)
        .filter(|c| !is_missing(c))
        .filter_map(|c| c.trim().parse::<f64>().ok())
        .filter(|x| x.is_finite())
        .collect();

    let median = median(&observed);

    // Statistics are taken AFTER imputation
    let missing = train.row_count() - observed.len();
    let mut imputed = observed;
    imputed.extend(std::iter::repeat(median).take(missing));

    let (mean, std) = mean_std(&imputed);

    ColumnTransform::Numeric {
        name: name.to_string(),
        median,
        mean,
        std,
    }
}

fn fit_categorical(train: &Dataset, idx: usize, name: &str) -> ColumnTransform {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for cell in train.column(idx).filter(|c| !is_missing(c)).map(str::trim) {
        *counts.entry(cell).or_default() += 1;
    }

    // BTreeMap iterates in sorted order, so ties go to the smallest value
    let mode = counts
        .iter()
        .fold(None, |best: Option<(&str, usize)>, (&value, &n)| match best {
            Some((_, best_n)) if best_n >= n => best,
            _ => Some((value, n)),
        })
        .map(|(value, _)| value.to_string())
        .unwrap_or_default();

    let categories: Vec<String> = counts.keys().map(|c| c.to_string()).collect();

    // Column std of a 0/1 indicator after imputation
    let n = train.row_count().max(1) as f64;
    let stds = categories
        .iter()
        .map(|category| {
            let hits = train
                .column(idx)
                .map(|c| if is_missing(c) { mode.as_str() } else { c.trim() })
                .filter(|value| *value == category.as_str())
                .count() as f64;
            let p = hits / n;
            non_zero_scale((p * (1.0 - p)).sqrt())
        })
        .collect();

    ColumnTransform::Categorical {
        name: name.to_string(),
        mode,
        categories,
        stds,
    }
}

/// Median of `values`; 0.0 when there are none
fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Mean and population std; a zero std becomes 1.0
fn mean_std(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 1.0);
    }
    let n    = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var  = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, non_zero_scale(var.sqrt()))
}

/// Constant columns are left unscaled instead of dividing by zero
fn non_zero_scale(std: f64) -> f64 {
    if std > f64::EPSILON { std } else { 1.0 }
}

// ─── DataTransformation ──────────────────────────────────────────────────────
pub struct DataTransformation {
    store:  ArtifactStore,
    target: String,
}

impl DataTransformation {
    pub fn new(artifacts_dir: impl Into<PathBuf>, target: impl Into<String>) -> Self {
        Self {
            store:  ArtifactStore::new(artifacts_dir),
            target: target.into(),
        }
    }

    /// Fit on the train file, encode both files, and save the preprocessor.
    ///
    /// Returns (train_array, test_array, preprocessor_path).
    pub fn initiate_data_transformation(
        &self,
        train_path: &Path,
        test_path:  &Path,
    ) -> Result<(Array2<f64>, Array2<f64>, PathBuf)> {
        let train = CsvLoader::new(train_path).load()?;
        let test  = CsvLoader::new(test_path).load()?;
        tracing::info!("Read train and test data completed");

        let preprocessor = Preprocessor::fit(&train, &self.target)
            .context("Cannot fit preprocessor on the train set")?;
        tracing::info!(
            "Obtained preprocessing object: {} input columns → {} features",
            preprocessor.columns.len(),
            preprocessor.feature_count()
        );

        let train_arr = preprocessor.transform(&train).context("Cannot encode train set")?;
        let test_arr  = preprocessor.transform(&test).context("Cannot encode test set")?;

        let path = self.store.save_json(PREPROCESSOR_FILE, &preprocessor)?;
        tracing::info!("Saved preprocessing object to '{}'", path.display());

        Ok((train_arr, test_arr, path))
    }
}
