// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands, `run` and `ingest`, and
// all their configurable flags.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::pipeline_use_case::PipelineConfig;

/// The top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ingest, transform, train, and print the test R² score
    Run(RunArgs),

    /// Only ingest: write raw/train/test CSVs and print their paths
    Ingest(IngestArgs),
}

/// Flags shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// CSV file to ingest
    #[arg(long, default_value = "notebook/data/stud.csv")]
    pub source: PathBuf,

    /// Directory every artifact is written to
    #[arg(long, default_value = "artifacts")]
    pub artifacts_dir: PathBuf,
}

/// All arguments for the `run` command.
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    #[command(flatten)]
    pub paths: SourceArgs,

    /// Column the model learns to predict
    #[arg(long, default_value = "math_score")]
    pub target: String,

    /// Number of full gradient descent passes over the train set
    #[arg(long, default_value_t = 1000)]
    pub epochs: usize,

    /// Gradient descent step size
    #[arg(long, default_value_t = 0.05)]
    pub lr: f64,

    /// Ridge penalty on the weights
    #[arg(long, default_value_t = 1e-3)]
    pub l2: f64,
}

/// All arguments for the `ingest` command
#[derive(Args, Debug, Clone)]
pub struct IngestArgs {
    #[command(flatten)]
    pub paths: SourceArgs,
}

impl Default for RunArgs {
    fn default() -> Self {
        let cfg = PipelineConfig::default();
        Self {
            paths: SourceArgs {
                source:        cfg.source,
                artifacts_dir: cfg.artifacts_dir,
            },
            target: cfg.target_column,
            epochs: cfg.epochs,
            lr:     cfg.learning_rate,
            l2:     cfg.l2,
        }
    }
}

/// Convert CLI RunArgs into the application-layer PipelineConfig.
/// The application layer never sees clap types.
impl From<RunArgs> for PipelineConfig {
    fn from(a: RunArgs) -> Self {
        PipelineConfig {
            source:        a.paths.source,
            artifacts_dir: a.paths.artifacts_dir,
            target_column: a.target,
            epochs:        a.epochs,
            learning_rate: a.lr,
            l2:            a.l2,
        }
    }
}

impl From<IngestArgs> for PipelineConfig {
    fn from(a: IngestArgs) -> Self {
        PipelineConfig {
            source:        a.paths.source,
            artifacts_dir: a.paths.artifacts_dir,
            ..PipelineConfig::default()
        }
    }
}
