// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// The entry point for all user interaction. Uses `clap` to
// parse arguments and delegates the work to Layer 2.
//
// Commands:
//   1. `run`    — ingest, transform, train, print R² (default)
//   2. `ingest` — ingest only, print the train/test paths
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, IngestArgs, RunArgs};

use crate::application::pipeline_use_case::PipelineUseCase;

#[derive(Parser, Debug)]
#[command(
    name = "student-score-pipeline",
    version,
    about = "Ingest a student-performance CSV, split it 80/20, and fit a score regressor."
)]
pub struct Cli {
    /// The subcommand to run; `run` with default flags when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Some(Commands::Run(args))    => run_pipeline(args),
            Some(Commands::Ingest(args)) => run_ingest(args),
            None                         => run_pipeline(RunArgs::default()),
        }
    }
}

/// Handles the `run` subcommand.
fn run_pipeline(args: RunArgs) -> Result<()> {
    tracing::info!("Starting pipeline on '{}'", args.paths.source.display());

    let score = PipelineUseCase::new(args.into()).execute()?;

    println!("{score}");
    Ok(())
}

/// Handles the `ingest` subcommand.
fn run_ingest(args: IngestArgs) -> Result<()> {
    let (train, test) = PipelineUseCase::new(args.into()).ingest_only()?;

    println!("{}", train.display());
    println!("{}", test.display());
    Ok(())
}
