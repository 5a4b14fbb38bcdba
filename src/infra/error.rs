// ============================================================
// Layer 6 — Ingestion Error
// ============================================================
// The data ingestor reports every failure as ONE error kind.
// Whatever went wrong underneath (missing file, malformed CSV,
// permission denied, ...) is wrapped together with:
//
//   - the stage that was running when it failed
//   - the source location (file:line) of the failing call
//
// The location is captured with #[track_caller], so it points
// at the line inside the ingestor that produced the error,
// not at this module.
//
// Example message:
//   ingestion failed while reading the source dataset
//   [src/data/ingestion.rs:118:14]: Cannot open 'notebook/data/stud.csv'
//
// Reference: thiserror crate documentation
//            std::panic::Location

use std::{fmt, panic::Location};
use thiserror::Error;

/// The step of an ingestion run that produced an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestionStage {
    ReadSource,
    CreateDirectory,
    WriteRaw,
    Split,
    WriteTrain,
    WriteTest,
}

impl fmt::Display for IngestionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self {
            Self::ReadSource      => "reading the source dataset",
            Self::CreateDirectory => "creating the output directory",
            Self::WriteRaw        => "writing the raw dataset",
            Self::Split           => "splitting into train and test sets",
            Self::WriteTrain      => "writing the train set",
            Self::WriteTest       => "writing the test set",
        };
        f.write_str(what)
    }
}

/// Any failure of `DataIngestion::initiate_data_ingestion`.
#[derive(Debug, Error)]
#[error("ingestion failed while {stage} [{location}]: {source}")]
pub struct IngestionError {
    stage:    IngestionStage,
    location: &'static Location<'static>,
    #[source]
    source:   anyhow::Error,
}

impl IngestionError {
    /// Wrap `source`, recording the caller's file and line.
    #[track_caller]
    pub fn new(stage: IngestionStage, source: impl Into<anyhow::Error>) -> Self {
        Self {
            stage,
            location: Location::caller(),
            source:   source.into(),
        }
    }

    pub fn stage(&self) -> IngestionStage {
        self.stage
    }

    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// The underlying error, with its own context chain
    pub fn cause(&self) -> &anyhow::Error {
        &self.source
    }
}

/// Attach an ingestion stage to any fallible result.
///
/// Written as a plain `match` instead of `map_err` so that
/// #[track_caller] sees the real call site.
pub trait StageContext<T> {
    fn at_stage(self, stage: IngestionStage) -> Result<T, IngestionError>;
}

impl<T, E> StageContext<T> for Result<T, E>
where
    E: Into<anyhow::Error>,
{
    #[track_caller]
    fn at_stage(self, stage: IngestionStage) -> Result<T, IngestionError> {
        match self {
            Ok(value) => Ok(value),
            Err(e)    => Err(IngestionError::new(stage, e)),
        }
    }
}
