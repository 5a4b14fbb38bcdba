//! Student score pipeline.
//!
//! Reads a student-performance CSV, writes a raw copy, splits it 80/20
//! with a fixed seed into train/test CSVs, then encodes both sets and
//! fits a linear regressor whose test R² the binary prints.
//!
//! Layers, outermost first:
//!
//! | Layer | Module        | Job                                   |
//! |-------|---------------|---------------------------------------|
//! | 1     | [`cli`]         | argument parsing, printing            |
//! | 2     | [`application`] | stage orchestration                   |
//! | 3     | [`domain`]      | `Dataset` and the `DatasetSource` trait |
//! | 4     | [`data`]        | CSV I/O, ingestion, split, encoding   |
//! | 5     | [`ml`]          | regression and R²                     |
//! | 6     | [`infra`]       | error kind, artifacts, metrics log    |

pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod infra;
pub mod ml;

pub use data::ingestion::{DataIngestion, IngestionConfig};
pub use infra::error::{IngestionError, IngestionStage};
