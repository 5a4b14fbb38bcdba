// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong to one stage:
//
//   error.rs     — The ingestion error kind
//                  Wraps any failure of the data ingestor with
//                  the stage it happened in and the source
//                  location of the failing call.
//
//   artifacts.rs — JSON artifact persistence
//                  Saves the run's config, the fitted
//                  preprocessor and the fitted model under
//                  the artifacts directory.
//
//   metrics.rs   — Training metrics logging
//                  Writes per-epoch training loss to a CSV
//                  file for later analysis and plotting.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling)

/// Single error kind for ingestion failures
pub mod error;

/// JSON artifact saving and loading
pub mod artifacts;

/// Training metrics CSV logger
pub mod metrics;
