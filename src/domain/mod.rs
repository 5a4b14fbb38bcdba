// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs and traits that define what the pipeline
// works with.
//
// Rules for this layer:
//   - NO file I/O
//   - NO ndarray or model code
//   - Only plain Rust structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A tabular dataset held in memory
pub mod dataset;

// Core abstractions (traits) that other layers implement
pub mod traits;
