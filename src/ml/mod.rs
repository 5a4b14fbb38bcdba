// ============================================================
// Layer 5 — ML / Model Layer
// ============================================================
// Everything that does numeric model work lives here.
//
//   regression.rs — The model itself
//                   A ridge-regularised linear regression
//                   fitted by full-batch gradient descent,
//                   plus the R² score.
//
//   trainer.rs    — The training run
//                   Splits the label column off the encoded
//                   arrays, runs the epoch loop, logs metrics,
//                   saves the model and scores the test set.
//
// Reference: ndarray crate documentation

/// Linear regression model and R² metric
pub mod regression;

/// Epoch loop, metrics logging and model saving
pub mod trainer;
