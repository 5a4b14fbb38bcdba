// ============================================================
// Layer 5 — Linear Regression
// ============================================================
// A ridge-regularised linear model fitted with full-batch
// gradient descent:
//
//   ŷ    = X·w + b
//   loss = mean((ŷ - y)²) + l2 · |w|²
//
//   ∂loss/∂w = (2/n) · Xᵀ(ŷ - y) + 2 · l2 · w
//   ∂loss/∂b = (2/n) · Σ(ŷ - y)
//
// The features arrive standard-scaled from the preprocessor,
// so a single learning rate works for every weight.
//
// Reference: ndarray crate documentation

use anyhow::{bail, Result};
use ndarray::{Array1, ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};

/// Fitted weights of a linear model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRegression {
    pub weights: Array1<f64>,
    pub bias:    f64,
}

impl LinearRegression {
    /// A model with every weight at zero
    pub fn zeros(n_features: usize) -> Self {
        Self {
            weights: Array1::zeros(n_features),
            bias:    0.0,
        }
    }

    pub fn predict(&self, x: ArrayView2<f64>) -> Array1<f64> {
        x.dot(&self.weights) + self.bias
    }

    /// One gradient descent step. Returns the MSE before the step.
    pub fn step(
        &mut self,
        x:             ArrayView2<f64>,
        y:             ArrayView1<f64>,
        learning_rate: f64,
        l2:            f64,
    ) -> f64 {
        let n   = x.nrows().max(1) as f64;
        let err = self.predict(x) - &y;
        let mse = err.mapv(|e| e * e).sum() / n;

        let grad_w = x.t().dot(&err) * (2.0 / n) + &self.weights * (2.0 * l2);
        let grad_b = err.sum() * (2.0 / n);

        self.weights.scaled_add(-learning_rate, &grad_w);
        self.bias -= learning_rate * grad_b;

        mse
    }
}

/// Coefficient of determination.
///
/// 1.0 is a perfect fit; 0.0 matches always predicting the mean;
/// negative values are worse than that. When `y_true` is
/// constant the score is 1.0 for a perfect prediction and 0.0
/// otherwise.
pub fn r2_score(y_true: ArrayView1<f64>, y_pred: ArrayView1<f64>) -> Result<f64> {
    if y_true.is_empty() {
        bail!("r2_score needs at least one sample");
    }
    if y_true.len() != y_pred.len() {
        bail!(
            "r2_score length mismatch: {} true vs {} predicted",
            y_true.len(),
            y_pred.len()
        );
    }

    let mean   = y_true.sum() / y_true.len() as f64;
    let ss_res: f64 = y_true.iter().zip(y_pred).map(|(t, p)| (t - p).powi(2)).sum();
    let ss_tot: f64 = y_true.iter().map(|t| (t - mean).powi(2)).sum();

    if ss_tot == 0.0 {
        return Ok(if ss_res == 0.0 { 1.0 } else { 0.0 });
    }
    Ok(1.0 - ss_res / ss_tot)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array2};

    #[test]
    fn test_r2_perfect_and_mean() {
        let y = array![1.0, 2.0, 3.0];
        assert_eq!(r2_score(y.view(), y.view()).unwrap(), 1.0);

        let mean = array![2.0, 2.0, 2.0];
        assert_eq!(r2_score(y.view(), mean.view()).unwrap(), 0.0);
    }

    #[test]
    fn test_r2_constant_target() {
        let y = array![5.0, 5.0];
        assert_eq!(r2_score(y.view(), y.view()).unwrap(), 1.0);
        assert_eq!(r2_score(y.view(), array![4.0, 6.0].view()).unwrap(), 0.0);
    }

    #[test]
    fn test_r2_empty_is_error() {
        let empty = Array1::<f64>::zeros(0);
        assert!(r2_score(empty.view(), empty.view()).is_err());
    }

    #[test]
    fn test_gradient_descent_recovers_line() {
        // y = 3x + 10 on a centred feature
        let x = Array2::from_shape_fn((20, 1), |(i, _)| i as f64 / 10.0 - 1.0);
        let y = x.column(0).mapv(|v| 3.0 * v + 10.0);

        let mut model = LinearRegression::zeros(1);
        let last      = (0..2000)
            .map(|_| model.step(x.view(), y.view(), 0.1, 0.0))
            .last()
            .unwrap();

        assert!(last < 1e-6);
        assert!((model.weights[0] - 3.0).abs() < 1e-3);
        assert!((model.bias - 10.0).abs() < 1e-3);
    }
}
