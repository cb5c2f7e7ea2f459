//! Least-squares price model.
//!
//! Columns are standardized by training mean/std, the normal equations get a
//! small ridge term so redundant indicator blocks stay solvable, and the
//! system goes through a Cholesky factorization. No iteration and no rng:
//! the fit is deterministic for identical inputs.

use ndarray::{Array1, Array2, ArrayView1, Axis};

use crate::data::features::FeatureRow;
use crate::error::{PredictError, TrainError};

/// Ridge scale applied per training row; keeps the gram matrix positive
/// definite when one-hot blocks are linearly dependent.
const RIDGE_PER_ROW: f64 = 1e-6;

#[derive(Debug, Clone)]
pub struct LinearModel {
    weights: Array1<f64>,
    intercept: f64,
    mean: Array1<f64>,
    std: Array1<f64>,
}

impl LinearModel {
    /// Fit coefficients on the assembled training table.
    pub fn fit(x: &Array2<f64>, y: &Array1<f64>) -> Result<LinearModel, TrainError> {
        let rows = x.nrows();
        let cols = x.ncols();
        if rows == 0 || cols == 0 {
            return Err(TrainError::EmptyDataset);
        }
        if y.len() != rows {
            return Err(TrainError::DegenerateFit(format!(
                "{rows} feature rows against {} labels",
                y.len()
            )));
        }

        let mean = x.mean_axis(Axis(0)).ok_or(TrainError::EmptyDataset)?;
        // Population std; constant columns get divisor 1 so they standardize
        // to zero instead of NaN.
        let std = x
            .std_axis(Axis(0), 0.0)
            .mapv(|s| if s > 0.0 { s } else { 1.0 });
        let z = (x - &mean) / &std;

        let y_mean = y.mean().ok_or(TrainError::EmptyDataset)?;
        let y_centered = y - y_mean;

        let mut gram = z.t().dot(&z);
        let ridge = RIDGE_PER_ROW * rows as f64;
        for d in 0..cols {
            gram[[d, d]] += ridge;
        }
        let rhs = z.t().dot(&y_centered);
        let weights = solve_spd(&gram, &rhs)?;

        Ok(LinearModel {
            weights,
            intercept: y_mean,
            mean,
            std,
        })
    }

    /// Number of feature columns the model was fit on.
    pub fn width(&self) -> usize {
        self.weights.len()
    }

    /// Predict one canonical feature row.
    pub fn predict(&self, row: &FeatureRow) -> Result<f64, PredictError> {
        if row.len() != self.width() {
            return Err(PredictError::SchemaMismatch {
                expected: self.width(),
                actual: row.len(),
            });
        }
        let features = ArrayView1::from(row.values());
        let z = (&features - &self.mean) / &self.std;
        Ok(z.dot(&self.weights) + self.intercept)
    }

    /// In-sample predictions for a whole training table, for fit
    /// diagnostics.
    pub(crate) fn predict_all(&self, x: &Array2<f64>) -> Array1<f64> {
        let z = (x - &self.mean) / &self.std;
        z.dot(&self.weights) + self.intercept
    }
}

/// Share of label variance explained, the fit diagnostic reported at
/// startup.
pub fn r_squared(predicted: &Array1<f64>, actual: &Array1<f64>) -> f64 {
    let mean = actual.mean().unwrap_or(0.0);
    let total: f64 = actual.iter().map(|v| (v - mean).powi(2)).sum();
    if total == 0.0 {
        return 1.0;
    }
    let residual: f64 = predicted
        .iter()
        .zip(actual)
        .map(|(p, a)| (a - p).powi(2))
        .sum();
    1.0 - residual / total
}

/// Cholesky solve of a symmetric positive-definite system. The ridge term
/// guarantees positive pivots; anything else means the inputs were not a
/// valid gram matrix.
fn solve_spd(a: &Array2<f64>, b: &Array1<f64>) -> Result<Array1<f64>, TrainError> {
    let n = a.nrows();
    let mut l = Array2::<f64>::zeros((n, n));
    for i in 0..n {
        for j in 0..=i {
            let mut sum = a[[i, j]];
            for k in 0..j {
                sum -= l[[i, k]] * l[[j, k]];
            }
            if i == j {
                if !(sum.is_finite() && sum > 0.0) {
                    return Err(TrainError::DegenerateFit(format!(
                        "non-positive pivot at column {i}"
                    )));
                }
                l[[i, j]] = sum.sqrt();
            } else {
                l[[i, j]] = sum / l[[j, j]];
            }
        }
    }
    // forward then back substitution
    let mut w = Array1::<f64>::zeros(n);
    for i in 0..n {
        let mut sum = b[i];
        for k in 0..i {
            sum -= l[[i, k]] * w[k];
        }
        w[i] = sum / l[[i, i]];
    }
    for i in (0..n).rev() {
        let mut sum = w[i];
        for k in (i + 1)..n {
            sum -= l[[k, i]] * w[k];
        }
        w[i] = sum / l[[i, i]];
    }
    Ok(w)
}
