//! Linear regression model data structure.

use ndarray::{Array1, ArrayView1, ArrayView2};
use thiserror::Error;

/// Error from invoking a model's predict operation.
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("feature count mismatch: model expects {expected} features, input has {got}")]
    FeatureCountMismatch { expected: usize, got: usize },
}

/// Linear regression model (weights + intercept).
///
/// Stores one coefficient per feature and a scalar intercept. Prediction is
/// a dot product over a sample-major matrix:
///
/// ```text
/// output[sample] = features[sample, :] · weights + intercept
/// ```
///
/// The input width must equal the coefficient count; a mismatch is a typed
/// error rather than a panic so callers can surface it as a request failure.
///
/// # Example
///
/// ```
/// use cropcast::LinearModel;
/// use ndarray::array;
///
/// // y = 0.5*x0 + 0.3*x1 + 0.1
/// let model = LinearModel::new(array![0.5, 0.3], 0.1);
///
/// let features = array![[1.0, 2.0]];
/// let output = model.predict(features.view()).unwrap();
/// assert!((output[0] - 1.2).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    /// One coefficient per feature.
    weights: Array1<f32>,
    /// Additive intercept.
    intercept: f32,
}

impl LinearModel {
    /// Create a model from coefficients and an intercept.
    pub fn new(weights: Array1<f32>, intercept: f32) -> Self {
        Self { weights, intercept }
    }

    /// Create a model from a coefficient slice.
    pub fn from_coefficients(coefficients: &[f32], intercept: f32) -> Self {
        Self::new(Array1::from_vec(coefficients.to_vec()), intercept)
    }

    /// Number of input features.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.weights.len()
    }

    /// Get the coefficient for a feature.
    #[inline]
    pub fn weight(&self, feature: usize) -> f32 {
        self.weights[feature]
    }

    /// Coefficients as a view.
    #[inline]
    pub fn weights(&self) -> ArrayView1<'_, f32> {
        self.weights.view()
    }

    /// The intercept.
    #[inline]
    pub fn intercept(&self) -> f32 {
        self.intercept
    }

    /// Predict for a batch of samples.
    ///
    /// # Arguments
    ///
    /// * `features` - Sample-major matrix `[n_samples, n_features]`
    ///
    /// # Errors
    ///
    /// [`PredictionError::FeatureCountMismatch`] when the matrix width
    /// doesn't equal the model's feature count.
    pub fn predict(&self, features: ArrayView2<f32>) -> Result<Array1<f32>, PredictionError> {
        if features.ncols() != self.n_features() {
            return Err(PredictionError::FeatureCountMismatch {
                expected: self.n_features(),
                got: features.ncols(),
            });
        }

        let mut output = features.dot(&self.weights);
        output += self.intercept;
        Ok(output)
    }

    /// Predict for a single sample.
    pub fn predict_row(&self, features: ArrayView1<f32>) -> Result<f32, PredictionError> {
        if features.len() != self.n_features() {
            return Err(PredictionError::FeatureCountMismatch {
                expected: self.n_features(),
                got: features.len(),
            });
        }

        Ok(features.dot(&self.weights) + self.intercept)
    }
}
