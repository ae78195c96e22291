//! Regression model loading and prediction.
//!
//! The model artifact is an opaque, versionless JSON document produced by an
//! external training pipeline: per-feature coefficients, an intercept, and
//! optionally the ordered feature names the model was fit on. This module
//! parses the document ([`RegressionDocument`]), converts it to a native
//! [`LinearModel`], and wraps the result in a [`Predictor`] that records
//! whether the schema is available.

mod artifact;
mod linear;
mod predictor;

pub use artifact::{load_model, ArtifactError, RegressionDocument};
pub use linear::{LinearModel, PredictionError};
pub use predictor::Predictor;
