//! cropcast: schema-stable feature encoding for crop yield regression.
//!
//! Converts raw, human-entered inputs (numeric climate fields plus region and
//! crop selections) into a feature vector whose column set and order exactly
//! match what a pre-trained linear regression model was fit on, then invokes
//! the model for a scalar yield prediction.
//!
//! # Key Types
//!
//! - [`RawInput`] / [`FeatureVector`] - Raw fields and their aligned encoding
//! - [`TrainingSchema`] - Ordered feature columns the model was fit on
//! - [`Predictor`] - Loaded regression model, with or without a schema
//! - [`CropTable`] - Historical records backing reference statistics
//! - [`Session`] - Once-loaded, shared-read-only model and table
//!
//! # Prediction
//!
//! Use [`align_and_predict`] with a loaded [`Predictor`]. Inputs whose
//! categorical values were never seen during training still predict: every
//! one-hot column for that field stays zero.
//!
//! # Loading Artifacts
//!
//! Use [`load_model`] to read a JSON regression artifact exported by the
//! training pipeline. See the [`model`] module for details.

// Re-export approx traits for users who want to compare predictions
pub use approx;

pub mod data;
pub mod encode;
pub mod model;
pub mod predict;
pub mod session;

// =============================================================================
// Convenience Re-exports
// =============================================================================

// Encoding types (most callers start here)
pub use encode::{FeatureVector, RawInput, TrainingSchema};

// Model types and artifact loading
pub use model::{
    load_model, ArtifactError, LinearModel, PredictionError, Predictor, RegressionDocument,
};

// The prediction path
pub use predict::{align_and_predict, AlignmentError, Outlook, Prediction};

// Historical data
pub use data::{CropRecord, CropTable, TableError, YieldSummary};

// Shared process-wide resources
pub use session::{Session, SessionError};
