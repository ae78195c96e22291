//! Regression artifact loading.
//!
//! Parses the JSON document the training pipeline exports. These are
//! "foreign types" used only for parsing; [`RegressionDocument::into_predictor`]
//! converts to native types with validation.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::encode::TrainingSchema;

use super::linear::LinearModel;
use super::predictor::Predictor;

/// Error type for artifact loading and conversion.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read model artifact {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("malformed model artifact: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("artifact has no coefficients")]
    NoCoefficients,
    #[error("feature name count {names} doesn't match coefficient count {coefficients}")]
    FeatureNameMismatch { names: usize, coefficients: usize },
}

/// Serialized linear regression artifact.
///
/// The document is produced by an external training pipeline and treated as
/// a black box beyond this contract: per-feature coefficients, an intercept,
/// and optionally the ordered feature names the model was fit on (including
/// one-hot expanded names such as `Area_India`). The objective tag is
/// carried for diagnostics but not interpreted.
///
/// ```json
/// {
///   "coefficients": [12.5, 0.04, -0.8],
///   "intercept": 1020.0,
///   "feature_names": ["Avg_Temp", "Avg_rainfall", "Pesticides(tonnes)"],
///   "objective": "reg:squarederror"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionDocument {
    /// One coefficient per feature, in training order.
    pub coefficients: Vec<f32>,
    /// Additive intercept.
    pub intercept: f32,
    /// Ordered feature names (optional).
    #[serde(default)]
    pub feature_names: Option<Vec<String>>,
    /// Objective the model was trained with (optional, uninterpreted).
    #[serde(default)]
    pub objective: Option<String>,
}

impl RegressionDocument {
    /// Parse a document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ArtifactError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a document from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ArtifactError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Parse a document from a file on disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ArtifactError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Convert to a native [`Predictor`].
    ///
    /// Documents that carry feature names become
    /// [`Predictor::SchemaAware`]; documents without names become
    /// [`Predictor::Basic`].
    ///
    /// # Errors
    ///
    /// - [`ArtifactError::NoCoefficients`] for an empty coefficient list
    /// - [`ArtifactError::FeatureNameMismatch`] when the name count differs
    ///   from the coefficient count
    pub fn into_predictor(self) -> Result<Predictor, ArtifactError> {
        if self.coefficients.is_empty() {
            return Err(ArtifactError::NoCoefficients);
        }

        let model = LinearModel::from_coefficients(&self.coefficients, self.intercept);

        match self.feature_names {
            Some(names) => {
                if names.len() != model.n_features() {
                    return Err(ArtifactError::FeatureNameMismatch {
                        names: names.len(),
                        coefficients: model.n_features(),
                    });
                }
                Ok(Predictor::schema_aware(model, TrainingSchema::new(names)))
            }
            None => Ok(Predictor::basic(model)),
        }
    }
}

/// Load a predictor from a JSON artifact on disk.
///
/// Convenience for [`RegressionDocument::from_path`] followed by
/// [`RegressionDocument::into_predictor`].
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<Predictor, ArtifactError> {
    RegressionDocument::from_path(path)?.into_predictor()
}
