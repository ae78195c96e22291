//! Predictor capability dispatch.

use ndarray::{Array1, ArrayView2};

use crate::encode::TrainingSchema;

use super::linear::{LinearModel, PredictionError};

/// A loaded regression model, with or without schema introspection.
///
/// Artifacts that record the ordered feature names they were fit on load as
/// [`SchemaAware`](Self::SchemaAware); artifacts without names load as
/// [`Basic`](Self::Basic). The aligner branches on which variant it received
/// — a basic model is a degraded mode (the expanded row passes through
/// unaligned), not an error.
#[derive(Debug, Clone)]
pub enum Predictor {
    /// Model without schema introspection.
    Basic(LinearModel),
    /// Model that exposes the ordered feature columns it was fit on.
    SchemaAware {
        model: LinearModel,
        schema: TrainingSchema,
    },
}

impl Predictor {
    /// Wrap a model without schema information.
    pub fn basic(model: LinearModel) -> Self {
        Self::Basic(model)
    }

    /// Wrap a model together with its training schema.
    pub fn schema_aware(model: LinearModel, schema: TrainingSchema) -> Self {
        Self::SchemaAware { model, schema }
    }

    /// The training schema, when the artifact recorded one.
    pub fn schema(&self) -> Option<&TrainingSchema> {
        match self {
            Self::Basic(_) => None,
            Self::SchemaAware { schema, .. } => Some(schema),
        }
    }

    /// The underlying linear model.
    pub fn model(&self) -> &LinearModel {
        match self {
            Self::Basic(model) => model,
            Self::SchemaAware { model, .. } => model,
        }
    }

    /// Predict for a sample-major matrix `[n_samples, n_features]`.
    pub fn predict(&self, features: ArrayView2<f32>) -> Result<Array1<f32>, PredictionError> {
        self.model().predict(features)
    }
}
