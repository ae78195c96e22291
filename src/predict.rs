//! The prediction request path.
//!
//! [`align_and_predict`] is the single entry point a caller invokes per
//! request: encode the raw input, align it to the model's schema when one is
//! available, predict, and attach a qualitative outlook against an optional
//! reference average.

use thiserror::Error;

use crate::encode::{align, expand, FeatureVector, RawInput};
use crate::model::{PredictionError, Predictor};

/// Qualitative reading of a prediction against a reference average.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outlook {
    /// Prediction exceeds the reference average.
    AboveAverage,
    /// Prediction is at or below the reference average.
    BelowAverage,
    /// No reference average was supplied.
    Unavailable,
}

/// A single scalar prediction with its qualitative outlook.
///
/// Ephemeral: produced per request and discarded after display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Predicted yield value.
    pub value: f32,
    /// Reading against the reference average, when one was supplied.
    pub outlook: Outlook,
}

/// Error type for a failed prediction request.
#[derive(Debug, Error)]
pub enum AlignmentError {
    /// The underlying model call failed (a shape mismatch that survived
    /// reindexing). Surfaced to the caller, not retried; no outlook is
    /// computed.
    #[error("model prediction failed: {0}")]
    ModelPredictionFailed(#[from] PredictionError),
}

/// Encode a raw input for a predictor.
///
/// Schema-aware predictors get the expansion reindexed onto their schema;
/// basic predictors get the expanded row as constructed — a degraded mode,
/// not an error.
pub fn encode_for(input: &RawInput, predictor: &Predictor) -> FeatureVector {
    match predictor.schema() {
        Some(schema) => align(input, schema),
        None => expand(input),
    }
}

/// Convert a raw input into the model's feature schema and predict.
///
/// Each call is independent and idempotent given identical inputs and an
/// unchanged model. With a `reference` average the outlook reads
/// above/below average (a tie reads as below, matching the historical
/// dashboards this feeds); without one the outlook is
/// [`Outlook::Unavailable`] rather than a guess.
///
/// # Errors
///
/// [`AlignmentError::ModelPredictionFailed`] when the model rejects the
/// aligned matrix. Missing schema and non-numeric residue are normalized
/// instead of raised.
///
/// # Example
///
/// ```
/// use cropcast::{align_and_predict, LinearModel, Predictor, RawInput, TrainingSchema};
/// use ndarray::array;
///
/// let predictor = Predictor::schema_aware(
///     LinearModel::new(array![2.0, 10.0], 100.0),
///     TrainingSchema::from_names(&["Avg_rainfall", "Area_India"]),
/// );
/// let input = RawInput::new()
///     .add_numeric("Avg_rainfall", 50.0)
///     .add_categorical("Area", "India");
///
/// let prediction = align_and_predict(&input, &predictor, None).unwrap();
/// assert_eq!(prediction.value, 210.0);
/// ```
pub fn align_and_predict(
    input: &RawInput,
    predictor: &Predictor,
    reference: Option<f32>,
) -> Result<Prediction, AlignmentError> {
    let vector = encode_for(input, predictor);
    let outputs = predictor.predict(vector.as_matrix().view())?;
    let value = outputs[0];

    let outlook = match reference {
        Some(average) if value > average => Outlook::AboveAverage,
        Some(_) => Outlook::BelowAverage,
        None => Outlook::Unavailable,
    };

    Ok(Prediction { value, outlook })
}
