//! Process-wide cached resources.
//!
//! Loading the model artifact and the historical table is the only I/O in an
//! otherwise pure-computation path, so both are loaded once per [`Session`]
//! and shared read-only afterwards. The initialization point is explicit —
//! the first accessor call — rather than ambient global state.

use std::path::PathBuf;

use once_cell::sync::OnceCell;
use thiserror::Error;
use tracing::info;

use crate::data::{CropTable, TableError, YieldSummary};
use crate::model::{load_model, ArtifactError, Predictor};
use crate::predict::{align_and_predict, AlignmentError, Prediction};
use crate::encode::RawInput;

/// Error type for session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
    #[error(transparent)]
    Table(#[from] TableError),
    #[error(transparent)]
    Prediction(#[from] AlignmentError),
}

/// Once-loaded model artifact and crop table bound to their file paths.
///
/// The first call to [`model`](Self::model) or [`table`](Self::table) loads
/// and memoizes the resource; later calls return the cached reference.
/// Either load can fail repeatedly (a broken path stays broken), but a
/// successful load is permanent for the session's lifetime.
///
/// # Example
///
/// ```no_run
/// use cropcast::{RawInput, Session};
///
/// let session = Session::new("models/model.json", "data/final_crop_data.csv");
/// let reference = session.reference_average("India", Some("Wheat")).unwrap();
/// let input = RawInput::new()
///     .add_numeric("Avg_Temp", 21.0)
///     .add_categorical("Area", "India");
/// let prediction = session.predict(&input, reference).unwrap();
/// ```
#[derive(Debug)]
pub struct Session {
    model_path: PathBuf,
    data_path: PathBuf,
    model: OnceCell<Predictor>,
    table: OnceCell<CropTable>,
}

impl Session {
    /// Bind a session to a model artifact path and a crop data path.
    ///
    /// Nothing is loaded until first access.
    pub fn new(model_path: impl Into<PathBuf>, data_path: impl Into<PathBuf>) -> Self {
        Self {
            model_path: model_path.into(),
            data_path: data_path.into(),
            model: OnceCell::new(),
            table: OnceCell::new(),
        }
    }

    /// The loaded predictor, loading it on first access.
    pub fn model(&self) -> Result<&Predictor, SessionError> {
        self.model.get_or_try_init(|| {
            let predictor = load_model(&self.model_path)?;
            info!(
                path = %self.model_path.display(),
                n_features = predictor.model().n_features(),
                schema_aware = predictor.schema().is_some(),
                "loaded regression artifact"
            );
            Ok(predictor)
        })
    }

    /// The loaded crop table, loading it on first access.
    pub fn table(&self) -> Result<&CropTable, SessionError> {
        self.table.get_or_try_init(|| {
            let table = CropTable::from_path(&self.data_path)?;
            info!(
                path = %self.data_path.display(),
                records = table.len(),
                "loaded crop table"
            );
            Ok(table)
        })
    }

    /// Mean historical yield for a region (and optionally one crop).
    ///
    /// `None` when the selection is empty — the caller decides whether to
    /// predict without a reference.
    pub fn reference_average(
        &self,
        area: &str,
        item: Option<&str>,
    ) -> Result<Option<f32>, SessionError> {
        let table = self.table()?;
        Ok(YieldSummary::compute(table.select(area, item)).map(|s| s.mean))
    }

    /// Yield summary for a region (and optionally one crop).
    pub fn yield_summary(
        &self,
        area: &str,
        item: Option<&str>,
    ) -> Result<Option<YieldSummary>, SessionError> {
        let table = self.table()?;
        Ok(YieldSummary::compute(table.select(area, item)))
    }

    /// Predict with the session's model.
    ///
    /// Convenience for [`align_and_predict`] against the cached predictor.
    pub fn predict(
        &self,
        input: &RawInput,
        reference: Option<f32>,
    ) -> Result<Prediction, SessionError> {
        let model = self.model()?;
        Ok(align_and_predict(input, model, reference)?)
    }
}
