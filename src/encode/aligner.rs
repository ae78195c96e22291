//! One-hot expansion and schema alignment.
//!
//! Provides [`expand`] (raw input → one-row encoded vector) and [`align`]
//! (reindex the expansion onto a [`TrainingSchema`]).

use ndarray::{Array1, Array2, ArrayView1};

use super::input::RawInput;
use super::schema::{one_hot_name, TrainingSchema};

/// A single-row numeric record ready for prediction.
///
/// Column names and values are kept together so callers can inspect what was
/// fed to the model. Created fresh per prediction request and discarded
/// afterwards; nothing here persists.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    columns: Vec<String>,
    values: Array1<f32>,
}

impl FeatureVector {
    /// Column names in output order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Values in column order.
    pub fn values(&self) -> ArrayView1<'_, f32> {
        self.values.view()
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the vector has no columns.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get a value by column name.
    pub fn get(&self, name: &str) -> Option<f32> {
        self.columns
            .iter()
            .position(|c| c == name)
            .map(|i| self.values[i])
    }

    /// View the vector as a one-row sample-major matrix `[1, n_columns]`.
    ///
    /// This is the shape a predictor's batch interface takes.
    pub fn as_matrix(&self) -> Array2<f32> {
        let n = self.values.len();
        self.values
            .clone()
            .into_shape_with_order((1, n))
            .expect("one-row reshape cannot fail")
    }
}

/// Normalize a value to a finite float.
///
/// Non-finite residue stands in for anything the source data could not
/// coerce; it becomes `0.0` instead of failing the request.
#[inline]
fn coerce(value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Expand a raw input into its one-row encoding, without a schema.
///
/// Numeric fields keep their declared order and values. Each categorical
/// field contributes exactly one hot column named `<field>_<value>` holding
/// `1.0` (the one-hot encoding of a one-row table has a single known
/// category per field).
pub fn expand(input: &RawInput) -> FeatureVector {
    let mut columns = Vec::with_capacity(input.len());
    let mut values = Vec::with_capacity(input.len());

    for (name, value) in input.numeric_fields() {
        columns.push(name.clone());
        values.push(coerce(*value));
    }
    for (field, value) in input.categorical_fields() {
        columns.push(one_hot_name(field, value));
        values.push(1.0);
    }

    FeatureVector {
        columns,
        values: Array1::from_vec(values),
    }
}

/// Reindex a raw input's expansion onto a training schema.
///
/// The output has exactly the schema's columns, in schema order. A schema
/// column the expansion doesn't produce (a cold one-hot column, or a numeric
/// field the input omitted) is filled with `0.0`; an expanded column the
/// schema doesn't know is dropped. This is the contract a trained model
/// requires bit-for-bit between training and inference.
pub fn align(input: &RawInput, schema: &TrainingSchema) -> FeatureVector {
    let mut values = Array1::zeros(schema.len());

    for (name, value) in input.numeric_fields() {
        if let Some(i) = schema.position(name) {
            values[i] = coerce(*value);
        }
    }
    for (field, value) in input.categorical_fields() {
        if let Some(i) = schema.position(&one_hot_name(field, value)) {
            values[i] = 1.0;
        }
    }

    FeatureVector {
        columns: schema.columns().to_vec(),
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> RawInput {
        RawInput::new()
            .add_numeric("Avg_Temp", 21.0)
            .add_numeric("Avg_rainfall", 1100.0)
            .add_numeric("Pesticides(tonnes)", 15000.0)
            .add_categorical("Area", "India")
            .add_categorical("Item", "Wheat")
    }

    fn sample_schema() -> TrainingSchema {
        TrainingSchema::from_names(&[
            "Avg_Temp",
            "Avg_rainfall",
            "Pesticides(tonnes)",
            "Area_India",
            "Area_USA",
            "Item_Wheat",
            "Item_Maize",
        ])
    }

    #[test]
    fn expand_numeric_then_one_hot() {
        let vector = expand(&sample_input());

        assert_eq!(
            vector.columns(),
            &[
                "Avg_Temp",
                "Avg_rainfall",
                "Pesticides(tonnes)",
                "Area_India",
                "Item_Wheat",
            ]
        );
        assert_eq!(
            vector.values().to_vec(),
            vec![21.0, 1100.0, 15000.0, 1.0, 1.0]
        );
    }

    #[test]
    fn align_matches_schema_order() {
        let vector = align(&sample_input(), &sample_schema());

        assert_eq!(vector.columns(), sample_schema().columns());
        assert_eq!(
            vector.values().to_vec(),
            vec![21.0, 1100.0, 15000.0, 1.0, 0.0, 1.0, 0.0]
        );
    }

    #[test]
    fn align_unseen_category_stays_cold() {
        let input = RawInput::new()
            .add_numeric("Avg_Temp", 21.0)
            .add_numeric("Avg_rainfall", 1100.0)
            .add_numeric("Pesticides(tonnes)", 15000.0)
            .add_categorical("Area", "Brazil")
            .add_categorical("Item", "Wheat");
        let vector = align(&input, &sample_schema());

        // No Area_Brazil column appears, and both known Area columns are cold.
        assert_eq!(vector.len(), 7);
        assert_eq!(vector.get("Area_India"), Some(0.0));
        assert_eq!(vector.get("Area_USA"), Some(0.0));
        assert_eq!(vector.get("Area_Brazil"), None);
        assert_eq!(vector.get("Item_Wheat"), Some(1.0));
    }

    #[test]
    fn align_drops_columns_missing_from_schema() {
        let input = sample_input().add_numeric("Humidity", 55.0);
        let vector = align(&input, &sample_schema());

        assert_eq!(vector.len(), 7);
        assert_eq!(vector.get("Humidity"), None);
    }

    #[test]
    fn align_fills_omitted_numeric_with_zero() {
        let input = RawInput::new().add_categorical("Area", "India");
        let vector = align(&input, &sample_schema());

        assert_eq!(vector.get("Avg_Temp"), Some(0.0));
        assert_eq!(vector.get("Area_India"), Some(1.0));
    }

    #[test]
    fn coerce_non_finite_to_zero() {
        let input = RawInput::new()
            .add_numeric("Avg_Temp", f32::NAN)
            .add_numeric("Avg_rainfall", f32::INFINITY);

        let expanded = expand(&input);
        assert_eq!(expanded.values().to_vec(), vec![0.0, 0.0]);

        let schema = TrainingSchema::from_names(&["Avg_Temp", "Avg_rainfall"]);
        let aligned = align(&input, &schema);
        assert_eq!(aligned.values().to_vec(), vec![0.0, 0.0]);
    }

    #[test]
    fn numeric_change_is_local() {
        let a = align(&sample_input(), &sample_schema());
        let b = align(
            &RawInput::new()
                .add_numeric("Avg_Temp", 25.0)
                .add_numeric("Avg_rainfall", 1100.0)
                .add_numeric("Pesticides(tonnes)", 15000.0)
                .add_categorical("Area", "India")
                .add_categorical("Item", "Wheat"),
            &sample_schema(),
        );

        let differing: Vec<_> = a
            .columns()
            .iter()
            .zip(a.values().iter().zip(b.values().iter()))
            .filter(|(_, (x, y))| x != y)
            .map(|(c, _)| c.as_str())
            .collect();
        assert_eq!(differing, vec!["Avg_Temp"]);
    }

    #[test]
    fn as_matrix_is_one_row() {
        let vector = align(&sample_input(), &sample_schema());
        let matrix = vector.as_matrix();
        assert_eq!(matrix.dim(), (1, 7));
        assert_eq!(matrix[[0, 0]], 21.0);
        assert_eq!(matrix[[0, 3]], 1.0);
    }

    #[test]
    fn align_duplicate_field_last_wins() {
        let input = RawInput::new()
            .add_numeric("Avg_Temp", 10.0)
            .add_numeric("Avg_Temp", 20.0);
        let schema = TrainingSchema::from_names(&["Avg_Temp"]);
        let vector = align(&input, &schema);
        assert_eq!(vector.values().to_vec(), vec![20.0]);
    }
}
