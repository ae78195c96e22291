//! Training schema definitions.
//!
//! This module defines the ordered column set a regression model was fit on.

use std::collections::HashMap;

/// Column name produced by one-hot encoding a categorical field.
///
/// A field `Area` with value `"India"` encodes to the column `Area_India`.
/// This is the naming rule the training pipeline uses when it expands
/// categorical columns, so inference must reproduce it byte-for-byte.
#[inline]
pub fn one_hot_name(field: &str, value: &str) -> String {
    format!("{field}_{value}")
}

/// Ordered feature columns a model was fit on.
///
/// Contains both plain numeric column names and the expanded
/// `<field>_<value>` names produced by one-hot encoding the categorical
/// columns observed during training. The schema is owned by the loaded model
/// and immutable after load; inference-time features must match it exactly,
/// in order.
///
/// # Example
///
/// ```
/// use cropcast::TrainingSchema;
///
/// let schema = TrainingSchema::new(vec![
///     "Avg_Temp".to_string(),
///     "Area_India".to_string(),
/// ]);
///
/// assert_eq!(schema.len(), 2);
/// assert_eq!(schema.position("Area_India"), Some(1));
/// assert_eq!(schema.position("Area_USA"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrainingSchema {
    /// Column names in training order.
    columns: Vec<String>,

    /// Column name → index mapping.
    index: HashMap<String, usize>,
}

impl TrainingSchema {
    /// Create a schema from column names in training order.
    pub fn new(columns: Vec<String>) -> Self {
        let index = columns
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        Self { columns, index }
    }

    /// Create a schema from string slices.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        Self::new(names.iter().map(|n| n.as_ref().to_string()).collect())
    }

    /// Number of columns in the schema.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the schema has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column names in training order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Get a column name by index.
    pub fn column(&self, index: usize) -> Option<&str> {
        self.columns.get(index).map(String::as_str)
    }

    /// Get the index of a column by name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Check whether a column exists in the schema.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Iterate over column names in training order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }
}
