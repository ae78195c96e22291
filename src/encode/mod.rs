//! Feature encoding for heterogeneous raw inputs.
//!
//! This module turns a [`RawInput`] (numeric fields plus categorical
//! selections) into a single-row [`FeatureVector`] whose columns match a
//! model's [`TrainingSchema`] exactly.
//!
//! # Overview
//!
//! Categorical fields are one-hot encoded: a field `Area` with value
//! `"India"` becomes a column `Area_India` holding `1.0`. When a schema is
//! available, the expanded row is reindexed onto the schema's column order;
//! schema columns the input doesn't produce are filled with `0.0`, and
//! columns the schema doesn't know are dropped. Without a schema the
//! expanded row passes through unchanged.
//!
//! # Coercion
//!
//! Every value in the output is a finite `f32`. Non-finite residue (NaN,
//! infinities) is normalized to `0.0` rather than failing the request.

mod aligner;
mod input;
mod schema;

pub use aligner::{align, expand, FeatureVector};
pub use input::RawInput;
pub use schema::{one_hot_name, TrainingSchema};
