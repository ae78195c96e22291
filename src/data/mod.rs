//! Historical crop data.
//!
//! A read-only tabular collaborator: one record per (region, crop, year)
//! with climate measures and the observed yield. The table exists to compute
//! reference statistics for a filtered selection — it is never mutated after
//! load and is not consulted by the alignment path itself.

mod stats;
mod table;

pub use stats::YieldSummary;
pub use table::{CropRecord, CropTable, TableError};
