//! Yield summary statistics over a filtered selection.

use super::table::CropRecord;

/// Mean, minimum, and maximum of the yield column over a selection.
///
/// Accumulation runs in `f64` and narrows at the end. An empty selection has
/// no summary — callers get `None` rather than a guessed reference value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldSummary {
    /// Mean yield.
    pub mean: f32,
    /// Lowest yield recorded.
    pub min: f32,
    /// Highest yield recorded.
    pub max: f32,
    /// Number of records summarized.
    pub count: usize,
}

impl YieldSummary {
    /// Summarize the yield column of a selection.
    ///
    /// Returns `None` when the selection is empty.
    pub fn compute<'a, I>(records: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a CropRecord>,
    {
        let mut sum = 0.0f64;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut count = 0usize;

        for record in records {
            let y = f64::from(record.crop_yield);
            sum += y;
            min = min.min(y);
            max = max.max(y);
            count += 1;
        }

        if count == 0 {
            return None;
        }

        Some(Self {
            mean: (sum / count as f64) as f32,
            min: min as f32,
            max: max as f32,
            count,
        })
    }
}
