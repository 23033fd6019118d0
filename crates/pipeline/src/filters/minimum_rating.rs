//! Filter to ensure a minimum average rating.

use crate::traits::Filter;
use crate::types::Candidate;
use anyhow::Result;
use data_loader::DataIndex;

/// Removes candidates whose average rating is below the threshold.
///
/// Must run after the stats join. A candidate with no stats cannot
/// satisfy the bound and is removed.
pub struct MinimumRatingFilter {
    min_rating: f64,
}

impl MinimumRatingFilter {
    /// Create a new MinimumRatingFilter.
    ///
    /// # Arguments
    /// * `min_rating` - Minimum average rating, inclusive
    pub fn new(min_rating: f64) -> Self {
        Self { min_rating }
    }
}

impl Filter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, _index: &DataIndex) -> Result<Vec<Candidate>> {
        let filtered: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| {
                candidate
                    .avg_rating()
                    .is_some_and(|avg| avg >= self.min_rating)
            })
            .collect();

        Ok(filtered)
    }
}
