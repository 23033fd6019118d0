//! Filter to ensure a minimum number of ratings.

use crate::traits::Filter;
use crate::types::Candidate;
use anyhow::Result;
use data_loader::DataIndex;

/// Removes candidates with fewer ratings than the threshold.
///
/// Must run after the stats join. Unrated candidates are removed.
pub struct MinimumCountFilter {
    min_count: u32,
}

impl MinimumCountFilter {
    pub fn new(min_count: u32) -> Self {
        Self { min_count }
    }
}

impl Filter for MinimumCountFilter {
    fn name(&self) -> &str {
        "MinimumCountFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, _index: &DataIndex) -> Result<Vec<Candidate>> {
        let filtered: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| {
                candidate
                    .rating_count()
                    .is_some_and(|count| count >= self.min_count)
            })
            .collect();
        Ok(filtered)
    }
}
