//! Filter on release year bounds.

use crate::traits::Filter;
use crate::types::Candidate;
use anyhow::Result;
use data_loader::DataIndex;

/// Keeps candidates released within `[min_year, max_year]`.
///
/// Either bound may be unset. A movie with no known year fails every bound
/// that is set, and passes when both are unset.
pub struct YearRangeFilter {
    min_year: Option<i32>,
    max_year: Option<i32>,
}

impl YearRangeFilter {
    pub fn new(min_year: Option<i32>, max_year: Option<i32>) -> Self {
        Self { min_year, max_year }
    }

    fn accepts(&self, year: Option<u16>) -> bool {
        let above_min = match self.min_year {
            None => true,
            Some(min) => year.is_some_and(|y| i32::from(y) >= min),
        };
        let below_max = match self.max_year {
            None => true,
            Some(max) => year.is_some_and(|y| i32::from(y) <= max),
        };
        above_min && below_max
    }
}

impl Filter for YearRangeFilter {
    fn name(&self) -> &str {
        "YearRangeFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, index: &DataIndex) -> Result<Vec<Candidate>> {
        if self.min_year.is_none() && self.max_year.is_none() {
            return Ok(candidates);
        }

        let filtered: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| {
                index
                    .get_movie(candidate.movie_id)
                    .is_some_and(|movie| self.accepts(movie.year))
            })
            .collect();
        Ok(filtered)
    }
}
