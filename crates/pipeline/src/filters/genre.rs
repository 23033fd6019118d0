//! Filter to keep only movies in one of the selected genres.

use crate::traits::Filter;
use crate::types::Candidate;
use anyhow::Result;
use data_loader::DataIndex;
use std::collections::BTreeSet;

/// Keeps candidates tagged with at least one selected genre.
///
/// ## Algorithm
/// 1. An empty selection keeps every candidate
/// 2. Otherwise keep movies whose genre list intersects the selection
///    (OR across the selected genres)
pub struct GenreFilter {
    selected: BTreeSet<String>,
}

impl GenreFilter {
    pub fn new(selected: BTreeSet<String>) -> Self {
        Self { selected }
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, index: &DataIndex) -> Result<Vec<Candidate>> {
        if self.selected.is_empty() {
            return Ok(candidates);
        }

        let filtered: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| {
                if let Some(movie) = index.get_movie(candidate.movie_id) {
                    movie.genres.iter().any(|genre| self.selected.contains(genre))
                } else {
                    false // Exclude if movie not found
                }
            })
            .collect();
        Ok(filtered)
    }
}
