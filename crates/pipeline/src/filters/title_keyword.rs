//! Filter on title keywords.

use crate::traits::Filter;
use crate::types::Candidate;
use anyhow::Result;
use data_loader::DataIndex;

/// Keeps candidates whose title contains every keyword.
///
/// Keywords are expected lowercase (see `parse_keywords`); titles are
/// lowercased before matching, so the match is case-insensitive.
pub struct TitleKeywordFilter {
    keywords: Vec<String>,
}

impl TitleKeywordFilter {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }
}

impl Filter for TitleKeywordFilter {
    fn name(&self) -> &str {
        "TitleKeywordFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, index: &DataIndex) -> Result<Vec<Candidate>> {
        if self.keywords.is_empty() {
            return Ok(candidates);
        }

        let filtered: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| match index.get_movie(candidate.movie_id) {
                Some(movie) => {
                    let title = movie.title.to_lowercase();
                    self.keywords.iter().all(|kw| title.contains(kw.as_str()))
                }
                None => false,
            })
            .collect();
        Ok(filtered)
    }
}
