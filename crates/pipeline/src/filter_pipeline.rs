//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern, plus the two
//! stage layouts derived from a `FilterCriteria`.

use crate::criteria::FilterCriteria;
use crate::filters::{
    GenreFilter, MinimumCountFilter, MinimumRatingFilter, TitleKeywordFilter, YearRangeFilter,
};
use crate::traits::Filter;
use crate::types::Candidate;
use anyhow::Result;
use data_loader::DataIndex;
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(GenreFilter::new(selected))
///     .add_filter(YearRangeFilter::new(Some(1990), None));
///
/// let filtered = pipeline.apply(candidates, &index)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Filters that only need the movie record, in their fixed order:
    /// genre, title keywords, year range.
    pub fn catalog_stage(criteria: &FilterCriteria) -> Self {
        Self::new()
            .add_filter(GenreFilter::new(criteria.genres.clone()))
            .add_filter(TitleKeywordFilter::new(criteria.title_keywords.clone()))
            .add_filter(YearRangeFilter::new(criteria.min_year, criteria.max_year))
    }

    /// Filters that need joined rating stats: average rating, then count.
    ///
    /// Unset bounds add no filter at all.
    pub fn stats_stage(criteria: &FilterCriteria) -> Self {
        let mut pipeline = Self::new();
        if let Some(min_rating) = criteria.min_rating {
            pipeline = pipeline.add_filter(MinimumRatingFilter::new(min_rating));
        }
        if let Some(min_count) = criteria.min_rating_count {
            pipeline = pipeline.add_filter(MinimumCountFilter::new(min_count));
        }
        pipeline
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of filters in the pipeline
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to the candidates.
    ///
    /// ## Algorithm
    /// 1. Start with the input candidates
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return final filtered set
    pub fn apply(&self, candidates: Vec<Candidate>, index: &DataIndex) -> Result<Vec<Candidate>> {
        let mut current = candidates;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, index)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::Movie;

    fn create_test_index() -> DataIndex {
        let mut index = DataIndex::new();
        index.insert_movie(Movie::new(1, "Airplane! (1980)", vec!["Comedy".into()]));
        index.insert_movie(Movie::new(2, "Platoon (1986)", vec!["Drama".into(), "War".into()]));
        index
    }

    #[test]
    fn test_empty_pipeline() {
        let index = create_test_index();
        let pipeline = FilterPipeline::new();

        let candidates = vec![Candidate::new(1), Candidate::new(2)];

        let filtered = pipeline.apply(candidates, &index).unwrap();
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_single_filter() {
        let index = create_test_index();
        let pipeline = FilterPipeline::new()
            .add_filter(GenreFilter::new(["War".to_string()].into()));

        let candidates = vec![Candidate::new(1), Candidate::new(2)];

        let filtered = pipeline.apply(candidates, &index).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].movie_id, 2);
    }

    #[test]
    fn test_stage_layouts() {
        let criteria = FilterCriteria::default();
        assert_eq!(FilterPipeline::catalog_stage(&criteria).len(), 3);
        assert!(FilterPipeline::stats_stage(&criteria).is_empty());

        let criteria = criteria.min_rating(Some(3.0)).min_rating_count(Some(5));
        assert_eq!(FilterPipeline::stats_stage(&criteria).len(), 2);
    }
}
