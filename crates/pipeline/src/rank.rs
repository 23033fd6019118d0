//! The filter-aggregate-rank entry point.

use crate::aggregate::aggregate_ratings;
use crate::criteria::FilterCriteria;
use crate::filter_pipeline::FilterPipeline;
use crate::types::{Candidate, MovieStats, RankedMovie};
use anyhow::Result;
use data_loader::{DataIndex, MovieId};
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::debug;

/// Filter the catalog, join rating stats, sort and truncate.
///
/// Stages run in a fixed order:
/// 1. genre, title keyword and year filters on the catalog
/// 2. left join with stats aggregated from every rating event
/// 3. minimum average rating and minimum count filters
/// 4. sort by average rating, then rating count, both descending with
///    unrated movies last
/// 5. keep the first `criteria.limit` entries
///
/// An empty result is `Ok(vec![])`. The same inputs always produce the same
/// ordered output: ties on both sort keys keep catalog order.
pub fn rank(index: &DataIndex, criteria: &FilterCriteria) -> Result<Vec<RankedMovie>> {
    let candidates: Vec<Candidate> = index.movies().iter().map(|m| Candidate::new(m.id)).collect();

    let candidates = FilterPipeline::catalog_stage(criteria).apply(candidates, index)?;

    let stats = aggregate_ratings(index.ratings());
    debug!(
        "Aggregated {} ratings into stats for {} movies",
        index.ratings().len(),
        stats.len()
    );
    let candidates = join_stats(candidates, &stats);

    let mut candidates = FilterPipeline::stats_stage(criteria).apply(candidates, index)?;

    candidates.sort_by(compare_candidates);
    candidates.truncate(criteria.limit);

    Ok(candidates
        .iter()
        .filter_map(|candidate| {
            index
                .get_movie(candidate.movie_id)
                .map(|movie| RankedMovie::from_candidate(movie, candidate))
        })
        .collect())
}

/// Attach stats to each candidate; movies without ratings keep `None`.
pub fn join_stats(
    candidates: Vec<Candidate>,
    stats: &HashMap<MovieId, MovieStats>,
) -> Vec<Candidate> {
    candidates
        .into_iter()
        .map(|candidate| Candidate {
            stats: stats.get(&candidate.movie_id).copied(),
            ..candidate
        })
        .collect()
}

/// Ranking order: higher average first, then more ratings, unrated last.
pub fn compare_candidates(a: &Candidate, b: &Candidate) -> Ordering {
    descending_none_last(a.avg_rating(), b.avg_rating())
        .then_with(|| descending_none_last(a.rating_count(), b.rating_count()))
}

fn descending_none_last<T: PartialOrd>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
