//! Rating aggregation.
//!
//! Stats are rebuilt from the raw events on every request. Nothing here is
//! cached, so two concurrent requests never share an aggregate.

use crate::types::MovieStats;
use data_loader::{MovieId, Rating};
use std::collections::HashMap;

/// Count and mean of the rating events for every rated movie.
///
/// Movies without events are absent from the map rather than mapped to
/// zero. Accumulation is sequential in `f64`, so the same events always
/// give bit-identical means.
pub fn aggregate_ratings(ratings: &[Rating]) -> HashMap<MovieId, MovieStats> {
    let mut totals: HashMap<MovieId, (u32, f64)> = HashMap::new();
    for rating in ratings {
        let entry = totals.entry(rating.movie_id).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += rating.rating;
    }

    totals
        .into_iter()
        .map(|(movie_id, (rating_count, total))| {
            (
                movie_id,
                MovieStats {
                    rating_count,
                    avg_rating: total / f64::from(rating_count),
                },
            )
        })
        .collect()
}
