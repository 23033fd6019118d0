//! Values flowing through the pipeline.

use data_loader::{Movie, MovieId};

/// Per-movie rating statistics, built fresh for every request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovieStats {
    pub rating_count: u32,
    pub avg_rating: f64,
}

/// A catalog movie still in the running.
///
/// `stats` stays `None` until the join stage, and afterwards for movies
/// that have no rating events at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub movie_id: MovieId,
    pub stats: Option<MovieStats>,
}

impl Candidate {
    pub fn new(movie_id: MovieId) -> Self {
        Self {
            movie_id,
            stats: None,
        }
    }

    pub fn with_stats(movie_id: MovieId, stats: MovieStats) -> Self {
        Self {
            movie_id,
            stats: Some(stats),
        }
    }

    pub fn avg_rating(&self) -> Option<f64> {
        self.stats.map(|s| s.avg_rating)
    }

    pub fn rating_count(&self) -> Option<u32> {
        self.stats.map(|s| s.rating_count)
    }
}

/// One row of the final, ordered result list
#[derive(Debug, Clone, PartialEq)]
pub struct RankedMovie {
    pub movie_id: MovieId,
    pub title: String,
    pub genres: Vec<String>,
    pub year: Option<u16>,
    /// `None` when the movie has never been rated
    pub avg_rating: Option<f64>,
    /// `None` when the movie has never been rated
    pub rating_count: Option<u32>,
}

impl RankedMovie {
    pub fn from_candidate(movie: &Movie, candidate: &Candidate) -> Self {
        Self {
            movie_id: movie.id,
            title: movie.title.clone(),
            genres: movie.genres.clone(),
            year: movie.year,
            avg_rating: candidate.avg_rating(),
            rating_count: candidate.rating_count(),
        }
    }
}
