//! Core domain types for the movie catalog.
//!
//! This module defines the records loaded from the catalog and ratings
//! tables, plus the `DataIndex` that owns them for the lifetime of the
//! process.

use crate::parser::extract_year_from_title;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a movie (the `movieId` column)
pub type MovieId = u32;

// =============================================================================
// Movie-related Types
// =============================================================================

/// Represents a movie in the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    /// Year extracted from a trailing `(YYYY)` in the title
    ///
    /// - `Some(1995)` for "Toy Story (1995)"
    /// - `None` when the title carries no trailing year
    pub year: Option<u16>,
    /// Genre tags in catalog order, possibly empty
    pub genres: Vec<String>,
}

impl Movie {
    /// Build a movie, deriving `year` from the title.
    ///
    /// This is the only way the loader creates movies, so `year` always
    /// agrees with re-parsing `title`.
    pub fn new(id: MovieId, title: impl Into<String>, genres: Vec<String>) -> Self {
        let title = title.into();
        let year = extract_year_from_title(&title);
        Self {
            id,
            title,
            year,
            genres,
        }
    }

    /// True if this movie is tagged with `genre` (exact match)
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}

// =============================================================================
// Rating Type
// =============================================================================

/// A single rating event for a movie
///
/// `movie_id` is not required to exist in the catalog; orphan events are
/// simply never joined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub movie_id: MovieId,
    pub rating: f64,
}

// =============================================================================
// DataIndex - The In-Memory Catalog
// =============================================================================

/// Holds the movie catalog and the raw rating events.
///
/// Movies keep the order they were loaded in, with a side map for O(1)
/// lookups by id. Once loaded the index is wrapped in an `Arc` and only
/// ever read.
#[derive(Debug, Default)]
pub struct DataIndex {
    pub(crate) movies: Vec<Movie>,
    pub(crate) movie_positions: HashMap<MovieId, usize>,
    pub(crate) ratings: Vec<Rating>,
}

impl DataIndex {
    /// Creates a new, empty DataIndex
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a movie by ID
    pub fn get_movie(&self, id: MovieId) -> Option<&Movie> {
        self.movie_positions.get(&id).map(|&pos| &self.movies[pos])
    }

    /// All movies, in catalog order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// All rating events, in load order
    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }

    /// Sorted, de-duplicated list of every genre tag in the catalog
    pub fn genre_names(&self) -> Vec<String> {
        self.movies
            .iter()
            .flat_map(|movie| movie.genres.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Insert a movie into the index
    ///
    /// A movie with an id already present replaces the earlier record in
    /// place, keeping its catalog position.
    pub fn insert_movie(&mut self, movie: Movie) {
        match self.movie_positions.get(&movie.id) {
            Some(&pos) => self.movies[pos] = movie,
            None => {
                self.movie_positions.insert(movie.id, self.movies.len());
                self.movies.push(movie);
            }
        }
    }

    /// Append a rating event
    pub fn insert_rating(&mut self, rating: Rating) {
        self.ratings.push(rating);
    }

    /// Get (movies, ratings) counts for logging
    pub fn counts(&self) -> (usize, usize) {
        (self.movies.len(), self.ratings.len())
    }
}
