//! DataIndex loading.
//!
//! Parses the movies and ratings tables in parallel and assembles the
//! immutable in-memory catalog.

use crate::error::Result;
use crate::parser;
use crate::types::*;
use std::path::Path;
use tracing::info;

/// Default file name of the movie catalog table
pub const MOVIES_FILE: &str = "movies.csv";

/// Default file name of the ratings table
pub const RATINGS_FILE: &str = "ratings.csv";

impl DataIndex {
    /// Load `movies.csv` and `ratings.csv` from a directory
    pub fn load_from_dir(data_dir: &Path) -> Result<Self> {
        Self::load_from_files(&data_dir.join(MOVIES_FILE), &data_dir.join(RATINGS_FILE))
    }

    /// Load the catalog and rating events from explicit file paths
    ///
    /// Steps:
    /// 1. Parse both files in parallel
    /// 2. Insert movies (file order is kept)
    /// 3. Append rating events
    pub fn load_from_files(movies_path: &Path, ratings_path: &Path) -> Result<Self> {
        info!(
            movies = %movies_path.display(),
            ratings = %ratings_path.display(),
            "Loading movie catalog"
        );

        // Rayon's `join` runs both parsers in parallel
        let (movies, ratings) = rayon::join(
            || parser::parse_movies(movies_path),
            || parser::parse_ratings(ratings_path),
        );
        let movies = movies?;
        let ratings = ratings?;

        let mut index = DataIndex::new();
        index.ratings.reserve(ratings.len());

        for movie in movies {
            index.insert_movie(movie);
        }
        for rating in ratings {
            index.insert_rating(rating);
        }

        let (movie_count, rating_count) = index.counts();
        info!(
            movies = movie_count,
            ratings = rating_count,
            genres = index.genre_names().len(),
            "Catalog loaded"
        );
        Ok(index)
    }
}
