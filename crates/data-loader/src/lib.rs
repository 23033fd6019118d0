//! # Data Loader Crate
//!
//! Loads the movie catalog and the raw rating events from CSV into an
//! immutable in-memory index.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, Rating, DataIndex)
//! - **parser**: Parse CSV rows into Rust structs, derive release years
//! - **index**: Load both tables into a DataIndex
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::DataIndex;
//! use std::path::Path;
//!
//! let index = DataIndex::load_from_dir(Path::new("data"))?;
//!
//! let movie = index.get_movie(1).unwrap();
//! println!("{} ({:?})", movie.title, movie.year);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use index::{MOVIES_FILE, RATINGS_FILE};
pub use types::{DataIndex, Movie, MovieId, Rating};

#[cfg(test)]
mod tests {
    use super::*;
    use parser::extract_year_from_title;

    #[test]
    fn test_data_index_creation() {
        let index = DataIndex::new();
        assert_eq!(index.counts(), (0, 0));
        assert!(index.genre_names().is_empty());
    }

    #[test]
    fn test_movie_year_matches_title() {
        for title in ["Alpha (2001)", "Beta", "Gamma (1999) (2000)", "Delta (12)"] {
            let movie = Movie::new(1, title, vec![]);
            assert_eq!(movie.year, extract_year_from_title(&movie.title));
        }
    }

    #[test]
    fn test_insert_movie() {
        let mut index = DataIndex::new();
        index.insert_movie(Movie::new(
            1,
            "Toy Story (1995)",
            vec!["Animation".into(), "Children".into(), "Comedy".into()],
        ));

        let retrieved = index.get_movie(1).unwrap();
        assert_eq!(retrieved.id, 1);
        assert_eq!(retrieved.year, Some(1995));
        assert_eq!(retrieved.genres.len(), 3);
        assert!(retrieved.has_genre("Comedy"));
        assert!(!retrieved.has_genre("comedy"));
    }

    #[test]
    fn test_duplicate_movie_replaces_in_place() {
        let mut index = DataIndex::new();
        index.insert_movie(Movie::new(1, "First (1990)", vec![]));
        index.insert_movie(Movie::new(2, "Second (1991)", vec![]));
        index.insert_movie(Movie::new(1, "First Again (1992)", vec![]));

        let titles: Vec<_> = index.movies().iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["First Again (1992)", "Second (1991)"]);
        assert_eq!(index.get_movie(1).unwrap().year, Some(1992));
    }

    #[test]
    fn test_insert_rating() {
        let mut index = DataIndex::new();
        index.insert_rating(Rating {
            movie_id: 1193,
            rating: 5.0,
        });

        assert_eq!(index.ratings().len(), 1);
        assert_eq!(index.ratings()[0].movie_id, 1193);
    }

    #[test]
    fn test_genre_names_sorted_and_unique() {
        let mut index = DataIndex::new();
        index.insert_movie(Movie::new(1, "A", vec!["War".into(), "Comedy".into()]));
        index.insert_movie(Movie::new(2, "B", vec!["Comedy".into(), "Action".into()]));

        assert_eq!(index.genre_names(), vec!["Action", "Comedy", "War"]);
    }

    #[test]
    fn test_empty_queries() {
        let index = DataIndex::new();
        assert!(index.get_movie(999).is_none());
        assert!(index.movies().is_empty());
        assert!(index.ratings().is_empty());
    }
}
