//! Filter implementations for the candidate pipeline.
//!
//! Catalog filters (genre, keyword, year) only look at the movie record.
//! Stats filters (rating, count) need the join stage to have run first.

pub mod genre;
pub mod minimum_count;
pub mod minimum_rating;
pub mod title_keyword;
pub mod year_range;

// Re-export for convenience
pub use genre::GenreFilter;
pub use minimum_count::MinimumCountFilter;
pub use minimum_rating::MinimumRatingFilter;
pub use title_keyword::TitleKeywordFilter;
pub use year_range::YearRangeFilter;
