//! Filter-aggregate-rank pipeline over the movie catalog.
//!
//! This crate provides:
//! - FilterCriteria, the structured form of one user query
//! - Filter trait and implementations for candidate filtering
//! - FilterPipeline for composing filters
//! - Rating aggregation and the `rank` entry point
//!
//! ## Architecture
//! Every request runs the same stages:
//! 1. Catalog filters remove movies by genre, title keyword and year
//! 2. Rating stats are aggregated from the raw events and left-joined
//! 3. Stats filters remove movies below the rating or count thresholds
//! 4. Survivors are sorted and truncated to the requested size
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{rank, FilterCriteria};
//!
//! let criteria = FilterCriteria::new()
//!     .genres(["Comedy", "War"])
//!     .keywords("star, love")
//!     .min_rating(Some(3.5))
//!     .limit(10);
//!
//! let results = rank(&index, &criteria)?;
//! ```

pub mod aggregate;
pub mod criteria;
pub mod filter_pipeline;
pub mod filters;
pub mod rank;
pub mod traits;
pub mod types;

// Re-export main types
pub use aggregate::aggregate_ratings;
pub use criteria::{parse_keywords, FilterCriteria, DEFAULT_RESULT_LIMIT};
pub use filter_pipeline::FilterPipeline;
pub use rank::rank;
pub use traits::Filter;
pub use types::{Candidate, MovieStats, RankedMovie};
