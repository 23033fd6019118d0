//! Per-request filter criteria.

use std::collections::BTreeSet;

/// Number of results returned when the request does not say otherwise
pub const DEFAULT_RESULT_LIMIT: usize = 10;

/// Structured form of one user query.
///
/// Every bound is inclusive and `None` means "not applied".
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    /// Keep movies tagged with any of these genres; empty keeps all
    pub genres: BTreeSet<String>,
    /// Lowercase substrings that must all appear in the title
    pub title_keywords: Vec<String>,
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
    pub min_rating: Option<f64>,
    pub min_rating_count: Option<u32>,
    pub limit: usize,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            genres: BTreeSet::new(),
            title_keywords: Vec::new(),
            min_year: None,
            max_year: None,
            min_rating: None,
            min_rating_count: None,
            limit: DEFAULT_RESULT_LIMIT,
        }
    }
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    /// Set the title keywords from a single comma-separated field
    pub fn keywords(mut self, raw: &str) -> Self {
        self.title_keywords = parse_keywords(raw);
        self
    }

    pub fn year_range(mut self, min_year: Option<i32>, max_year: Option<i32>) -> Self {
        self.min_year = min_year;
        self.max_year = max_year;
        self
    }

    pub fn min_rating(mut self, min_rating: Option<f64>) -> Self {
        self.min_rating = min_rating;
        self
    }

    pub fn min_rating_count(mut self, min_rating_count: Option<u32>) -> Self {
        self.min_rating_count = min_rating_count;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// Split a comma-separated keyword field into lowercase, trimmed terms.
///
/// Empty terms are dropped, so `"star, , love"` yields `["star", "love"]`.
pub fn parse_keywords(raw: &str) -> Vec<String> {
    raw.to_lowercase()
        .split(',')
        .map(str::trim)
        .filter(|kw| !kw.is_empty())
        .map(str::to_string)
        .collect()
}
