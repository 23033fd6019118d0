//! Form decoding: raw `x-www-form-urlencoded` pairs to `FilterCriteria`.
//!
//! Every field has a fixed coercion rule (see [`FieldKind`]). Blank or
//! malformed values never fail the request; they leave the filter unset.

use pipeline::{parse_keywords, FilterCriteria, DEFAULT_RESULT_LIMIT};

/// How a form field's raw text is turned into a typed value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Repeated field; every non-blank occurrence is kept
    MultiSelect,
    /// Single comma-separated field split into lowercase terms
    KeywordList,
    /// Integer year bound; blank, malformed or zero means unset
    Year,
    /// Decimal lower bound; blank, malformed or non-finite means unset
    Decimal,
    /// Integer lower bound on a count; negative values bound at zero
    Count,
    /// Result count; blank, malformed or zero falls back to the default,
    /// anything else is clamped into the allowed range
    ResultLimit,
}

pub const GENRES: &str = "genres";
pub const TITLE_KEYWORDS: &str = "title_keywords";
pub const MIN_YEAR: &str = "min_year";
pub const MAX_YEAR: &str = "max_year";
pub const MIN_RATING: &str = "min_rating";
pub const MIN_NUM_RATINGS: &str = "min_num_ratings";
pub const NUM_RESULTS: &str = "num_results";

/// The fields the form understands and the rule applied to each
pub const FIELDS: [(&str, FieldKind); 7] = [
    (GENRES, FieldKind::MultiSelect),
    (TITLE_KEYWORDS, FieldKind::KeywordList),
    (MIN_YEAR, FieldKind::Year),
    (MAX_YEAR, FieldKind::Year),
    (MIN_RATING, FieldKind::Decimal),
    (MIN_NUM_RATINGS, FieldKind::Count),
    (NUM_RESULTS, FieldKind::ResultLimit),
];

/// Bounds for the requested result count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormRules {
    default_results: usize,
    max_results: usize,
}

impl FormRules {
    /// `max_results` is raised to at least 1 and `default_results` is
    /// clamped into `1..=max_results`.
    pub fn new(default_results: usize, max_results: usize) -> Self {
        let max_results = max_results.max(1);
        Self {
            default_results: default_results.clamp(1, max_results),
            max_results,
        }
    }

    pub fn default_results(&self) -> usize {
        self.default_results
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }
}

impl Default for FormRules {
    fn default() -> Self {
        Self::new(DEFAULT_RESULT_LIMIT, 100)
    }
}

/// A submitted form, kept as raw pairs so it can be re-rendered verbatim
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterForm {
    pairs: Vec<(String, String)>,
}

impl FilterForm {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// First value submitted for `name`
    pub fn first(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Every value submitted for `name`, in order
    pub fn all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Build the criteria for this submission, applying each field's rule.
    pub fn to_criteria(&self, rules: &FormRules) -> FilterCriteria {
        let mut criteria = FilterCriteria::default();
        for (name, kind) in FIELDS {
            match kind {
                FieldKind::MultiSelect => {
                    criteria.genres = self
                        .all(name)
                        .map(str::trim)
                        .filter(|value| !value.is_empty())
                        .map(str::to_string)
                        .collect();
                }
                FieldKind::KeywordList => {
                    criteria.title_keywords = self.first(name).map(parse_keywords).unwrap_or_default();
                }
                FieldKind::Year => {
                    let year = self.first(name).and_then(coerce_year);
                    if name == MIN_YEAR {
                        criteria.min_year = year;
                    } else {
                        criteria.max_year = year;
                    }
                }
                FieldKind::Decimal => {
                    criteria.min_rating = self.first(name).and_then(coerce_decimal);
                }
                FieldKind::Count => {
                    criteria.min_rating_count = self.first(name).and_then(coerce_count);
                }
                FieldKind::ResultLimit => {
                    criteria.limit = coerce_result_limit(self.first(name), rules);
                }
            }
        }
        criteria
    }
}

fn parse_integer(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Zero is treated like a blank field
fn coerce_year(raw: &str) -> Option<i32> {
    parse_integer(raw)
        .filter(|&year| year != 0)
        .map(|year| year.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}

fn coerce_decimal(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

fn coerce_count(raw: &str) -> Option<u32> {
    parse_integer(raw).map(|count| count.clamp(0, i64::from(u32::MAX)) as u32)
}

fn coerce_result_limit(raw: Option<&str>, rules: &FormRules) -> usize {
    match raw.and_then(parse_integer) {
        None | Some(0) => rules.default_results(),
        Some(n) if n < 0 => 1,
        Some(n) => usize::try_from(n)
            .unwrap_or(usize::MAX)
            .min(rules.max_results()),
    }
}
