//! HTML rendering for the filter page.
//!
//! One page: the filter form, then either nothing (no submission yet), an
//! explicit "no matches" message, or the ranked results as a table, a card
//! view and a poster preview.

use std::fmt::{self, Write};

use data_loader::MovieId;
use pipeline::RankedMovie;

use crate::form::{
    FilterForm, FormRules, GENRES, MAX_YEAR, MIN_NUM_RATINGS, MIN_RATING, MIN_YEAR, NUM_RESULTS,
    TITLE_KEYWORDS,
};

/// Base URL of the poster images, keyed by movie id
pub const POSTER_BASE_URL: &str = "https://liangfgithub.github.io/MovieImages";

pub const NO_MATCHES_MESSAGE: &str = "No movies match your criteria.";

/// What the results section should show.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The form has not been submitted; no results section at all
    NotSubmitted,
    /// The form was submitted and nothing matched
    NoMatches,
    /// The form was submitted; ranked matches, never empty
    Matches(Vec<RankedMovie>),
}

impl SearchOutcome {
    pub fn from_results(results: Vec<RankedMovie>) -> Self {
        if results.is_empty() {
            SearchOutcome::NoMatches
        } else {
            SearchOutcome::Matches(results)
        }
    }
}

pub fn poster_url(movie_id: MovieId) -> String {
    format!("{POSTER_BASE_URL}/{movie_id}.jpg?raw=true")
}

/// Escape text for use in element content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn format_rating(avg_rating: Option<f64>) -> String {
    avg_rating.map(|avg| format!("{avg:.2}")).unwrap_or_default()
}

fn format_count(rating_count: Option<u32>) -> String {
    rating_count.map(|count| count.to_string()).unwrap_or_default()
}

fn format_year(year: Option<u16>) -> String {
    year.map(|y| y.to_string()).unwrap_or_default()
}

fn format_genres(genres: &[String]) -> String {
    escape_html(&genres.join("|"))
}

const STYLE: &str = r#"
body { font-family: Arial, sans-serif; margin: 0; background: #e8eef6; }
.container { background: #fff; padding: 32px; border-radius: 12px; max-width: 720px; margin: 40px auto; }
h2 { text-align: center; color: #2d3a4b; }
label { display: block; margin-top: 16px; font-weight: 600; color: #2d3a4b; }
select, input { width: 100%; padding: 8px; margin-top: 6px; box-sizing: border-box; }
button { margin-top: 24px; width: 100%; padding: 12px; background: #0078d7; color: #fff; border: none; border-radius: 6px; font-weight: 700; }
table { width: 100%; margin-top: 28px; border-collapse: collapse; }
th, td { padding: 10px 8px; border-bottom: 1px solid #e3e8ee; text-align: left; }
th { background: #eaf1fb; }
.no-matches { margin-top: 32px; color: #d32f2f; text-align: center; font-weight: 600; }
.cards { display: flex; flex-wrap: wrap; gap: 16px; justify-content: center; margin-top: 28px; }
.card { background: #eaf1fb; border-radius: 10px; padding: 16px; width: 220px; }
.card-title { font-weight: 700; margin-bottom: 6px; }
"#;

/// Render the whole page.
///
/// `form` re-fills the inputs with the values the user submitted.
pub fn render_page(
    genres: &[String],
    rules: &FormRules,
    form: Option<&FilterForm>,
    outcome: &SearchOutcome,
) -> Result<String, fmt::Error> {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n<title>Movie Recommender</title>\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    writeln!(html, "<style>{STYLE}</style>")?;
    html.push_str("</head>\n<body>\n<div class=\"container\">\n");
    html.push_str("<h2>Find me a movie!</h2>\n");

    render_form(&mut html, genres, rules, form)?;
    render_outcome(&mut html, outcome)?;

    html.push_str("</div>\n</body>\n</html>\n");
    Ok(html)
}

fn render_form(
    html: &mut String,
    genres: &[String],
    rules: &FormRules,
    form: Option<&FilterForm>,
) -> fmt::Result {
    let value = |name: &str| -> String {
        form.and_then(|f| f.first(name))
            .map(escape_html)
            .unwrap_or_default()
    };
    let selected: Vec<&str> = form.map(|f| f.all(GENRES).collect()).unwrap_or_default();

    html.push_str("<form method=\"post\" action=\"/\">\n");

    html.push_str("<label>Preferred genres:</label>\n");
    writeln!(html, "<select name=\"{GENRES}\" multiple size=\"5\">")?;
    for genre in genres {
        let escaped = escape_html(genre);
        let marker = if selected.contains(&genre.as_str()) {
            " selected"
        } else {
            ""
        };
        writeln!(html, "<option value=\"{escaped}\"{marker}>{escaped}</option>")?;
    }
    html.push_str("</select>\n");

    html.push_str("<label>Title keywords:</label>\n");
    writeln!(
        html,
        "<input type=\"text\" name=\"{TITLE_KEYWORDS}\" placeholder=\"e.g. Star, Love, War\" value=\"{}\">",
        value(TITLE_KEYWORDS)
    )?;

    html.push_str("<label>Minimum year:</label>\n");
    writeln!(
        html,
        "<input type=\"number\" name=\"{MIN_YEAR}\" min=\"1900\" max=\"2100\" value=\"{}\">",
        value(MIN_YEAR)
    )?;
    html.push_str("<label>Maximum year:</label>\n");
    writeln!(
        html,
        "<input type=\"number\" name=\"{MAX_YEAR}\" min=\"1900\" max=\"2100\" value=\"{}\">",
        value(MAX_YEAR)
    )?;

    html.push_str("<label>Minimum average rating:</label>\n");
    writeln!(
        html,
        "<input type=\"number\" name=\"{MIN_RATING}\" min=\"0\" max=\"5\" step=\"0.1\" value=\"{}\">",
        value(MIN_RATING)
    )?;
    html.push_str("<label>Minimum number of ratings:</label>\n");
    writeln!(
        html,
        "<input type=\"number\" name=\"{MIN_NUM_RATINGS}\" min=\"0\" step=\"1\" value=\"{}\">",
        value(MIN_NUM_RATINGS)
    )?;

    let num_results = match form.and_then(|f| f.first(NUM_RESULTS)) {
        Some(raw) => escape_html(raw),
        None => rules.default_results().to_string(),
    };
    html.push_str("<label>Number of movies to show:</label>\n");
    writeln!(
        html,
        "<input type=\"number\" name=\"{NUM_RESULTS}\" min=\"1\" max=\"{}\" value=\"{num_results}\">",
        rules.max_results()
    )?;

    html.push_str("<button type=\"submit\">Recommend</button>\n</form>\n");
    Ok(())
}

fn render_outcome(html: &mut String, outcome: &SearchOutcome) -> fmt::Result {
    match outcome {
        SearchOutcome::NotSubmitted => {}
        SearchOutcome::NoMatches => {
            html.push_str("<section id=\"results\">\n");
            writeln!(html, "<div class=\"no-matches\">{NO_MATCHES_MESSAGE}</div>")?;
            html.push_str("</section>\n");
        }
        SearchOutcome::Matches(results) => {
            html.push_str("<section id=\"results\">\n");
            writeln!(html, "<h3>Top {} recommended movies:</h3>", results.len())?;
            render_table(html, results)?;
            render_cards(html, results)?;
            render_posters(html, results)?;
            html.push_str("</section>\n");
        }
    }
    Ok(())
}

fn render_table(html: &mut String, results: &[RankedMovie]) -> fmt::Result {
    html.push_str("<table class=\"results-table\">\n");
    html.push_str(
        "<tr><th>Title</th><th>Genres</th><th>Year</th><th>Average rating</th><th>Ratings</th></tr>\n",
    );
    for movie in results {
        writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&movie.title),
            format_genres(&movie.genres),
            format_year(movie.year),
            format_rating(movie.avg_rating),
            format_count(movie.rating_count),
        )?;
    }
    html.push_str("</table>\n");
    Ok(())
}

fn render_cards(html: &mut String, results: &[RankedMovie]) -> fmt::Result {
    html.push_str("<div class=\"cards\">\n");
    for movie in results {
        html.push_str("<div class=\"card\">\n");
        writeln!(html, "<div class=\"card-title\">{}</div>", escape_html(&movie.title))?;
        writeln!(html, "<div>{}</div>", format_genres(&movie.genres))?;
        writeln!(html, "<div>Year: <b>{}</b></div>", format_year(movie.year))?;
        writeln!(
            html,
            "<div>Rating: <b>{}</b> ({} ratings)</div>",
            format_rating(movie.avg_rating),
            format_count(movie.rating_count)
        )?;
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n");
    Ok(())
}

fn render_posters(html: &mut String, results: &[RankedMovie]) -> fmt::Result {
    html.push_str("<h3>Visual preview</h3>\n<table class=\"poster-table\">\n");
    html.push_str("<tr><th>movieId</th><th>Image</th><th>Title</th><th>Average rating</th><th>Ratings</th></tr>\n");
    for movie in results {
        writeln!(
            html,
            "<tr><td>{id}</td><td><img src=\"{src}\" width=\"70\" height=\"105\" alt=\"{alt}\"></td><td>{alt}</td><td>{avg}</td><td>{count}</td></tr>",
            id = movie.movie_id,
            src = poster_url(movie.movie_id),
            alt = escape_html(&movie.title),
            avg = format_rating(movie.avg_rating),
            count = format_count(movie.rating_count),
        )?;
    }
    html.push_str("</table>\n");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(movie_id: MovieId, title: &str, avg_rating: Option<f64>, rating_count: Option<u32>) -> RankedMovie {
        RankedMovie {
            movie_id,
            title: title.to_string(),
            genres: vec!["Comedy".to_string(), "Drama".to_string()],
            year: Some(1999),
            avg_rating,
            rating_count,
        }
    }

    fn page(form: Option<&FilterForm>, outcome: &SearchOutcome) -> String {
        let genres = vec!["Comedy".to_string(), "Drama".to_string()];
        render_page(&genres, &FormRules::default(), form, outcome).unwrap()
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<Tom & "Jerry's">"#),
            "&lt;Tom &amp; &quot;Jerry&#39;s&quot;&gt;"
        );
    }

    #[test]
    fn test_poster_url() {
        assert_eq!(
            poster_url(42),
            "https://liangfgithub.github.io/MovieImages/42.jpg?raw=true"
        );
    }

    #[test]
    fn test_outcome_from_results() {
        assert_eq!(SearchOutcome::from_results(vec![]), SearchOutcome::NoMatches);
        assert!(matches!(
            SearchOutcome::from_results(vec![ranked(1, "A", None, None)]),
            SearchOutcome::Matches(_)
        ));
    }

    #[test]
    fn test_not_submitted_has_no_results_section() {
        let html = page(None, &SearchOutcome::NotSubmitted);
        assert!(html.contains("<form"));
        assert!(html.contains("<option value=\"Comedy\">Comedy</option>"));
        assert!(!html.contains("id=\"results\""));
        assert!(!html.contains(NO_MATCHES_MESSAGE));
        assert!(html.contains("name=\"num_results\" min=\"1\" max=\"100\" value=\"10\""));
    }

    #[test]
    fn test_no_matches_message() {
        let html = page(Some(&FilterForm::default()), &SearchOutcome::NoMatches);
        assert!(html.contains("id=\"results\""));
        assert!(html.contains(NO_MATCHES_MESSAGE));
        assert!(!html.contains("results-table"));
    }

    #[test]
    fn test_matches_render_all_views() {
        let outcome = SearchOutcome::Matches(vec![
            ranked(7, "Fish & Chips (1999)", Some(4.256), Some(12)),
            ranked(8, "Nobody Rated This (1999)", None, None),
        ]);
        let html = page(Some(&FilterForm::default()), &outcome);

        assert!(html.contains("Top 2 recommended movies"));
        assert!(html.contains("<td>Fish &amp; Chips (1999)</td>"));
        assert!(html.contains("<td>Comedy|Drama</td>"));
        assert!(html.contains("<td>4.26</td><td>12</td>"));
        // Unrated movies show blank rating cells
        assert!(html.contains("<td>Nobody Rated This (1999)</td><td>Comedy|Drama</td><td>1999</td><td></td><td></td>"));
        assert!(html.contains("class=\"card\""));
        assert!(html.contains(&poster_url(7)));
    }

    #[test]
    fn test_submitted_values_are_refilled() {
        let form = FilterForm::from_pairs(vec![
            ("genres".into(), "Drama".into()),
            ("title_keywords".into(), "\"star\"".into()),
            ("num_results".into(), "3".into()),
        ]);
        let html = page(Some(&form), &SearchOutcome::NoMatches);

        assert!(html.contains("<option value=\"Drama\" selected>Drama</option>"));
        assert!(html.contains("<option value=\"Comedy\">Comedy</option>"));
        assert!(html.contains("value=\"&quot;star&quot;\""));
        assert!(html.contains("value=\"3\""));
    }
}
