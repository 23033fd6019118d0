//! Parser for the catalog and ratings CSV files.
//!
//! - movies table: `movieId,titles,genres` (a `title` header is accepted too)
//! - ratings table: `movieId,rating` plus any extra columns, which are ignored
//!
//! Both files carry a header row. Fields are trimmed before parsing.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// One row of the movies table
#[derive(Debug, Deserialize)]
struct MovieRow {
    #[serde(rename = "movieId")]
    movie_id: MovieId,
    #[serde(rename = "titles", alias = "title")]
    title: String,
    /// Empty or missing genre field deserializes to `None`
    #[serde(default)]
    genres: Option<String>,
}

/// One row of the ratings table
#[derive(Debug, Deserialize)]
struct RatingRow {
    #[serde(rename = "movieId")]
    movie_id: MovieId,
    rating: f64,
}

/// Open a CSV file for reading, mapping a missing file to `FileNotFound`
fn open_csv(path: &Path) -> Result<csv::Reader<BufReader<File>>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;

    Ok(csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file)))
}

/// Short file name used in error messages
fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Check that every column in `required` is present in the header row.
///
/// Each entry lists accepted spellings for one column.
fn require_columns(
    headers: &csv::StringRecord,
    file: &str,
    required: &[&[&str]],
) -> Result<()> {
    for spellings in required {
        if !headers.iter().any(|h| spellings.contains(&h)) {
            return Err(DataLoadError::MissingColumn {
                file: file.to_string(),
                column: spellings[0].to_string(),
            });
        }
    }
    Ok(())
}

/// Deserialize every data row of a CSV file into `T`.
fn read_rows<T>(path: &Path, required: &[&[&str]]) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    let file = file_label(path);
    let mut reader = open_csv(path)?;
    let headers = reader
        .headers()
        .map_err(|source| DataLoadError::Csv {
            file: file.clone(),
            source,
        })?
        .clone();
    require_columns(&headers, &file, required)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| DataLoadError::Csv {
            file: file.clone(),
            source,
        })?;
        let line_no = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or_default();

        let row = record
            .deserialize(Some(&headers))
            .map_err(|e| DataLoadError::ParseError {
                file: file.clone(),
                line: line_no,
                reason: e.to_string(),
            })?;
        rows.push(row);
    }
    Ok(rows)
}

/// Parse the movies table
///
/// The title often includes the year in parentheses: "Toy Story (1995)".
/// Genres are pipe-separated: "Animation|Children|Comedy".
pub fn parse_movies(path: &Path) -> Result<Vec<Movie>> {
    let rows: Vec<MovieRow> = read_rows(path, &[&["movieId"], &["titles", "title"]])?;

    Ok(rows
        .into_iter()
        .map(|row| {
            let genres = parse_genres(row.genres.as_deref().unwrap_or(""));
            Movie::new(row.movie_id, row.title, genres)
        })
        .collect())
}

/// Parse the ratings table
pub fn parse_ratings(path: &Path) -> Result<Vec<Rating>> {
    let rows: Vec<RatingRow> = read_rows(path, &[&["movieId"], &["rating"]])?;

    let mut ratings = Vec::with_capacity(rows.len());
    for row in rows {
        if !row.rating.is_finite() {
            return Err(DataLoadError::InvalidValue {
                field: "rating".to_string(),
                value: row.rating.to_string(),
            });
        }
        ratings.push(Rating {
            movie_id: row.movie_id,
            rating: row.rating,
        });
    }
    Ok(ratings)
}

/// Extract year from movie title
///
/// Only four ASCII digits in parentheses at the very end of the title count.
///
/// Example: "Toy Story (1995)" -> Some(1995)
///          "Movie Title" -> None
///          "Movie (1995) Redux" -> None
pub fn extract_year_from_title(title: &str) -> Option<u16> {
    let inner = title.strip_suffix(')')?;
    let start = inner.len().checked_sub(5)?;
    let candidate = inner.get(start..)?;
    let digits = candidate.strip_prefix('(')?;
    if digits.bytes().all(|b| b.is_ascii_digit()) {
        digits.parse().ok()
    } else {
        None
    }
}

/// Parse pipe-separated genres
///
/// Example: "Action|Adventure|Sci-Fi" -> ["Action", "Adventure", "Sci-Fi"]
///
/// Tokens are trimmed and empty tokens dropped, so "" yields no genres.
pub fn parse_genres(s: &str) -> Vec<String> {
    s.split('|')
        .map(str::trim)
        .filter(|genre| !genre.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_extract_year() {
        assert_eq!(extract_year_from_title("Toy Story (1995)"), Some(1995));
        assert_eq!(extract_year_from_title("Alpha (2001)"), Some(2001));
        assert_eq!(extract_year_from_title("Beta"), None);
        assert_eq!(extract_year_from_title("Movie Title"), None);
    }

    #[test]
    fn test_extract_year_requires_trailing_four_digits() {
        assert_eq!(extract_year_from_title("Movie (1995) "), None);
        assert_eq!(extract_year_from_title("Movie (1995) Redux"), None);
        assert_eq!(extract_year_from_title("Movie (95)"), None);
        assert_eq!(extract_year_from_title("Movie (19955)"), None);
        assert_eq!(extract_year_from_title("Movie (19a5)"), None);
        assert_eq!(extract_year_from_title("(2000)"), Some(2000));
        assert_eq!(extract_year_from_title("Café (2003)"), Some(2003));
        assert_eq!(extract_year_from_title("é)"), None);
    }

    #[test]
    fn test_parse_genres() {
        assert_eq!(
            parse_genres("Action|Adventure| Sci-Fi "),
            vec!["Action", "Adventure", "Sci-Fi"]
        );
        assert!(parse_genres("").is_empty());
        assert!(parse_genres("||").is_empty());
    }

    #[test]
    fn test_parse_movies() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "movies.csv",
            "movieId,titles,genres\n\
             1,Toy Story (1995),Animation|Children|Comedy\n\
             2,\"American President, The (1995)\",Comedy|Drama|Romance\n\
             3,Untitled,\n",
        );

        let movies = parse_movies(&path).unwrap();
        assert_eq!(movies.len(), 3);
        assert_eq!(movies[0].year, Some(1995));
        assert_eq!(movies[0].genres, vec!["Animation", "Children", "Comedy"]);
        assert_eq!(movies[1].title, "American President, The (1995)");
        assert_eq!(movies[2].year, None);
        assert!(movies[2].genres.is_empty());
    }

    #[test]
    fn test_parse_movies_accepts_title_header() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "movies.csv", "movieId,title,genres\n7,Heat (1995),Action\n");

        let movies = parse_movies(&path).unwrap();
        assert_eq!(movies[0].title, "Heat (1995)");
    }

    #[test]
    fn test_parse_movies_missing_column() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "movies.csv", "movieId,genres\n1,Drama\n");

        let err = parse_movies(&path).unwrap_err();
        assert!(matches!(err, DataLoadError::MissingColumn { ref column, .. } if column == "titles"));
    }

    #[test]
    fn test_parse_ratings_ignores_extra_columns() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "ratings.csv",
            "userId,movieId,rating,timestamp\n1,31,2.5,1260759144\n1,1029,3.0,1260759179\n",
        );

        let ratings = parse_ratings(&path).unwrap();
        assert_eq!(ratings.len(), 2);
        assert_eq!(ratings[0].movie_id, 31);
        assert_eq!(ratings[1].rating, 3.0);
    }

    #[test]
    fn test_parse_ratings_keeps_full_precision() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "ratings.csv", "movieId,rating\n1,4.1\n");

        let ratings = parse_ratings(&path).unwrap();
        assert_eq!(ratings[0].rating, 4.1);
    }

    #[test]
    fn test_parse_ratings_reports_bad_line() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "ratings.csv", "movieId,rating\n1,4.0\n2,great\n");

        match parse_ratings(&path).unwrap_err() {
            DataLoadError::ParseError { file, line, .. } => {
                assert_eq!(file, "ratings.csv");
                assert_eq!(line, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = parse_movies(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound { .. }));
    }
}
