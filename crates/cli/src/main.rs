use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use data_loader::{DataIndex, MOVIES_FILE, RATINGS_FILE};
use pipeline::{rank, FilterCriteria, RankedMovie, DEFAULT_RESULT_LIMIT};
use std::path::PathBuf;
use std::time::Instant;

/// ReelFilter - filter and rank the movie catalog from the terminal
#[derive(Parser)]
#[command(name = "reel-filter")]
#[command(about = "Filter a movie catalog by genre, title, year and rating", long_about = None)]
struct Cli {
    /// Directory holding the catalog and ratings tables
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Movie catalog file name, relative to the data directory
    #[arg(long, default_value = MOVIES_FILE)]
    movies_file: String,

    /// Ratings file name, relative to the data directory
    #[arg(long, default_value = RATINGS_FILE)]
    ratings_file: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the movies matching the given filters
    Query(QueryArgs),

    /// List every genre in the catalog
    Genres,
}

#[derive(Args, Debug)]
struct QueryArgs {
    /// Genre to include (repeat for several; any one matches)
    #[arg(long = "genre")]
    genres: Vec<String>,

    /// Comma-separated title keywords; all must match
    #[arg(long, default_value = "")]
    keywords: String,

    /// Earliest release year (inclusive)
    #[arg(long)]
    min_year: Option<i32>,

    /// Latest release year (inclusive)
    #[arg(long)]
    max_year: Option<i32>,

    /// Minimum average rating (inclusive)
    #[arg(long)]
    min_rating: Option<f64>,

    /// Minimum number of ratings (inclusive)
    #[arg(long)]
    min_num_ratings: Option<u32>,

    /// Number of movies to show
    #[arg(long, default_value_t = DEFAULT_RESULT_LIMIT as u16, value_parser = clap::value_parser!(u16).range(1..=100))]
    limit: u16,
}

impl QueryArgs {
    fn to_criteria(&self) -> FilterCriteria {
        FilterCriteria::new()
            .genres(self.genres.iter().cloned())
            .keywords(&self.keywords)
            .year_range(self.min_year, self.max_year)
            .min_rating(self.min_rating)
            .min_rating_count(self.min_num_ratings)
            .limit(usize::from(self.limit))
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    // Load data index
    let start = Instant::now();
    let data_index = DataIndex::load_from_files(
        &cli.data_dir.join(&cli.movies_file),
        &cli.data_dir.join(&cli.ratings_file),
    )
    .context("Failed to load movie catalog")?;
    let (movies, ratings) = data_index.counts();
    println!(
        "{} Loaded {} movies and {} ratings in {:?}",
        "✓".green(),
        movies,
        ratings,
        start.elapsed()
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Query(args) => handle_query(&data_index, &args)?,
        Commands::Genres => handle_genres(&data_index),
    }

    Ok(())
}

/// Handle the 'query' command
fn handle_query(data_index: &DataIndex, args: &QueryArgs) -> Result<()> {
    let criteria = args.to_criteria();
    tracing::debug!(?criteria, "Running query");

    let results = rank(data_index, &criteria)?;
    if results.is_empty() {
        println!("{}", "No movies match your criteria.".red().bold());
        return Ok(());
    }

    print_results(&results);
    Ok(())
}

/// Handle the 'genres' command
fn handle_genres(data_index: &DataIndex) {
    println!("{}", "Genres:".bold().blue());
    for genre in data_index.genre_names() {
        println!("  {} {}", "•".green(), genre);
    }
}

/// Helper function to format and print ranked movies
fn print_results(results: &[RankedMovie]) {
    println!(
        "{}",
        format!("Top {} recommended movies:", results.len()).bold().blue()
    );
    for (i, movie) in results.iter().enumerate() {
        let rating = movie
            .avg_rating
            .map(|avg| format!("{:.2}", avg))
            .unwrap_or_else(|| "-".to_string());
        let count = movie
            .rating_count
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{}. {} [{}] - Rating: {} ({} ratings)",
            (i + 1).to_string().green(),
            movie.title,
            movie.genres.join("|"),
            rating,
            count
        );
    }
}
