//! Server configuration, read once at startup from flags or environment.

use crate::form::FormRules;
use clap::Parser;
use data_loader::{MOVIES_FILE, RATINGS_FILE};
use pipeline::DEFAULT_RESULT_LIMIT;
use std::path::PathBuf;

/// Movie filter web server
#[derive(Parser, Debug, Clone)]
#[command(name = "reel-filter-server")]
#[command(author, version, about, long_about = None)]
pub struct ServerConfig {
    /// Directory holding the catalog and ratings tables
    #[arg(short, long, default_value = "data", env = "REEL_DATA_DIR")]
    pub data_dir: PathBuf,

    /// Movie catalog file name, relative to the data directory
    #[arg(long, default_value = MOVIES_FILE, env = "REEL_MOVIES_FILE")]
    pub movies_file: String,

    /// Ratings file name, relative to the data directory
    #[arg(long, default_value = RATINGS_FILE, env = "REEL_RATINGS_FILE")]
    pub ratings_file: String,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1", env = "REEL_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 5000, env = "REEL_PORT")]
    pub port: u16,

    /// Result count used when the form leaves it blank or invalid
    #[arg(long, default_value_t = DEFAULT_RESULT_LIMIT, env = "REEL_DEFAULT_RESULTS")]
    pub default_results: usize,

    /// Upper bound for the requested result count
    #[arg(long, default_value_t = 100, env = "REEL_MAX_RESULTS")]
    pub max_results: usize,
}

impl ServerConfig {
    pub fn movies_path(&self) -> PathBuf {
        self.data_dir.join(&self.movies_file)
    }

    pub fn ratings_path(&self) -> PathBuf {
        self.data_dir.join(&self.ratings_file)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn form_rules(&self) -> FormRules {
        FormRules::new(self.default_results, self.max_results)
    }
}
