//! Web front end for the movie filter.
//!
//! A single page on `/`: `GET` shows the empty form, `POST` runs the
//! filter-aggregate-rank pipeline and shows the results below the form.

pub mod config;
pub mod error;
pub mod form;
pub mod render;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use error::{AppError, AppResult};
pub use form::{FilterForm, FormRules};
pub use render::SearchOutcome;
pub use routes::create_router;
pub use state::AppContext;
