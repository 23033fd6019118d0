use axum::{extract::State, response::Html, routing::get, Form, Router};
use tracing::info;

use pipeline::rank;

use crate::error::AppResult;
use crate::form::FilterForm;
use crate::render::{render_page, SearchOutcome};
use crate::state::AppContext;

/// Creates the router: a single page served on `GET /` and `POST /`
pub fn create_router(ctx: AppContext) -> Router {
    Router::new()
        .route("/", get(show_form).post(submit_form))
        .with_state(ctx)
}

/// Empty form, no results section
pub async fn show_form(State(ctx): State<AppContext>) -> AppResult<Html<String>> {
    let page = render_page(
        &ctx.genres,
        &ctx.form_rules,
        None,
        &SearchOutcome::NotSubmitted,
    )?;
    Ok(Html(page))
}

/// Run the pipeline for the submitted form and render the outcome
pub async fn submit_form(
    State(ctx): State<AppContext>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> AppResult<Html<String>> {
    let form = FilterForm::from_pairs(pairs);
    let criteria = form.to_criteria(&ctx.form_rules);

    let index = ctx.index.clone();
    let results = tokio::task::spawn_blocking(move || rank(&index, &criteria)).await??;
    info!("Filter request matched {} movies", results.len());

    let outcome = SearchOutcome::from_results(results);
    let page = render_page(&ctx.genres, &ctx.form_rules, Some(&form), &outcome)?;
    Ok(Html(page))
}
