//! HTTP tests for the filter page, driven through the router with `oneshot`.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use data_loader::{DataIndex, Movie, Rating};
use server::{create_router, AppContext, FormRules};

fn create_test_app() -> Router {
    let mut index = DataIndex::new();
    index.insert_movie(Movie::new(1, "Star Wars (1977)", vec!["Action".into(), "Sci-Fi".into()]));
    index.insert_movie(Movie::new(2, "Love Actually (2003)", vec!["Comedy".into(), "Drama".into()]));
    index.insert_movie(Movie::new(3, "Platoon (1986)", vec!["Drama".into(), "War".into()]));
    index.insert_movie(Movie::new(4, "Unseen Comedy", vec!["Comedy".into()]));

    for rating in [4.0, 5.0] {
        index.insert_rating(Rating { movie_id: 1, rating });
    }
    for rating in [3.0, 4.0, 3.5] {
        index.insert_rating(Rating { movie_id: 2, rating });
    }
    index.insert_rating(Rating { movie_id: 3, rating: 4.0 });

    create_router(AppContext::new(Arc::new(index), FormRules::default()))
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8")
}

async fn post_form(body: &str) -> (StatusCode, String) {
    let response = create_test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .expect("Failed to build request"),
        )
        .await
        .expect("Request failed");
    let status = response.status();
    (status, body_text(response).await)
}

#[tokio::test]
async fn test_get_shows_empty_form() {
    let response = create_test_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<form method=\"post\""));
    assert!(html.contains("<option value=\"War\">War</option>"));
    assert!(!html.contains("id=\"results\""));
    assert!(!html.contains("No movies match"));
}

#[tokio::test]
async fn test_post_ranks_matches() {
    let (status, html) = post_form("genres=Comedy&genres=War&title_keywords=&num_results=10").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Top 3 recommended movies"));

    // Platoon 4.00, Love Actually 3.50, then the unrated comedy
    let platoon = html.find("<td>Platoon (1986)</td>").unwrap();
    let love = html.find("<td>Love Actually (2003)</td>").unwrap();
    let unseen = html.find("<td>Unseen Comedy</td>").unwrap();
    assert!(platoon < love && love < unseen);
    assert!(!html.contains("<td>Star Wars (1977)</td>"));
}

#[tokio::test]
async fn test_post_without_matches_says_so() {
    let (status, html) = post_form("title_keywords=star%2C+love").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("id=\"results\""));
    assert!(html.contains("No movies match your criteria."));
    assert!(!html.contains("results-table"));
}

#[tokio::test]
async fn test_malformed_numbers_are_ignored() {
    let (status, html) = post_form("min_year=abc&min_rating=&min_num_ratings=lots&num_results=x").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Top 4 recommended movies"));
}

#[tokio::test]
async fn test_rating_bounds_drop_unrated() {
    let (_, html) = post_form("genres=Comedy&min_num_ratings=0").await;

    assert!(html.contains("<td>Love Actually (2003)</td>"));
    assert!(!html.contains("<td>Unseen Comedy</td>"));
}

#[tokio::test]
async fn test_result_limit() {
    let (_, html) = post_form("num_results=1").await;

    assert!(html.contains("Top 1 recommended movies"));
    assert!(html.contains("<td>Star Wars (1977)</td>"));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let response = create_test_app()
        .oneshot(Request::builder().uri("/api/movies").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
