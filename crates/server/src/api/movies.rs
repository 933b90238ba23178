//! Catalog browsing API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use cinestream_core::{section_title, BrowseFilter, CatalogItem, Sections};
use serde::{Deserialize, Serialize};

use super::handlers::ErrorResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct BrowseParams {
    #[serde(default)]
    pub category: Option<String>,
}

impl BrowseParams {
    fn filter(&self) -> BrowseFilter {
        self.category
            .as_deref()
            .map(BrowseFilter::parse)
            .unwrap_or_default()
    }
}

#[derive(Debug, Serialize)]
pub struct MoviesResponse {
    pub movies: Vec<CatalogItem>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct SectionResponse {
    pub section: String,
    pub title: String,
    pub movies: Vec<CatalogItem>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct MovieDetailResponse {
    pub movie: CatalogItem,
    pub similar: Vec<CatalogItem>,
}

fn owned(items: Vec<&CatalogItem>) -> Vec<CatalogItem> {
    items.into_iter().cloned().collect()
}

/// List catalog items for a category tab.
pub async fn list_movies(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BrowseParams>,
) -> Json<MoviesResponse> {
    let movies = owned(state.catalog().browse(&params.filter()));
    let count = movies.len();
    Json(MoviesResponse { movies, count })
}

/// Landing page rows for a category tab.
pub async fn get_sections(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BrowseParams>,
) -> Json<Sections> {
    Json(state.catalog().sections(&params.filter()))
}

/// Every item of one landing page row ("view all").
pub async fn get_section(
    State(state): State<Arc<AppState>>,
    Path(section): Path<String>,
) -> Json<SectionResponse> {
    let movies = owned(state.catalog().section(&section));
    let count = movies.len();
    Json(SectionResponse {
        title: section_title(&section).to_string(),
        section,
        movies,
        count,
    })
}

/// Hero carousel items.
pub async fn get_featured(State(state): State<Arc<AppState>>) -> Json<MoviesResponse> {
    let movies = owned(state.catalog().featured());
    let count = movies.len();
    Json(MoviesResponse { movies, count })
}

/// A single item with same-category recommendations.
pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<MovieDetailResponse>, impl IntoResponse> {
    let catalog = state.catalog();
    match catalog.get(id) {
        Some(movie) => Ok(Json(MovieDetailResponse {
            movie: movie.clone(),
            similar: owned(catalog.similar(movie)),
        })),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Movie not found: {}", id),
            }),
        )),
    }
}
