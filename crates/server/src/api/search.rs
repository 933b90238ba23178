//! Search and history API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use cinestream_core::{SearchView, MAX_HISTORY_ENTRIES};
use serde::{Deserialize, Serialize};

use super::handlers::ErrorResponse;
use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct AddHistoryRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub entries: Vec<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// Run a query and return what the search panel should show.
///
/// Non-blank queries are recorded into history.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Json<SearchView> {
    let mut engine = state.engine().await;
    Json(engine.query(&params.q))
}

/// List recent searches, most recent first.
pub async fn list_history(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HistoryParams>,
) -> Json<HistoryResponse> {
    let limit = params
        .limit
        .unwrap_or_else(|| state.history_view_limit())
        .min(MAX_HISTORY_ENTRIES);

    let engine = state.engine().await;
    Json(HistoryResponse {
        entries: engine.list_history(limit),
    })
}

/// Record a query in history without running it.
pub async fn add_history(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AddHistoryRequest>,
) -> Result<Json<HistoryResponse>, impl IntoResponse> {
    if request.query.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "query must not be blank".to_string(),
            }),
        ));
    }

    let mut engine = state.engine().await;
    engine.add_to_history(&request.query);
    Ok(Json(HistoryResponse {
        entries: engine.list_history(MAX_HISTORY_ENTRIES),
    }))
}

/// Remove every history entry.
pub async fn clear_history(State(state): State<Arc<AppState>>) -> Json<HistoryResponse> {
    let mut engine = state.engine().await;
    engine.clear_history();
    Json(HistoryResponse {
        entries: Vec::new(),
    })
}

/// Remove a single history entry. Removing an unknown entry is not an error.
pub async fn remove_history(
    State(state): State<Arc<AppState>>,
    Path(query): Path<String>,
) -> Json<HistoryResponse> {
    let mut engine = state.engine().await;
    engine.remove_from_history(&query);
    Json(HistoryResponse {
        entries: engine.list_history(MAX_HISTORY_ENTRIES),
    })
}
