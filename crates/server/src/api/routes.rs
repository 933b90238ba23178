use axum::{
    middleware,
    routing::{delete, get},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use super::{handlers, middleware::metrics_middleware, movies, search, ws};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let frontend_dir = state.config().frontend.dir.clone();

    // API routes
    let api_routes = Router::new()
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        // Search and history
        .route("/search", get(search::search))
        .route(
            "/history",
            get(search::list_history)
                .post(search::add_history)
                .delete(search::clear_history),
        )
        .route("/history/{query}", delete(search::remove_history))
        // Catalog browsing
        .route("/movies", get(movies::list_movies))
        .route("/movies/sections", get(movies::get_sections))
        .route("/movies/sections/{section}", get(movies::get_section))
        .route("/movies/featured", get(movies::get_featured))
        .route("/movies/{id}", get(movies::get_movie))
        // Live search
        .route("/ws", get(ws::ws_handler))
        .with_state(state);

    // Serve the front-end with SPA fallback
    let index_path = frontend_dir.join("index.html");
    let serve_dir = ServeDir::new(&frontend_dir).fallback(ServeFile::new(&index_path));

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/metrics", get(handlers::metrics))
        .fallback_service(serve_dir)
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
