use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Movie catalog
        .route("/api/movies", get(handlers::get_movies))
        .route("/api/movies", post(handlers::create_movie))
        .route("/api/movies/top-by-genre", get(handlers::top_by_genre))
        // AI suggestions
        .route("/api/movie-suggestions", post(handlers::suggest_movies))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
