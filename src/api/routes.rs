use axum::{
    routing::{get, patch, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Artwork catalog
        .route("/artworks", get(handlers::get_artworks))
        .route("/artworks", post(handlers::create_artwork))
        .route(
            "/artworks/:artwork_id/status",
            patch(handlers::update_artwork_status),
        )
        // Recommendations
        .route(
            "/recommendations/personalized",
            post(handlers::recommend_personalized),
        )
        .route(
            "/recommendations/similar",
            post(handlers::recommend_similar),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
