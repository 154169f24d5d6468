pub mod config;
pub mod engine;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod services;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::services::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/recommendations",
            post(handlers::recommendations::generate_recommendations),
        )
        .route("/health", get(handlers::health::health_check))
        .with_state(state)
        // The dashboard is served from a different origin.
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
