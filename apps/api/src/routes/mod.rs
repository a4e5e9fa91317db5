pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::recommend::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::handle_home))
        .route("/health", get(health::health_handler))
        .route("/api/v1/recommend", post(handlers::handle_recommend))
        .route("/api/v1/skills", get(handlers::handle_skills))
        .route("/api/v1/careers", get(handlers::handle_careers))
        .route(
            "/api/v1/careers-with-skills",
            get(handlers::handle_careers_with_skills),
        )
        .route("/api/v1/stats", get(handlers::handle_stats))
        .with_state(state)
}
