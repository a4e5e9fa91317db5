mod config;
mod db;
mod errors;
mod model;
mod models;
mod recommend;
mod recorder;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::model::LazyModel;
use crate::recommend::matcher::ContainmentMatcher;
use crate::recorder::PgRecorder;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting Career Recommendation API v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Initialize PostgreSQL (analytics sink only; the service runs without it)
    let db = create_pool(&config.database_url).await?;

    // The model artifact is loaded lazily on first use; a failed load is
    // retried on the next request instead of aborting startup.
    let model = Arc::new(LazyModel::new(config.model_artifact_path.clone()));
    info!(
        "Model artifact registered at {}",
        config.model_artifact_path
    );

    // Skill matching strategy (ContainmentMatcher by default)
    let matcher = Arc::new(ContainmentMatcher);

    // Best-effort recommendation recorder
    let recorder = Arc::new(PgRecorder::new(db.clone()));

    // Build app state
    let state = AppState {
        db,
        config: config.clone(),
        model,
        matcher,
        recorder,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
