use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::model::LazyModel;
use crate::recommend::matcher::SkillMatcher;
use crate::recorder::Recorder;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Lazily loaded model context, shared read-only once ready.
    pub model: Arc<LazyModel>,
    /// Pluggable skill matching strategy. Default: ContainmentMatcher.
    pub matcher: Arc<dyn SkillMatcher>,
    /// Best-effort analytics sink. Default: PgRecorder.
    pub recorder: Arc<dyn Recorder>,
}
