//! Best-effort analytics sink.
//!
//! Recording a recommendation is write-only and optional: a failed or slow
//! write degrades the response's `database_status` flag, never the request.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use crate::models::recommendation::RecommendationRecord;

/// Narrow seam for the analytics sink, carried in `AppState` as
/// `Arc<dyn Recorder>` so the handler never touches a concrete store.
#[async_trait]
pub trait Recorder: Send + Sync {
    async fn record(&self, record: &RecommendationRecord) -> Result<()>;
}

/// Writes recommendations to the `career_recommendations` table.
pub struct PgRecorder {
    pool: PgPool,
}

impl PgRecorder {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Recorder for PgRecorder {
    async fn record(&self, record: &RecommendationRecord) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO career_recommendations
                (id, user_skills, user_experience, user_education,
                 top_recommendation, top_compatibility, all_recommendations,
                 ip_address, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(serde_json::to_value(&record.skills)?)
        .bind(&record.experience)
        .bind(&record.education)
        .bind(&record.top_career)
        .bind(record.top_compatibility)
        .bind(&record.all_recommendations)
        .bind(&record.source_address)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// Invokes the recorder with a hard time bound and swallows every failure
/// into a boolean for the `database_status` flag.
pub async fn persist_best_effort(
    recorder: &dyn Recorder,
    timeout: Duration,
    record: &RecommendationRecord,
) -> bool {
    match tokio::time::timeout(timeout, recorder.record(record)).await {
        Ok(Ok(())) => true,
        Ok(Err(e)) => {
            warn!("Failed to record recommendation: {e:#}");
            false
        }
        Err(_) => {
            warn!(
                "Recording recommendation timed out after {}ms",
                timeout.as_millis()
            );
            false
        }
    }
}
