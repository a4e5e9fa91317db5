use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, State},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::model::classifier::{validate_distribution, Classifier};
use crate::models::recommendation::{
    CareerAnalysis, RecommendRequest, RecommendResponse, RecommendationEntry,
    RecommendationRecord,
};
use crate::recommend::ranker::rank;
use crate::recommend::vectorizer::vectorize;
use crate::recorder::persist_best_effort;
use crate::state::AppState;

/// GET /
/// Service banner: status, model/database reachability, endpoint directory.
pub async fn handle_home(State(state): State<AppState>) -> Json<Value> {
    let database = if sqlx::query("SELECT 1").execute(&state.db).await.is_ok() {
        "connected"
    } else {
        "disconnected"
    };
    let model_status = if state.model.is_loaded().await {
        "loaded"
    } else {
        "not loaded"
    };

    Json(json!({
        "message": "Career Recommendation API",
        "status": "online",
        "database": database,
        "model_status": model_status,
        "endpoints": {
            "/api/v1/recommend": "POST - Rank careers for a list of skills",
            "/api/v1/skills": "GET - Available skill display names",
            "/api/v1/careers": "GET - Available career display names",
            "/api/v1/careers-with-skills": "GET - Careers with their top skills",
            "/api/v1/stats": "GET - Model statistics",
        }
    }))
}

/// POST /api/v1/recommend
///
/// The whole pipeline: validate input → load-or-reuse model context →
/// vectorize → classify → rank → reverse skill lookup for the top entry →
/// best-effort analytics write.
pub async fn handle_recommend(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Json(req): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, AppError> {
    let user_skills = normalize_skills(&req.skills)?;

    let ctx = state
        .model
        .get_or_load()
        .await
        .map_err(|e| AppError::ModelUnavailable(e.to_string()))?;

    let features = vectorize(&user_skills, &ctx.vocabulary, state.matcher.as_ref());
    let probabilities = ctx.classifier.predict(&features)?;
    validate_distribution(&probabilities, ctx.careers.len())?;

    let recommendations = rank(&probabilities, &ctx.careers);

    // No-match requests are recorded too: they are exactly the analytics
    // rows that show where the vocabulary falls short.
    let record = build_record(
        &user_skills,
        req.experience.unwrap_or_default(),
        req.education.unwrap_or_default(),
        &recommendations,
        addr.ip().to_string(),
    );
    let saved = persist_best_effort(
        state.recorder.as_ref(),
        state.config.recorder_timeout(),
        &record,
    )
    .await;
    let database_status = if saved { "saved" } else { "not_saved" }.to_string();

    if recommendations.is_empty() {
        return Ok(Json(RecommendResponse {
            user_skills,
            recommendations,
            career_analysis: None,
            message: Some("No careers matched your skills with enough confidence.".to_string()),
            database_status,
        }));
    }

    let top = &recommendations[0];
    let career_analysis = CareerAnalysis {
        best_career: top.career.clone(),
        required_skills: ctx.skill_index.skills_for(&top.career, &ctx.careers).to_vec(),
    };

    Ok(Json(RecommendResponse {
        user_skills,
        recommendations,
        career_analysis: Some(career_analysis),
        message: None,
        database_status,
    }))
}

/// Normalizes free-text skills: trim, lower-case, drop blanks. An empty
/// result is a client error, caught before any vectorization or classifier
/// call.
fn normalize_skills(skills: &[String]) -> Result<Vec<String>, AppError> {
    let normalized: Vec<String> = skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    if normalized.is_empty() {
        return Err(AppError::Validation(
            "The 'skills' list must contain at least one skill".to_string(),
        ));
    }
    Ok(normalized)
}

/// Builds the analytics record for one request. A no-match result is still
/// recorded, with a placeholder top career and zero compatibility.
fn build_record(
    user_skills: &[String],
    experience: String,
    education: String,
    recommendations: &[RecommendationEntry],
    source_address: String,
) -> RecommendationRecord {
    let (top_career, top_compatibility) = match recommendations.first() {
        Some(top) => (top.career.clone(), top.compatibility),
        None => ("none".to_string(), 0.0),
    };

    RecommendationRecord {
        skills: user_skills.to_vec(),
        experience,
        education,
        top_career,
        top_compatibility,
        all_recommendations: summarize(recommendations),
        source_address,
    }
}

/// Pipe-joined one-line summary stored alongside the full record, with the
/// same 2-decimal percentages the response carries.
fn summarize(recommendations: &[RecommendationEntry]) -> String {
    recommendations
        .iter()
        .map(|r| format!("{} ({:.2}%)", r.career, r.compatibility))
        .collect::<Vec<_>>()
        .join(" | ")
}

#[derive(Serialize)]
pub struct SkillListResponse {
    pub available_skills: Vec<String>,
    pub total_skills: usize,
}

/// How many skills the listing endpoint returns at most.
const SKILL_LISTING_LIMIT: usize = 50;

/// GET /api/v1/skills
pub async fn handle_skills(
    State(state): State<AppState>,
) -> Result<Json<SkillListResponse>, AppError> {
    let ctx = state
        .model
        .get_or_load()
        .await
        .map_err(|e| AppError::ModelUnavailable(e.to_string()))?;

    let available_skills: Vec<String> = ctx
        .vocabulary
        .display_names()
        .iter()
        .take(SKILL_LISTING_LIMIT)
        .cloned()
        .collect();
    let total_skills = available_skills.len();

    Ok(Json(SkillListResponse {
        available_skills,
        total_skills,
    }))
}

#[derive(Serialize)]
pub struct CareerListResponse {
    pub available_careers: Vec<String>,
    pub total_careers: usize,
}

/// GET /api/v1/careers
pub async fn handle_careers(
    State(state): State<AppState>,
) -> Result<Json<CareerListResponse>, AppError> {
    let ctx = state
        .model
        .get_or_load()
        .await
        .map_err(|e| AppError::ModelUnavailable(e.to_string()))?;

    let available_careers = ctx.careers.names().to_vec();
    let total_careers = available_careers.len();

    Ok(Json(CareerListResponse {
        available_careers,
        total_careers,
    }))
}

#[derive(Serialize)]
pub struct CareerWithSkills {
    pub career: String,
    pub skills_count: usize,
    pub skills: Vec<String>,
}

#[derive(Serialize)]
pub struct CareersWithSkillsResponse {
    pub total_careers: usize,
    pub careers: Vec<CareerWithSkills>,
}

/// Skills shown per career in the combined listing.
const SKILLS_PER_CAREER_LISTING: usize = 6;

/// GET /api/v1/careers-with-skills
pub async fn handle_careers_with_skills(
    State(state): State<AppState>,
) -> Result<Json<CareersWithSkillsResponse>, AppError> {
    let ctx = state
        .model
        .get_or_load()
        .await
        .map_err(|e| AppError::ModelUnavailable(e.to_string()))?;

    let careers: Vec<CareerWithSkills> = ctx
        .careers
        .names()
        .iter()
        .enumerate()
        .map(|(class_idx, name)| {
            let skills = ctx.skill_index.skills_for_class(class_idx);
            CareerWithSkills {
                career: name.clone(),
                skills_count: skills.len(),
                skills: skills.iter().take(SKILLS_PER_CAREER_LISTING).cloned().collect(),
            }
        })
        .collect();

    Ok(Json(CareersWithSkillsResponse {
        total_careers: careers.len(),
        careers,
    }))
}

/// GET /api/v1/stats
/// Reports on whatever is currently loaded without forcing a model load.
pub async fn handle_stats(State(state): State<AppState>) -> Json<Value> {
    let (total_careers, total_skills, model_loaded) = match state.model.get().await {
        Some(ctx) => (ctx.careers.len(), ctx.vocabulary.len(), true),
        None => (0, 0, false),
    };

    let database_connection = if sqlx::query("SELECT 1").execute(&state.db).await.is_ok() {
        "connected"
    } else {
        "disconnected"
    };

    Json(json!({
        "model_stats": {
            "total_careers": total_careers,
            "total_skills": total_skills,
            "model_loaded": model_loaded,
            "status": if model_loaded { "operational" } else { "not_loaded" },
        },
        "database_connection": database_connection,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<RecommendationEntry> {
        vec![
            RecommendationEntry {
                career: "Data Engineer".to_string(),
                compatibility: 70.0,
                career_id: 0,
            },
            RecommendationEntry {
                career: "Analyst".to_string(),
                compatibility: 20.5,
                career_id: 1,
            },
        ]
    }

    #[test]
    fn test_normalize_skills_trims_and_lowercases() {
        let skills = vec!["  Python  ".to_string(), "SQL".to_string()];
        assert_eq!(normalize_skills(&skills).unwrap(), vec!["python", "sql"]);
    }

    #[test]
    fn test_empty_skills_rejected_before_vectorization() {
        let err = normalize_skills(&[]).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)), "got {err:?}");
    }

    #[test]
    fn test_blank_only_skills_rejected_before_vectorization() {
        let skills = vec!["   ".to_string(), "".to_string()];
        let err = normalize_skills(&skills).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)), "got {err:?}");
    }

    #[test]
    fn test_record_carries_top_entry() {
        let record = build_record(
            &["python".to_string()],
            "2 years".to_string(),
            "BSc".to_string(),
            &entries(),
            "127.0.0.1".to_string(),
        );
        assert_eq!(record.top_career, "Data Engineer");
        assert_eq!(record.top_compatibility, 70.0);
    }

    #[test]
    fn test_no_match_request_is_still_recorded_with_placeholder() {
        let record = build_record(
            &["basket weaving".to_string()],
            String::new(),
            String::new(),
            &[],
            "127.0.0.1".to_string(),
        );
        assert_eq!(record.top_career, "none");
        assert_eq!(record.top_compatibility, 0.0);
        assert_eq!(record.all_recommendations, "");
    }

    #[test]
    fn test_summarize_joins_with_two_decimal_percentages() {
        assert_eq!(
            summarize(&entries()),
            "Data Engineer (70.00%) | Analyst (20.50%)"
        );
    }

    #[test]
    fn test_summarize_empty_list() {
        assert_eq!(summarize(&[]), "");
    }
}
