use serde::{Deserialize, Serialize};

/// Body of `POST /api/v1/recommend`.
#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub education: Option<String>,
}

/// One ranked career with its compatibility percentage (0–100, 2 decimals).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationEntry {
    pub career: String,
    pub compatibility: f64,
    pub career_id: usize,
}

/// Reverse-index detail for the top recommendation.
#[derive(Debug, Serialize)]
pub struct CareerAnalysis {
    pub best_career: String,
    pub required_skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub user_skills: Vec<String>,
    pub recommendations: Vec<RecommendationEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub career_analysis: Option<CareerAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub database_status: String,
}

/// What the analytics sink receives after ranking completes.
#[derive(Debug, Clone)]
pub struct RecommendationRecord {
    pub skills: Vec<String>,
    pub experience: String,
    pub education: String,
    pub top_career: String,
    pub top_compatibility: f64,
    pub all_recommendations: String,
    pub source_address: String,
}
