use serde::{Deserialize, Serialize};
use crate::models::domain::{Classification, MatchResult};

/// Response for the partner match endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchPartnersResponse {
    pub query: String,
    pub matches: Vec<MatchResult>,
    pub total_snps_evaluated: usize,
}

/// Result of classifying and matching an enterprise during onboarding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingAssessment {
    pub business_name: String,
    pub classification: Classification,
    pub matched_snp: Option<MatchResult>,
    pub match_score: Option<f64>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub total_partners: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
