use serde::{Deserialize, Serialize};
use crate::models::domain::ActivityId;

/// Response for the ids endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdsResponse {
    #[serde(rename = "activityId")]
    pub activity_id: ActivityId,
    pub ids: Vec<ActivityId>,
    pub total: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
