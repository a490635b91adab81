//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use retro_core::{ReactableKind, ReactjiChangedPayload};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Task service reported for stages that do not name one
pub const DEFAULT_TASK_SERVICE: &str = "PARABOL";

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

// ============================================================================
// Reactji Mutation
// ============================================================================

/// Expected failures of the reactji mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ReactjiError {
    #[error("Item does not exist")]
    NotFound,

    #[error("Unknown item")]
    UnknownItem,

    #[error("Not a member of the meeting")]
    NotAMember,

    #[error("invalid emoji")]
    InvalidReaction,

    #[error("Reactji limit reached")]
    ReactionLimitReached,
}

impl Serialize for ReactjiError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ReactjiError", 1)?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Result of the reactji mutation, reported as data either way
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MutationPayload {
    Success(ReactjiChangedPayload),
    Error { error: ReactjiError },
}

impl MutationPayload {
    pub fn success(reactable_id: impl Into<String>, reactable_type: ReactableKind) -> Self {
        Self::Success(ReactjiChangedPayload {
            reactable_id: reactable_id.into(),
            reactable_type,
        })
    }

    pub fn error(error: ReactjiError) -> Self {
        Self::Error { error }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The expected failure, if any
    pub fn error_kind(&self) -> Option<ReactjiError> {
        match self {
            Self::Success(_) => None,
            Self::Error { error } => Some(*error),
        }
    }
}

// ============================================================================
// Phase Responses
// ============================================================================

/// Reflect prompt (retrospective column)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReflectPromptResponse {
    pub id: String,
    pub template_id: String,
    pub question: String,
    pub description: String,
    pub group_color: String,
    pub sort_order: f64,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed_at: Option<DateTime<Utc>>,
}

/// One participant's vote on an estimate stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateUserScoreResponse {
    pub stage_id: String,
    pub user_id: String,
    pub label: String,
}

/// Team member hovering the deck
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoveringUserResponse {
    pub id: String,
    pub preferred_name: String,
}

/// The stage where the team estimates a single task
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateStageResponse {
    pub id: String,
    pub meeting_id: String,
    pub is_complete: bool,
    pub is_navigable: bool,
    pub creator_user_id: Option<String>,
    pub service: String,
    pub service_task_id: Option<String>,
    pub sort_order: Option<f64>,
    pub dimension_id: Option<String>,
    pub final_score: Option<String>,
    pub scores: Vec<EstimateUserScoreResponse>,
    /// False once votes are revealed
    pub is_voting: bool,
    pub hovering_user_ids: Vec<String>,
    pub hovering_users: Vec<HoveringUserResponse>,
}

/// Payload of the reveal votes mutation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevealVotesResponse {
    pub meeting_id: String,
    pub stage_id: String,
    pub stage: EstimateStageResponse,
}

// ============================================================================
// Health Check Responses
// ============================================================================

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each backend
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    pub redis: String,
}

fn health_label(healthy: bool) -> String {
    if healthy { "healthy" } else { "unhealthy" }.to_string()
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool, redis_healthy: bool) -> Self {
        let all_healthy = database_healthy && redis_healthy;
        Self {
            status: if all_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: health_label(database_healthy),
                redis: health_label(redis_healthy),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
