//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use retro_core::{MeetingStage, ReflectPrompt, User};

use super::responses::{
    EstimateStageResponse, EstimateUserScoreResponse, HoveringUserResponse, ReflectPromptResponse,
    DEFAULT_TASK_SERVICE,
};

// ============================================================================
// Prompt Mappers
// ============================================================================

impl From<&ReflectPrompt> for ReflectPromptResponse {
    fn from(prompt: &ReflectPrompt) -> Self {
        Self {
            id: prompt.id.clone(),
            template_id: prompt.template_id.clone(),
            question: prompt.question.clone(),
            description: prompt.description.clone(),
            group_color: prompt.group_color.clone(),
            sort_order: prompt.sort_order,
            created_at: prompt.created_at,
            removed_at: prompt.removed_at,
        }
    }
}

impl From<ReflectPrompt> for ReflectPromptResponse {
    fn from(prompt: ReflectPrompt) -> Self {
        Self::from(&prompt)
    }
}

// ============================================================================
// Stage Mappers
// ============================================================================

impl From<&User> for HoveringUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            preferred_name: user.preferred_name.clone(),
        }
    }
}

impl EstimateStageResponse {
    /// Build from a stored stage plus the hover state read from Redis
    pub fn from_stage(
        meeting_id: &str,
        stage: &MeetingStage,
        hovering_user_ids: Vec<String>,
        hovering_users: &[User],
    ) -> Self {
        Self {
            id: stage.id.clone(),
            meeting_id: meeting_id.to_string(),
            is_complete: stage.is_complete,
            is_navigable: stage.is_navigable,
            creator_user_id: stage.creator_user_id.clone(),
            service: stage
                .service
                .clone()
                .unwrap_or_else(|| DEFAULT_TASK_SERVICE.to_string()),
            service_task_id: stage.service_task_id.clone(),
            sort_order: stage.sort_order,
            dimension_id: stage.dimension_id.clone(),
            final_score: stage.final_score.clone(),
            scores: stage
                .scores
                .iter()
                .map(|score| EstimateUserScoreResponse {
                    stage_id: stage.id.clone(),
                    user_id: score.user_id.clone(),
                    label: score.label.clone(),
                })
                .collect(),
            is_voting: stage.is_voting.unwrap_or(false),
            hovering_user_ids,
            hovering_users: hovering_users.iter().map(HoveringUserResponse::from).collect(),
        }
    }
}
