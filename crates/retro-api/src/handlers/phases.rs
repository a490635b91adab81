//! Meeting phase handlers
//!
//! Reflect prompts, the focused prompt, estimate stages and vote reveal.

use axum::{extract::State, Json};
use retro_service::dto::{
    ApiResponse, EstimateStageResponse, ReflectPromptResponse, RevealVotesResponse,
};
use retro_service::{DataLoader, PhaseService};

use crate::extractors::{ApiPath, AuthUser, MeetingPath, MutatorId, StagePath};
use crate::response::ApiResult;
use crate::state::AppState;

/// Prompts active for the meeting
///
/// GET /meetings/{meeting_id}/reflect-prompts
pub async fn get_reflect_prompts(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(path): ApiPath<MeetingPath>,
) -> ApiResult<Json<ApiResponse<Vec<ReflectPromptResponse>>>> {
    let loader = DataLoader::new();
    let prompts = PhaseService::new(state.service_context(), &loader)
        .reflect_prompts(&auth.viewer_id, &path.meeting_id)
        .await?;
    Ok(Json(ApiResponse::new(prompts)))
}

/// Focused prompt of the reflect phase, `null` when none
///
/// GET /meetings/{meeting_id}/focused-prompt
pub async fn get_focused_prompt(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(path): ApiPath<MeetingPath>,
) -> ApiResult<Json<ApiResponse<Option<ReflectPromptResponse>>>> {
    let loader = DataLoader::new();
    let prompt = PhaseService::new(state.service_context(), &loader)
        .focused_prompt(&auth.viewer_id, &path.meeting_id)
        .await?;
    Ok(Json(ApiResponse::new(prompt)))
}

/// GET /meetings/{meeting_id}/estimate-stages/{stage_id}
pub async fn get_estimate_stage(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(path): ApiPath<StagePath>,
) -> ApiResult<Json<ApiResponse<EstimateStageResponse>>> {
    let loader = DataLoader::new();
    let stage = PhaseService::new(state.service_context(), &loader)
        .estimate_stage(&auth.viewer_id, &path.meeting_id, &path.stage_id)
        .await?;
    Ok(Json(ApiResponse::new(stage)))
}

/// Reveal the votes of an estimate stage
///
/// POST /meetings/{meeting_id}/estimate-stages/{stage_id}/reveal
pub async fn reveal_votes(
    State(state): State<AppState>,
    auth: AuthUser,
    MutatorId(mutator_id): MutatorId,
    ApiPath(path): ApiPath<StagePath>,
) -> ApiResult<Json<ApiResponse<RevealVotesResponse>>> {
    let loader = DataLoader::new();
    let revealed = PhaseService::new(state.service_context(), &loader)
        .reveal_votes(&auth.viewer_id, mutator_id, &path.meeting_id, &path.stage_id)
        .await?;
    Ok(Json(ApiResponse::new(revealed)))
}
