//! Reactji handlers
//!
//! The add/remove reactji mutation and the grouped reactji read.

use axum::{extract::State, Json};
use retro_core::ReactjiGroup;
use retro_service::dto::{AddReactjiRequest, ApiResponse, MutationPayload};
use retro_service::{DataLoader, ReactjiService};

use crate::extractors::{ApiPath, AuthUser, MutatorId, ReactablePath, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Add or remove a reactji
///
/// POST /reactji
///
/// Rejections such as an unknown reactji or a full reactable are part of the
/// payload and come back with 200.
pub async fn add_reactji_to_reactable(
    State(state): State<AppState>,
    auth: AuthUser,
    MutatorId(mutator_id): MutatorId,
    ValidatedJson(request): ValidatedJson<AddReactjiRequest>,
) -> ApiResult<Json<MutationPayload>> {
    let loader = DataLoader::new();
    let service = ReactjiService::new(state.service_context(), &loader);
    let payload = service
        .add_reactji_to_reactable(&auth.viewer_id, mutator_id, request)
        .await?;
    Ok(Json(payload))
}

/// Reactji groups of a reactable
///
/// GET /meetings/{meeting_id}/reactables/{reactable_type}/{reactable_id}/reactjis
pub async fn get_reactjis(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(path): ApiPath<ReactablePath>,
) -> ApiResult<Json<ApiResponse<Vec<ReactjiGroup>>>> {
    let loader = DataLoader::new();
    let service = ReactjiService::new(state.service_context(), &loader);
    let groups = service
        .grouped_reactjis(
            &auth.viewer_id,
            &path.meeting_id,
            path.reactable_type,
            &path.reactable_id,
        )
        .await?;
    Ok(Json(ApiResponse::new(groups)))
}
