//! Team prompt response entity <-> model mapper

use retro_core::{Reactable, TeamPromptResponse};

use crate::models::TeamPromptResponseModel;

/// Convert TeamPromptResponseModel to TeamPromptResponse entity
impl From<TeamPromptResponseModel> for TeamPromptResponse {
    fn from(model: TeamPromptResponseModel) -> Self {
        TeamPromptResponse {
            id: model.id,
            meeting_id: model.meeting_id,
            user_id: model.user_id,
            plaintext_content: model.plaintext_content,
            reactjis: model.reactjis.0,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<TeamPromptResponseModel> for Reactable {
    fn from(model: TeamPromptResponseModel) -> Self {
        Reactable::Response(model.into())
    }
}
