//! Meeting entity <-> model mapper

use retro_core::{DomainError, Meeting, MeetingType};

use crate::models::MeetingModel;

/// Convert MeetingModel to Meeting entity
impl TryFrom<MeetingModel> for Meeting {
    type Error = DomainError;

    fn try_from(model: MeetingModel) -> Result<Self, Self::Error> {
        let meeting_type = model
            .meeting_type
            .parse::<MeetingType>()
            .map_err(DomainError::SerializationError)?;

        Ok(Meeting {
            id: model.id,
            team_id: model.team_id,
            meeting_type,
            template_id: model.template_id,
            facilitator_user_id: model.facilitator_user_id,
            phases: model.phases.0,
            created_at: model.created_at,
        })
    }
}
