//! Meeting member entity <-> model mapper

use retro_core::{DomainError, MeetingMember, MeetingMemberId};

use crate::models::MeetingMemberModel;

/// Convert MeetingMemberModel to MeetingMember entity
impl TryFrom<MeetingMemberModel> for MeetingMember {
    type Error = DomainError;

    fn try_from(model: MeetingMemberModel) -> Result<Self, Self::Error> {
        Ok(MeetingMember {
            id: MeetingMemberId::parse(&model.id)?,
            meeting_id: model.meeting_id,
            user_id: model.user_id,
            team_id: model.team_id,
            is_checked_in: model.is_checked_in,
            joined_at: model.joined_at,
        })
    }
}
