//! Meeting member entity - a viewer's membership in a meeting

use chrono::{DateTime, Utc};

use crate::value_objects::MeetingMemberId;

/// Meeting member entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingMember {
    pub id: MeetingMemberId,
    pub meeting_id: String,
    pub user_id: String,
    pub team_id: String,
    pub is_checked_in: Option<bool>,
    pub joined_at: DateTime<Utc>,
}

impl MeetingMember {
    /// Create a new MeetingMember
    pub fn new(meeting_id: &str, user_id: &str, team_id: &str) -> Self {
        Self {
            id: MeetingMemberId::new(meeting_id, user_id),
            meeting_id: meeting_id.to_string(),
            user_id: user_id.to_string(),
            team_id: team_id.to_string(),
            is_checked_in: None,
            joined_at: Utc::now(),
        }
    }
}
