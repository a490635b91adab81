//! Meeting member database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for meeting_members table
#[derive(Debug, Clone, FromRow)]
pub struct MeetingMemberModel {
    pub id: String,
    pub meeting_id: String,
    pub user_id: String,
    pub team_id: String,
    pub is_checked_in: Option<bool>,
    pub joined_at: DateTime<Utc>,
}
