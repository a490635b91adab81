//! Meeting database model

use chrono::{DateTime, Utc};
use retro_core::MeetingPhase;
use sqlx::types::Json;
use sqlx::FromRow;

/// Database model for meetings table
#[derive(Debug, Clone, FromRow)]
pub struct MeetingModel {
    pub id: String,
    pub team_id: String,
    pub meeting_type: String,
    pub template_id: Option<String>,
    pub facilitator_user_id: String,
    pub phases: Json<Vec<MeetingPhase>>,
    pub created_at: DateTime<Utc>,
}
