//! Team prompt response database model

use chrono::{DateTime, Utc};
use retro_core::Reactji;
use sqlx::types::Json;
use sqlx::FromRow;

/// Database model for team_prompt_responses table
///
/// `reactjis` is selected as `to_jsonb(reactjis)`; the composite field names
/// of the `reactji` type line up with the JSON form of [`Reactji`].
#[derive(Debug, Clone, FromRow)]
pub struct TeamPromptResponseModel {
    pub id: i64,
    pub meeting_id: String,
    pub user_id: String,
    pub plaintext_content: String,
    pub reactjis: Json<Vec<Reactji>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
