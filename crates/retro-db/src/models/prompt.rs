//! Reflect prompt database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for reflect_prompts table
#[derive(Debug, Clone, FromRow)]
pub struct ReflectPromptModel {
    pub id: String,
    pub template_id: String,
    pub team_id: String,
    pub question: String,
    pub description: String,
    pub group_color: String,
    pub sort_order: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub removed_at: Option<DateTime<Utc>>,
}

impl ReflectPromptModel {
    /// Check if prompt is soft deleted
    #[inline]
    pub fn is_removed(&self) -> bool {
        self.removed_at.is_some()
    }
}
