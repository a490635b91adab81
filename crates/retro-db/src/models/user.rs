//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: String,
    pub preferred_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}
