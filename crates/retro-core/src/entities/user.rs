//! User entity

use chrono::{DateTime, Utc};

/// User entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub preferred_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}
