//! PostgreSQL implementation of MeetingMemberRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use retro_core::{MeetingMember, MeetingMemberId, MeetingMemberRepository, RepoResult};

use crate::models::MeetingMemberModel;

use super::error::map_db_error;

/// PostgreSQL implementation of MeetingMemberRepository
#[derive(Clone)]
pub struct PgMeetingMemberRepository {
    pool: PgPool,
}

impl PgMeetingMemberRepository {
    /// Create a new PgMeetingMemberRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MeetingMemberRepository for PgMeetingMemberRepository {
    #[instrument(skip(self), fields(member_id = %id))]
    async fn find(&self, id: &MeetingMemberId) -> RepoResult<Option<MeetingMember>> {
        let result = sqlx::query_as::<_, MeetingMemberModel>(
            r#"
            SELECT id, meeting_id, user_id, team_id, is_checked_in, joined_at
            FROM meeting_members
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(MeetingMember::try_from).transpose()
    }
}
