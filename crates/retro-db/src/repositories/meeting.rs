//! PostgreSQL implementation of MeetingRepository

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::instrument;

use retro_core::{Meeting, MeetingPhase, MeetingRepository, RepoResult};

use crate::models::MeetingModel;

use super::error::{map_db_error, meeting_not_found};

/// PostgreSQL implementation of MeetingRepository
#[derive(Clone)]
pub struct PgMeetingRepository {
    pool: PgPool,
}

impl PgMeetingRepository {
    /// Create a new PgMeetingRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MeetingRepository for PgMeetingRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Meeting>> {
        let result = sqlx::query_as::<_, MeetingModel>(
            r#"
            SELECT id, team_id, meeting_type, template_id, facilitator_user_id, phases, created_at
            FROM meetings
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Meeting::try_from).transpose()
    }

    #[instrument(skip(self, phases))]
    async fn update_phases(&self, id: &str, phases: &[MeetingPhase]) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE meetings SET phases = $2 WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(Json(phases))
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(meeting_not_found(id));
        }

        Ok(())
    }
}
