//! PostgreSQL reactable store for team prompt responses
//!
//! Both writes are a single `UPDATE`, so concurrent adds of the same pair
//! cannot produce duplicates.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use retro_core::{Reactable, ReactableKind, ReactableStore, Reactji, RepoResult, ResponseId};

use crate::models::TeamPromptResponseModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ReactableStore for `RESPONSE` reactables
#[derive(Clone)]
pub struct PgResponseStore {
    pool: PgPool,
}

impl PgResponseStore {
    /// Create a new PgResponseStore
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run one reactji array update against the response with public id `id`
    async fn update_reactjis(&self, sql: &'static str, id: &str, reactji: &Reactji) -> RepoResult<()> {
        let key = ResponseId::split(id)?;

        let result = sqlx::query(sql)
            .bind(key)
            .bind(&reactji.id)
            .bind(&reactji.user_id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        debug!(rows = result.rows_affected(), "Updated response reactjis");
        Ok(())
    }
}

#[async_trait]
impl ReactableStore for PgResponseStore {
    #[instrument(skip(self))]
    async fn load(&self, kind: ReactableKind, id: &str) -> RepoResult<Option<Reactable>> {
        if !kind.is_relational() {
            return Ok(None);
        }
        let Ok(key) = ResponseId::split(id) else {
            return Ok(None);
        };

        let result = sqlx::query_as::<_, TeamPromptResponseModel>(
            r#"
            SELECT id, meeting_id, user_id, plaintext_content,
                   to_jsonb(reactjis) AS reactjis, created_at, updated_at
            FROM team_prompt_responses
            WHERE id = $1
            "#,
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Reactable::from))
    }

    #[instrument(skip(self))]
    async fn add_reactji(&self, _kind: ReactableKind, id: &str, reactji: &Reactji) -> RepoResult<()> {
        self.update_reactjis(
            r#"
            UPDATE team_prompt_responses
            SET reactjis = arr_append_uniq(reactjis, ROW($2, $3)::reactji)
            WHERE id = $1
            "#,
            id,
            reactji,
        )
        .await
    }

    #[instrument(skip(self))]
    async fn remove_reactji(&self, _kind: ReactableKind, id: &str, reactji: &Reactji) -> RepoResult<()> {
        self.update_reactjis(
            r#"
            UPDATE team_prompt_responses
            SET reactjis = array_remove(reactjis, ROW($2, $3)::reactji)
            WHERE id = $1
            "#,
            id,
            reactji,
        )
        .await
    }
}
