//! PostgreSQL implementation of PromptRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use retro_core::{PromptRepository, ReflectPrompt, RepoResult};

use crate::models::ReflectPromptModel;

use super::error::map_db_error;

/// PostgreSQL implementation of PromptRepository
#[derive(Clone)]
pub struct PgPromptRepository {
    pool: PgPool,
}

impl PgPromptRepository {
    /// Create a new PgPromptRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PromptRepository for PgPromptRepository {
    #[instrument(skip(self))]
    async fn find_by_template(&self, template_id: &str) -> RepoResult<Vec<ReflectPrompt>> {
        // Removed prompts are kept; visibility depends on the meeting's creation time
        let results = sqlx::query_as::<_, ReflectPromptModel>(
            r#"
            SELECT id, template_id, team_id, question, description, group_color,
                   sort_order, created_at, updated_at, removed_at
            FROM reflect_prompts
            WHERE template_id = $1
            ORDER BY sort_order, id
            "#,
        )
        .bind(template_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ReflectPrompt::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<ReflectPrompt>> {
        let result = sqlx::query_as::<_, ReflectPromptModel>(
            r#"
            SELECT id, template_id, team_id, question, description, group_color,
                   sort_order, created_at, updated_at, removed_at
            FROM reflect_prompts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ReflectPrompt::from))
    }
}
