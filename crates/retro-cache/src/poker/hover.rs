//! Deck hover sets
//!
//! While a user hovers over the estimate deck of a stage, their id is a
//! member of the set `pokerHover:{stageId}`.

use async_trait::async_trait;
use tracing::instrument;

use retro_core::{RepoResult, StageHoverRepository};

use crate::pool::{map_cache_error, RedisPool};

/// Key prefix for hover sets
pub const POKER_HOVER_PREFIX: &str = "pokerHover:";

/// Key of the hover set of a stage
pub fn hover_key(stage_id: &str) -> String {
    format!("{POKER_HOVER_PREFIX}{stage_id}")
}

/// Redis store of hovering users per estimate stage
#[derive(Debug, Clone)]
pub struct PokerHoverStore {
    pool: RedisPool,
}

impl PokerHoverStore {
    /// Create a new hover store
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }

    /// Mark a user as hovering (or no longer hovering) over a stage's deck
    #[instrument(skip(self))]
    pub async fn set_hovering(&self, stage_id: &str, user_id: &str, is_hover: bool) -> RepoResult<()> {
        let key = hover_key(stage_id);
        let result = if is_hover {
            self.pool.set_add(&key, user_id).await
        } else {
            self.pool.set_remove(&key, user_id).await
        };
        result.map_err(map_cache_error)
    }
}

#[async_trait]
impl StageHoverRepository for PokerHoverStore {
    #[instrument(skip(self))]
    async fn hovering_user_ids(&self, stage_id: &str) -> RepoResult<Vec<String>> {
        let mut user_ids = self
            .pool
            .set_members(&hover_key(stage_id))
            .await
            .map_err(map_cache_error)?;
        // set members come back unordered
        user_ids.sort();
        Ok(user_ids)
    }
}
