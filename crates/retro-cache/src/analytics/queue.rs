//! Redis list analytics sink
//!
//! Events are pushed as JSON onto a list; a separate forwarder drains it
//! into the analytics provider.

use async_trait::async_trait;

use retro_core::{AnalyticsEvent, AnalyticsSink, DomainError};

use crate::pool::{map_cache_error, RedisPool};

/// Analytics sink backed by a Redis list
#[derive(Debug, Clone)]
pub struct AnalyticsQueue {
    pool: RedisPool,
    key: String,
}

impl AnalyticsQueue {
    /// Create a queue writing to the list at `key`
    #[must_use]
    pub fn new(pool: RedisPool, key: impl Into<String>) -> Self {
        Self {
            pool,
            key: key.into(),
        }
    }

    /// The list key events are pushed onto
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

#[async_trait]
impl AnalyticsSink for AnalyticsQueue {
    async fn track(&self, event: AnalyticsEvent) -> Result<(), DomainError> {
        let depth = self.pool.push(&self.key, &event).await.map_err(map_cache_error)?;

        tracing::debug!(
            event = event.name(),
            user_id = event.user_id(),
            depth,
            "Queued analytics event"
        );

        Ok(())
    }
}
