//! Redis Pub/Sub publisher.
//!
//! Publishes meeting events to Redis channels for distribution to subscribers.

use async_trait::async_trait;
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};

use retro_core::{DomainError, EventPublisher, MeetingEvent, PublishOptions, SubscriptionChannel};

use crate::pool::{map_cache_error, RedisPool, RedisResult};
use crate::pubsub::PubSubChannel;

/// Wire envelope for Pub/Sub messages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PubSubEvent {
    /// Event type name (e.g., "AddReactjiToReactableSuccess")
    #[serde(rename = "type")]
    pub event_type: String,
    /// Event payload
    pub data: serde_json::Value,
    /// Connection that caused the event; clients skip their own echoes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mutator_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
}

impl PubSubEvent {
    /// Create a new event
    #[must_use]
    pub fn new(event_type: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            event_type: event_type.into(),
            data,
            mutator_id: None,
            operation_id: None,
        }
    }

    /// Build the envelope for a meeting event
    pub fn from_meeting_event(
        event: &MeetingEvent,
        options: &PublishOptions,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            event_type: event.event_type().to_string(),
            data: event.data()?,
            mutator_id: options.mutator_id.clone(),
            operation_id: options.operation_id.clone(),
        })
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Redis Pub/Sub publisher
#[derive(Clone)]
pub struct Publisher {
    pool: RedisPool,
}

impl Publisher {
    /// Create a new publisher
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }

    /// Publish an envelope to a channel, returning the number of receivers
    pub async fn publish_event(&self, channel: &PubSubChannel, event: &PubSubEvent) -> RedisResult<u32> {
        let mut conn = self.pool.get().await?;
        let channel_name = channel.name();
        let payload = event.to_json()?;

        let receivers: u32 = conn.publish(&channel_name, &payload).await?;

        tracing::debug!(
            channel = %channel_name,
            event_type = %event.event_type,
            receivers = receivers,
            "Published event"
        );

        Ok(receivers)
    }
}

#[async_trait]
impl EventPublisher for Publisher {
    async fn publish(
        &self,
        channel: SubscriptionChannel,
        topic_id: &str,
        event: &MeetingEvent,
        options: &PublishOptions,
    ) -> Result<(), DomainError> {
        let envelope = PubSubEvent::from_meeting_event(event, options)
            .map_err(|e| DomainError::SerializationError(e.to_string()))?;

        self.publish_event(&PubSubChannel::new(channel, topic_id), &envelope)
            .await
            .map_err(map_cache_error)?;

        Ok(())
    }
}
