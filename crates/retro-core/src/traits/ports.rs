//! Outbound ports for side effects that never fail a mutation

use async_trait::async_trait;

use crate::error::DomainError;
use crate::events::{AnalyticsEvent, MeetingEvent, PublishOptions, SubscriptionChannel};

/// Broadcasts events to live subscribers of a channel
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish an event on `channel` for `topic_id`
    async fn publish(
        &self,
        channel: SubscriptionChannel,
        topic_id: &str,
        event: &MeetingEvent,
        options: &PublishOptions,
    ) -> Result<(), DomainError>;
}

/// Receives product analytics events
#[async_trait]
pub trait AnalyticsSink: Send + Sync {
    async fn track(&self, event: AnalyticsEvent) -> Result<(), DomainError>;
}
