//! Pub/Sub channel definitions.
//!
//! A Redis channel is a subscription channel plus a topic id, named
//! `{channel}.{topicId}` (e.g. `meeting.abc123`).

use retro_core::SubscriptionChannel;

/// A concrete Redis Pub/Sub channel
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PubSubChannel {
    pub channel: SubscriptionChannel,
    pub topic_id: String,
}

impl PubSubChannel {
    #[must_use]
    pub fn new(channel: SubscriptionChannel, topic_id: impl Into<String>) -> Self {
        Self {
            channel,
            topic_id: topic_id.into(),
        }
    }

    /// Channel for every live subscriber of a meeting
    #[must_use]
    pub fn meeting(meeting_id: impl Into<String>) -> Self {
        Self::new(SubscriptionChannel::Meeting, meeting_id)
    }

    /// Get the Redis channel name
    #[must_use]
    pub fn name(&self) -> String {
        self.channel.topic(&self.topic_id)
    }

    /// Parse a channel name back to a `PubSubChannel`
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let (prefix, topic_id) = name.split_once('.')?;
        if topic_id.is_empty() {
            return None;
        }
        let channel = match prefix {
            "meeting" => SubscriptionChannel::Meeting,
            "notification" => SubscriptionChannel::Notification,
            "organization" => SubscriptionChannel::Organization,
            "task" => SubscriptionChannel::Task,
            "team" => SubscriptionChannel::Team,
            _ => return None,
        };
        Some(Self::new(channel, topic_id))
    }
}

impl std::fmt::Display for PubSubChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_names() {
        assert_eq!(PubSubChannel::meeting("m1").name(), "meeting.m1");
        assert_eq!(
            PubSubChannel::new(SubscriptionChannel::Team, "t1").to_string(),
            "team.t1"
        );
    }

    #[test]
    fn test_channel_parse() {
        assert_eq!(
            PubSubChannel::parse("meeting.m1"),
            Some(PubSubChannel::meeting("m1"))
        );
        // topic ids may themselves contain dots
        assert_eq!(
            PubSubChannel::parse("task.a.b").map(|c| c.topic_id),
            Some("a.b".to_string())
        );
        assert_eq!(PubSubChannel::parse("guild.1"), None);
        assert_eq!(PubSubChannel::parse("meeting."), None);
        assert_eq!(PubSubChannel::parse("meeting"), None);
    }
}
