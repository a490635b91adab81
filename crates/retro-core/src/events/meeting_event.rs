//! Meeting events - broadcast to every live subscriber of a meeting
//!
//! The payload carries the mutator and operation ids so the client that
//! issued the mutation can recognise and ignore its own echo.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::entities::ReactableKind;

/// Subscription channels, each keyed by a topic id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionChannel {
    Meeting,
    Notification,
    Organization,
    Task,
    Team,
}

impl SubscriptionChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Meeting => "meeting",
            Self::Notification => "notification",
            Self::Organization => "organization",
            Self::Task => "task",
            Self::Team => "team",
        }
    }

    /// Topic name for a channel id, e.g. `meeting.abc123`
    pub fn topic(&self, id: &str) -> String {
        format!("{}.{id}", self.as_str())
    }
}

impl fmt::Display for SubscriptionChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Origin tags attached to a published event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishOptions {
    /// Connection (socket) id of the client that issued the mutation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mutator_id: Option<String>,
    /// Id shared by every event emitted while handling one request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
}

impl PublishOptions {
    pub fn new(mutator_id: Option<String>, operation_id: impl Into<String>) -> Self {
        Self {
            mutator_id,
            operation_id: Some(operation_id.into()),
        }
    }
}

/// Payload of a reactji change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactjiChangedPayload {
    pub reactable_id: String,
    pub reactable_type: ReactableKind,
}

/// Payload of a poker vote reveal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokerRevealVotesPayload {
    pub meeting_id: String,
    pub stage_id: String,
}

/// Events published on the meeting channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MeetingEvent {
    #[serde(rename = "AddReactjiToReactableSuccess")]
    ReactjiChanged(ReactjiChangedPayload),
    #[serde(rename = "PokerRevealVotesSuccess")]
    PokerVotesRevealed(PokerRevealVotesPayload),
}

impl MeetingEvent {
    /// Get the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::ReactjiChanged(_) => "AddReactjiToReactableSuccess",
            Self::PokerVotesRevealed(_) => "PokerRevealVotesSuccess",
        }
    }

    /// The payload without the type tag
    pub fn data(&self) -> Result<Value, serde_json::Error> {
        match self {
            Self::ReactjiChanged(payload) => serde_json::to_value(payload),
            Self::PokerVotesRevealed(payload) => serde_json::to_value(payload),
        }
    }
}
