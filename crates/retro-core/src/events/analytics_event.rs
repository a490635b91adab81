//! Analytics events - product usage records sent to the analytics sink

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{MeetingType, ReactableKind};

/// Analytics event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum AnalyticsEvent {
    /// A viewer added or removed a reactji
    #[serde(rename = "Reactji Interacted", rename_all = "camelCase")]
    ReactjiInteracted {
        user_id: String,
        email: Option<String>,
        meeting_id: String,
        /// Absent when the meeting could not be loaded
        meeting_type: Option<MeetingType>,
        reactable_id: String,
        reactable_type: ReactableKind,
        reactji: String,
        is_remove: bool,
        occurred_at: DateTime<Utc>,
    },
}

impl AnalyticsEvent {
    /// Get the event name
    pub fn name(&self) -> &'static str {
        match self {
            Self::ReactjiInteracted { .. } => "Reactji Interacted",
        }
    }

    /// User the event is attributed to
    pub fn user_id(&self) -> &str {
        match self {
            Self::ReactjiInteracted { user_id, .. } => user_id,
        }
    }
}
