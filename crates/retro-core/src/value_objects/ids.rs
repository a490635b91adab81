//! Composite and encoded identifiers
//!
//! - `MeetingMemberId`: `{userId}::{meetingId}`, the key of a meeting membership row
//! - `ResponseId`: `teamPromptResponse:{n}`, the public form of a numeric response key

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between the user and meeting parts of a member id
pub const MEETING_MEMBER_SEPARATOR: &str = "::";

/// Prefix of an encoded team prompt response id
pub const RESPONSE_ID_PREFIX: &str = "teamPromptResponse";

/// Error when decoding an identifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("Invalid response id: {0}")]
    InvalidResponseId(String),

    #[error("Invalid meeting member id: {0}")]
    InvalidMeetingMemberId(String),
}

/// Identifier of a viewer's membership in a meeting
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeetingMemberId(String);

impl MeetingMemberId {
    /// Build the member id for a viewer in a meeting
    pub fn new(meeting_id: &str, user_id: &str) -> Self {
        Self(format!("{user_id}{MEETING_MEMBER_SEPARATOR}{meeting_id}"))
    }

    /// Parse an existing member id
    pub fn parse(raw: &str) -> Result<Self, IdParseError> {
        match raw.split_once(MEETING_MEMBER_SEPARATOR) {
            Some((user, meeting)) if !user.is_empty() && !meeting.is_empty() => {
                Ok(Self(raw.to_string()))
            }
            _ => Err(IdParseError::InvalidMeetingMemberId(raw.to_string())),
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The user part of the id
    pub fn user_id(&self) -> &str {
        self.0
            .split_once(MEETING_MEMBER_SEPARATOR)
            .map_or("", |(user, _)| user)
    }

    /// The meeting part of the id
    pub fn meeting_id(&self) -> &str {
        self.0
            .split_once(MEETING_MEMBER_SEPARATOR)
            .map_or("", |(_, meeting)| meeting)
    }
}

impl fmt::Display for MeetingMemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Encoder/decoder for team prompt response ids
pub struct ResponseId;

impl ResponseId {
    /// Encode a numeric response key into its public id
    pub fn join(id: i64) -> String {
        format!("{RESPONSE_ID_PREFIX}:{id}")
    }

    /// Decode a public id back into the numeric key
    pub fn split(raw: &str) -> Result<i64, IdParseError> {
        raw.split_once(':')
            .filter(|(prefix, _)| *prefix == RESPONSE_ID_PREFIX)
            .and_then(|(_, n)| n.parse::<i64>().ok())
            .ok_or_else(|| IdParseError::InvalidResponseId(raw.to_string()))
    }
}
