//! Reactables - entities that viewers can react to with reactjis

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::ResponseId;

/// A single reaction: one viewer applying one reactji
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reactji {
    /// Reactji id (emoji short name)
    pub id: String,
    pub user_id: String,
}

impl Reactji {
    pub fn new(id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
        }
    }
}

/// The kinds of reactable entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReactableKind {
    Comment,
    Reflection,
    Response,
}

impl ReactableKind {
    pub const ALL: [ReactableKind; 3] = [Self::Comment, Self::Reflection, Self::Response];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Comment => "COMMENT",
            Self::Reflection => "REFLECTION",
            Self::Response => "RESPONSE",
        }
    }

    /// Whether this kind lives in the relational store
    #[inline]
    pub fn is_relational(&self) -> bool {
        matches!(self, Self::Response)
    }

    /// Document table holding this kind, if it lives in the document store
    pub fn document_table(&self) -> Option<&'static str> {
        match self {
            Self::Comment => Some("Comment"),
            Self::Reflection => Some("RetroReflection"),
            Self::Response => None,
        }
    }

    /// Derive the kind from a stored document's fields
    pub fn detect(document: &Value) -> Option<Self> {
        let obj = document.as_object()?;
        if obj.contains_key("reflectionGroupId") {
            Some(Self::Reflection)
        } else if obj.contains_key("threadSortOrder") {
            Some(Self::Comment)
        } else if obj.contains_key("plaintextContent") && obj.contains_key("userId") {
            Some(Self::Response)
        } else {
            None
        }
    }
}

impl fmt::Display for ReactableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReactableKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "COMMENT" => Ok(Self::Comment),
            "REFLECTION" => Ok(Self::Reflection),
            "RESPONSE" => Ok(Self::Response),
            _ => Err(format!("Invalid reactable type: {s}")),
        }
    }
}

/// A comment in a discussion thread
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub discussion_id: String,
    pub created_by: String,
    #[serde(default)]
    pub content: String,
    pub thread_sort_order: f64,
    #[serde(default)]
    pub reactjis: Vec<Reactji>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A retrospective reflection card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reflection {
    pub id: String,
    pub meeting_id: String,
    pub prompt_id: String,
    pub reflection_group_id: String,
    #[serde(default)]
    pub creator_id: Option<String>,
    #[serde(default)]
    pub plaintext_content: String,
    #[serde(default)]
    pub reactjis: Vec<Reactji>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A standup response to a team prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPromptResponse {
    /// Numeric key; the public id is `ResponseId::join(id)`
    pub id: i64,
    pub meeting_id: String,
    pub user_id: String,
    pub plaintext_content: String,
    #[serde(default)]
    pub reactjis: Vec<Reactji>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Any entity carrying reactjis
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Reactable {
    Comment(Comment),
    Reflection(Reflection),
    Response(TeamPromptResponse),
}

impl Reactable {
    /// The intrinsic kind of this entity
    pub fn kind(&self) -> ReactableKind {
        match self {
            Self::Comment(_) => ReactableKind::Comment,
            Self::Reflection(_) => ReactableKind::Reflection,
            Self::Response(_) => ReactableKind::Response,
        }
    }

    /// Public id of the entity
    pub fn id(&self) -> String {
        match self {
            Self::Comment(c) => c.id.clone(),
            Self::Reflection(r) => r.id.clone(),
            Self::Response(r) => ResponseId::join(r.id),
        }
    }

    pub fn reactjis(&self) -> &[Reactji] {
        match self {
            Self::Comment(c) => &c.reactjis,
            Self::Reflection(r) => &r.reactjis,
            Self::Response(r) => &r.reactjis,
        }
    }

    fn reactjis_mut(&mut self) -> &mut Vec<Reactji> {
        match self {
            Self::Comment(c) => &mut c.reactjis,
            Self::Reflection(r) => &mut r.reactjis,
            Self::Response(r) => &mut r.reactjis,
        }
    }

    /// Check whether the pair is already present
    pub fn has_reactji(&self, reactji: &Reactji) -> bool {
        self.reactjis().contains(reactji)
    }

    /// Append the pair unless it is already present. Returns true if appended.
    ///
    /// Insertion order is kept; the list is never sorted or deduplicated as a whole.
    pub fn add_reactji(&mut self, reactji: Reactji) -> bool {
        if self.has_reactji(&reactji) {
            return false;
        }
        self.reactjis_mut().push(reactji);
        true
    }

    /// Remove every occurrence of the pair. Returns true if anything was removed.
    pub fn remove_reactji(&mut self, reactji: &Reactji) -> bool {
        let list = self.reactjis_mut();
        let before = list.len();
        list.retain(|r| r != reactji);
        list.len() != before
    }

    /// Set `updatedAt`
    pub fn touch(&mut self, now: DateTime<Utc>) {
        match self {
            Self::Comment(c) => c.updated_at = now,
            Self::Reflection(r) => r.updated_at = now,
            Self::Response(r) => r.updated_at = now,
        }
    }

    /// Decode a stored document, deriving the variant from its shape
    pub fn from_document(document: Value) -> Result<Self, DomainError> {
        let kind = ReactableKind::detect(&document).ok_or_else(|| {
            DomainError::SerializationError("Document is not a reactable".to_string())
        })?;

        let reactable = match kind {
            ReactableKind::Comment => serde_json::from_value(document).map(Self::Comment),
            ReactableKind::Reflection => serde_json::from_value(document).map(Self::Reflection),
            ReactableKind::Response => serde_json::from_value(document).map(Self::Response),
        };

        reactable.map_err(|e| DomainError::SerializationError(e.to_string()))
    }

    /// Encode into a stored document
    pub fn to_document(&self) -> Result<Value, DomainError> {
        serde_json::to_value(self).map_err(|e| DomainError::SerializationError(e.to_string()))
    }
}
