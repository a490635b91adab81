//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! The reactji name is deliberately not validated here; an unknown name is an
//! expected mutation outcome, reported after the membership check.

use retro_core::ReactableKind;
use serde::Deserialize;
use validator::Validate;

/// Add or remove a reactji on a reactable
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddReactjiRequest {
    #[validate(length(min = 1, max = 100, message = "reactableId must be 1-100 characters"))]
    pub reactable_id: String,

    pub reactable_type: ReactableKind,

    pub reactji: String,

    /// Absent means add
    #[serde(default)]
    pub is_remove: Option<bool>,

    #[validate(length(min = 1, max = 100, message = "meetingId must be 1-100 characters"))]
    pub meeting_id: String,
}

impl AddReactjiRequest {
    pub fn is_remove(&self) -> bool {
        self.is_remove.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_defaults_to_add() {
        let request: AddReactjiRequest = serde_json::from_value(json!({
            "reactableId": "c1",
            "reactableType": "COMMENT",
            "reactji": "+1",
            "meetingId": "m1"
        }))
        .unwrap();

        assert_eq!(request.reactable_type, ReactableKind::Comment);
        assert!(!request.is_remove());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_unknown_reactable_type_is_rejected() {
        let result = serde_json::from_value::<AddReactjiRequest>(json!({
            "reactableId": "c1",
            "reactableType": "TASK",
            "reactji": "+1",
            "meetingId": "m1"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_ids_fail_validation() {
        let request = AddReactjiRequest {
            reactable_id: String::new(),
            reactable_type: ReactableKind::Response,
            reactji: "not-an-emoji".to_string(),
            is_remove: Some(true),
            meeting_id: String::new(),
        };

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("reactable_id"));
        assert!(fields.contains_key("meeting_id"));
        assert!(!fields.contains_key("reactji"));
    }
}
