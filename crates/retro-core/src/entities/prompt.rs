//! Reflect prompt entity - a column of a retrospective template

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reflect prompt entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReflectPrompt {
    pub id: String,
    pub template_id: String,
    pub team_id: String,
    pub question: String,
    pub description: String,
    pub group_color: String,
    pub sort_order: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Soft-delete timestamp
    pub removed_at: Option<DateTime<Utc>>,
}

impl ReflectPrompt {
    /// Whether the prompt was visible to a meeting created at `meeting_created_at`:
    /// created strictly before it, and not removed or removed strictly after it.
    pub fn is_active_at(&self, meeting_created_at: DateTime<Utc>) -> bool {
        self.created_at < meeting_created_at
            && self
                .removed_at
                .map_or(true, |removed_at| meeting_created_at < removed_at)
    }
}

/// Keep the prompts visible to a meeting, preserving order
pub fn active_prompts(
    prompts: Vec<ReflectPrompt>,
    meeting_created_at: DateTime<Utc>,
) -> Vec<ReflectPrompt> {
    prompts
        .into_iter()
        .filter(|p| p.is_active_at(meeting_created_at))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn prompt(id: &str, created_at: DateTime<Utc>, removed_at: Option<DateTime<Utc>>) -> ReflectPrompt {
        ReflectPrompt {
            id: id.to_string(),
            template_id: "tpl".to_string(),
            team_id: "team".to_string(),
            question: format!("Question {id}"),
            description: String::new(),
            group_color: "#66BC8C".to_string(),
            sort_order: 0.0,
            created_at,
            updated_at: created_at,
            removed_at,
        }
    }

    #[test]
    fn test_active_prompts() {
        let meeting_at = Utc::now();
        let before = meeting_at - Duration::hours(1);
        let after = meeting_at + Duration::hours(1);

        let prompts = vec![
            prompt("kept", before, None),
            prompt("removed_later", before, Some(after)),
            prompt("removed_before", before, Some(before)),
            prompt("created_after", after, None),
            prompt("created_at_same_time", meeting_at, None),
            prompt("removed_at_same_time", before, Some(meeting_at)),
        ];

        let ids: Vec<String> = active_prompts(prompts, meeting_at)
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["kept", "removed_later"]);
    }
}
