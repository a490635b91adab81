//! Meeting entity and its phase/stage state

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Meeting type, used to categorize analytics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MeetingType {
    Action,
    Retrospective,
    Poker,
    TeamPrompt,
}

impl MeetingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Action => "action",
            Self::Retrospective => "retrospective",
            Self::Poker => "poker",
            Self::TeamPrompt => "teamPrompt",
        }
    }
}

impl fmt::Display for MeetingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MeetingType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "action" => Ok(Self::Action),
            "retrospective" => Ok(Self::Retrospective),
            "poker" => Ok(Self::Poker),
            "teamPrompt" => Ok(Self::TeamPrompt),
            _ => Err(format!("Invalid meeting type: {s}")),
        }
    }
}

/// Phase type of a meeting phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseType {
    #[serde(rename = "checkin")]
    Checkin,
    #[serde(rename = "updates")]
    Updates,
    #[serde(rename = "firstcall")]
    FirstCall,
    #[serde(rename = "agendaitems")]
    AgendaItems,
    #[serde(rename = "lastcall")]
    LastCall,
    #[serde(rename = "reflect")]
    Reflect,
    #[serde(rename = "group")]
    Group,
    #[serde(rename = "vote")]
    Vote,
    #[serde(rename = "discuss")]
    Discuss,
    #[serde(rename = "SCOPE")]
    Scope,
    #[serde(rename = "ESTIMATE")]
    Estimate,
    #[serde(rename = "RESPONSES")]
    Responses,
}

/// One user's estimate in a poker stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateUserScore {
    pub user_id: String,
    pub label: String,
}

/// A stage inside a meeting phase
///
/// Estimate-specific fields are only populated for stages of an `ESTIMATE` phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingStage {
    pub id: String,
    #[serde(default)]
    pub is_complete: bool,
    #[serde(default)]
    pub is_navigable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_task_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_score: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scores: Vec<EstimateUserScore>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_voting: Option<bool>,
}

/// A meeting phase and its stages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingPhase {
    pub phase_type: PhaseType,
    /// Reflect phase only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focused_prompt_id: Option<String>,
    #[serde(default)]
    pub stages: Vec<MeetingStage>,
}

impl MeetingPhase {
    pub fn stage(&self, stage_id: &str) -> Option<&MeetingStage> {
        self.stages.iter().find(|s| s.id == stage_id)
    }

    pub fn stage_mut(&mut self, stage_id: &str) -> Option<&mut MeetingStage> {
        self.stages.iter_mut().find(|s| s.id == stage_id)
    }
}

/// Meeting entity
#[derive(Debug, Clone, PartialEq)]
pub struct Meeting {
    pub id: String,
    pub team_id: String,
    pub meeting_type: MeetingType,
    /// Template the meeting was started from (retrospective and poker)
    pub template_id: Option<String>,
    pub facilitator_user_id: String,
    pub phases: Vec<MeetingPhase>,
    pub created_at: DateTime<Utc>,
}

impl Meeting {
    /// Find the first phase of a type
    pub fn phase(&self, phase_type: PhaseType) -> Option<&MeetingPhase> {
        self.phases.iter().find(|p| p.phase_type == phase_type)
    }

    pub fn phase_mut(&mut self, phase_type: PhaseType) -> Option<&mut MeetingPhase> {
        self.phases.iter_mut().find(|p| p.phase_type == phase_type)
    }

    /// Locate a stage by phase type and stage id
    pub fn locate_stage(&self, phase_type: PhaseType, stage_id: &str) -> Option<&MeetingStage> {
        self.phase(phase_type)?.stage(stage_id)
    }

    pub fn locate_stage_mut(
        &mut self,
        phase_type: PhaseType,
        stage_id: &str,
    ) -> Option<&mut MeetingStage> {
        self.phase_mut(phase_type)?.stage_mut(stage_id)
    }
}
