//! Phase service
//!
//! Read resolvers over a meeting's phase state (reflect prompts, the focused
//! prompt, estimate stages) and the poker reveal votes mutation.

use tracing::{info, instrument, warn};

use retro_core::{
    active_prompts, DomainError, Meeting, MeetingEvent, MeetingMemberId, MeetingStage, PhaseType,
    PokerRevealVotesPayload, PublishOptions, SubscriptionChannel,
};

use crate::dto::{EstimateStageResponse, ReflectPromptResponse, RevealVotesResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::loader::DataLoader;

/// Phase service
pub struct PhaseService<'a> {
    ctx: &'a ServiceContext,
    loader: &'a DataLoader,
}

impl<'a> PhaseService<'a> {
    /// Create a new PhaseService
    pub fn new(ctx: &'a ServiceContext, loader: &'a DataLoader) -> Self {
        Self { ctx, loader }
    }

    /// Prompts visible to the meeting, in template order
    ///
    /// A prompt is visible when it was created before the meeting and was not
    /// removed, or removed after the meeting was created.
    #[instrument(skip(self))]
    pub async fn reflect_prompts(
        &self,
        viewer_id: &str,
        meeting_id: &str,
    ) -> ServiceResult<Vec<ReflectPromptResponse>> {
        self.require_member(meeting_id, viewer_id).await?;
        let meeting = self.load_meeting(meeting_id).await?;

        let Some(template_id) = meeting.template_id.as_deref() else {
            return Ok(Vec::new());
        };
        let prompts = self.ctx.prompt_repo().find_by_template(template_id).await?;

        Ok(active_prompts(prompts, meeting.created_at)
            .iter()
            .map(ReflectPromptResponse::from)
            .collect())
    }

    /// The prompt focused in the reflect phase, if any
    #[instrument(skip(self))]
    pub async fn focused_prompt(
        &self,
        viewer_id: &str,
        meeting_id: &str,
    ) -> ServiceResult<Option<ReflectPromptResponse>> {
        self.require_member(meeting_id, viewer_id).await?;
        let meeting = self.load_meeting(meeting_id).await?;

        let phase = meeting
            .phase(PhaseType::Reflect)
            .ok_or_else(|| DomainError::PhaseNotFound("reflect".to_string()))?;
        let Some(prompt_id) = phase.focused_prompt_id.as_deref() else {
            return Ok(None);
        };

        let prompt = self.ctx.prompt_repo().find_by_id(prompt_id).await?;
        Ok(prompt.map(ReflectPromptResponse::from))
    }

    /// An estimate stage with its live hover state
    #[instrument(skip(self))]
    pub async fn estimate_stage(
        &self,
        viewer_id: &str,
        meeting_id: &str,
        stage_id: &str,
    ) -> ServiceResult<EstimateStageResponse> {
        self.require_member(meeting_id, viewer_id).await?;
        let meeting = self.load_meeting(meeting_id).await?;
        let stage = locate_estimate_stage(&meeting, stage_id)?;

        self.stage_response(meeting_id, stage).await
    }

    /// Stop voting on an estimate stage and show the scores
    #[instrument(skip(self))]
    pub async fn reveal_votes(
        &self,
        viewer_id: &str,
        mutator_id: Option<String>,
        meeting_id: &str,
        stage_id: &str,
    ) -> ServiceResult<RevealVotesResponse> {
        self.require_member(meeting_id, viewer_id).await?;
        let mut meeting = self.load_meeting(meeting_id).await?;

        locate_estimate_stage(&meeting, stage_id)?;
        if let Some(stage) = meeting.locate_stage_mut(PhaseType::Estimate, stage_id) {
            stage.is_voting = Some(false);
        }
        self.ctx
            .meeting_repo()
            .update_phases(meeting_id, &meeting.phases)
            .await?;

        info!(meeting_id, stage_id, viewer_id, "Poker votes revealed");

        let event = MeetingEvent::PokerVotesRevealed(PokerRevealVotesPayload {
            meeting_id: meeting_id.to_string(),
            stage_id: stage_id.to_string(),
        });
        let options = PublishOptions::new(mutator_id, self.loader.operation_id());
        let ctx = self.ctx.clone();
        let topic_id = meeting_id.to_string();
        tokio::spawn(async move {
            if let Err(e) = ctx
                .publisher()
                .publish(SubscriptionChannel::Meeting, &topic_id, &event, &options)
                .await
            {
                warn!(error = %e, meeting_id = %topic_id, "Failed to publish vote reveal");
            }
        });

        let stage = locate_estimate_stage(&meeting, stage_id)?;
        Ok(RevealVotesResponse {
            meeting_id: meeting_id.to_string(),
            stage_id: stage_id.to_string(),
            stage: self.stage_response(meeting_id, stage).await?,
        })
    }

    async fn stage_response(
        &self,
        meeting_id: &str,
        stage: &MeetingStage,
    ) -> ServiceResult<EstimateStageResponse> {
        let hovering_user_ids = self.ctx.hover_repo().hovering_user_ids(&stage.id).await?;

        let mut hovering_users = Vec::with_capacity(hovering_user_ids.len());
        for user_id in &hovering_user_ids {
            if let Some(user) = self.ctx.user_repo().find_by_id(user_id).await? {
                hovering_users.push(user);
            }
        }

        Ok(EstimateStageResponse::from_stage(
            meeting_id,
            stage,
            hovering_user_ids,
            &hovering_users,
        ))
    }

    async fn load_meeting(&self, meeting_id: &str) -> ServiceResult<Meeting> {
        self.ctx
            .meeting_repo()
            .find_by_id(meeting_id)
            .await?
            .ok_or_else(|| DomainError::MeetingNotFound(meeting_id.to_string()).into())
    }

    async fn require_member(&self, meeting_id: &str, viewer_id: &str) -> ServiceResult<()> {
        let member_id = MeetingMemberId::new(meeting_id, viewer_id);
        match self.ctx.member_repo().find(&member_id).await? {
            Some(_) => Ok(()),
            None => Err(DomainError::NotMeetingMember.into()),
        }
    }
}

/// Find a stage of the estimate phase
pub fn locate_estimate_stage<'m>(
    meeting: &'m Meeting,
    stage_id: &str,
) -> Result<&'m MeetingStage, DomainError> {
    let phase = meeting
        .phase(PhaseType::Estimate)
        .ok_or_else(|| DomainError::PhaseNotFound("ESTIMATE".to_string()))?;
    phase
        .stage(stage_id)
        .ok_or_else(|| DomainError::StageNotFound(stage_id.to_string()))
}
