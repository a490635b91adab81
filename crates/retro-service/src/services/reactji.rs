//! Reactji service
//!
//! Adds or removes one viewer's reactji on a comment, reflection, or team
//! prompt response, then reports the change to analytics and to every live
//! subscriber of the meeting.

use chrono::Utc;
use tracing::{debug, info, instrument, warn};

use retro_core::{
    group_reactjis, is_valid_reactji, AnalyticsEvent, DomainError, MeetingEvent, MeetingMemberId,
    PublishOptions, ReactableKind, Reactji, ReactjiChangedPayload, ReactjiGroup,
    SubscriptionChannel,
};

use crate::dto::{AddReactjiRequest, MutationPayload, ReactjiError};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::loader::DataLoader;

/// Reactji service
pub struct ReactjiService<'a> {
    ctx: &'a ServiceContext,
    loader: &'a DataLoader,
}

impl<'a> ReactjiService<'a> {
    /// Create a new ReactjiService
    pub fn new(ctx: &'a ServiceContext, loader: &'a DataLoader) -> Self {
        Self { ctx, loader }
    }

    /// Add or remove a reactji
    ///
    /// Checks run in a fixed order: the reactable must exist, its stored kind
    /// must match the declared one, the viewer must belong to the meeting,
    /// the reactji must be known, and an add may not open a group beyond the
    /// cap. Failing checks come back as `MutationPayload::Error`; only storage
    /// faults are `Err`.
    #[instrument(skip(self, request), fields(reactable_id = %request.reactable_id, kind = %request.reactable_type))]
    pub async fn add_reactji_to_reactable(
        &self,
        viewer_id: &str,
        mutator_id: Option<String>,
        request: AddReactjiRequest,
    ) -> ServiceResult<MutationPayload> {
        let is_remove = request.is_remove();
        let AddReactjiRequest {
            reactable_id,
            reactable_type: kind,
            reactji,
            meeting_id,
            ..
        } = request;

        let store = self.ctx.reactable_store(kind);

        // Resolve target
        let Some(reactable) = self.loader.load_reactable(store, kind, &reactable_id).await? else {
            return Ok(MutationPayload::error(ReactjiError::NotFound));
        };

        if reactable.kind() != kind {
            debug!(stored = %reactable.kind(), "Declared kind does not match stored entity");
            return Ok(MutationPayload::error(ReactjiError::UnknownItem));
        }

        // Membership
        let member_id = MeetingMemberId::new(&meeting_id, viewer_id);
        if self.ctx.member_repo().find(&member_id).await?.is_none() {
            return Ok(MutationPayload::error(ReactjiError::NotAMember));
        }

        if !is_valid_reactji(&reactji) {
            return Ok(MutationPayload::error(ReactjiError::InvalidReaction));
        }

        // Cap only applies when a new group would be opened
        if !is_remove {
            let groups = group_reactjis(reactable.reactjis(), viewer_id, &reactable_id);
            let opens_group = !groups.iter().any(|g| g.reactji == reactji);
            if opens_group && groups.len() >= self.ctx.max_reactji_groups() {
                return Ok(MutationPayload::error(ReactjiError::ReactionLimitReached));
            }
        }

        let entry = Reactji::new(reactji.clone(), viewer_id);
        if is_remove {
            store.remove_reactji(kind, &reactable_id, &entry).await?;
        } else {
            store.add_reactji(kind, &reactable_id, &entry).await?;
        }
        self.loader.clear(kind, &reactable_id);

        info!(
            meeting_id = %meeting_id,
            viewer_id = %viewer_id,
            reactji = %reactji,
            is_remove,
            "Reactji updated"
        );

        self.track_interaction(viewer_id, &meeting_id, &reactable_id, kind, &reactji, is_remove);
        self.publish_change(&meeting_id, &reactable_id, kind, mutator_id);

        Ok(MutationPayload::success(reactable_id, kind))
    }

    /// Reactji groups of a reactable as seen by a meeting member
    #[instrument(skip(self))]
    pub async fn grouped_reactjis(
        &self,
        viewer_id: &str,
        meeting_id: &str,
        kind: ReactableKind,
        reactable_id: &str,
    ) -> ServiceResult<Vec<ReactjiGroup>> {
        let member_id = MeetingMemberId::new(meeting_id, viewer_id);
        if self.ctx.member_repo().find(&member_id).await?.is_none() {
            return Err(DomainError::NotMeetingMember.into());
        }

        let store = self.ctx.reactable_store(kind);
        let reactable = self
            .loader
            .load_reactable(store, kind, reactable_id)
            .await?
            .filter(|r| r.kind() == kind)
            .ok_or_else(|| ServiceError::not_found("Reactable", reactable_id))?;

        Ok(group_reactjis(reactable.reactjis(), viewer_id, reactable_id))
    }

    /// Record the interaction without waiting on the sink
    fn track_interaction(
        &self,
        viewer_id: &str,
        meeting_id: &str,
        reactable_id: &str,
        kind: ReactableKind,
        reactji: &str,
        is_remove: bool,
    ) {
        let ctx = self.ctx.clone();
        let viewer_id = viewer_id.to_string();
        let meeting_id = meeting_id.to_string();
        let reactable_id = reactable_id.to_string();
        let reactji = reactji.to_string();
        let occurred_at = Utc::now();

        tokio::spawn(async move {
            let meeting_type = match ctx.meeting_repo().find_by_id(&meeting_id).await {
                Ok(meeting) => meeting.map(|m| m.meeting_type),
                Err(e) => {
                    warn!(error = %e, meeting_id = %meeting_id, "Meeting lookup for analytics failed");
                    None
                }
            };
            let email = match ctx.user_repo().find_by_id(&viewer_id).await {
                Ok(user) => user.map(|u| u.email),
                Err(e) => {
                    warn!(error = %e, viewer_id = %viewer_id, "User lookup for analytics failed");
                    None
                }
            };

            let event = AnalyticsEvent::ReactjiInteracted {
                user_id: viewer_id,
                email,
                meeting_id,
                meeting_type,
                reactable_id,
                reactable_type: kind,
                reactji,
                is_remove,
                occurred_at,
            };
            if let Err(e) = ctx.analytics().track(event).await {
                warn!(error = %e, "Failed to record reactji analytics");
            }
        });
    }

    /// Announce the change on the meeting channel without waiting on it
    fn publish_change(
        &self,
        meeting_id: &str,
        reactable_id: &str,
        kind: ReactableKind,
        mutator_id: Option<String>,
    ) {
        let ctx = self.ctx.clone();
        let meeting_id = meeting_id.to_string();
        let event = MeetingEvent::ReactjiChanged(ReactjiChangedPayload {
            reactable_id: reactable_id.to_string(),
            reactable_type: kind,
        });
        let options = PublishOptions::new(mutator_id, self.loader.operation_id());

        tokio::spawn(async move {
            if let Err(e) = ctx
                .publisher()
                .publish(SubscriptionChannel::Meeting, &meeting_id, &event, &options)
                .await
            {
                warn!(error = %e, meeting_id = %meeting_id, "Failed to publish reactji change");
            }
        });
    }
}
