//! Domain events - notifications fanned out to meeting subscribers and analytics

mod analytics_event;
mod meeting_event;

pub use analytics_event::AnalyticsEvent;
pub use meeting_event::{
    MeetingEvent, PokerRevealVotesPayload, PublishOptions, ReactjiChangedPayload,
    SubscriptionChannel,
};
