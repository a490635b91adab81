//! # retro-core
//!
//! Domain layer containing reactables, meetings, value objects, repository traits, and events.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod events;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    active_prompts, Comment, EstimateUserScore, Meeting, MeetingMember, MeetingPhase,
    MeetingStage, MeetingType, PhaseType, Reactable, ReactableKind, Reactji, ReflectPrompt,
    Reflection, TeamPromptResponse, User,
};
pub use error::DomainError;
pub use events::{
    AnalyticsEvent, MeetingEvent, PokerRevealVotesPayload, PublishOptions, ReactjiChangedPayload,
    SubscriptionChannel,
};
pub use traits::{
    AnalyticsSink, EventPublisher, MeetingMemberRepository, MeetingRepository, PromptRepository,
    ReactableStore, RepoResult, StageHoverRepository, UserRepository,
};
pub use value_objects::{
    group_reactjis, is_valid_reactji, IdParseError, MeetingMemberId, ReactjiGroup, ResponseId,
    DEFAULT_MAX_REACTJIS, EMOJI_IDS,
};
