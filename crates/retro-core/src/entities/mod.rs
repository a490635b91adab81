//! Domain entities - core business objects

mod meeting;
mod member;
mod prompt;
mod reactable;
mod user;

pub use meeting::{EstimateUserScore, Meeting, MeetingPhase, MeetingStage, MeetingType, PhaseType};
pub use member::MeetingMember;
pub use prompt::{active_prompts, ReflectPrompt};
pub use reactable::{Comment, Reactable, ReactableKind, Reactji, Reflection, TeamPromptResponse};
pub use user::User;
