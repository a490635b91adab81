//! Ports - the interfaces the domain needs from infrastructure

mod ports;
mod repositories;

pub use ports::{AnalyticsSink, EventPublisher};
pub use repositories::{
    MeetingMemberRepository, MeetingRepository, PromptRepository, ReactableStore, RepoResult,
    StageHoverRepository, UserRepository,
};
