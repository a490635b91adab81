//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer states what it needs; `retro-db` and `retro-cache`
//! provide the implementations.

use async_trait::async_trait;

use crate::entities::{
    Meeting, MeetingMember, MeetingPhase, Reactable, ReactableKind, Reactji, ReflectPrompt, User,
};
use crate::error::DomainError;
use crate::value_objects::MeetingMemberId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Reactable Store
// ============================================================================

/// Storage strategy for one family of reactables
///
/// Ids are public ids (`teamPromptResponse:<n>` for responses). Both write
/// operations are idempotent: adding a present pair or removing an absent one
/// leaves the list unchanged.
#[async_trait]
pub trait ReactableStore: Send + Sync {
    /// Load the reactable stored under the location for `kind`.
    ///
    /// The returned entity's own kind may differ from `kind`; callers verify it.
    async fn load(&self, kind: ReactableKind, id: &str) -> RepoResult<Option<Reactable>>;

    /// Append the pair unless already present
    async fn add_reactji(&self, kind: ReactableKind, id: &str, reactji: &Reactji) -> RepoResult<()>;

    /// Remove every occurrence of the pair
    async fn remove_reactji(&self, kind: ReactableKind, id: &str, reactji: &Reactji) -> RepoResult<()>;
}

// ============================================================================
// Meeting Repository
// ============================================================================

#[async_trait]
pub trait MeetingRepository: Send + Sync {
    /// Find meeting by ID
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Meeting>>;

    /// Replace the phase state of a meeting
    async fn update_phases(&self, id: &str, phases: &[MeetingPhase]) -> RepoResult<()>;
}

// ============================================================================
// Meeting Member Repository
// ============================================================================

#[async_trait]
pub trait MeetingMemberRepository: Send + Sync {
    /// Find a membership by its composite id
    async fn find(&self, id: &MeetingMemberId) -> RepoResult<Option<MeetingMember>>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<User>>;
}

// ============================================================================
// Prompt Repository
// ============================================================================

#[async_trait]
pub trait PromptRepository: Send + Sync {
    /// All prompts of a template, removed ones included, ordered by sort order
    async fn find_by_template(&self, template_id: &str) -> RepoResult<Vec<ReflectPrompt>>;

    /// Find prompt by ID
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<ReflectPrompt>>;
}

// ============================================================================
// Stage Hover Repository
// ============================================================================

#[async_trait]
pub trait StageHoverRepository: Send + Sync {
    /// Users currently hovering over the deck of an estimate stage
    async fn hovering_user_ids(&self, stage_id: &str) -> RepoResult<Vec<String>>;
}
