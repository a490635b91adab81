//! Service context - dependency container for services
//!
//! Holds the reactable stores, repositories, and side-effect sinks behind
//! their trait objects so services can run against PostgreSQL and Redis or
//! against in-memory fakes.

use std::sync::Arc;

use retro_cache::{AnalyticsQueue, PokerHoverStore, Publisher, RedisDocumentStore, RedisPool};
use retro_common::AppConfig;
use retro_core::{
    AnalyticsSink, EventPublisher, MeetingMemberRepository, MeetingRepository, PromptRepository,
    ReactableKind, ReactableStore, StageHoverRepository, UserRepository, DEFAULT_MAX_REACTJIS,
};
use retro_db::{
    PgMeetingMemberRepository, PgMeetingRepository, PgPool, PgPromptRepository, PgResponseStore,
    PgUserRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cloning is cheap; every dependency is reference counted. Detached side
/// effects take their own clone.
#[derive(Clone)]
pub struct ServiceContext {
    // Reactable stores
    document_store: Arc<dyn ReactableStore>,
    response_store: Arc<dyn ReactableStore>,

    // Repositories
    meeting_repo: Arc<dyn MeetingRepository>,
    member_repo: Arc<dyn MeetingMemberRepository>,
    user_repo: Arc<dyn UserRepository>,
    prompt_repo: Arc<dyn PromptRepository>,
    hover_repo: Arc<dyn StageHoverRepository>,

    // Side effects
    publisher: Arc<dyn EventPublisher>,
    analytics: Arc<dyn AnalyticsSink>,

    // Settings
    max_reactji_groups: usize,
}

impl ServiceContext {
    /// Wire the PostgreSQL and Redis implementations
    pub fn from_pools(pool: PgPool, redis_pool: RedisPool, config: &AppConfig) -> Self {
        Self {
            document_store: Arc::new(RedisDocumentStore::new(redis_pool.clone())),
            response_store: Arc::new(PgResponseStore::new(pool.clone())),
            meeting_repo: Arc::new(PgMeetingRepository::new(pool.clone())),
            member_repo: Arc::new(PgMeetingMemberRepository::new(pool.clone())),
            user_repo: Arc::new(PgUserRepository::new(pool.clone())),
            prompt_repo: Arc::new(PgPromptRepository::new(pool)),
            hover_repo: Arc::new(PokerHoverStore::new(redis_pool.clone())),
            publisher: Arc::new(Publisher::new(redis_pool.clone())),
            analytics: Arc::new(AnalyticsQueue::new(
                redis_pool,
                config.analytics.queue_key.clone(),
            )),
            max_reactji_groups: config.reactji.max_groups,
        }
    }

    // === Reactable Stores ===

    /// The store holding reactables of `kind`
    pub fn reactable_store(&self, kind: ReactableKind) -> &dyn ReactableStore {
        if kind.is_relational() {
            self.response_store.as_ref()
        } else {
            self.document_store.as_ref()
        }
    }

    // === Repositories ===

    pub fn meeting_repo(&self) -> &dyn MeetingRepository {
        self.meeting_repo.as_ref()
    }

    pub fn member_repo(&self) -> &dyn MeetingMemberRepository {
        self.member_repo.as_ref()
    }

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn prompt_repo(&self) -> &dyn PromptRepository {
        self.prompt_repo.as_ref()
    }

    pub fn hover_repo(&self) -> &dyn StageHoverRepository {
        self.hover_repo.as_ref()
    }

    // === Side Effects ===

    /// Get the meeting event publisher
    pub fn publisher(&self) -> &dyn EventPublisher {
        self.publisher.as_ref()
    }

    /// Get the analytics sink
    pub fn analytics(&self) -> &dyn AnalyticsSink {
        self.analytics.as_ref()
    }

    // === Settings ===

    /// Most distinct reactji groups a reactable may carry
    pub fn max_reactji_groups(&self) -> usize {
        self.max_reactji_groups
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("stores", &"...")
            .field("repositories", &"...")
            .field("max_reactji_groups", &self.max_reactji_groups)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom dependencies
pub struct ServiceContextBuilder {
    document_store: Option<Arc<dyn ReactableStore>>,
    response_store: Option<Arc<dyn ReactableStore>>,
    meeting_repo: Option<Arc<dyn MeetingRepository>>,
    member_repo: Option<Arc<dyn MeetingMemberRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    prompt_repo: Option<Arc<dyn PromptRepository>>,
    hover_repo: Option<Arc<dyn StageHoverRepository>>,
    publisher: Option<Arc<dyn EventPublisher>>,
    analytics: Option<Arc<dyn AnalyticsSink>>,
    max_reactji_groups: usize,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            document_store: None,
            response_store: None,
            meeting_repo: None,
            member_repo: None,
            user_repo: None,
            prompt_repo: None,
            hover_repo: None,
            publisher: None,
            analytics: None,
            max_reactji_groups: DEFAULT_MAX_REACTJIS,
        }
    }

    pub fn document_store(mut self, store: Arc<dyn ReactableStore>) -> Self {
        self.document_store = Some(store);
        self
    }

    pub fn response_store(mut self, store: Arc<dyn ReactableStore>) -> Self {
        self.response_store = Some(store);
        self
    }

    pub fn meeting_repo(mut self, repo: Arc<dyn MeetingRepository>) -> Self {
        self.meeting_repo = Some(repo);
        self
    }

    pub fn member_repo(mut self, repo: Arc<dyn MeetingMemberRepository>) -> Self {
        self.member_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn prompt_repo(mut self, repo: Arc<dyn PromptRepository>) -> Self {
        self.prompt_repo = Some(repo);
        self
    }

    pub fn hover_repo(mut self, repo: Arc<dyn StageHoverRepository>) -> Self {
        self.hover_repo = Some(repo);
        self
    }

    pub fn publisher(mut self, publisher: Arc<dyn EventPublisher>) -> Self {
        self.publisher = Some(publisher);
        self
    }

    pub fn analytics(mut self, analytics: Arc<dyn AnalyticsSink>) -> Self {
        self.analytics = Some(analytics);
        self
    }

    pub fn max_reactji_groups(mut self, max: usize) -> Self {
        self.max_reactji_groups = max;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            document_store: self
                .document_store
                .ok_or_else(|| ServiceError::validation("document_store is required"))?,
            response_store: self
                .response_store
                .ok_or_else(|| ServiceError::validation("response_store is required"))?,
            meeting_repo: self
                .meeting_repo
                .ok_or_else(|| ServiceError::validation("meeting_repo is required"))?,
            member_repo: self
                .member_repo
                .ok_or_else(|| ServiceError::validation("member_repo is required"))?,
            user_repo: self
                .user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            prompt_repo: self
                .prompt_repo
                .ok_or_else(|| ServiceError::validation("prompt_repo is required"))?,
            hover_repo: self
                .hover_repo
                .ok_or_else(|| ServiceError::validation("hover_repo is required"))?,
            publisher: self
                .publisher
                .ok_or_else(|| ServiceError::validation("publisher is required"))?,
            analytics: self
                .analytics
                .ok_or_else(|| ServiceError::validation("analytics is required"))?,
            max_reactji_groups: self.max_reactji_groups,
        })
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
