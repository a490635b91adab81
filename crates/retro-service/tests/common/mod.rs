//! In-memory fakes and fixtures for service tests
//!
//! Comments and reflections go through the real `DocumentStore` over an
//! in-memory backend, so the read-modify-write path under test is the one
//! used in production.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde_json::{json, Value};
use tokio::sync::Barrier;

use retro_cache::{DocumentBackend, DocumentStore};
use retro_core::{
    AnalyticsEvent, AnalyticsSink, Comment, DomainError, EventPublisher, Meeting, MeetingEvent,
    MeetingMember, MeetingMemberId, MeetingMemberRepository, MeetingPhase, MeetingRepository,
    MeetingType, PromptRepository, PublishOptions, Reactable, ReactableKind, ReactableStore,
    Reactji, ReflectPrompt, Reflection, RepoResult, ResponseId, StageHoverRepository,
    SubscriptionChannel, TeamPromptResponse, User, UserRepository,
};
use retro_service::{ServiceContext, ServiceContextBuilder};

// ============================================================================
// Document backend
// ============================================================================

#[derive(Default)]
struct MemoryDocuments {
    documents: Mutex<HashMap<String, Value>>,
    puts: AtomicUsize,
    read_gate: Mutex<Option<Arc<Barrier>>>,
}

/// Shared in-memory documents; clones see the same state
#[derive(Clone, Default)]
pub struct MemoryBackend {
    inner: Arc<MemoryDocuments>,
}

impl MemoryBackend {
    pub fn puts(&self) -> usize {
        self.inner.puts.load(Ordering::SeqCst)
    }

    /// Hold every read until `parties` readers are waiting, forcing
    /// concurrent requests into lock-step
    pub fn gate_reads(&self, parties: usize) {
        *self.inner.read_gate.lock() = Some(Arc::new(Barrier::new(parties)));
    }

    pub fn ungate_reads(&self) {
        *self.inner.read_gate.lock() = None;
    }
}

#[async_trait]
impl DocumentBackend for MemoryBackend {
    async fn get_document(&self, key: &str) -> RepoResult<Option<Value>> {
        let document = self.inner.documents.lock().get(key).cloned();
        let gate = self.inner.read_gate.lock().clone();
        if let Some(gate) = gate {
            gate.wait().await;
        }
        Ok(document)
    }

    async fn put_document(&self, key: &str, document: &Value) -> RepoResult<()> {
        self.inner.puts.fetch_add(1, Ordering::SeqCst);
        self.inner
            .documents
            .lock()
            .insert(key.to_string(), document.clone());
        Ok(())
    }
}

pub type MemoryDocumentStore = DocumentStore<MemoryBackend>;

// ============================================================================
// Relational response store
// ============================================================================

#[derive(Default)]
pub struct FakeResponseStore {
    responses: Mutex<HashMap<String, Reactable>>,
    loads: AtomicUsize,
    writes: AtomicUsize,
}

impl FakeResponseStore {
    pub fn insert(&self, response: TeamPromptResponse) {
        let reactable = Reactable::Response(response);
        self.responses.lock().insert(reactable.id(), reactable);
    }

    pub fn reactjis(&self, id: &str) -> Vec<Reactji> {
        self.responses
            .lock()
            .get(id)
            .map(|r| r.reactjis().to_vec())
            .unwrap_or_default()
    }

    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReactableStore for FakeResponseStore {
    async fn load(&self, kind: ReactableKind, id: &str) -> RepoResult<Option<Reactable>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        if !kind.is_relational() {
            return Ok(None);
        }
        Ok(self.responses.lock().get(id).cloned())
    }

    async fn add_reactji(&self, _kind: ReactableKind, id: &str, reactji: &Reactji) -> RepoResult<()> {
        ResponseId::split(id)?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        if let Some(r) = self.responses.lock().get_mut(id) {
            r.add_reactji(reactji.clone());
        }
        Ok(())
    }

    async fn remove_reactji(&self, _kind: ReactableKind, id: &str, reactji: &Reactji) -> RepoResult<()> {
        ResponseId::split(id)?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        if let Some(r) = self.responses.lock().get_mut(id) {
            r.remove_reactji(reactji);
        }
        Ok(())
    }
}

// ============================================================================
// Repositories
// ============================================================================

#[derive(Default)]
pub struct FakeMeetingRepository {
    meetings: Mutex<HashMap<String, Meeting>>,
    fail: AtomicBool,
}

impl FakeMeetingRepository {
    pub fn insert(&self, meeting: Meeting) {
        self.meetings.lock().insert(meeting.id.clone(), meeting);
    }

    pub fn get(&self, id: &str) -> Option<Meeting> {
        self.meetings.lock().get(id).cloned()
    }

    pub fn fail_lookups(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl MeetingRepository for FakeMeetingRepository {
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Meeting>> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("connection reset".to_string()));
        }
        Ok(self.get(id))
    }

    async fn update_phases(&self, id: &str, phases: &[MeetingPhase]) -> RepoResult<()> {
        let mut meetings = self.meetings.lock();
        let meeting = meetings
            .get_mut(id)
            .ok_or_else(|| DomainError::MeetingNotFound(id.to_string()))?;
        meeting.phases = phases.to_vec();
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeMemberRepository {
    members: Mutex<HashSet<String>>,
}

impl FakeMemberRepository {
    pub fn join(&self, meeting_id: &str, user_id: &str) {
        self.members
            .lock()
            .insert(MeetingMemberId::new(meeting_id, user_id).as_str().to_string());
    }
}

#[async_trait]
impl MeetingMemberRepository for FakeMemberRepository {
    async fn find(&self, id: &MeetingMemberId) -> RepoResult<Option<MeetingMember>> {
        if !self.members.lock().contains(id.as_str()) {
            return Ok(None);
        }
        Ok(Some(MeetingMember::new(id.meeting_id(), id.user_id(), "team1")))
    }
}

#[derive(Default)]
pub struct FakeUserRepository {
    users: Mutex<HashMap<String, User>>,
}

impl FakeUserRepository {
    pub fn insert(&self, id: &str, preferred_name: &str) {
        self.users.lock().insert(
            id.to_string(),
            User {
                id: id.to_string(),
                preferred_name: preferred_name.to_string(),
                email: format!("{id}@example.com"),
                created_at: Utc::now(),
            },
        );
    }
}

#[async_trait]
impl UserRepository for FakeUserRepository {
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<User>> {
        Ok(self.users.lock().get(id).cloned())
    }
}

#[derive(Default)]
pub struct FakePromptRepository {
    prompts: Mutex<Vec<ReflectPrompt>>,
}

impl FakePromptRepository {
    pub fn insert(&self, prompt: ReflectPrompt) {
        let mut prompts = self.prompts.lock();
        prompts.push(prompt);
        prompts.sort_by(|a, b| a.sort_order.total_cmp(&b.sort_order));
    }
}

#[async_trait]
impl PromptRepository for FakePromptRepository {
    async fn find_by_template(&self, template_id: &str) -> RepoResult<Vec<ReflectPrompt>> {
        Ok(self
            .prompts
            .lock()
            .iter()
            .filter(|p| p.template_id == template_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> RepoResult<Option<ReflectPrompt>> {
        Ok(self.prompts.lock().iter().find(|p| p.id == id).cloned())
    }
}

#[derive(Default)]
pub struct FakeHoverRepository {
    hovering: Mutex<HashMap<String, Vec<String>>>,
}

impl FakeHoverRepository {
    pub fn hover(&self, stage_id: &str, user_id: &str) {
        let mut hovering = self.hovering.lock();
        let users = hovering.entry(stage_id.to_string()).or_default();
        users.push(user_id.to_string());
        users.sort();
    }
}

#[async_trait]
impl StageHoverRepository for FakeHoverRepository {
    async fn hovering_user_ids(&self, stage_id: &str) -> RepoResult<Vec<String>> {
        Ok(self.hovering.lock().get(stage_id).cloned().unwrap_or_default())
    }
}

// ============================================================================
// Side effects
// ============================================================================

#[derive(Debug, Clone)]
pub struct Published {
    pub topic: String,
    pub event: MeetingEvent,
    pub options: PublishOptions,
}

#[derive(Default)]
pub struct RecordingPublisher {
    published: Mutex<Vec<Published>>,
    fail: AtomicBool,
}

impl RecordingPublisher {
    pub fn published(&self) -> Vec<Published> {
        self.published.lock().clone()
    }

    pub fn fail_publishes(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl EventPublisher for RecordingPublisher {
    async fn publish(
        &self,
        channel: SubscriptionChannel,
        topic_id: &str,
        event: &MeetingEvent,
        options: &PublishOptions,
    ) -> Result<(), DomainError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(DomainError::CacheError("publish refused".to_string()));
        }
        self.published.lock().push(Published {
            topic: channel.topic(topic_id),
            event: event.clone(),
            options: options.clone(),
        });
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingAnalytics {
    events: Mutex<Vec<AnalyticsEvent>>,
    fail: AtomicBool,
}

impl RecordingAnalytics {
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.lock().clone()
    }

    pub fn fail_tracking(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl AnalyticsSink for RecordingAnalytics {
    async fn track(&self, event: AnalyticsEvent) -> Result<(), DomainError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(DomainError::CacheError("queue unavailable".to_string()));
        }
        self.events.lock().push(event);
        Ok(())
    }
}

// ============================================================================
// Fixture
// ============================================================================

pub struct Fixture {
    pub backend: MemoryBackend,
    pub documents: Arc<MemoryDocumentStore>,
    pub responses: Arc<FakeResponseStore>,
    pub meetings: Arc<FakeMeetingRepository>,
    pub members: Arc<FakeMemberRepository>,
    pub users: Arc<FakeUserRepository>,
    pub prompts: Arc<FakePromptRepository>,
    pub hover: Arc<FakeHoverRepository>,
    pub publisher: Arc<RecordingPublisher>,
    pub analytics: Arc<RecordingAnalytics>,
    pub ctx: ServiceContext,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_max_groups(retro_core::DEFAULT_MAX_REACTJIS)
    }

    pub fn with_max_groups(max: usize) -> Self {
        let backend = MemoryBackend::default();
        let documents = Arc::new(DocumentStore::new(backend.clone()));
        let responses = Arc::new(FakeResponseStore::default());
        let meetings = Arc::new(FakeMeetingRepository::default());
        let members = Arc::new(FakeMemberRepository::default());
        let users = Arc::new(FakeUserRepository::default());
        let prompts = Arc::new(FakePromptRepository::default());
        let hover = Arc::new(FakeHoverRepository::default());
        let publisher = Arc::new(RecordingPublisher::default());
        let analytics = Arc::new(RecordingAnalytics::default());

        let ctx = ServiceContextBuilder::new()
            .document_store(documents.clone())
            .response_store(responses.clone())
            .meeting_repo(meetings.clone())
            .member_repo(members.clone())
            .user_repo(users.clone())
            .prompt_repo(prompts.clone())
            .hover_repo(hover.clone())
            .publisher(publisher.clone())
            .analytics(analytics.clone())
            .max_reactji_groups(max)
            .build()
            .expect("all dependencies provided");

        Self {
            backend,
            documents,
            responses,
            meetings,
            members,
            users,
            prompts,
            hover,
            publisher,
            analytics,
            ctx,
        }
    }

    pub async fn insert_comment(&self, id: &str, reactjis: Vec<Reactji>) {
        self.documents
            .insert(ReactableKind::Comment, &comment(id, reactjis))
            .await
            .unwrap();
    }

    pub async fn insert_reflection(&self, id: &str, reactjis: Vec<Reactji>) {
        self.documents
            .insert(ReactableKind::Reflection, &reflection(id, reactjis))
            .await
            .unwrap();
    }

    /// Stored reactjis of a document, straight from the backend
    pub async fn document_reactjis(&self, kind: ReactableKind, id: &str) -> Vec<Reactji> {
        self.documents
            .load(kind, id)
            .await
            .unwrap()
            .map(|r| r.reactjis().to_vec())
            .unwrap_or_default()
    }
}

// ============================================================================
// Builders
// ============================================================================

pub fn comment(id: &str, reactjis: Vec<Reactji>) -> Reactable {
    let now = Utc::now();
    Reactable::Comment(Comment {
        id: id.to_string(),
        discussion_id: "d1".to_string(),
        created_by: "author".to_string(),
        content: "Ship it".to_string(),
        thread_sort_order: 1.0,
        reactjis,
        created_at: now,
        updated_at: now,
    })
}

pub fn reflection(id: &str, reactjis: Vec<Reactji>) -> Reactable {
    let now = Utc::now();
    Reactable::Reflection(Reflection {
        id: id.to_string(),
        meeting_id: "m1".to_string(),
        prompt_id: "p1".to_string(),
        reflection_group_id: "g1".to_string(),
        creator_id: Some("author".to_string()),
        plaintext_content: "Standups ran long".to_string(),
        reactjis,
        created_at: now,
        updated_at: now,
    })
}

pub fn response(id: i64, reactjis: Vec<Reactji>) -> TeamPromptResponse {
    let now = Utc::now();
    TeamPromptResponse {
        id,
        meeting_id: "m1".to_string(),
        user_id: "author".to_string(),
        plaintext_content: "Finished the migration".to_string(),
        reactjis,
        created_at: now,
        updated_at: now,
    }
}

pub fn meeting(id: &str, meeting_type: MeetingType, created_at: DateTime<Utc>) -> Meeting {
    let phases: Vec<MeetingPhase> = serde_json::from_value(json!([
        {"phaseType": "reflect", "focusedPromptId": null, "stages": [{"id": "reflect1"}]},
        {"phaseType": "ESTIMATE", "stages": [
            {"id": "stage1", "isVoting": true, "creatorUserId": "u1", "serviceTaskId": "task1",
             "dimensionId": "dim1", "sortOrder": 1.0,
             "scores": [{"userId": "u1", "label": "3"}, {"userId": "u2", "label": "5"}]},
            {"id": "stage2", "isVoting": true, "service": "jira"}
        ]}
    ]))
    .expect("valid phases");

    Meeting {
        id: id.to_string(),
        team_id: "team1".to_string(),
        meeting_type,
        template_id: Some("template1".to_string()),
        facilitator_user_id: "u1".to_string(),
        phases,
        created_at,
    }
}

pub fn prompt(
    id: &str,
    sort_order: f64,
    created_at: DateTime<Utc>,
    removed_at: Option<DateTime<Utc>>,
) -> ReflectPrompt {
    ReflectPrompt {
        id: id.to_string(),
        template_id: "template1".to_string(),
        team_id: "team1".to_string(),
        question: format!("Question {id}"),
        description: String::new(),
        group_color: "#66BC8C".to_string(),
        sort_order,
        created_at,
        updated_at: created_at,
        removed_at,
    }
}

/// Wait for a detached side effect to land
pub async fn eventually<F: Fn() -> bool>(condition: F) -> bool {
    for _ in 0..100 {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    condition()
}

/// Let detached tasks run before asserting that nothing happened
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(50)).await;
}
