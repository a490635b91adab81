//! Integration tests for retro-cache stores
//!
//! These tests require a running Redis server.
//! Set REDIS_URL environment variable before running:
//!
//! ```bash
//! export REDIS_URL="redis://127.0.0.1:6379"
//! cargo test -p retro-cache --test integration_tests
//! ```

use chrono::Utc;

use retro_cache::{
    hover_key, AnalyticsQueue, PokerHoverStore, Publisher, RedisDocumentStore, RedisPool,
    RedisPoolConfig,
};
use retro_core::{
    AnalyticsEvent, AnalyticsSink, Comment, EventPublisher, MeetingEvent, PokerRevealVotesPayload,
    PublishOptions, Reactable, ReactableKind, ReactableStore, Reactji, StageHoverRepository,
    SubscriptionChannel,
};

/// Helper to create a test Redis pool
async fn get_test_pool() -> Option<RedisPool> {
    let url = std::env::var("REDIS_URL").ok()?;
    let pool = RedisPool::new(RedisPoolConfig {
        url,
        max_connections: 4,
    })
    .ok()?;
    pool.health_check().await.ok()?;
    Some(pool)
}

fn test_id(prefix: &str) -> String {
    format!("{prefix}_{}", uuid::Uuid::new_v4().simple())
}

#[tokio::test]
async fn test_document_store_round_trip() {
    let Some(pool) = get_test_pool().await else {
        eprintln!("Skipping test: REDIS_URL not set");
        return;
    };

    let store = RedisDocumentStore::new(pool.clone());
    let id = test_id("comment");
    let now = Utc::now();
    let comment = Reactable::Comment(Comment {
        id: id.clone(),
        discussion_id: "d1".to_string(),
        created_by: "author".to_string(),
        content: "nice".to_string(),
        thread_sort_order: 1.0,
        reactjis: Vec::new(),
        created_at: now,
        updated_at: now,
    });
    store.insert(ReactableKind::Comment, &comment).await.unwrap();

    store
        .add_reactji(ReactableKind::Comment, &id, &Reactji::new("+1", "u1"))
        .await
        .unwrap();

    let loaded = store.load(ReactableKind::Comment, &id).await.unwrap().unwrap();
    assert_eq!(loaded.kind(), ReactableKind::Comment);
    assert_eq!(loaded.reactjis(), &[Reactji::new("+1", "u1")]);

    pool.delete(&format!("Comment:{id}")).await.unwrap();
}

#[tokio::test]
async fn test_hover_set() {
    let Some(pool) = get_test_pool().await else {
        eprintln!("Skipping test: REDIS_URL not set");
        return;
    };

    let store = PokerHoverStore::new(pool.clone());
    let stage_id = test_id("stage");

    store.set_hovering(&stage_id, "u2", true).await.unwrap();
    store.set_hovering(&stage_id, "u1", true).await.unwrap();
    store.set_hovering(&stage_id, "u3", true).await.unwrap();
    store.set_hovering(&stage_id, "u3", false).await.unwrap();

    let hovering = store.hovering_user_ids(&stage_id).await.unwrap();
    assert_eq!(hovering, vec!["u1".to_string(), "u2".to_string()]);

    pool.delete(&hover_key(&stage_id)).await.unwrap();
}

#[tokio::test]
async fn test_analytics_queue_push() {
    let Some(pool) = get_test_pool().await else {
        eprintln!("Skipping test: REDIS_URL not set");
        return;
    };

    let queue = AnalyticsQueue::new(pool.clone(), test_id("analytics"));
    queue
        .track(AnalyticsEvent::ReactjiInteracted {
            user_id: "u1".to_string(),
            email: None,
            meeting_id: "m1".to_string(),
            meeting_type: None,
            reactable_id: "c1".to_string(),
            reactable_type: ReactableKind::Comment,
            reactji: "heart".to_string(),
            is_remove: false,
            occurred_at: Utc::now(),
        })
        .await
        .unwrap();

    assert!(pool.delete(queue.key()).await.unwrap());
}

#[tokio::test]
async fn test_publish_without_subscribers() {
    let Some(pool) = get_test_pool().await else {
        eprintln!("Skipping test: REDIS_URL not set");
        return;
    };

    let publisher = Publisher::new(pool);
    let event = MeetingEvent::PokerVotesRevealed(PokerRevealVotesPayload {
        meeting_id: "m1".to_string(),
        stage_id: "s1".to_string(),
    });

    publisher
        .publish(
            SubscriptionChannel::Meeting,
            &test_id("meeting"),
            &event,
            &PublishOptions::default(),
        )
        .await
        .unwrap();
}
