//! # retro-cache
//!
//! Redis-backed infrastructure: the document store for comments and reflections,
//! meeting pub/sub, poker hover sets, and the analytics queue.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Documents**: JSON documents keyed `{table}:{id}`, implementing `ReactableStore`
//! - **Pub/Sub**: Meeting events fanned out to every subscribed server instance
//! - **Poker**: Users hovering over an estimate stage's deck
//! - **Analytics**: Fire-and-forget event queue on a Redis list
//!
//! ## Example
//!
//! ```ignore
//! use retro_cache::{Publisher, RedisDocumentStore, RedisPool, RedisPoolConfig};
//!
//! let pool = RedisPool::new(RedisPoolConfig::default())?;
//! let documents = RedisDocumentStore::new(pool.clone());
//! let publisher = Publisher::new(pool);
//! ```

pub mod analytics;
pub mod documents;
pub mod poker;
pub mod pool;
pub mod pubsub;

// Re-export pool types
pub use pool::{map_cache_error, RedisPool, RedisPoolConfig, RedisPoolError, RedisResult};

// Re-export stores
pub use analytics::AnalyticsQueue;
pub use documents::{document_key, DocumentBackend, DocumentStore, RedisDocumentStore};
pub use poker::{hover_key, PokerHoverStore, POKER_HOVER_PREFIX};

// Re-export pubsub types
pub use pubsub::{PubSubChannel, PubSubEvent, Publisher};
