//! Document store for comments and reflections.

mod store;

pub use store::{document_key, DocumentBackend, DocumentStore, RedisDocumentStore};
