//! JSON document store
//!
//! Each document lives under `{table}:{id}`. Reactji writes are a plain
//! read-modify-write with no compare-and-swap: two writers that read the same
//! version both write back, and the later write wins. Callers accept that a
//! concurrent reactji change on the same document can be lost.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use tracing::{debug, instrument};

use retro_core::{Reactable, ReactableKind, ReactableStore, Reactji, RepoResult};

use crate::pool::{map_cache_error, RedisPool};

/// Key of a document in a table
pub fn document_key(table: &str, id: &str) -> String {
    format!("{table}:{id}")
}

/// Raw document persistence
#[async_trait]
pub trait DocumentBackend: Send + Sync {
    async fn get_document(&self, key: &str) -> RepoResult<Option<Value>>;

    async fn put_document(&self, key: &str, document: &Value) -> RepoResult<()>;
}

#[async_trait]
impl DocumentBackend for RedisPool {
    async fn get_document(&self, key: &str) -> RepoResult<Option<Value>> {
        self.get_value(key).await.map_err(map_cache_error)
    }

    async fn put_document(&self, key: &str, document: &Value) -> RepoResult<()> {
        self.set(key, document).await.map_err(map_cache_error)
    }
}

/// Reactable store over a document backend
#[derive(Debug, Clone)]
pub struct DocumentStore<B> {
    backend: B,
}

/// The production document store
pub type RedisDocumentStore = DocumentStore<RedisPool>;

impl<B: DocumentBackend> DocumentStore<B> {
    /// Create a new document store
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Store a reactable as a document in the table of `kind`
    pub async fn insert(&self, kind: ReactableKind, reactable: &Reactable) -> RepoResult<()> {
        let Some(table) = kind.document_table() else {
            return Ok(());
        };
        let key = document_key(table, &reactable.id());
        self.backend.put_document(&key, &reactable.to_document()?).await
    }

    /// Read phase: the document key and its decoded reactable
    pub async fn read(&self, kind: ReactableKind, id: &str) -> RepoResult<Option<(String, Reactable)>> {
        let Some(table) = kind.document_table() else {
            return Ok(None);
        };
        let key = document_key(table, id);

        match self.backend.get_document(&key).await? {
            Some(document) => Ok(Some((key, Reactable::from_document(document)?))),
            None => Ok(None),
        }
    }

    /// Write phase: bump `updatedAt` and overwrite the document
    pub async fn write(&self, key: &str, reactable: &mut Reactable) -> RepoResult<()> {
        reactable.touch(Utc::now());
        self.backend.put_document(key, &reactable.to_document()?).await
    }

    async fn modify<F>(&self, kind: ReactableKind, id: &str, apply: F) -> RepoResult<()>
    where
        F: FnOnce(&mut Reactable) -> bool + Send,
    {
        let Some((key, mut reactable)) = self.read(kind, id).await? else {
            debug!(%kind, id, "Document missing, nothing to update");
            return Ok(());
        };

        let changed = apply(&mut reactable);
        debug!(%kind, id, changed, "Writing document");
        self.write(&key, &mut reactable).await
    }
}

#[async_trait]
impl<B: DocumentBackend> ReactableStore for DocumentStore<B> {
    #[instrument(skip(self))]
    async fn load(&self, kind: ReactableKind, id: &str) -> RepoResult<Option<Reactable>> {
        Ok(self.read(kind, id).await?.map(|(_, reactable)| reactable))
    }

    #[instrument(skip(self))]
    async fn add_reactji(&self, kind: ReactableKind, id: &str, reactji: &Reactji) -> RepoResult<()> {
        let reactji = reactji.clone();
        self.modify(kind, id, move |r| r.add_reactji(reactji)).await
    }

    #[instrument(skip(self))]
    async fn remove_reactji(&self, kind: ReactableKind, id: &str, reactji: &Reactji) -> RepoResult<()> {
        self.modify(kind, id, |r| r.remove_reactji(reactji)).await
    }
}
